//! Application state and core logic for the listing TUI.
//!
//! `App` is the single owner of the current listing and of every piece of
//! UI state. Renderers borrow it read-only; input arrives through
//! `handle_key` / `handle_paste` and background results through
//! `handle_event`. Work that must run off the UI loop is returned as a
//! [`Command`] for the caller to spawn.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::carousel::Carousel;
use crate::cli::CliConfig;
use crate::form::{Field, IntakeForm};
use crate::models::{Focus, ProductListing, SocialPost, WizardStep};
use crate::notify::{Notifier, Toasts};
use crate::services::{AppEvent, ServiceConfig};
use crate::wizard::{ExportOutcome, ExportRequest, ExportWizard, Submit};

pub const GENERATION_FAILURE: &str = "Failed to generate listing";

/// Spinner frame interval
const ANIMATION_INTERVAL: Duration = Duration::from_millis(120);

/// Background work requested by the UI
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Generate(SocialPost),
    Export(ExportRequest),
}

/// Application state
pub struct App {
    pub listing: Option<ProductListing>,
    pub is_generating: bool,
    pub dark_mode: bool,
    pub focus: Focus,
    pub form: IntakeForm,
    pub carousel: Carousel,
    pub wizard: Option<ExportWizard>,
    // Highlighted row in the title suggestions list
    pub selected_title: usize,
    // Scroll offset for the preview pane
    pub preview_scroll: u16,
    pub toasts: Toasts,
    pub services: ServiceConfig,
    pub should_quit: bool,
    // Animation state
    pub animation_tick: u64,
    pub last_animation_update: Instant,
}

impl App {
    pub fn new(config: CliConfig) -> Self {
        Self {
            listing: None,
            is_generating: false,
            dark_mode: config.dark_mode,
            focus: Focus::default(),
            form: config
                .initial_post
                .map(IntakeForm::from_post)
                .unwrap_or_default(),
            carousel: Carousel::default(),
            wizard: None,
            selected_title: 0,
            preview_scroll: 0,
            toasts: Toasts::new(config.toast_ttl),
            services: config.services,
            should_quit: false,
            animation_tick: 0,
            last_animation_update: Instant::now(),
        }
    }

    /// Advance animations and expire toasts
    pub fn tick(&mut self, now: Instant) {
        self.toasts.expire(now);
        if now.saturating_duration_since(self.last_animation_update) >= ANIMATION_INTERVAL {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.last_animation_update = now;
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Command> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Global shortcuts
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Char('d') if ctrl => {
                self.dark_mode = !self.dark_mode;
                return None;
            }
            _ => {}
        }

        if self.wizard.is_some() {
            return self.handle_wizard_key(key);
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return None;
            }
            KeyCode::Char('g') if ctrl => return self.submit_form(),
            KeyCode::Char('e') if ctrl => {
                self.open_export();
                return None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Platform => match key.code {
                KeyCode::Left | KeyCode::Up => self.form.cycle_platform(false, self.is_generating),
                KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => {
                    self.form.cycle_platform(true, self.is_generating)
                }
                KeyCode::Enter => return self.submit_form(),
                _ => {}
            },
            Focus::Url => match key.code {
                KeyCode::Enter => return self.submit_form(),
                code => self.edit_field(Field::Url, code, ctrl),
            },
            Focus::Content => match key.code {
                KeyCode::Enter => self.form.insert_char(Field::Content, '\n', self.is_generating),
                code => self.edit_field(Field::Content, code, ctrl),
            },
            Focus::Suggestions => {
                let count = self.suggestion_count();
                match key.code {
                    KeyCode::Up if count > 0 => {
                        self.selected_title = (self.selected_title + count - 1) % count;
                    }
                    KeyCode::Down if count > 0 => {
                        self.selected_title = (self.selected_title + 1) % count;
                    }
                    KeyCode::Enter => self.select_title(self.selected_title),
                    _ => {}
                }
            }
            Focus::Preview => match key.code {
                KeyCode::Left => self.previous_image(),
                KeyCode::Right => self.next_image(),
                KeyCode::Up => self.preview_scroll = self.preview_scroll.saturating_sub(1),
                KeyCode::Down => self.preview_scroll = self.preview_scroll.saturating_add(1),
                KeyCode::Char('e') | KeyCode::Enter => self.open_export(),
                _ => {}
            },
        }
        None
    }

    fn edit_field(&mut self, field: Field, code: KeyCode, ctrl: bool) {
        match code {
            KeyCode::Char(c) if !ctrl => self.form.insert_char(field, c, self.is_generating),
            KeyCode::Backspace => self.form.backspace(field, self.is_generating),
            _ => {}
        }
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) -> Option<Command> {
        let Some(wizard) = self.wizard.as_mut() else {
            return None;
        };
        match key.code {
            KeyCode::Esc => {
                // No cancellation: an in-flight export must resolve first
                if !wizard.is_exporting() {
                    tracing::debug!("export wizard closed");
                    self.wizard = None;
                }
            }
            KeyCode::Up => wizard.cycle_category(false),
            KeyCode::Down => wizard.cycle_category(true),
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => wizard.toggle_fulfillment(),
            KeyCode::Backspace | KeyCode::Char('b') => wizard.back(),
            KeyCode::Enter => {
                if wizard.step() != WizardStep::Review {
                    wizard.advance();
                    return None;
                }
                let Some(listing) = self.listing.as_ref() else {
                    return None;
                };
                if let Submit::Started(request) = wizard.submit(listing, &mut self.toasts) {
                    return Some(Command::Export(request));
                }
            }
            _ => {}
        }
        None
    }

    pub fn handle_paste(&mut self, text: &str) {
        if self.wizard.is_some() {
            return;
        }
        let field = match self.focus {
            Focus::Url => Field::Url,
            Focus::Content => Field::Content,
            _ => return,
        };
        self.form.paste(field, text, self.is_generating, &mut self.toasts);
    }

    /// Validate the form and, if it passes, request generation
    pub fn submit_form(&mut self) -> Option<Command> {
        if self.is_generating {
            return None;
        }
        let post = self.form.submit(self.is_generating, &mut self.toasts)?;
        self.is_generating = true;
        Some(Command::Generate(post))
    }

    /// Apply the result of a background operation
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ListingGenerated(result) => {
                self.is_generating = false;
                match result {
                    Ok(listing) => {
                        tracing::info!(keywords = ?listing.keywords, "listing generated");
                        self.listing = Some(listing);
                        self.carousel.reset();
                        self.selected_title = 0;
                        self.preview_scroll = 0;
                    }
                    Err(e) => {
                        // Keep whatever listing was current before
                        tracing::error!(error = %e, "error generating listing");
                        self.toasts.error(GENERATION_FAILURE);
                    }
                }
            }
            AppEvent::ExportFinished(result) => {
                let Some(wizard) = self.wizard.as_mut() else {
                    tracing::warn!("export finished with no wizard open");
                    return;
                };
                if wizard.finish_export(result, &mut self.toasts) == ExportOutcome::Close {
                    self.wizard = None;
                }
            }
        }
    }

    /// Replace the current listing's title with suggestion `index`
    pub fn select_title(&mut self, index: usize) {
        let Some(listing) = self.listing.as_ref() else {
            return;
        };
        let Some(title) = listing.suggested_titles().get(index) else {
            return;
        };
        tracing::info!(%title, "title selected");
        self.listing = Some(listing.with_title(title.clone()));
    }

    pub fn open_export(&mut self) {
        if self.wizard.is_some() {
            return;
        }
        match self.listing.as_ref() {
            Some(listing) => {
                tracing::debug!("export wizard opened");
                self.wizard = Some(ExportWizard::new(listing));
            }
            None => tracing::debug!("export requested with no listing"),
        }
    }

    fn image_count(&self) -> usize {
        self.listing.as_ref().map_or(0, |l| l.images().len())
    }

    fn suggestion_count(&self) -> usize {
        self.listing.as_ref().map_or(0, |l| l.suggested_titles().len())
    }

    pub fn next_image(&mut self) {
        let len = self.image_count();
        self.carousel.next(len);
    }

    pub fn previous_image(&mut self) {
        let len = self.image_count();
        self.carousel.previous(len);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::generator::generate_listing;
    use crate::models::Platform;
    use crate::notify::NoticeKind;
    use crate::wizard::{EXPORT_FAILURE, EXPORT_SUCCESS};
    use std::path::PathBuf;

    pub(crate) fn test_config() -> CliConfig {
        CliConfig {
            services: ServiceConfig::default(),
            toast_ttl: Duration::from_secs(60),
            initial_post: None,
            dark_mode: true,
            log_file: PathBuf::from("/tmp/listing-tui-test.log"),
            log_level: "info".to_string(),
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn notices(app: &App, kind: NoticeKind) -> Vec<String> {
        app.toasts
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.message.clone())
            .collect()
    }

    fn sample_post() -> SocialPost {
        SocialPost {
            platform: Platform::Instagram,
            content: "The Quick brown fox jumps over lazy dog and keeps running through the \
                      meadow until the sun finally sets behind the hills"
                .to_string(),
            url: "https://instagram.com/p/1".to_string(),
        }
    }

    pub(crate) fn app_with_listing() -> App {
        let mut app = App::new(test_config());
        app.handle_event(AppEvent::ListingGenerated(Ok(generate_listing(&sample_post()))));
        app
    }

    #[test]
    fn test_new_prefills_form_from_post() {
        let mut config = test_config();
        config.initial_post = Some(sample_post());
        let app = App::new(config);
        assert_eq!(app.form.url, "https://instagram.com/p/1");
        assert!(app.listing.is_none());
    }

    #[test]
    fn test_typing_and_submit_emits_generate() {
        let mut app = App::new(test_config());
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.form.platform, Platform::TikTok);

        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "https://t.co/x");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "hello world");
        app.handle_key(key(KeyCode::Backspace));

        let command = app.handle_key(ctrl('g'));
        assert_eq!(
            command,
            Some(Command::Generate(SocialPost {
                platform: Platform::TikTok,
                content: "hello worl".to_string(),
                url: "https://t.co/x".to_string(),
            }))
        );
        assert!(app.is_generating);
    }

    #[test]
    fn test_generation_gates_reentry_and_edits() {
        let mut config = test_config();
        config.initial_post = Some(sample_post());
        let mut app = App::new(config);

        assert!(app.submit_form().is_some());
        assert!(app.submit_form().is_none());

        app.focus = Focus::Content;
        type_text(&mut app, "more");
        assert_eq!(app.form.content, sample_post().content);
    }

    #[test]
    fn test_generated_listing_becomes_current() {
        let app = app_with_listing();
        let listing = app.listing.as_ref().unwrap();
        assert_eq!(listing.keywords, vec!["quick", "brown", "jumps", "over", "lazy"]);
        assert!(!app.is_generating);
    }

    #[test]
    fn test_generation_failure_keeps_previous_listing() {
        let mut app = app_with_listing();
        let before = app.listing.clone();
        app.is_generating = true;

        app.handle_event(AppEvent::ListingGenerated(Err(ServiceError::Generation(
            "boom".to_string(),
        ))));

        assert_eq!(app.listing, before);
        assert!(!app.is_generating);
        assert_eq!(notices(&app, NoticeKind::Error), vec![GENERATION_FAILURE]);
    }

    #[test]
    fn test_select_title_changes_only_title() {
        let mut app = app_with_listing();
        let before = app.listing.clone().unwrap();

        app.focus = Focus::Suggestions;
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));

        let after = app.listing.clone().unwrap();
        assert_eq!(after.title, "Natural Health Booster");
        assert_eq!(after.suggested_titles, before.suggested_titles);
        assert_eq!(
            ProductListing {
                title: before.title.clone(),
                ..after
            },
            before
        );
    }

    #[test]
    fn test_select_title_out_of_range_is_noop() {
        let mut app = app_with_listing();
        let before = app.listing.clone();
        app.select_title(99);
        assert_eq!(app.listing, before);
    }

    #[test]
    fn test_carousel_keys_wrap() {
        let mut app = app_with_listing();
        app.focus = Focus::Preview;
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.carousel.index(), 1);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.carousel.index(), 0);
    }

    #[test]
    fn test_new_listing_resets_view_state() {
        let mut app = app_with_listing();
        app.focus = Focus::Preview;
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.focus = Focus::Suggestions;
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.carousel.index(), 1);
        assert_eq!(app.selected_title, 2);
        assert_eq!(app.preview_scroll, 2);

        app.handle_event(AppEvent::ListingGenerated(Ok(generate_listing(&sample_post()))));
        assert_eq!(app.carousel.index(), 0);
        assert_eq!(app.selected_title, 0);
        assert_eq!(app.preview_scroll, 0);
    }

    #[test]
    fn test_export_requires_listing() {
        let mut app = App::new(test_config());
        app.handle_key(ctrl('e'));
        assert!(app.wizard.is_none());
    }

    #[test]
    fn test_export_success_flow_closes_wizard() {
        let mut app = app_with_listing();
        app.focus = Focus::Preview;
        app.handle_key(key(KeyCode::Char('e')));
        assert_eq!(app.wizard.as_ref().map(|w| w.step()), Some(WizardStep::Details));

        assert!(app.handle_key(key(KeyCode::Enter)).is_none());
        assert!(app.handle_key(key(KeyCode::Enter)).is_none());
        let command = app.handle_key(key(KeyCode::Enter));
        assert!(matches!(command, Some(Command::Export(_))));
        assert!(app.wizard.as_ref().unwrap().is_exporting());

        // Esc and Enter are ignored while exporting
        app.handle_key(key(KeyCode::Esc));
        assert!(app.handle_key(key(KeyCode::Enter)).is_none());
        assert!(app.wizard.is_some());

        app.handle_event(AppEvent::ExportFinished(Ok(())));
        assert!(app.wizard.is_none());
        assert_eq!(notices(&app, NoticeKind::Success), vec![EXPORT_SUCCESS]);
        assert!(notices(&app, NoticeKind::Error).is_empty());
    }

    #[test]
    fn test_export_failure_stays_on_review() {
        let mut app = app_with_listing();
        app.open_export();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));
        assert!(app.handle_key(key(KeyCode::Enter)).is_some());

        app.handle_event(AppEvent::ExportFinished(Err(ServiceError::Export(
            "down".to_string(),
        ))));
        let wizard = app.wizard.as_ref().unwrap();
        assert_eq!(wizard.step(), WizardStep::Review);
        assert!(!wizard.is_exporting());
        assert_eq!(notices(&app, NoticeKind::Error), vec![EXPORT_FAILURE]);
    }

    #[test]
    fn test_invalid_listing_blocks_export() {
        let mut app = app_with_listing();
        if let Some(listing) = app.listing.as_mut() {
            listing.title = "Short".to_string();
            listing.description = "x".repeat(50);
            listing.bullet_points.truncate(2);
            listing.price = 0.0;
        }
        app.open_export();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Enter));

        assert!(app.handle_key(key(KeyCode::Enter)).is_none());
        assert_eq!(notices(&app, NoticeKind::Error).len(), 4);
        let wizard = app.wizard.as_ref().unwrap();
        assert_eq!(wizard.step(), WizardStep::Review);
        assert!(!wizard.is_exporting());
    }

    #[test]
    fn test_wizard_captures_keys_and_esc_closes() {
        let mut app = app_with_listing();
        app.open_export();
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Platform);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.form.platform, Platform::Instagram);

        app.handle_key(key(KeyCode::Esc));
        assert!(app.wizard.is_none());
    }

    #[test]
    fn test_paste_routes_to_focused_field() {
        let mut app = App::new(test_config());
        app.handle_paste("ignored on platform field");
        assert!(app.form.url.is_empty());

        app.focus = Focus::Content;
        app.handle_paste("pasted caption");
        assert_eq!(app.form.content, "pasted caption");

        app.handle_paste("data:image/png;base64,AAAA");
        assert_eq!(app.form.content, "pasted caption");
        assert_eq!(notices(&app, NoticeKind::Success).len(), 1);
    }

    #[test]
    fn test_global_shortcuts() {
        let mut app = App::new(test_config());
        app.handle_key(ctrl('d'));
        assert!(!app.dark_mode);
        app.handle_key(ctrl('q'));
        assert!(app.should_quit);
    }
}
