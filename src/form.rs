//! Post intake form state and validation.

use crate::models::{Platform, SocialPost};
use crate::notify::Notifier;

/// Maximum post content length in chars
pub const MAX_CONTENT_LEN: usize = 2000;

pub const IMAGE_NOTICE: &str = "Image detected! Images will be processed during analysis.";

/// Editable text field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Url,
    Content,
}

/// One item of a clipboard payload, identified by MIME type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardItem {
    pub mime: String,
}

impl ClipboardItem {
    /// Classify a terminal paste. Terminals deliver text only, so an inline
    /// image arrives as a `data:image/...` URI.
    pub fn from_paste(text: &str) -> Self {
        let mime = text
            .trim_start()
            .strip_prefix("data:")
            .and_then(|rest| rest.split([';', ',']).next())
            .filter(|m| !m.is_empty())
            .unwrap_or("text/plain");
        Self {
            mime: mime.to_ascii_lowercase(),
        }
    }

    pub fn is_image(&self) -> bool {
        self.mime.contains("image")
    }
}

/// Intake form for the post being analyzed
#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    pub platform: Platform,
    pub url: String,
    pub content: String,
}

impl IntakeForm {
    pub fn from_post(post: SocialPost) -> Self {
        Self {
            platform: post.platform,
            url: post.url,
            content: post.content,
        }
    }

    pub fn content_len(&self) -> usize {
        self.content.chars().count()
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Url => &mut self.url,
            Field::Content => &mut self.content,
        }
    }

    pub fn insert_char(&mut self, field: Field, c: char, disabled: bool) {
        if disabled {
            return;
        }
        self.field_mut(field).push(c);
    }

    pub fn backspace(&mut self, field: Field, disabled: bool) {
        if disabled {
            return;
        }
        self.field_mut(field).pop();
    }

    pub fn cycle_platform(&mut self, forward: bool, disabled: bool) {
        if disabled {
            return;
        }
        self.platform = if forward {
            self.platform.next()
        } else {
            self.platform.previous()
        };
    }

    /// Handle a paste into `field`. Image payloads raise a notice and are
    /// discarded; text is appended.
    pub fn paste<N: Notifier>(&mut self, field: Field, text: &str, disabled: bool, notifier: &mut N) {
        if disabled {
            return;
        }
        let items = [ClipboardItem::from_paste(text)];
        if items.iter().any(ClipboardItem::is_image) {
            notifier.success(IMAGE_NOTICE);
            return;
        }
        let text = match field {
            // URL is single-line
            Field::Url => text.replace(['\r', '\n'], ""),
            Field::Content => text.replace("\r\n", "\n").replace('\r', "\n"),
        };
        self.field_mut(field).push_str(&text);
    }

    /// Validate and emit the post. Does not start generation.
    pub fn submit<N: Notifier>(&self, disabled: bool, notifier: &mut N) -> Option<SocialPost> {
        if disabled {
            return None;
        }
        if self.content_len() > MAX_CONTENT_LEN {
            notifier.error(format!("Content exceeds {} characters", MAX_CONTENT_LEN));
            return None;
        }
        if self.url.trim().is_empty() {
            notifier.error("Post URL is required");
            return None;
        }
        if self.content.trim().is_empty() {
            notifier.error("Post content is required");
            return None;
        }
        Some(SocialPost {
            platform: self.platform,
            content: self.content.clone(),
            url: self.url.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::tests::RecordingNotifier;
    use crate::notify::NoticeKind;

    fn filled_form() -> IntakeForm {
        IntakeForm {
            platform: Platform::TikTok,
            url: "https://tiktok.com/@me/video/1".to_string(),
            content: "Obsessed with this collagen powder".to_string(),
        }
    }

    #[test]
    fn test_submit_emits_post() {
        let mut notifier = RecordingNotifier::default();
        let post = filled_form().submit(false, &mut notifier).unwrap();
        assert_eq!(post.platform, Platform::TikTok);
        assert_eq!(post.content, "Obsessed with this collagen powder");
        assert!(notifier.notices.is_empty());
    }

    #[test]
    fn test_submit_rejects_content_over_limit() {
        let mut notifier = RecordingNotifier::default();
        let mut form = filled_form();
        form.content = "a".repeat(MAX_CONTENT_LEN + 1);

        assert!(form.submit(false, &mut notifier).is_none());
        assert_eq!(
            notifier.messages(NoticeKind::Error),
            vec!["Content exceeds 2000 characters"]
        );
    }

    #[test]
    fn test_submit_accepts_content_at_limit() {
        let mut notifier = RecordingNotifier::default();
        let mut form = filled_form();
        form.content = "é".repeat(MAX_CONTENT_LEN);
        assert!(form.submit(false, &mut notifier).is_some());
    }

    #[test]
    fn test_submit_requires_url_and_content() {
        let mut notifier = RecordingNotifier::default();
        let mut form = filled_form();
        form.url.clear();
        assert!(form.submit(false, &mut notifier).is_none());

        let mut form = filled_form();
        form.content = "   ".to_string();
        assert!(form.submit(false, &mut notifier).is_none());

        assert_eq!(
            notifier.messages(NoticeKind::Error),
            vec!["Post URL is required", "Post content is required"]
        );
    }

    #[test]
    fn test_disabled_form_ignores_input() {
        let mut notifier = RecordingNotifier::default();
        let mut form = filled_form();
        form.insert_char(Field::Url, 'x', true);
        form.backspace(Field::Content, true);
        form.cycle_platform(true, true);
        form.paste(Field::Content, "more", true, &mut notifier);

        assert_eq!(form.url, filled_form().url);
        assert_eq!(form.content, filled_form().content);
        assert_eq!(form.platform, Platform::TikTok);
        assert!(form.submit(true, &mut notifier).is_none());
        assert!(notifier.notices.is_empty());
    }

    #[test]
    fn test_paste_image_raises_notice_only() {
        let mut notifier = RecordingNotifier::default();
        let mut form = filled_form();
        form.paste(Field::Content, "data:image/png;base64,iVBORw0KGgo=", false, &mut notifier);

        assert_eq!(form.content, filled_form().content);
        assert_eq!(notifier.messages(NoticeKind::Success), vec![IMAGE_NOTICE]);
    }

    #[test]
    fn test_paste_text_appends() {
        let mut notifier = RecordingNotifier::default();
        let mut form = IntakeForm::default();
        form.paste(Field::Url, "https://x.com/\n", false, &mut notifier);
        form.paste(Field::Content, "line one\r\nline two", false, &mut notifier);

        assert_eq!(form.url, "https://x.com/");
        assert_eq!(form.content, "line one\nline two");
        assert!(notifier.notices.is_empty());
    }

    #[test]
    fn test_clipboard_item_mime_detection() {
        assert_eq!(ClipboardItem::from_paste("data:image/jpeg;base64,AAA").mime, "image/jpeg");
        assert!(ClipboardItem::from_paste("data:image/gif,xyz").is_image());
        assert!(!ClipboardItem::from_paste("data:text/html,<b>hi</b>").is_image());
        assert_eq!(ClipboardItem::from_paste("just text").mime, "text/plain");
    }
}
