//! Export wizard: step state machine and listing validation.
//!
//! The wizard holds its own draft of category and fulfillment. Neither is
//! ever written back to the shared listing.

use serde::Serialize;

use crate::models::{Category, Fulfillment, ProductListing, WizardStep};
use crate::notify::Notifier;

pub const MIN_TITLE_LEN: usize = 10;
pub const MIN_DESCRIPTION_LEN: usize = 100;
pub const MIN_BULLET_POINTS: usize = 3;

pub const EXPORT_SUCCESS: &str = "Successfully exported to Amazon Seller Central";
pub const EXPORT_FAILURE: &str = "Failed to export listing";

/// Policy reminders shown on the compliance step
pub const COMPLIANCE_RULES: [&str; 4] = [
    "No medical claims or health benefits",
    "Accurate product descriptions",
    "Compliant with category requirements",
    "High-quality images (min 1000x1000px)",
];

/// A rule the listing breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    TitleTooShort,
    DescriptionTooShort,
    TooFewBulletPoints,
    InvalidPrice,
}

impl ValidationIssue {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationIssue::TitleTooShort => "Title is too short",
            ValidationIssue::DescriptionTooShort => "Description is too short",
            ValidationIssue::TooFewBulletPoints => "Need at least 3 bullet points",
            ValidationIssue::InvalidPrice => "Invalid price",
        }
    }
}

/// Check every export rule, collecting all violations in rule order
pub fn validate_listing(listing: &ProductListing) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if listing.title.chars().count() < MIN_TITLE_LEN {
        issues.push(ValidationIssue::TitleTooShort);
    }
    if listing.description.chars().count() < MIN_DESCRIPTION_LEN {
        issues.push(ValidationIssue::DescriptionTooShort);
    }
    if listing.bullet_points.len() < MIN_BULLET_POINTS {
        issues.push(ValidationIssue::TooFewBulletPoints);
    }
    // `!(p > 0)` also rejects NaN
    if !(listing.price > 0.0) {
        issues.push(ValidationIssue::InvalidPrice);
    }
    issues
}

/// Body of the simulated Seller Central call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub listing: ProductListing,
    pub category: Category,
    pub fulfillment: Fulfillment,
}

/// Result of the primary action on the review step
#[derive(Debug, Clone, PartialEq)]
pub enum Submit {
    /// Validation failed; every issue was reported
    Rejected(Vec<ValidationIssue>),
    /// Validation passed; the caller must run the export
    Started(ExportRequest),
    /// An export is already in flight or the wizard is not on review
    Ignored,
}

/// What the caller should do once an export resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    Close,
    Stay,
}

/// Export dialog draft state
#[derive(Debug, Clone)]
pub struct ExportWizard {
    step: WizardStep,
    pub category: Category,
    pub fulfillment: Fulfillment,
    exporting: bool,
}

impl ExportWizard {
    pub fn new(listing: &ProductListing) -> Self {
        Self {
            step: WizardStep::Details,
            category: Category::from_label(&listing.category).unwrap_or_default(),
            fulfillment: Fulfillment::default(),
            exporting: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    /// "Continue": move forward one step. No-op on review.
    pub fn advance(&mut self) {
        if self.exporting {
            return;
        }
        self.step = match self.step {
            WizardStep::Details => WizardStep::Compliance,
            WizardStep::Compliance | WizardStep::Review => WizardStep::Review,
        };
        tracing::debug!(step = ?self.step, "export wizard advanced");
    }

    /// "Back": move back one step. No-op on details.
    pub fn back(&mut self) {
        if self.exporting {
            return;
        }
        self.step = match self.step {
            WizardStep::Details | WizardStep::Compliance => WizardStep::Details,
            WizardStep::Review => WizardStep::Compliance,
        };
        tracing::debug!(step = ?self.step, "export wizard went back");
    }

    pub fn cycle_category(&mut self, forward: bool) {
        if self.exporting || self.step != WizardStep::Details {
            return;
        }
        self.category = if forward {
            self.category.next()
        } else {
            self.category.previous()
        };
    }

    pub fn toggle_fulfillment(&mut self) {
        if self.exporting || self.step != WizardStep::Details {
            return;
        }
        self.fulfillment = self.fulfillment.toggle();
    }

    /// Primary action on the review step: validate, then start exporting
    pub fn submit<N: Notifier>(&mut self, listing: &ProductListing, notifier: &mut N) -> Submit {
        if self.exporting || self.step != WizardStep::Review {
            return Submit::Ignored;
        }
        let issues = validate_listing(listing);
        if !issues.is_empty() {
            tracing::info!(count = issues.len(), "export blocked by validation");
            for issue in &issues {
                notifier.error(issue.message());
            }
            return Submit::Rejected(issues);
        }
        self.exporting = true;
        tracing::info!(category = self.category.label(), fulfillment = ?self.fulfillment, "export started");
        Submit::Started(ExportRequest {
            listing: listing.clone(),
            category: self.category,
            fulfillment: self.fulfillment,
        })
    }

    /// Resolve an in-flight export. Always leaves the exporting state.
    pub fn finish_export<E, N>(&mut self, result: Result<(), E>, notifier: &mut N) -> ExportOutcome
    where
        E: std::fmt::Display,
        N: Notifier,
    {
        self.exporting = false;
        match result {
            Ok(()) => {
                notifier.success(EXPORT_SUCCESS);
                ExportOutcome::Close
            }
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                notifier.error(EXPORT_FAILURE);
                self.step = WizardStep::Review;
                ExportOutcome::Stay
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::listing::tests::sample_listing;
    use crate::notify::tests::RecordingNotifier;
    use crate::notify::NoticeKind;

    fn wizard_on_review(listing: &ProductListing) -> ExportWizard {
        let mut wizard = ExportWizard::new(listing);
        wizard.advance();
        wizard.advance();
        assert_eq!(wizard.step(), WizardStep::Review);
        wizard
    }

    #[test]
    fn test_steps_advance_and_back() {
        let listing = sample_listing();
        let mut wizard = ExportWizard::new(&listing);
        assert_eq!(wizard.step(), WizardStep::Details);

        wizard.back();
        assert_eq!(wizard.step(), WizardStep::Details);

        wizard.advance();
        assert_eq!(wizard.step(), WizardStep::Compliance);
        wizard.advance();
        assert_eq!(wizard.step(), WizardStep::Review);
        wizard.advance();
        assert_eq!(wizard.step(), WizardStep::Review);

        wizard.back();
        assert_eq!(wizard.step(), WizardStep::Compliance);
    }

    #[test]
    fn test_initial_draft_from_listing() {
        let mut listing = sample_listing();
        assert_eq!(ExportWizard::new(&listing).category, Category::HealthPersonalCare);

        listing.category = "Grocery".to_string();
        assert_eq!(ExportWizard::new(&listing).category, Category::Grocery);

        listing.category = "Garden".to_string();
        assert_eq!(ExportWizard::new(&listing).category, Category::HealthPersonalCare);
        assert_eq!(ExportWizard::new(&listing).fulfillment, Fulfillment::Fba);
    }

    #[test]
    fn test_draft_edits_only_on_details_step() {
        let listing = sample_listing();
        let mut wizard = ExportWizard::new(&listing);
        wizard.cycle_category(true);
        wizard.toggle_fulfillment();
        assert_eq!(wizard.category, Category::Beauty);
        assert_eq!(wizard.fulfillment, Fulfillment::Fbm);

        wizard.advance();
        wizard.cycle_category(true);
        wizard.toggle_fulfillment();
        assert_eq!(wizard.category, Category::Beauty);
        assert_eq!(wizard.fulfillment, Fulfillment::Fbm);
    }

    #[test]
    fn test_validate_reports_all_four_issues() {
        let mut listing = sample_listing();
        listing.title = "Short".to_string();
        listing.description = "d".repeat(50);
        listing.bullet_points.truncate(2);
        listing.price = 0.0;

        let mut notifier = RecordingNotifier::default();
        let mut wizard = wizard_on_review(&listing);
        let result = wizard.submit(&listing, &mut notifier);

        assert_eq!(
            result,
            Submit::Rejected(vec![
                ValidationIssue::TitleTooShort,
                ValidationIssue::DescriptionTooShort,
                ValidationIssue::TooFewBulletPoints,
                ValidationIssue::InvalidPrice,
            ])
        );
        assert_eq!(
            notifier.messages(NoticeKind::Error),
            vec![
                "Title is too short",
                "Description is too short",
                "Need at least 3 bullet points",
                "Invalid price",
            ]
        );
        assert_eq!(wizard.step(), WizardStep::Review);
        assert!(!wizard.is_exporting());
    }

    #[test]
    fn test_validate_boundaries() {
        let mut listing = sample_listing();
        listing.title = "x".repeat(MIN_TITLE_LEN);
        listing.description = "x".repeat(MIN_DESCRIPTION_LEN);
        listing.price = 0.01;
        assert!(validate_listing(&listing).is_empty());

        listing.price = -1.0;
        assert_eq!(validate_listing(&listing), vec![ValidationIssue::InvalidPrice]);
        listing.price = f64::NAN;
        assert_eq!(validate_listing(&listing), vec![ValidationIssue::InvalidPrice]);
    }

    #[test]
    fn test_submit_only_from_review() {
        let listing = sample_listing();
        let mut notifier = RecordingNotifier::default();
        let mut wizard = ExportWizard::new(&listing);
        assert_eq!(wizard.submit(&listing, &mut notifier), Submit::Ignored);
        assert!(!wizard.is_exporting());
    }

    #[test]
    fn test_export_success_closes_with_one_notice() {
        let listing = sample_listing();
        let mut notifier = RecordingNotifier::default();
        let mut wizard = wizard_on_review(&listing);

        let Submit::Started(request) = wizard.submit(&listing, &mut notifier) else {
            panic!("expected export to start");
        };
        assert!(wizard.is_exporting());
        assert_eq!(request.listing, listing);
        assert_eq!(request.fulfillment, Fulfillment::Fba);

        // Re-entry is blocked while the call is pending
        assert_eq!(wizard.submit(&listing, &mut notifier), Submit::Ignored);
        wizard.back();
        assert_eq!(wizard.step(), WizardStep::Review);

        let outcome = wizard.finish_export(Ok::<(), String>(()), &mut notifier);
        assert_eq!(outcome, ExportOutcome::Close);
        assert!(!wizard.is_exporting());
        assert_eq!(notifier.messages(NoticeKind::Success), vec![EXPORT_SUCCESS]);
        assert_eq!(notifier.count(NoticeKind::Error), 0);
    }

    #[test]
    fn test_export_failure_returns_to_review() {
        let listing = sample_listing();
        let mut notifier = RecordingNotifier::default();
        let mut wizard = wizard_on_review(&listing);
        assert!(matches!(wizard.submit(&listing, &mut notifier), Submit::Started(_)));

        let outcome = wizard.finish_export(Err("timeout"), &mut notifier);
        assert_eq!(outcome, ExportOutcome::Stay);
        assert!(!wizard.is_exporting());
        assert_eq!(wizard.step(), WizardStep::Review);
        assert_eq!(notifier.messages(NoticeKind::Error), vec![EXPORT_FAILURE]);
    }

    #[test]
    fn test_draft_not_merged_into_listing() {
        let listing = sample_listing();
        let mut notifier = RecordingNotifier::default();
        let mut wizard = ExportWizard::new(&listing);
        wizard.cycle_category(false);
        wizard.advance();
        wizard.advance();

        let Submit::Started(request) = wizard.submit(&listing, &mut notifier) else {
            panic!("expected export to start");
        };
        assert_eq!(request.category, Category::VitaminsSupplements);
        assert_eq!(request.listing.category, "Health & Personal Care");
        assert_eq!(listing.category, "Health & Personal Care");
    }

    #[test]
    fn test_export_request_json_shape() {
        let listing = sample_listing();
        let request = ExportRequest {
            listing,
            category: Category::Beauty,
            fulfillment: Fulfillment::Fbm,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["category"], "Beauty");
        assert_eq!(json["fulfillment"], "FBM");
        assert_eq!(json["listing"]["title"], "Premium Wellness Product");
    }
}
