//! Enums used throughout the listing TUI
//!
//! Closed sets for the post platform, export category and fulfillment
//! method, plus the focus and step enums that drive the UI.

use serde::{Deserialize, Serialize};

/// Social platform a post was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Instagram,
    #[serde(rename = "tiktok")]
    TikTok,
    #[serde(rename = "youtube")]
    YouTube,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Instagram, Platform::TikTok, Platform::YouTube];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Platform::Instagram => Platform::TikTok,
            Platform::TikTok => Platform::YouTube,
            Platform::YouTube => Platform::Instagram,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Platform::Instagram => Platform::YouTube,
            Platform::TikTok => Platform::Instagram,
            Platform::YouTube => Platform::TikTok,
        }
    }
}

/// Marketplace category offered by the export wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "Health & Personal Care")]
    HealthPersonalCare,
    #[serde(rename = "Beauty")]
    Beauty,
    #[serde(rename = "Grocery")]
    Grocery,
    #[serde(rename = "Vitamins & Supplements")]
    VitaminsSupplements,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::HealthPersonalCare,
        Category::Beauty,
        Category::Grocery,
        Category::VitaminsSupplements,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::HealthPersonalCare => "Health & Personal Care",
            Category::Beauty => "Beauty",
            Category::Grocery => "Grocery",
            Category::VitaminsSupplements => "Vitamins & Supplements",
        }
    }

    /// Match a listing's free-form category against the known set
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Who ships the order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Fulfillment {
    #[default]
    #[serde(rename = "FBA")]
    Fba,
    #[serde(rename = "FBM")]
    Fbm,
}

impl Fulfillment {
    pub fn toggle(&self) -> Self {
        match self {
            Fulfillment::Fba => Fulfillment::Fbm,
            Fulfillment::Fbm => Fulfillment::Fba,
        }
    }

    /// Radio-button label on the details step
    pub fn option_label(&self) -> &'static str {
        match self {
            Fulfillment::Fba => "Fulfilled by Amazon (FBA)",
            Fulfillment::Fbm => "Merchant Fulfilled",
        }
    }

    /// Label on the review step
    pub fn review_label(&self) -> &'static str {
        match self {
            Fulfillment::Fba => "Fulfilled by Amazon",
            Fulfillment::Fbm => "Merchant Fulfilled",
        }
    }
}

/// Steps of the export wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Details,
    Compliance,
    Review,
}

impl WizardStep {
    /// 1-based step number for the progress indicator
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Details => 1,
            WizardStep::Compliance => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Details => "Listing Details",
            WizardStep::Compliance => "Compliance Check",
            WizardStep::Review => "Review & Submit",
        }
    }
}

/// Which pane receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Platform,
    Url,
    Content,
    Suggestions,
    Preview,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Platform => Focus::Url,
            Focus::Url => Focus::Content,
            Focus::Content => Focus::Suggestions,
            Focus::Suggestions => Focus::Preview,
            Focus::Preview => Focus::Platform,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Focus::Platform => Focus::Preview,
            Focus::Url => Focus::Platform,
            Focus::Content => Focus::Url,
            Focus::Suggestions => Focus::Content,
            Focus::Preview => Focus::Suggestions,
        }
    }

    /// Form fields take text input
    pub fn is_form_field(&self) -> bool {
        matches!(self, Focus::Platform | Focus::Url | Focus::Content)
    }
}
