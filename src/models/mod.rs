//! Data models for the listing TUI
//!
//! This module contains the core data structures:
//! - Product listing and its analytics sub-records
//! - The social post captured by the intake form
//! - Enums for platforms, categories, fulfillment and UI state

pub mod enums;
pub mod listing;
pub mod post;

// Re-exports for convenient access
pub use enums::{Category, Focus, Fulfillment, Platform, WizardStep};
pub use listing::{AiSuggestions, CompetitorPrice, PricePoint, ProductListing, SentimentAnalysis};
pub use post::SocialPost;
