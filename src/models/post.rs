//! Social post input record

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Platform;

/// Post submitted by the intake form and consumed once by the generator
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SocialPost {
    pub platform: Platform,
    pub content: String,
    pub url: String,
}

impl SocialPost {
    /// Load a post from a JSON file (used to pre-fill the form)
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
