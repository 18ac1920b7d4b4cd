use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform: {0}")]
pub struct PlatformError(pub String);

/// Social platforms shown on the dashboard, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    LinkedIn,
    YouTube,
    Medium,
    Instagram,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::LinkedIn,
        Platform::YouTube,
        Platform::Medium,
        Platform::Instagram,
    ];

    /// Lowercase key used in element ids.
    pub fn key(self) -> &'static str {
        match self {
            Platform::LinkedIn => "linkedin",
            Platform::YouTube => "youtube",
            Platform::Medium => "medium",
            Platform::Instagram => "instagram",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Platform::LinkedIn => "Linkedin",
            Platform::YouTube => "Youtube",
            Platform::Medium => "Medium",
            Platform::Instagram => "Instagram",
        }
    }

    /// Brand color as a CSS hex string.
    pub fn color(self) -> &'static str {
        match self {
            Platform::LinkedIn => "#0077B5",
            Platform::YouTube => "#FF0000",
            Platform::Medium => "#00AB6C",
            Platform::Instagram => "#E4405F",
        }
    }

    /// Hidden element holding the raw follower count, e.g. `linkedin_count`.
    pub fn count_element_id(self) -> String {
        format!("{}_count", self.key())
    }

    /// Container of the `.digit` cells, e.g. `linkedin-clock`.
    pub fn clock_element_id(self) -> String {
        format!("{}-clock", self.key())
    }

    /// Element carrying `data-timestamp`, e.g. `linkedin-last-updated`.
    pub fn updated_element_id(self) -> String {
        format!("{}-last-updated", self.key())
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|platform| platform.key() == key)
            .ok_or_else(|| PlatformError(s.to_string()))
    }
}
