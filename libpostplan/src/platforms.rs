//! Platform registry
//!
//! The fixed set of distribution channels a post can be tagged with, and the
//! display metadata each one carries. Adding or removing a channel is a change
//! to [`Platform`] and the exhaustive matches below, nothing else.
//!
//! # Examples
//!
//! ```
//! use libpostplan::platforms::{Platform, PlatformSet};
//!
//! let mut set = PlatformSet::new();
//! set.insert(Platform::Twitter);
//! set.insert(Platform::Linkedin);
//! set.insert(Platform::Twitter);
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(Platform::Linkedin.metadata().color, "bg-blue-700");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A distribution channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Facebook,
    Instagram,
    Linkedin,
}

/// Display metadata for a platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformMeta {
    /// Human-readable name
    pub label: &'static str,
    /// Icon reference understood by the presentation layer
    pub icon: &'static str,
    /// Color token understood by the presentation layer
    pub color: &'static str,
}

impl Platform {
    /// Every platform, in display order
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::Facebook,
        Platform::Instagram,
        Platform::Linkedin,
    ];

    /// Lowercase identifier (e.g., "twitter")
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
        }
    }

    pub fn metadata(&self) -> PlatformMeta {
        match self {
            Platform::Twitter => PlatformMeta {
                label: "Twitter",
                icon: "twitter",
                color: "bg-blue-500",
            },
            Platform::Facebook => PlatformMeta {
                label: "Facebook",
                icon: "facebook",
                color: "bg-blue-600",
            },
            Platform::Instagram => PlatformMeta {
                label: "Instagram",
                icon: "instagram",
                color: "bg-pink-500",
            },
            Platform::Linkedin => PlatformMeta {
                label: "LinkedIn",
                icon: "linkedin",
                color: "bg-blue-700",
            },
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "twitter" => Ok(Platform::Twitter),
            "facebook" => Ok(Platform::Facebook),
            "instagram" => Ok(Platform::Instagram),
            "linkedin" => Ok(Platform::Linkedin),
            _ => Err(format!(
                "Unknown platform: '{}'. Valid options: twitter, facebook, instagram, linkedin",
                s
            )),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Set of platforms that remembers insertion order
///
/// Duplicates are impossible by construction. Equality ignores order, so
/// `{twitter, facebook}` equals `{facebook, twitter}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Platform>", into = "Vec<Platform>")]
pub struct PlatformSet {
    items: Vec<Platform>,
}

impl PlatformSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a platform. Returns `false` if it was already present.
    pub fn insert(&mut self, platform: Platform) -> bool {
        if self.contains(platform) {
            return false;
        }
        self.items.push(platform);
        true
    }

    /// Remove a platform. Returns `false` if it was not present.
    pub fn remove(&mut self, platform: Platform) -> bool {
        let before = self.items.len();
        self.items.retain(|p| *p != platform);
        self.items.len() != before
    }

    /// Remove the platform if present, add it otherwise.
    ///
    /// Returns whether the platform is selected afterwards.
    pub fn toggle(&mut self, platform: Platform) -> bool {
        if self.remove(platform) {
            false
        } else {
            self.items.push(platform);
            true
        }
    }

    pub fn contains(&self, platform: Platform) -> bool {
        self.items.contains(&platform)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Platforms in insertion order
    pub fn iter(&self) -> impl Iterator<Item = Platform> + '_ {
        self.items.iter().copied()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl PartialEq for PlatformSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|p| other.contains(p))
    }
}

impl Eq for PlatformSet {}

impl FromIterator<Platform> for PlatformSet {
    fn from_iter<I: IntoIterator<Item = Platform>>(iter: I) -> Self {
        let mut set = PlatformSet::new();
        for platform in iter {
            set.insert(platform);
        }
        set
    }
}

impl From<Vec<Platform>> for PlatformSet {
    fn from(platforms: Vec<Platform>) -> Self {
        platforms.into_iter().collect()
    }
}

impl From<PlatformSet> for Vec<Platform> {
    fn from(set: PlatformSet) -> Self {
        set.items
    }
}

impl std::fmt::Display for PlatformSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().map(|p| p.as_str()).collect();
        write!(f, "{}", names.join(", "))
    }
}
