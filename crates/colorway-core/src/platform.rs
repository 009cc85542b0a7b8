//! Platform tags parsed from style descriptions.

use std::fmt;

/// Target platform a token is restricted to.
///
/// Designers tag a style by typing the platform name as the style's entire
/// description. Any other description text leaves the token untagged and
/// therefore visible to every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    /// Parse a description into a platform tag.
    ///
    /// The match is exact: `"ios"` and `"android"` only, no trimming, no
    /// case folding.
    pub fn from_description(description: &str) -> Option<Platform> {
        match description {
            "ios" => Some(Platform::Ios),
            "android" => Some(Platform::Android),
            _ => None,
        }
    }

    /// Whether a token tagged with `tag` belongs to this platform's export.
    /// Untagged tokens belong everywhere.
    pub fn admits(self, tag: Option<Platform>) -> bool {
        tag.map_or(true, |platform| platform == self)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Ios => f.write_str("ios"),
            Platform::Android => f.write_str("android"),
        }
    }
}
