//! Language Version
//!
//! Template-language versions. Capability thresholds compare these in order.

use crate::error::CompilerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageVersion {
    pub major: u32,
    pub minor: u32,
}

impl LanguageVersion {
    pub const VERSION_1_0: LanguageVersion = LanguageVersion::new(1, 0);
    pub const VERSION_1_1: LanguageVersion = LanguageVersion::new(1, 1);
    pub const VERSION_2_0: LanguageVersion = LanguageVersion::new(2, 0);
    pub const VERSION_2_1: LanguageVersion = LanguageVersion::new(2, 1);
    pub const VERSION_3_0: LanguageVersion = LanguageVersion::new(3, 0);
    /// Tier above every released version; enables capabilities ahead of their threshold.
    pub const EXPERIMENTAL: LanguageVersion = LanguageVersion::new(1337, 1337);
    pub const LATEST: LanguageVersion = LanguageVersion::VERSION_3_0;

    pub const fn new(major: u32, minor: u32) -> Self {
        LanguageVersion { major, minor }
    }

    pub fn is_experimental(&self) -> bool {
        *self >= LanguageVersion::EXPERIMENTAL
    }
}

impl Default for LanguageVersion {
    fn default() -> Self {
        LanguageVersion::LATEST
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_experimental() {
            return f.write_str("Experimental");
        }
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for LanguageVersion {
    type Err = CompilerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("latest") {
            return Ok(LanguageVersion::LATEST);
        }
        if trimmed.eq_ignore_ascii_case("experimental") {
            return Ok(LanguageVersion::EXPERIMENTAL);
        }

        let invalid = || CompilerError::InvalidLanguageVersion(value.to_string());
        let (major, minor) = trimmed.split_once('.').ok_or_else(invalid)?;
        let major = major.parse::<u32>().map_err(|_| invalid())?;
        let minor = minor.parse::<u32>().map_err(|_| invalid())?;
        Ok(LanguageVersion::new(major, minor))
    }
}

impl TryFrom<String> for LanguageVersion {
    type Error = CompilerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LanguageVersion> for String {
    fn from(version: LanguageVersion) -> Self {
        version.to_string()
    }
}
