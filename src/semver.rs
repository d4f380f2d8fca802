//! Semantic version parsing and ordering

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::InvalidVersion;

/// A `major.minor.patch` version triple.
///
/// Values come from [`SemVer::parse`]; the derived ordering compares major
/// first, then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemVer {
    major: u64,
    minor: u64,
    patch: u64,
}

impl SemVer {
    /// Parses the first `major.minor[.patch]` found in `text`.
    ///
    /// The pattern is searched for, not anchored: an optional `v`/`V`
    /// prefix is skipped, surrounding text is ignored, and a missing patch
    /// component defaults to 0, so `"Release v2.0 (stable)"` parses as
    /// `2.0.0`. A component too large for `u64` is a parse failure, not a
    /// truncation.
    pub fn parse(text: &str) -> Result<Self, InvalidVersion> {
        // Optional v/V prefix, major.minor, optional .patch
        let re = Regex::new(r"[vV]?(\d+)\.(\d+)(?:\.(\d+))?").unwrap();

        let caps = re
            .captures(text)
            .ok_or_else(|| InvalidVersion(text.to_string()))?;

        let major = caps[1]
            .parse()
            .map_err(|_| InvalidVersion(text.to_string()))?;
        let minor = caps[2]
            .parse()
            .map_err(|_| InvalidVersion(text.to_string()))?;
        let patch = match caps.get(3) {
            Some(m) => m
                .as_str()
                .parse()
                .map_err(|_| InvalidVersion(text.to_string()))?,
            None => 0,
        };

        Ok(Self { major, minor, patch })
    }

    /// Major component.
    pub fn major(&self) -> u64 {
        self.major
    }

    /// Minor component.
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Patch component (0 when the parsed text had none).
    pub fn patch(&self) -> u64 {
        self.patch
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SemVer {
    type Err = InvalidVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
