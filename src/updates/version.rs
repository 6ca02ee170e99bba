//! Version parsing and comparison.

use semver::Version;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// The package and versions a notification is about.
///
/// Supplied by the caller; this crate never looks versions up itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInfo {
    /// Name of the package, as used in the update command.
    pub package_name: String,
    /// Currently installed version.
    pub current_version: String,
    /// Latest published version.
    pub latest_version: String,
}

impl UpdateInfo {
    /// Create update info for a package.
    pub fn new(
        package_name: impl Into<String>,
        current_version: impl Into<String>,
        latest_version: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            current_version: current_version.into(),
            latest_version: latest_version.into(),
        }
    }

    /// Whether the latest version is strictly newer than the current one.
    ///
    /// Unparseable versions never count as an update.
    pub fn is_update_available(&self) -> bool {
        is_newer_version(&self.latest_version, &self.current_version)
    }

    /// Classify the update, if there is one.
    pub fn kind(&self) -> Option<UpdateKind> {
        let current = parse_version(&self.current_version)?;
        let latest = parse_version(&self.latest_version)?;
        UpdateKind::between(&current, &latest)
    }
}

/// Which part of the version an update bumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateKind {
    Major,
    Minor,
    Patch,
    Prerelease,
}

impl UpdateKind {
    /// Classify the step from `current` to `latest`.
    ///
    /// Returns `None` unless `latest` has higher precedence.
    pub fn between(current: &Version, latest: &Version) -> Option<Self> {
        if latest.cmp_precedence(current) != Ordering::Greater {
            return None;
        }

        let kind = if latest.major != current.major {
            Self::Major
        } else if latest.minor != current.minor {
            Self::Minor
        } else if latest.patch != current.patch {
            Self::Patch
        } else {
            Self::Prerelease
        };
        Some(kind)
    }

    /// Lowercase name used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
            Self::Prerelease => "prerelease",
        }
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a semantic version, tolerating a leading `v` or `=`.
pub fn parse_version(version: &str) -> Option<Version> {
    let trimmed = version.trim().trim_start_matches(['v', '=']);
    Version::parse(trimmed).ok()
}

/// Compare versions to check if `latest` is newer than `current`.
///
/// Ordering is major, minor, patch, then pre-release; build metadata is
/// ignored. Returns false when either side does not parse.
pub fn is_newer_version(latest: &str, current: &str) -> bool {
    match (parse_version(latest), parse_version(current)) {
        (Some(latest), Some(current)) => latest.cmp_precedence(&current) == Ordering::Greater,
        _ => false,
    }
}
