//! Message templates and placeholder substitution.
//!
//! Templates use `{name}` placeholders:
//!
//! - `{packageName}` - the package being updated
//! - `{currentVersion}` - the installed version
//! - `{latestVersion}` - the newest published version
//! - `{updateCommand}` - the command that installs the update
//!
//! Substitution is a single literal pass. Values are never re-scanned,
//! braces cannot be escaped, and unknown or unterminated placeholders are
//! left in the output as written.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::version::UpdateInfo;

/// Message used when the caller does not supply one.
///
/// The trailing space on the first line is part of the established layout.
pub const DEFAULT_TEMPLATE: &str =
    "Update available {currentVersion} → {latestVersion} \nRun {updateCommand} to update";

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Placeholder reference: {name}
    Placeholder(String),
}

/// Split a template into literal text and `{name}` placeholders.
///
/// A `{` with no matching `}` before the next `{` is kept as literal text.
pub fn parse_template(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = input;

    while let Some(open) = rest.find('{') {
        literal.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find(['{', '}']) {
            Some(close) if after[close..].starts_with('}') => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(after[..close].to_string()));
                rest = &after[close + 1..];
            }
            _ => {
                literal.push('{');
                rest = after;
            }
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    segments
}

/// Values available to a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub package_name: String,
    pub current_version: String,
    pub latest_version: String,
    pub update_command: String,
}

impl Placeholders {
    /// Build placeholder values for an update.
    pub fn new(info: &UpdateInfo, update_command: impl Into<String>) -> Self {
        Self {
            package_name: info.package_name.clone(),
            current_version: info.current_version.clone(),
            latest_version: info.latest_version.clone(),
            update_command: update_command.into(),
        }
    }

    /// Look up a placeholder by its template name.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "packageName" => Some(&self.package_name),
            "currentVersion" => Some(&self.current_version),
            "latestVersion" => Some(&self.latest_version),
            "updateCommand" => Some(&self.update_command),
            _ => None,
        }
    }
}

/// Replace every known placeholder in `template` with its value.
pub fn substitute(template: &str, values: &Placeholders) -> String {
    let mut out = String::with_capacity(template.len());

    for segment in parse_template(template) {
        match segment {
            Segment::Literal(text) => out.push_str(&text),
            Segment::Placeholder(name) => match values.get(&name) {
                Some(value) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(&name);
                    out.push('}');
                }
            },
        }
    }

    out
}

/// Package manager used to build the update command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            _ => Err(format!("unknown package manager: {}", s)),
        }
    }
}

impl PackageManager {
    /// Command that installs the latest version of `package_name`.
    pub fn update_command(&self, package_name: &str, is_global: bool) -> String {
        match (self, is_global) {
            (Self::Npm, true) => format!("npm i --location=global {}", package_name),
            (Self::Npm, false) => format!("npm i {}", package_name),
            (Self::Yarn, true) => format!("yarn global add {}", package_name),
            (Self::Yarn, false) => format!("yarn add {}", package_name),
        }
    }
}
