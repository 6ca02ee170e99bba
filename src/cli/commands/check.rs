//! Check command implementation.
//!
//! The `update-notifier check` command compares two versions and reports
//! the result on stdout, as text or JSON.

use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::updates::{parse_version, UpdateInfo, UpdateKind};

use super::dispatcher::{Command, CommandResult};
use super::resolve_package;

/// Machine-readable result of a version check.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    #[serde(flatten)]
    pub info: UpdateInfo,
    #[serde(rename = "type")]
    pub kind: Option<UpdateKind>,
    pub update_available: bool,
}

impl CheckReport {
    pub fn new(info: UpdateInfo) -> Self {
        let kind = info.kind();
        Self {
            update_available: kind.is_some(),
            info,
            kind,
        }
    }
}

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, stdout: &mut dyn Write, _stderr: &mut dyn Write) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        let package = resolve_package(&self.args.versions, &config)?;
        let report = CheckReport::new(UpdateInfo::new(
            package,
            self.args.versions.current.as_str(),
            self.args.versions.latest.as_str(),
        ));

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            writeln!(stdout, "{}", json)?;
            return Ok(CommandResult::success());
        }

        let info = &report.info;
        match report.kind {
            Some(kind) => writeln!(
                stdout,
                "{} update available: {} → {}",
                kind, info.current_version, info.latest_version
            )?,
            None if parse_version(&info.current_version).is_none()
                || parse_version(&info.latest_version).is_none() =>
            {
                writeln!(
                    stdout,
                    "Cannot compare versions {} and {}",
                    info.current_version, info.latest_version
                )?
            }
            None => writeln!(stdout, "{} is up to date", info.package_name)?,
        }

        Ok(CommandResult::success())
    }
}
