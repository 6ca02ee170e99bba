//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`update-notifier notify`, `update-notifier check`)
//! - Environment detection in one place, outside the commands
//! - Consistent global flag handling

pub mod check;
pub mod dispatcher;
pub mod notify;

pub use check::{CheckCommand, CheckReport};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use notify::NotifyCommand;

use crate::cli::args::VersionArgs;
use crate::config::NotifierConfig;
use crate::error::{NotifierError, Result};

/// Package name from the flag, falling back to the config file.
fn resolve_package(versions: &VersionArgs, config: &NotifierConfig) -> Result<String> {
    versions
        .package
        .clone()
        .or_else(|| config.package_name.clone())
        .ok_or_else(|| NotifierError::InvalidArgument {
            name: "package".to_string(),
            message: "no package name given (use --package or set package_name in .update-notifier.yml)"
                .to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versions(package: Option<&str>) -> VersionArgs {
        VersionArgs {
            package: package.map(str::to_string),
            current: "1.0.0".to_string(),
            latest: "2.0.0".to_string(),
        }
    }

    #[test]
    fn flag_beats_config() {
        let config = NotifierConfig {
            package_name: Some("config-name".to_string()),
            ..NotifierConfig::default()
        };
        let name = resolve_package(&versions(Some("flag-name")), &config).unwrap();
        assert_eq!(name, "flag-name");
    }

    #[test]
    fn config_used_when_flag_missing() {
        let config = NotifierConfig {
            package_name: Some("config-name".to_string()),
            ..NotifierConfig::default()
        };
        let name = resolve_package(&versions(None), &config).unwrap();
        assert_eq!(name, "config-name");
    }

    #[test]
    fn missing_everywhere_is_invalid_argument() {
        let result = resolve_package(&versions(None), &NotifierConfig::default());
        assert!(matches!(
            result,
            Err(NotifierError::InvalidArgument { ref name, .. }) if name == "package"
        ));
    }
}
