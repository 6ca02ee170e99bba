//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::environment::ContextDetector;
use crate::error::Result;
use crate::ui::NotifierTheme;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `stdout` - Destination for command results
    /// * `stderr` - Destination for notifications
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Environment detection and colour selection happen here, so the
    /// commands themselves only see explicit values.
    pub fn dispatch(
        &self,
        cli: &Cli,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<CommandResult> {
        let config_override = cli.config.as_deref();

        match &cli.command {
            Commands::Notify(args) => {
                let theme = if cli.no_color {
                    NotifierTheme::plain()
                } else {
                    NotifierTheme::detect()
                };
                let context = ContextDetector::new().detect();
                tracing::debug!("Detected invocation context: {:?}", context);

                let cmd = super::notify::NotifyCommand::new(
                    &self.project_root,
                    config_override,
                    args.clone(),
                )
                .with_theme(theme)
                .with_context(context);
                cmd.execute(stdout, stderr)
            }
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(
                    &self.project_root,
                    config_override,
                    args.clone(),
                );
                cmd.execute(stdout, stderr)
            }
        }
    }
}
