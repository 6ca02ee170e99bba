//! Notify command implementation.
//!
//! The `update-notifier notify` command prints the update box to stderr
//! when the versions and invocation context call for it.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::args::{AutomatedMode, NotifyArgs};
use crate::config::{load_config, NotifierConfig};
use crate::environment::InvocationContext;
use crate::error::Result;
use crate::ui::{BoxStyle, NotifierTheme};
use crate::updates::{MessageRenderer, Notifier, NotifyOptions, UpdateInfo};

use super::dispatcher::{Command, CommandResult};
use super::resolve_package;

/// The notify command implementation.
pub struct NotifyCommand {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
    args: NotifyArgs,
    theme: NotifierTheme,
    context: InvocationContext,
}

impl NotifyCommand {
    /// Create a new notify command with a plain theme and an empty context.
    pub fn new(project_root: &Path, config_override: Option<&Path>, args: NotifyArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_override: config_override.map(Path::to_path_buf),
            args,
            theme: NotifierTheme::plain(),
            context: InvocationContext::default(),
        }
    }

    /// Use the given colours.
    pub fn with_theme(mut self, theme: NotifierTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Use the given detected invocation context.
    pub fn with_context(mut self, context: InvocationContext) -> Self {
        self.context = context;
        self
    }

    fn is_automated(&self) -> bool {
        match self.args.automated {
            AutomatedMode::Auto => self.context.is_automated(),
            AutomatedMode::Yes => true,
            AutomatedMode::No => false,
        }
    }

    fn is_global(&self, config: &NotifierConfig) -> bool {
        if self.args.global {
            true
        } else if self.args.local {
            false
        } else {
            config.is_global.unwrap_or(true)
        }
    }

    fn renderer(&self, config: &NotifierConfig) -> MessageRenderer {
        let style = BoxStyle {
            border_style: self
                .args
                .border_style
                .unwrap_or(config.box_style.border_style),
            padding: self
                .args
                .padding
                .map(usize::from)
                .unwrap_or(config.box_style.padding),
        };

        MessageRenderer::new()
            .with_theme(self.theme.clone())
            .with_style(style)
            .with_package_manager(self.args.package_manager.unwrap_or(config.package_manager))
    }
}

impl Command for NotifyCommand {
    fn execute(&self, _stdout: &mut dyn Write, stderr: &mut dyn Write) -> Result<CommandResult> {
        if self.args.no_update_notifier {
            tracing::debug!("Update notifications disabled by --no-update-notifier");
            return Ok(CommandResult::success());
        }
        if let Some(var) = &self.context.opted_out_via {
            tracing::debug!("Update notifications disabled by {}", var);
            return Ok(CommandResult::success());
        }

        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        let package = resolve_package(&self.args.versions, &config)?;

        let info = UpdateInfo::new(
            package,
            self.args.versions.current.as_str(),
            self.args.versions.latest.as_str(),
        );
        let options = NotifyOptions {
            defer: self.args.defer,
            is_global: self.is_global(&config),
            message: self.args.message.clone().or_else(|| config.message.clone()),
        };

        let mut notifier = Notifier::with_writer(info, stderr)
            .renderer(self.renderer(&config))
            .notify_in_automated_context(
                self.args.notify_in_script || config.notify_in_automated_context,
            );
        notifier.notify(self.is_automated(), &options);

        Ok(CommandResult::success())
    }
}
