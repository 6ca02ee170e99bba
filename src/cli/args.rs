//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::ui::{BorderStyle, MAX_PADDING};
use crate::updates::PackageManager;

/// update-notifier - Boxed update notifications for command-line packages.
#[derive(Debug, Parser)]
#[command(name = "update-notifier")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .update-notifier.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print an update notification to stderr if one is due
    Notify(NotifyArgs),

    /// Compare two versions and report the kind of update
    Check(CheckArgs),
}

/// The package and versions being compared.
#[derive(Debug, Clone, clap::Args)]
pub struct VersionArgs {
    /// Package name (defaults to package_name from the config file)
    #[arg(short, long)]
    pub package: Option<String>,

    /// Currently installed version
    #[arg(long)]
    pub current: String,

    /// Latest published version
    #[arg(long)]
    pub latest: String,
}

/// How to decide whether we are running inside an npm/yarn script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AutomatedMode {
    /// Detect from the environment
    #[default]
    Auto,
    /// Treat the run as automated
    Yes,
    /// Treat the run as interactive
    No,
}

/// Arguments for the `notify` command.
#[derive(Debug, Clone, clap::Args)]
pub struct NotifyArgs {
    #[command(flatten)]
    pub versions: VersionArgs,

    /// Suggest the global install command (default)
    #[arg(short, long, conflicts_with = "local")]
    pub global: bool,

    /// Suggest the local install command
    #[arg(long)]
    pub local: bool,

    /// Custom message template ({packageName}, {currentVersion}, {latestVersion}, {updateCommand})
    #[arg(short, long)]
    pub message: Option<String>,

    /// Print the notification when the command finishes
    #[arg(long)]
    pub defer: bool,

    /// Whether this run is part of an automated script
    #[arg(long, value_enum, default_value_t = AutomatedMode::Auto)]
    pub automated: AutomatedMode,

    /// Notify even inside npm/yarn scripts
    #[arg(long)]
    pub notify_in_script: bool,

    /// Package manager for the update command (npm, yarn)
    #[arg(long, value_name = "NAME")]
    pub package_manager: Option<PackageManager>,

    /// Border style (round, single, double, classic)
    #[arg(long, value_name = "STYLE")]
    pub border_style: Option<BorderStyle>,

    /// Spaces between the border and the widest line (0-32)
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(0..=MAX_PADDING as i64))]
    pub padding: Option<u16>,

    /// Do not show any notification
    #[arg(long)]
    pub no_update_notifier: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub versions: VersionArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
