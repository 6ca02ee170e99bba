//! Command-line interface for update-notifier.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{AutomatedMode, CheckArgs, Cli, Commands, NotifyArgs, VersionArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
