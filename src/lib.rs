//! update-notifier - Boxed update notifications for command-line packages.
//!
//! Given a package's current and latest version, decides whether the user
//! should hear about the update and prints a bordered message to stderr.
//! Notifications are suppressed when the latest version is not newer and,
//! unless told otherwise, when running inside an npm or yarn script.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration file loading
//! - [`environment`] - Invocation context detection
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Box rendering and colours
//! - [`updates`] - Version gate, message rendering and the notifier
//!
//! # Example
//!
//! ```
//! use update_notifier::updates::{Notifier, NotifyOptions, UpdateInfo};
//!
//! let info = UpdateInfo::new("my-cli", "0.0.2", "1.0.0");
//! let mut stderr = Vec::new();
//! {
//!     let mut notifier = Notifier::with_writer(info, &mut stderr);
//!     let options = NotifyOptions { defer: false, ..NotifyOptions::default() };
//!     // Not running inside an npm script
//!     assert!(notifier.notify(false, &options));
//! }
//! let text = String::from_utf8(stderr).unwrap();
//! assert!(text.contains("Update available 0.0.2 → 1.0.0"));
//! ```

pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod ui;
pub mod updates;

pub use error::{NotifierError, Result};
