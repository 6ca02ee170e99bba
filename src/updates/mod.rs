//! Update notifications.
//!
//! This module provides:
//! - Version parsing and comparison ([`version`])
//! - The go/no-go gate ([`gate`])
//! - Message templates ([`template`]) and box rendering ([`render`])
//! - The [`Notifier`] that ties them together

pub mod gate;
pub mod notify;
pub mod render;
pub mod template;
pub mod version;

pub use gate::{should_notify, Decision, SkipReason, VersionGate};
pub use notify::{Notifier, NotifyOptions};
pub use render::{render, MessageRenderer};
pub use template::{substitute, PackageManager, Placeholders, DEFAULT_TEMPLATE};
pub use version::{is_newer_version, parse_version, UpdateInfo, UpdateKind};
