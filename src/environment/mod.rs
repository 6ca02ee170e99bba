//! Environment detection.
//!
//! Determines how the process was invoked so the CLI can decide what to
//! tell the notifier:
//!
//! 1. Explicit `--automated yes|no` flag
//! 2. Auto-detection (npm/yarn script variables)
//!
//! Opt-out (`NO_UPDATE_NOTIFIER`, `NODE_ENV=test`, CI) is detected
//! alongside and silences the `notify` command entirely.

pub mod detection;

pub use detection::{ContextDetector, InvocationContext};
