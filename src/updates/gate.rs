//! Go/no-go decision for showing an update notification.

use std::fmt;

use super::version::{is_newer_version, parse_version, UpdateInfo};

/// Why a notification was not shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// One of the versions is not a valid semantic version.
    InvalidVersion,
    /// The latest version is not newer than the current one.
    NotNewer,
    /// Running inside an automated script and not told to notify there.
    AutomatedContext,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InvalidVersion => "version is not valid semver",
            Self::NotNewer => "already on the latest version",
            Self::AutomatedContext => "running in an automated context",
        };
        f.write_str(text)
    }
}

/// Outcome of [`VersionGate::decide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Notify,
    Skip(SkipReason),
}

impl Decision {
    pub fn should_notify(&self) -> bool {
        matches!(self, Self::Notify)
    }
}

/// Decides whether a notification should be shown.
///
/// The automated-context signal is always passed in by the caller; the
/// gate never inspects the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionGate {
    notify_in_automated_context: bool,
}

impl VersionGate {
    /// Create a gate that stays quiet in automated contexts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notify even when running inside an automated script.
    pub fn notify_in_automated_context(mut self, notify: bool) -> Self {
        self.notify_in_automated_context = notify;
        self
    }

    /// Decide for the given update, with the reason when skipping.
    pub fn decide(&self, info: &UpdateInfo, is_automated_context: bool) -> Decision {
        if parse_version(&info.current_version).is_none()
            || parse_version(&info.latest_version).is_none()
        {
            return Decision::Skip(SkipReason::InvalidVersion);
        }

        if !is_newer_version(&info.latest_version, &info.current_version) {
            return Decision::Skip(SkipReason::NotNewer);
        }

        if is_automated_context && !self.notify_in_automated_context {
            return Decision::Skip(SkipReason::AutomatedContext);
        }

        Decision::Notify
    }

    /// Shorthand for `decide(..).should_notify()`.
    pub fn should_notify(&self, info: &UpdateInfo, is_automated_context: bool) -> bool {
        self.decide(info, is_automated_context).should_notify()
    }
}

/// Whether to notify about `current` → `latest`.
///
/// Unparseable versions yield `false`; so does an automated context
/// unless `notify_in_automated_context` is set.
pub fn should_notify(
    current: &str,
    latest: &str,
    is_automated_context: bool,
    notify_in_automated_context: bool,
) -> bool {
    is_newer_version(latest, current)
        && (!is_automated_context || notify_in_automated_context)
}
