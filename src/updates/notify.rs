//! Showing update notifications.

use console::Term;
use std::io::Write;

use crate::ui::NotifierTheme;

use super::gate::{Decision, VersionGate};
use super::render::MessageRenderer;
use super::version::UpdateInfo;

/// Per-call display options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyOptions {
    /// Hold the message until the notifier is flushed or dropped.
    pub defer: bool,
    /// Use the global form of the update command.
    pub is_global: bool,
    /// Custom message template; `None` uses the default message.
    pub message: Option<String>,
}

impl Default for NotifyOptions {
    fn default() -> Self {
        Self {
            defer: true,
            is_global: true,
            message: None,
        }
    }
}

/// Prints a boxed update notification when one is due.
///
/// Notifying never fails: invalid versions, suppressed contexts and
/// write errors all result in nothing being printed.
pub struct Notifier<W: Write> {
    info: UpdateInfo,
    gate: VersionGate,
    renderer: MessageRenderer,
    out: W,
    pending: Option<String>,
}

impl Notifier<Term> {
    /// Notifier writing to stderr, coloured when stderr supports it.
    ///
    /// ```
    /// use update_notifier::updates::{Notifier, NotifyOptions, UpdateInfo};
    ///
    /// let mut notifier = Notifier::stderr(UpdateInfo::new("my-cli", "1.0.0", "1.1.0"));
    /// // Printed when `notifier` goes out of scope
    /// assert!(notifier.notify(false, &NotifyOptions::default()));
    /// ```
    pub fn stderr(info: UpdateInfo) -> Self {
        Self::with_writer(info, Term::stderr())
            .renderer(MessageRenderer::new().with_theme(NotifierTheme::detect()))
    }
}

impl<W: Write> Notifier<W> {
    /// Notifier writing to `out` with the plain theme.
    pub fn with_writer(info: UpdateInfo, out: W) -> Self {
        Self {
            info,
            gate: VersionGate::new(),
            renderer: MessageRenderer::new(),
            out,
            pending: None,
        }
    }

    /// Notify even when running inside an automated script.
    pub fn notify_in_automated_context(mut self, notify: bool) -> Self {
        self.gate = self.gate.notify_in_automated_context(notify);
        self
    }

    /// Replace the renderer.
    pub fn renderer(mut self, renderer: MessageRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn info(&self) -> &UpdateInfo {
        &self.info
    }

    /// Whether a deferred message is waiting to be written.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Show the notification if the gate allows it.
    ///
    /// Returns whether a message was written or scheduled.
    pub fn notify(&mut self, is_automated_context: bool, options: &NotifyOptions) -> bool {
        if let Decision::Skip(reason) = self.gate.decide(&self.info, is_automated_context) {
            tracing::debug!(
                package = %self.info.package_name,
                current = %self.info.current_version,
                latest = %self.info.latest_version,
                %reason,
                "Skipping update notification"
            );
            return false;
        }

        let rendered =
            self.renderer
                .render(&self.info, options.message.as_deref(), options.is_global);

        if options.defer {
            tracing::debug!(package = %self.info.package_name, "Deferring update notification");
            self.pending = Some(rendered);
        } else {
            self.write(&rendered);
        }
        true
    }

    /// Write any deferred message now.
    pub fn flush(&mut self) {
        if let Some(rendered) = self.pending.take() {
            self.write(&rendered);
        }
    }

    fn write(&mut self, rendered: &str) {
        let result = self
            .out
            .write_all(rendered.as_bytes())
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::debug!("Failed to write update notification: {}", e);
        }
    }
}

impl<W: Write> Drop for Notifier<W> {
    fn drop(&mut self) {
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn tester(current: &str) -> UpdateInfo {
        UpdateInfo::new("update-notifier-tester", current, "1.0.0")
    }

    fn immediate() -> NotifyOptions {
        NotifyOptions {
            defer: false,
            ..NotifyOptions::default()
        }
    }

    #[test]
    fn notify_writes_immediately() {
        let mut buf = Vec::new();
        {
            let mut notifier = Notifier::with_writer(tester("0.0.2"), &mut buf);
            assert!(notifier.notify(false, &immediate()));
            assert!(!notifier.has_pending());
        }
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Update available 0.0.2 → 1.0.0"));
    }

    #[test]
    fn notify_skips_when_up_to_date() {
        let mut buf = Vec::new();
        {
            let mut notifier = Notifier::with_writer(tester("1.0.0"), &mut buf);
            assert!(!notifier.notify(false, &immediate()));
        }
        assert!(buf.is_empty());
    }

    #[test]
    fn deferred_notification_waits_for_flush() {
        let mut buf = Vec::new();
        let mut notifier = Notifier::with_writer(tester("0.0.2"), &mut buf);
        assert!(notifier.notify(false, &NotifyOptions::default()));
        assert!(notifier.has_pending());

        notifier.flush();
        assert!(!notifier.has_pending());
        notifier.flush();
        drop(notifier);

        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.matches("Update available").count(), 1);
    }

    #[test]
    fn deferred_notification_written_on_drop() {
        let mut buf = Vec::new();
        {
            let mut notifier = Notifier::with_writer(tester("0.0.2"), &mut buf);
            notifier.notify(false, &NotifyOptions::default());
        }
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(out.matches("Update available").count(), 1);
    }

    #[test]
    fn automated_context_respects_override() {
        let mut buf = Vec::new();
        {
            let mut quiet = Notifier::with_writer(tester("0.0.2"), &mut buf);
            assert!(!quiet.notify(true, &immediate()));
        }
        assert!(buf.is_empty());

        {
            let mut loud =
                Notifier::with_writer(tester("0.0.2"), &mut buf).notify_in_automated_context(true);
            assert!(loud.notify(true, &immediate()));
        }
        assert!(!buf.is_empty());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_errors_are_swallowed() {
        let mut notifier = Notifier::with_writer(tester("0.0.2"), BrokenPipe);
        assert!(notifier.notify(false, &immediate()));
    }

    #[test]
    fn stderr_notifier_follows_the_gate() {
        let mut quiet = Notifier::stderr(tester("1.0.0"));
        assert!(!quiet.notify(false, &NotifyOptions::default()));
        assert!(!quiet.has_pending());

        let mut due = Notifier::stderr(tester("0.0.2"));
        assert!(due.notify(false, &NotifyOptions::default()));
        assert!(due.has_pending());
        due.flush();
        assert!(!due.has_pending());
        assert_eq!(due.info().package_name, "update-notifier-tester");
    }

    #[test]
    fn notify_options_defaults() {
        let options = NotifyOptions::default();
        assert!(options.defer);
        assert!(options.is_global);
        assert!(options.message.is_none());
    }
}
