//! Platform automation backend.
//!
//! The engine drives the desktop through the [`Actuator`] trait: idle-sleep
//! prevention, the focus–interact–restore sequence, frontmost-application
//! queries, and desktop notifications. [`MacActuator`] is the production
//! implementation; it holds a [`keepawake`] assertion guard and runs short
//! AppleScript snippets through `osascript`.
//!
//! Only [`Actuator::interact`] is allowed to fail upward. Every other
//! operation is best-effort and swallows its own errors after logging, so a
//! broken notification path can never take down the simulation loop.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_info, msg_warning};
use std::process::Command;
use thiserror::Error;

/// Error raised by the focus–interact–restore sequence.
#[derive(Debug, Error)]
pub enum InteractionError {
    /// The automation runner itself could not be launched.
    #[error("failed to run osascript: {0}")]
    Runner(#[from] std::io::Error),

    /// The runner launched but the script was rejected or failed.
    #[error("automation script failed: {0}")]
    Script(String),
}

/// Platform operations the activity engine depends on.
pub trait Actuator {
    /// Starts blocking idle sleep. Best-effort: returns whether the
    /// assertion is actually held.
    fn start_sleep_prevention(&mut self) -> bool;

    /// Releases the idle-sleep assertion. Safe to call when none is held.
    fn stop_sleep_prevention(&mut self);

    /// Brings the target application to the foreground, delivers the
    /// presence-signaling keystroke, and restores the previously frontmost
    /// application even when the signaling step failed.
    fn interact(&mut self) -> Result<(), InteractionError>;

    /// Name of the currently frontmost application, or an empty string when
    /// it cannot be determined.
    fn frontmost_app(&mut self) -> String;

    /// Shows a transient desktop notification. Failures are swallowed.
    fn notify(&mut self, title: &str, message: &str);
}

/// AppleScript asking System Events for the frontmost process name.
pub const FRONTMOST_SCRIPT: &str = r#"tell application "System Events" to get name of first process whose frontmost is true"#;

/// Escapes a value for embedding inside an AppleScript string literal.
pub fn escape_script_text(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Builds the activate-and-keystroke script for the target application.
///
/// The keystroke is Cmd+1, which selects the first sidebar tab in the usual
/// collaboration clients and registers as user input either way.
pub fn interact_script(app: &str) -> String {
    format!(
        r#"tell application "{0}"
    activate
end tell
delay 1
tell application "System Events"
    keystroke "1" using {{command down}}
end tell"#,
        escape_script_text(app)
    )
}

/// Builds a plain activation script, used to restore the previous focus.
pub fn activate_script(app: &str) -> String {
    format!(
        r#"tell application "{0}"
    activate
end tell"#,
        escape_script_text(app)
    )
}

/// Builds a `display notification` script.
pub fn notification_script(title: &str, message: &str) -> String {
    format!(
        r#"display notification "{}" with title "{}""#,
        escape_script_text(message),
        escape_script_text(title)
    )
}

/// macOS automation backend: `osascript` for application control and a
/// `keepawake` assertion for sleep prevention.
pub struct MacActuator {
    target_app: String,
    awake: Option<keepawake::KeepAwake>,
}

impl MacActuator {
    pub fn new(target_app: &str) -> Self {
        Self {
            target_app: target_app.to_string(),
            awake: None,
        }
    }

    fn run_script(script: &str) -> Result<String, InteractionError> {
        let output = Command::new("osascript").arg("-e").arg(script).output()?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(InteractionError::Script(stderr))
        }
    }
}

impl Actuator for MacActuator {
    fn start_sleep_prevention(&mut self) -> bool {
        if self.awake.is_some() {
            return true;
        }

        match keepawake::Builder::default()
            .display(true)
            .idle(true)
            .sleep(true)
            .reason("Presence simulation active")
            .app_name("Vigil")
            .app_reverse_domain("dev.lahtela.vigil")
            .create()
        {
            Ok(guard) => {
                self.awake = Some(guard);
                msg_info!(Message::SleepPreventionActive);
                true
            }
            Err(err) => {
                msg_warning!(Message::SleepPreventionUnavailable(err.to_string()));
                false
            }
        }
    }

    fn stop_sleep_prevention(&mut self) {
        // Dropping the guard releases the assertion.
        if self.awake.take().is_some() {
            msg_info!(Message::SleepPreventionReleased);
        }
    }

    fn interact(&mut self) -> Result<(), InteractionError> {
        let previous = self.frontmost_app();

        let result = Self::run_script(&interact_script(&self.target_app));

        // Restore runs regardless of whether the keystroke landed; a restore
        // failure is logged and swallowed.
        if !previous.is_empty() && !previous.eq_ignore_ascii_case(&self.target_app) {
            if let Err(err) = Self::run_script(&activate_script(&previous)) {
                msg_warning!(Message::RestoreFocusFailed(err.to_string()));
            }
        }

        result.map(|_| ())
    }

    fn frontmost_app(&mut self) -> String {
        match Self::run_script(FRONTMOST_SCRIPT) {
            Ok(name) => name,
            Err(err) => {
                msg_debug!(Message::FrontmostQueryFailed(err.to_string()));
                String::new()
            }
        }
    }

    fn notify(&mut self, title: &str, message: &str) {
        if let Err(err) = Self::run_script(&notification_script(title, message)) {
            msg_warning!(Message::NotificationFailed(err.to_string()));
        }
    }
}
