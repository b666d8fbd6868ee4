//! Display implementation for vigil application messages.
//!
//! Provides the `Display` trait implementation for the `Message` enum,
//! converting structured message data into the human-readable text used for
//! terminal output, log lines, and desktop notifications. Keeping every
//! user-facing string in one place makes wording consistent and keeps
//! parameter interpolation type-safe.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let message = match self {
            // === ENGINE MESSAGES ===
            Message::EngineStarted { interval, max_failures } => {
                format!("Engine started. Interval: {}s, failure threshold: {}.", interval, max_failures)
            }
            Message::EngineStopped => "Engine stopped.".to_string(),
            Message::EnginePaused => "Interaction paused.".to_string(),
            Message::EngineResumed => "Interaction resumed.".to_string(),
            Message::InteractionFailed(err) => format!("Interaction attempt failed: {}", err),
            Message::InteractionFailureCount(current, max) => format!("Interaction failed ({}/{}).", current, max),
            Message::FailureThresholdReached(max) => format!("{} consecutive interaction failures. Shutting down.", max),
            Message::ShuttingDownNotice => "Too many failures. Shutting down.".to_string(),
            Message::PausedNotice => "Paused".to_string(),
            Message::ResumedNotice => "Resumed".to_string(),
            Message::ShortcutIgnored(app) => format!("Pause shortcut ignored while '{}' has focus.", app),
            Message::ShortcutIgnoredNotice(app) => format!("Shortcut ignored ({})", app),

            // === INPUT LISTENER MESSAGES ===
            Message::ListenerStarted => "Pause shortcut listener started (Ctrl+Shift+P).".to_string(),
            Message::ListenerStopped => "Pause shortcut listener stopped.".to_string(),
            Message::ErrorInInputHook(err) => format!("Input hook error: {}. Retrying in 1 second...", err),

            // === SLEEP PREVENTION MESSAGES ===
            Message::SleepPreventionActive => "Idle-sleep prevention active.".to_string(),
            Message::SleepPreventionUnavailable(err) => {
                format!("Idle-sleep prevention unavailable: {}. Continuing without it.", err)
            }
            Message::SleepPreventionReleased => "Idle-sleep prevention released.".to_string(),

            // === AUTOMATION MESSAGES ===
            Message::RestoreFocusFailed(err) => format!("Could not restore previous application focus: {}", err),
            Message::NotificationFailed(err) => format!("Failed to send notification: {}", err),
            Message::FrontmostQueryFailed(err) => format!("Could not determine frontmost application: {}", err),

            // === CONFIGURATION MESSAGES ===
            Message::InvalidInterval => "Interval must be at least 1 second.".to_string(),
            Message::InvalidMaxFailures => "Failure threshold must be at least 1.".to_string(),

            // === SIGNAL MESSAGES ===
            Message::ReceivedSigterm => "Received SIGTERM, shutting down gracefully...".to_string(),
            Message::ReceivedSigint => "Received SIGINT, shutting down gracefully...".to_string(),
            Message::ReceivedCtrlC => "Received Ctrl+C, shutting down gracefully...".to_string(),
            Message::CtrlCListenFailed(err) => format!("Failed to listen for Ctrl+C: {}", err),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),

            // === SUMMARY MESSAGES ===
            Message::SessionSummaryHeader => "Session Summary".to_string(),
            Message::UnexpectedFailure(err) => format!("Unexpected failure: {}", err),
            Message::Goodbye => "Bye!".to_string(),
        };
        write!(f, "{}", message)
    }
}
