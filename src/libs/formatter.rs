//! Duration formatting for the dashboard and the session summary.
//!
//! All durations shown to the user go through these helpers so uptime,
//! last-action age, and countdowns read the same everywhere. Uptime uses the
//! "HH:MM:SS" pattern; countdowns use a compact "Ns" form.

use std::time::Duration;

/// Formats an elapsed duration as a zero-padded "HH:MM:SS" string.
///
/// Hours grow past two digits for very long sessions rather than wrapping.
pub fn format_uptime(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

/// Formats the seconds remaining until the next interaction attempt.
pub fn format_countdown(seconds: u64) -> String {
    format!("{}s", seconds)
}
