//! Terminal rendering: banner, live dashboard, and session summary.
//!
//! Two [`Reporter`] implementations cover the two output modes. The
//! [`Dashboard`] repaints a table in place by walking the cursor back over
//! the previous frame, so the banner above it stays intact. The
//! [`LogReporter`] emits one plain log line per snapshot for debug runs and
//! non-interactive terminals.

use crate::libs::engine::{Reporter, RunSummary, StatusSnapshot};
use crate::libs::messages::Message;
use crate::msg_print;
use prettytable::{row, Table};
use std::io::{self, Write};

const BANNER: &str = r#"
__     __  ___   ____   ___   _
\ \   / / |_ _| / ___| |_ _| | |
 \ \ / /   | |  | |  _   | |  | |
  \ V /    | |  | |_| |  | |  | |___
   \_/    |___|  \____| |___| |_____|

        Presence keeper for desktop collaboration clients
        Ctrl+Shift+P to pause, Ctrl+C to exit
"#;

/// Prints the start-up banner.
pub fn banner() {
    println!("{}", BANNER);
}

/// Builds the dashboard panel for one status snapshot.
pub fn dashboard_table(snapshot: &StatusSnapshot) -> Table {
    let mut table = Table::new();
    table.add_row(row!["STATUS", snapshot.status]);
    table.add_row(row!["UPTIME", snapshot.uptime]);
    table.add_row(row!["LAST ACTION", snapshot.last_action]);
    table.add_row(row!["NEXT ACTION", snapshot.next_in]);
    table.add_row(row!["INTERVAL", format!("{}s", snapshot.interval)]);
    if !snapshot.notice.is_empty() {
        table.add_row(row!["NOTICE", snapshot.notice]);
    }
    table
}

/// Builds the final session-summary panel.
pub fn summary_table(summary: &RunSummary) -> Table {
    let mut table = Table::new();
    table.add_row(row!["UPTIME", summary.uptime]);
    table.add_row(row!["INTERACTIONS", summary.interactions]);
    table
}

/// Prints the end-of-run summary panel.
pub fn show_summary(summary: &RunSummary) {
    msg_print!(Message::SessionSummaryHeader, true);
    summary_table(summary).printstd();
    msg_print!(Message::Goodbye);
}

/// Live status panel repainted in place once per second.
pub struct Dashboard {
    last_height: usize,
}

impl Dashboard {
    pub fn new() -> Self {
        Self { last_height: 0 }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for Dashboard {
    fn publish(&mut self, snapshot: &StatusSnapshot) {
        let rendered = dashboard_table(snapshot).to_string();
        if self.last_height > 0 {
            // Walk back over the previous frame and erase it.
            print!("\x1B[{}A\x1B[0J", self.last_height);
        }
        print!("{}", rendered);
        self.last_height = rendered.lines().count();
        let _ = io::stdout().flush();
    }
}

/// Plain sequential status lines for debug mode.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn publish(&mut self, snapshot: &StatusSnapshot) {
        let notice = if snapshot.notice.is_empty() {
            String::new()
        } else {
            format!(" notice={}", snapshot.notice)
        };
        tracing::info!(
            "status={} uptime={} last_action={} next={}{}",
            snapshot.status,
            snapshot.uptime,
            snapshot.last_action,
            snapshot.next_in,
            notice
        );
    }
}
