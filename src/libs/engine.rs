//! The activity-simulation engine.
//!
//! Owns the run state machine: start-up, tick scheduling, pause handling,
//! failure counting, and shutdown. Each tick performs one interaction
//! attempt through the platform actuator, then counts down to the next
//! attempt in one-second steps so stop requests and pause toggles are
//! observed within a second rather than at interval boundaries.
//!
//! ## Lifecycle
//!
//! ```text
//! STARTING → { ACTIVE ⇄ PAUSED } → SHUTTING DOWN → STOPPED
//! ```
//!
//! Shutdown is entered from three triggers: an explicit stop request through
//! a [`StopHandle`], the consecutive-failure threshold, or an operator
//! signal. Whichever path is taken, the engine stops the input listener and
//! releases sleep prevention before `run` returns.
//!
//! All collaborators are injected behind traits ([`Actuator`],
//! [`PauseSignal`], [`Reporter`]) and scoped to one run; the engine holds no
//! process-wide state.

use crate::libs::actuator::Actuator;
use crate::libs::config::EngineConfig;
use crate::libs::formatter;
use crate::libs::input::PauseSignal;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_warning};
use anyhow::Result;
use chrono::{DateTime, Local};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::time::{self, Duration, Instant};

/// Title used for all desktop notifications.
const NOTIFICATION_TITLE: &str = "Vigil";

/// How long a transient notice stays visible on the dashboard.
const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Placeholder shown when a timestamp or countdown is not available.
const EMPTY_FIELD: &str = "-";

/// Engine lifecycle phase, shown as the dashboard status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    Starting,
    Active,
    Paused,
    ShuttingDown,
    Stopped,
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            EngineStatus::Starting => "STARTING",
            EngineStatus::Active => "ACTIVE",
            EngineStatus::Paused => "PAUSED",
            EngineStatus::ShuttingDown => "SHUTTING DOWN",
            EngineStatus::Stopped => "STOPPED",
        };
        write!(f, "{}", label)
    }
}

/// Point-in-time view of engine state handed to the status reporter.
///
/// Computed fresh on every publish; the reporter never sees mutable engine
/// state.
#[derive(Debug, Clone)]
pub struct StatusSnapshot {
    pub status: EngineStatus,
    pub uptime: String,
    pub last_action: String,
    pub next_in: String,
    pub interval: u64,
    pub notice: String,
}

/// Consumes status snapshots once per tick and once per countdown second.
pub trait Reporter {
    fn publish(&mut self, snapshot: &StatusSnapshot);
}

/// Final metrics returned by [`ActivityEngine::run`].
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub uptime: String,
    pub interactions: u64,
}

/// Cloneable handle for requesting engine shutdown from another task.
///
/// Once cleared, the running flag never becomes true again within the same
/// run.
#[derive(Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

struct Notice {
    text: String,
    expires_at: Instant,
}

/// Drives the simulation loop against the injected platform collaborators.
pub struct ActivityEngine {
    config: EngineConfig,
    pause_apps: Vec<String>,
    actuator: Box<dyn Actuator>,
    signal: Box<dyn PauseSignal>,
    reporter: Box<dyn Reporter>,
    running: Arc<AtomicBool>,
    paused: bool,
    started_at: Option<Instant>,
    last_action_at: Option<DateTime<Local>>,
    activity_count: u64,
    consecutive_failures: u32,
    notice: Option<Notice>,
}

impl ActivityEngine {
    /// Creates an engine wired to the given collaborators.
    ///
    /// `pause_apps` is the focus-gate allow-list for the pause shortcut; an
    /// empty list disables the gate.
    pub fn new(
        config: EngineConfig,
        pause_apps: Vec<String>,
        actuator: Box<dyn Actuator>,
        signal: Box<dyn PauseSignal>,
        reporter: Box<dyn Reporter>,
    ) -> Self {
        Self {
            config,
            pause_apps,
            actuator,
            signal,
            reporter,
            running: Arc::new(AtomicBool::new(true)),
            paused: false,
            started_at: None,
            last_action_at: None,
            activity_count: 0,
            consecutive_failures: 0,
            notice: None,
        }
    }

    /// Returns a handle that requests shutdown when dropped into a signal
    /// handler or another task.
    pub fn stop_handle(&self) -> StopHandle {
        StopHandle(self.running.clone())
    }

    /// Runs the simulation loop until stopped.
    ///
    /// Validates the configuration before any side effect, then starts sleep
    /// prevention (best-effort) and the input listener, drives the tick
    /// loop, and stops both collaborators on every exit path before
    /// returning the final metrics.
    pub async fn run(&mut self) -> Result<RunSummary> {
        self.config.validate()?;

        self.started_at = Some(Instant::now());
        self.actuator.start_sleep_prevention();
        self.signal.start();
        msg_info!(Message::EngineStarted {
            interval: self.config.interval,
            max_failures: self.config.max_failures,
        });

        self.tick_loop().await;

        self.signal.stop();
        self.actuator.stop_sleep_prevention();
        msg_info!(Message::EngineStopped);

        Ok(self.summary())
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    async fn tick_loop(&mut self) {
        while self.is_running() {
            self.apply_pause_toggle();

            if !self.paused {
                self.attempt_interaction();
            }

            self.publish(Some(self.config.interval));

            if !self.is_running() {
                break;
            }

            self.countdown().await;
        }

        self.publish_stopped();
    }

    /// Sleeps out one interval in one-second steps, re-checking the stop
    /// flag and the pause toggle at every step.
    async fn countdown(&mut self) {
        let mut remaining = self.config.interval;
        while remaining > 0 && self.is_running() {
            time::sleep(Duration::from_secs(1)).await;
            remaining -= 1;
            self.apply_pause_toggle();
            self.publish(Some(remaining));
        }
    }

    fn attempt_interaction(&mut self) {
        match self.actuator.interact() {
            Ok(()) => {
                self.consecutive_failures = 0;
                self.activity_count += 1;
                self.last_action_at = Some(Local::now());
                msg_debug!(format!("Interaction succeeded ({} total)", self.activity_count));
            }
            Err(err) => {
                self.consecutive_failures += 1;
                msg_error!(Message::InteractionFailed(err.to_string()));
                let failure_count = Message::InteractionFailureCount(self.consecutive_failures, self.config.max_failures);
                self.actuator.notify(NOTIFICATION_TITLE, &failure_count.to_string());

                if self.consecutive_failures >= self.config.max_failures {
                    msg_error!(Message::FailureThresholdReached(self.config.max_failures));
                    self.actuator.notify(NOTIFICATION_TITLE, &Message::ShuttingDownNotice.to_string());
                    self.running.store(false, Ordering::SeqCst);
                }
            }
        }
    }

    /// Applies at most one pending pause toggle, gated on the frontmost
    /// application when an allow-list is configured.
    fn apply_pause_toggle(&mut self) {
        if !self.signal.poll() {
            return;
        }

        let frontmost = self.actuator.frontmost_app();
        if !self.is_trusted(&frontmost) {
            msg_warning!(Message::ShortcutIgnored(frontmost.clone()));
            let notice = Message::ShortcutIgnoredNotice(frontmost).to_string();
            self.actuator.notify(NOTIFICATION_TITLE, &notice);
            self.set_notice(notice);
            return;
        }

        self.paused = !self.paused;
        if self.paused {
            msg_info!(Message::EnginePaused);
            self.set_notice(Message::PausedNotice.to_string());
        } else {
            msg_info!(Message::EngineResumed);
            self.set_notice(Message::ResumedNotice.to_string());
        }
    }

    fn is_trusted(&self, frontmost: &str) -> bool {
        if self.pause_apps.is_empty() {
            return true;
        }
        let frontmost = frontmost.to_lowercase();
        self.pause_apps.iter().any(|app| frontmost.contains(&app.to_lowercase()))
    }

    fn set_notice(&mut self, text: String) {
        self.notice = Some(Notice {
            text,
            expires_at: Instant::now() + NOTICE_TTL,
        });
    }

    fn current_notice(&self) -> String {
        match &self.notice {
            Some(notice) if Instant::now() < notice.expires_at => notice.text.clone(),
            _ => String::new(),
        }
    }

    fn status(&self) -> EngineStatus {
        if self.started_at.is_none() {
            EngineStatus::Starting
        } else if !self.is_running() {
            EngineStatus::ShuttingDown
        } else if self.paused {
            EngineStatus::Paused
        } else {
            EngineStatus::Active
        }
    }

    fn snapshot(&self, next: Option<u64>) -> StatusSnapshot {
        let uptime = self.started_at.map(|at| at.elapsed()).unwrap_or_default();
        let next_in = if self.paused {
            "paused".to_string()
        } else {
            next.map(formatter::format_countdown).unwrap_or_else(|| EMPTY_FIELD.to_string())
        };

        StatusSnapshot {
            status: self.status(),
            uptime: formatter::format_uptime(uptime),
            last_action: self
                .last_action_at
                .map(|at| at.format("%H:%M:%S").to_string())
                .unwrap_or_else(|| "--:--:--".to_string()),
            next_in,
            interval: self.config.interval,
            notice: self.current_notice(),
        }
    }

    fn publish(&mut self, next: Option<u64>) {
        let snapshot = self.snapshot(next);
        self.reporter.publish(&snapshot);
    }

    fn publish_stopped(&mut self) {
        let mut snapshot = self.snapshot(None);
        snapshot.status = EngineStatus::Stopped;
        snapshot.next_in = EMPTY_FIELD.to_string();
        self.reporter.publish(&snapshot);
    }

    fn summary(&self) -> RunSummary {
        let uptime = self.started_at.map(|at| at.elapsed()).unwrap_or_default();
        RunSummary {
            uptime: formatter::format_uptime(uptime),
            interactions: self.activity_count,
        }
    }
}
