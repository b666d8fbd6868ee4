//! Pause/resume signaling from a global keyboard shortcut.
//!
//! The engine never blocks on user input: a background thread runs the
//! global input hook and raises a shared flag when the pause chord
//! (Ctrl+Shift+P) fires, and the engine polls that flag between sleeps.
//! Chords queued between two polls collapse to a single observed toggle.

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info};
use rdev::{listen, Event, EventType, Key};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Source of pause-toggle requests, polled by the engine once per second.
pub trait PauseSignal {
    /// Starts delivering toggle requests.
    fn start(&mut self);

    /// Stops delivering toggle requests and clears anything pending.
    /// Idempotent; safe to call when never started.
    fn stop(&mut self);

    /// Returns whether a toggle was requested since the last poll, clearing
    /// the request as a side effect.
    fn poll(&mut self) -> bool;
}

/// Follows Ctrl/Shift modifier state across key events and reports a firing
/// exactly on the P-press edge while both modifiers are held.
#[derive(Debug, Default)]
pub struct ChordTracker {
    ctrl: bool,
    shift: bool,
}

impl ChordTracker {
    /// Feeds one input event through the tracker. Returns true when the
    /// pause chord fired on this event.
    pub fn on_event(&mut self, event_type: &EventType) -> bool {
        match event_type {
            EventType::KeyPress(Key::ControlLeft) | EventType::KeyPress(Key::ControlRight) => {
                self.ctrl = true;
                false
            }
            EventType::KeyRelease(Key::ControlLeft) | EventType::KeyRelease(Key::ControlRight) => {
                self.ctrl = false;
                false
            }
            EventType::KeyPress(Key::ShiftLeft) | EventType::KeyPress(Key::ShiftRight) => {
                self.shift = true;
                false
            }
            EventType::KeyRelease(Key::ShiftLeft) | EventType::KeyRelease(Key::ShiftRight) => {
                self.shift = false;
                false
            }
            EventType::KeyPress(Key::KeyP) => self.ctrl && self.shift,
            _ => false,
        }
    }
}

/// Global-hotkey pause signal backed by an `rdev` hook thread.
///
/// The hook thread cannot be joined (the listener call never returns on a
/// healthy hook), so `stop()` disarms delivery instead of killing the
/// thread; the detached thread dies with the process.
pub struct HotkeyListener {
    pending: Arc<AtomicBool>,
    armed: Arc<AtomicBool>,
    spawned: bool,
}

impl HotkeyListener {
    pub fn new() -> Self {
        Self {
            pending: Arc::new(AtomicBool::new(false)),
            armed: Arc::new(AtomicBool::new(false)),
            spawned: false,
        }
    }
}

impl Default for HotkeyListener {
    fn default() -> Self {
        Self::new()
    }
}

impl PauseSignal for HotkeyListener {
    fn start(&mut self) {
        self.armed.store(true, Ordering::SeqCst);
        if self.spawned {
            return;
        }
        self.spawned = true;

        let pending = self.pending.clone();
        let armed = self.armed.clone();
        thread::spawn(move || {
            // Restart the hook on error to keep the shortcut available.
            loop {
                let pending_for_hook = pending.clone();
                let armed_for_hook = armed.clone();
                let mut tracker = ChordTracker::default();
                if let Err(err) = listen(move |event: Event| {
                    if tracker.on_event(&event.event_type) && armed_for_hook.load(Ordering::SeqCst) {
                        pending_for_hook.store(true, Ordering::SeqCst);
                    }
                }) {
                    msg_error!(Message::ErrorInInputHook(format!("{:?}", err)));
                    thread::sleep(Duration::from_secs(1));
                } else {
                    // listen only returns cleanly when the hook was torn down
                    break;
                }
            }
        });

        msg_info!(Message::ListenerStarted);
    }

    fn stop(&mut self) {
        self.pending.store(false, Ordering::SeqCst);
        if self.armed.swap(false, Ordering::SeqCst) {
            msg_debug!(Message::ListenerStopped);
        }
    }

    fn poll(&mut self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }
}
