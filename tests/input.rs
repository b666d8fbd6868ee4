#[cfg(test)]
mod tests {
    use rdev::{EventType, Key};
    use vigil::libs::input::{ChordTracker, HotkeyListener, PauseSignal};

    #[test]
    fn test_chord_fires_only_with_both_modifiers_held() {
        let mut tracker = ChordTracker::default();

        // P alone does nothing.
        assert!(!tracker.on_event(&EventType::KeyPress(Key::KeyP)));

        // Ctrl+P without shift does nothing.
        assert!(!tracker.on_event(&EventType::KeyPress(Key::ControlLeft)));
        assert!(!tracker.on_event(&EventType::KeyPress(Key::KeyP)));

        // Full chord fires on the P press edge.
        assert!(!tracker.on_event(&EventType::KeyPress(Key::ShiftLeft)));
        assert!(tracker.on_event(&EventType::KeyPress(Key::KeyP)));
    }

    #[test]
    fn test_chord_does_not_fire_after_modifier_release() {
        let mut tracker = ChordTracker::default();

        assert!(!tracker.on_event(&EventType::KeyPress(Key::ControlRight)));
        assert!(!tracker.on_event(&EventType::KeyPress(Key::ShiftRight)));
        assert!(!tracker.on_event(&EventType::KeyRelease(Key::ControlRight)));
        assert!(!tracker.on_event(&EventType::KeyPress(Key::KeyP)));
    }

    #[test]
    fn test_chord_ignores_unrelated_events() {
        let mut tracker = ChordTracker::default();

        assert!(!tracker.on_event(&EventType::KeyPress(Key::KeyA)));
        assert!(!tracker.on_event(&EventType::ButtonPress(rdev::Button::Left)));
        assert!(!tracker.on_event(&EventType::MouseMove { x: 1.0, y: 1.0 }));
    }

    #[test]
    fn test_chord_fires_again_on_repeated_press() {
        let mut tracker = ChordTracker::default();

        tracker.on_event(&EventType::KeyPress(Key::ControlLeft));
        tracker.on_event(&EventType::KeyPress(Key::ShiftLeft));
        assert!(tracker.on_event(&EventType::KeyPress(Key::KeyP)));
        tracker.on_event(&EventType::KeyRelease(Key::KeyP));
        assert!(tracker.on_event(&EventType::KeyPress(Key::KeyP)));
    }

    #[test]
    fn test_stop_without_start_is_safe() {
        let mut listener = HotkeyListener::new();

        // Never started: stop must not panic, repeatedly.
        listener.stop();
        listener.stop();
        assert!(!listener.poll());
    }

    #[test]
    fn test_poll_defaults_to_false() {
        let mut listener = HotkeyListener::new();
        assert!(!listener.poll());
        assert!(!listener.poll());
    }
}
