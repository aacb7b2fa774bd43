use trispin_engine::input::{Key, KeyEvent};

/// What a key press did.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyAction {
    Ignored,
    /// One of the announced keys was pressed and logged.
    Announced(Key),
    /// The cancel key was pressed; the loop should stop.
    Cancelled,
}

/// Keyboard handling for the lab window.
///
/// Space and A are logged on press; Escape clears the run flag. Repeats
/// and releases do nothing.
#[derive(Debug)]
pub struct Controls {
    running: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self { running: true }
    }
}

impl Controls {
    pub const CANCEL: Key = Key::Escape;

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn handle(&mut self, event: KeyEvent) -> KeyAction {
        if !event.is_fresh_press() {
            return KeyAction::Ignored;
        }

        match event.key {
            Key::Space => {
                log::info!("Space key is pressed.");
                KeyAction::Announced(Key::Space)
            }
            Key::A => {
                log::info!("A key is pressed.");
                KeyAction::Announced(Key::A)
            }
            Self::CANCEL => {
                if self.running {
                    log::info!("{} pressed, closing", Self::CANCEL);
                }
                self.running = false;
                KeyAction::Cancelled
            }
            _ => KeyAction::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        assert!(Controls::default().running());
    }

    #[test]
    fn cancel_press_stops_once() {
        let mut controls = Controls::default();

        assert_eq!(controls.handle(KeyEvent::pressed(Key::Escape)), KeyAction::Cancelled);
        assert!(!controls.running());

        // Release and a second press leave it stopped.
        assert_eq!(controls.handle(KeyEvent::released(Key::Escape)), KeyAction::Ignored);
        controls.handle(KeyEvent::pressed(Key::Escape));
        assert!(!controls.running());
    }

    #[test]
    fn cancel_repeat_is_ignored() {
        let mut controls = Controls::default();
        let repeat = KeyEvent { repeat: true, ..KeyEvent::pressed(Key::Escape) };

        assert_eq!(controls.handle(repeat), KeyAction::Ignored);
        assert!(controls.running());
    }

    #[test]
    fn announced_keys_do_not_stop() {
        let mut controls = Controls::default();

        assert_eq!(
            controls.handle(KeyEvent::pressed(Key::Space)),
            KeyAction::Announced(Key::Space)
        );
        assert_eq!(controls.handle(KeyEvent::pressed(Key::A)), KeyAction::Announced(Key::A));
        assert_eq!(controls.handle(KeyEvent::released(Key::A)), KeyAction::Ignored);
        assert_eq!(controls.handle(KeyEvent::pressed(Key::Q)), KeyAction::Ignored);
        assert!(controls.running());
    }
}
