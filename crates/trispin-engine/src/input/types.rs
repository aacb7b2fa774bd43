use std::fmt;

/// Keyboard key identifier (physical position, US layout names).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    /// Any key not listed above, carrying the platform key code.
    Unknown(u32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Unknown(code) => write!(f, "Unknown({code})"),
            other => write!(f, "{other:?}"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A single key transition delivered to the application.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
    /// True when the OS generated this press by holding the key down.
    pub repeat: bool,
}

impl KeyEvent {
    pub fn pressed(key: Key) -> Self {
        Self { key, state: KeyState::Pressed, repeat: false }
    }

    pub fn released(key: Key) -> Self {
        Self { key, state: KeyState::Released, repeat: false }
    }

    /// True for the initial press only (not auto-repeat, not release).
    pub fn is_fresh_press(&self) -> bool {
        self.state == KeyState::Pressed && !self.repeat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_press_excludes_repeat_and_release() {
        assert!(KeyEvent::pressed(Key::Space).is_fresh_press());
        assert!(!KeyEvent::released(Key::Space).is_fresh_press());

        let repeat = KeyEvent { repeat: true, ..KeyEvent::pressed(Key::Space) };
        assert!(!repeat.is_fresh_press());
    }

    #[test]
    fn display_names() {
        assert_eq!(Key::Escape.to_string(), "Escape");
        assert_eq!(Key::Unknown(7).to_string(), "Unknown(7)");
    }
}
