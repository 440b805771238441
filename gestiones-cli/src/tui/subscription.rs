//! Subscriptions: external inputs an app listens to, declared from state.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single input source the app currently wants delivered as messages.
pub enum Subscription<Msg> {
    /// A key chord mapped to one message. The label feeds help lines.
    Keyboard {
        code: KeyCode,
        modifiers: KeyModifiers,
        label: &'static str,
        msg: Msg,
    },
    /// Catch-all key handler, tried after every explicit chord.
    Keys(fn(KeyEvent) -> Option<Msg>),
    /// A periodic timer, keyed by `id`. The runtime spawns the timer when the
    /// id first appears in the subscription set and aborts it when the id
    /// disappears, so cancellation follows state transitions.
    Interval {
        id: &'static str,
        period: Duration,
        msg: Msg,
    },
}

impl<Msg> Subscription<Msg> {
    pub fn keyboard(code: KeyCode, label: &'static str, msg: Msg) -> Self {
        Self::Keyboard {
            code,
            modifiers: KeyModifiers::NONE,
            label,
            msg,
        }
    }

    pub fn ctrl(code: KeyCode, label: &'static str, msg: Msg) -> Self {
        Self::Keyboard {
            code,
            modifiers: KeyModifiers::CONTROL,
            label,
            msg,
        }
    }

    pub fn keys(handler: fn(KeyEvent) -> Option<Msg>) -> Self {
        Self::Keys(handler)
    }

    pub fn interval(id: &'static str, period: Duration, msg: Msg) -> Self {
        Self::Interval { id, period, msg }
    }
}

/// Whether a pressed key matches a declared chord. SHIFT is ignored for
/// non-character codes (terminals report Shift+Tab as BackTab+SHIFT).
pub fn chord_matches(code: KeyCode, modifiers: KeyModifiers, key: &KeyEvent) -> bool {
    if key.code != code {
        return false;
    }
    let pressed = if matches!(code, KeyCode::Char(_)) {
        key.modifiers
    } else {
        key.modifiers.difference(KeyModifiers::SHIFT)
    };
    pressed == modifiers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_matches_plain_key() {
        let key = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert!(chord_matches(KeyCode::Enter, KeyModifiers::NONE, &key));
        assert!(!chord_matches(KeyCode::Esc, KeyModifiers::NONE, &key));
    }

    #[test]
    fn test_chord_matches_ctrl() {
        let key = KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert!(chord_matches(KeyCode::Char('r'), KeyModifiers::CONTROL, &key));
        assert!(!chord_matches(KeyCode::Char('r'), KeyModifiers::NONE, &key));
    }

    #[test]
    fn test_back_tab_shift_is_ignored() {
        let key = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert!(chord_matches(KeyCode::BackTab, KeyModifiers::NONE, &key));
    }
}
