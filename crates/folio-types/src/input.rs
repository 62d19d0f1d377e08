//! Platform-agnostic input events.
//!
//! The host backend maps its native key input to these variants. The
//! session state machine never sees raw bytes or escape sequences.

use serde::{Deserialize, Serialize};

/// A key-level event consumed by the terminal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// Printable character appended to the input buffer.
    TextInput(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Submit the current input buffer (Enter).
    Submit,
    /// Recall the previous history entry (Up arrow).
    HistoryPrev,
    /// Recall the next history entry (Down arrow).
    HistoryNext,
    /// Complete the current input against the command registry (Tab).
    Complete,
    /// Dismiss the suggestion list (Escape).
    DismissSuggestions,
    /// Clear the screen without touching history (Ctrl+L).
    ClearScreen,
    /// Quit the host application (Ctrl+C / Ctrl+D).
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_ascii() {
        let e = InputEvent::TextInput('h');
        assert_eq!(e, InputEvent::TextInput('h'));
        assert_ne!(e, InputEvent::TextInput('H'));
    }

    #[test]
    fn text_input_unicode() {
        let e = InputEvent::TextInput('日');
        if let InputEvent::TextInput(ch) = e {
            assert_eq!(ch, '日');
        } else {
            panic!("wrong variant");
        }
    }

    #[test]
    fn event_clone_and_copy() {
        let e = InputEvent::Submit;
        let e2 = e;
        assert_eq!(e, e2);
    }

    #[test]
    fn event_debug_format() {
        assert_eq!(format!("{:?}", InputEvent::Complete), "Complete");
        assert_eq!(format!("{:?}", InputEvent::ClearScreen), "ClearScreen");
    }

    #[test]
    fn event_hash_distinct() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(InputEvent::HistoryPrev);
        set.insert(InputEvent::HistoryNext);
        set.insert(InputEvent::HistoryPrev);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn event_serde_roundtrip() {
        let events = [
            InputEvent::TextInput('x'),
            InputEvent::Backspace,
            InputEvent::Submit,
            InputEvent::HistoryPrev,
            InputEvent::HistoryNext,
            InputEvent::Complete,
            InputEvent::DismissSuggestions,
            InputEvent::ClearScreen,
            InputEvent::Quit,
        ];
        for e in events {
            let json = serde_json::to_string(&e).unwrap();
            let back: InputEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(e, back);
        }
    }

    #[test]
    fn all_event_variants_distinct() {
        let events = [
            InputEvent::TextInput('x'),
            InputEvent::Backspace,
            InputEvent::Submit,
            InputEvent::HistoryPrev,
            InputEvent::HistoryNext,
            InputEvent::Complete,
            InputEvent::DismissSuggestions,
            InputEvent::ClearScreen,
            InputEvent::Quit,
        ];
        for (i, a) in events.iter().enumerate() {
            for (j, b) in events.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "variants {i} and {j} should differ");
                }
            }
        }
    }
}
