//! Normalized input events so menu logic never depends on a terminal backend.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// A key press, normalized to the names the menu understands.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Enter,
    Esc,
    Tab,
    Backspace,
    /// Control chord, lower-cased (`ctrl+c` is `Ctrl('c')`).
    Ctrl(char),
    /// Any other named key (`f1`, `home`, ...).
    Other(String),
}

impl Key {
    /// Parse a normalized key name such as `left`, `enter`, `esc`, `ctrl+c`, or `x`.
    pub fn from_name(name: &str) -> Option<Self> {
        let mut chars = name.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            return Some(Self::Char(ch));
        }
        let lower = name.to_lowercase();
        let key = match lower.as_str() {
            "" => return None,
            "up" => Self::Up,
            "down" => Self::Down,
            "left" => Self::Left,
            "right" => Self::Right,
            "enter" | "return" => Self::Enter,
            "esc" | "escape" => Self::Esc,
            "tab" => Self::Tab,
            "backspace" => Self::Backspace,
            "space" => Self::Char(' '),
            other => match other.strip_prefix("ctrl+").map(|rest| {
                let mut rest = rest.chars();
                (rest.next(), rest.next())
            }) {
                Some((Some(ch), None)) => Self::Ctrl(ch),
                _ => Self::Other(other.to_string()),
            },
        };
        Some(key)
    }

    /// Convert a crossterm key event; releases and unnamed keys yield `None`.
    pub fn from_crossterm(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        let key = match event.code {
            KeyCode::Char(ch) if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Self::Ctrl(ch.to_ascii_lowercase())
            }
            KeyCode::Char(ch) => Self::Char(ch),
            KeyCode::Up => Self::Up,
            KeyCode::Down => Self::Down,
            KeyCode::Left => Self::Left,
            KeyCode::Right => Self::Right,
            KeyCode::Enter => Self::Enter,
            KeyCode::Esc => Self::Esc,
            KeyCode::Tab => Self::Tab,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::BackTab => Self::Other("shift+tab".into()),
            KeyCode::Home => Self::Other("home".into()),
            KeyCode::End => Self::Other("end".into()),
            KeyCode::PageUp => Self::Other("pgup".into()),
            KeyCode::PageDown => Self::Other("pgdown".into()),
            KeyCode::Delete => Self::Other("delete".into()),
            KeyCode::Insert => Self::Other("insert".into()),
            KeyCode::F(n) => Self::Other(format!("f{n}")),
            _ => return None,
        };
        Some(key)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Char(' ') => write!(f, "space"),
            Self::Char(ch) => write!(f, "{ch}"),
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
            Self::Enter => write!(f, "enter"),
            Self::Esc => write!(f, "esc"),
            Self::Tab => write!(f, "tab"),
            Self::Backspace => write!(f, "backspace"),
            Self::Ctrl(ch) => write!(f, "ctrl+{ch}"),
            Self::Other(name) => write!(f, "{name}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Press,
    Release,
    Motion,
}

/// Pointer event at a 0-based cell, relative to the bar's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub column: usize,
    pub row: usize,
    pub kind: PointerKind,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, column: usize, row: usize) -> Self {
        Self { column, row, kind }
    }

    pub fn press(column: usize, row: usize) -> Self {
        Self::new(PointerKind::Press, column, row)
    }

    pub fn release(column: usize, row: usize) -> Self {
        Self::new(PointerKind::Release, column, row)
    }

    pub fn motion(column: usize, row: usize) -> Self {
        Self::new(PointerKind::Motion, column, row)
    }

    /// Convert a crossterm mouse event. Only the left button and plain motion are used.
    pub fn from_crossterm(event: &MouseEvent) -> Option<Self> {
        let kind = match event.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerKind::Press,
            MouseEventKind::Up(MouseButton::Left) => PointerKind::Release,
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                PointerKind::Motion
            }
            _ => return None,
        };
        Some(Self::new(
            kind,
            usize::from(event.column),
            usize::from(event.row),
        ))
    }
}

/// Discrete input the menu reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    Pointer(PointerEvent),
}

impl InputEvent {
    /// Shorthand for a key event parsed from its normalized name.
    pub fn key(name: &str) -> Option<Self> {
        Key::from_name(name).map(Self::Key)
    }

    pub fn from_crossterm(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) => Key::from_crossterm(key).map(Self::Key),
            Event::Mouse(mouse) => PointerEvent::from_crossterm(mouse).map(Self::Pointer),
            _ => None,
        }
    }
}

impl From<Key> for InputEvent {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    #[test]
    fn key_from_name_reads_normalized_names() {
        assert_eq!(Key::from_name("left"), Some(Key::Left));
        assert_eq!(Key::from_name("ENTER"), Some(Key::Enter));
        assert_eq!(Key::from_name("esc"), Some(Key::Esc));
        assert_eq!(Key::from_name("ctrl+c"), Some(Key::Ctrl('c')));
        assert_eq!(Key::from_name("F"), Some(Key::Char('F')));
        assert_eq!(Key::from_name("f5"), Some(Key::Other("f5".into())));
        assert_eq!(Key::from_name(""), None);
    }

    #[test]
    fn key_display_matches_name() {
        for name in ["up", "down", "left", "right", "enter", "esc", "ctrl+x", "q", "space"] {
            let key = Key::from_name(name).expect("valid key name");
            assert_eq!(key.to_string(), name);
        }
    }

    #[test]
    fn crossterm_keys_normalize() {
        let plain = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(Key::from_crossterm(&plain), Some(Key::Char('x')));

        let ctrl = KeyEvent::new(KeyCode::Char('C'), KeyModifiers::CONTROL);
        assert_eq!(Key::from_crossterm(&ctrl), Some(Key::Ctrl('c')));

        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(Key::from_crossterm(&release), None);
    }

    #[test]
    fn crossterm_mouse_maps_left_button_only() {
        let event = |kind| MouseEvent {
            kind,
            column: 7,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            PointerEvent::from_crossterm(&event(MouseEventKind::Down(MouseButton::Left))),
            Some(PointerEvent::press(7, 2))
        );
        assert_eq!(
            PointerEvent::from_crossterm(&event(MouseEventKind::Up(MouseButton::Left))),
            Some(PointerEvent::release(7, 2))
        );
        assert_eq!(
            PointerEvent::from_crossterm(&event(MouseEventKind::Moved)),
            Some(PointerEvent::motion(7, 2))
        );
        assert_eq!(
            PointerEvent::from_crossterm(&event(MouseEventKind::Down(MouseButton::Right))),
            None
        );
        assert_eq!(
            PointerEvent::from_crossterm(&event(MouseEventKind::ScrollDown)),
            None
        );
    }
}
