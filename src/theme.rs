//! Style configuration for the menu bar and its dropdowns.
//!
//! [`MenuStyles`] is read-only once built and shared by every node in an open chain.
//! [`Theme`] provides named presets that can be selected by name from a host CLI.

use crate::style::{Color, Style, BORDER_ASCII, BORDER_HEAVY, BORDER_ROUNDED, BORDER_SINGLE};

/// Every style the menu draws with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuStyles {
    /// Whole bar, including the spacer and right-side segment.
    pub bar: Style,
    /// Bar item.
    pub item: Style,
    /// Highlighted bar item while the bar is active.
    pub selected_item: Style,
    /// Shortcut hint in a dropdown row.
    pub shortcut: Style,
    /// Shortcut hint in the selected dropdown row.
    pub shortcut_selected: Style,
    /// Dropdown container (border and padding).
    pub dropdown: Style,
    /// Dropdown row.
    pub dropdown_item: Style,
    /// Selected dropdown row.
    pub dropdown_selected: Style,
    /// Disabled row, in the bar or a dropdown.
    pub disabled_item: Style,
    /// Separator rule inside a dropdown.
    pub separator: Style,
    /// Hotkey emphasis, layered over the row's own style.
    pub hotkey: Style,
}

impl Default for MenuStyles {
    fn default() -> Self {
        Theme::Violet.styles()
    }
}

/// Available style presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Violet bar with pink selection (truecolor)
    #[default]
    Violet,
    /// Nord - arctic blue-gray with rounded dropdowns (truecolor)
    Nord,
    /// 16-color fallback for older terminals, heavy dropdown frames
    Mono,
    /// No colors, ASCII borders
    Plain,
}

impl Theme {
    /// Parse theme name from string.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "violet" | "default" => Some(Self::Violet),
            "nord" => Some(Self::Nord),
            "mono" | "ansi" | "ansi16" => Some(Self::Mono),
            "plain" | "none" => Some(Self::Plain),
            _ => None,
        }
    }

    /// List all available theme names.
    pub fn available() -> &'static [&'static str] {
        &["violet", "nord", "mono", "plain"]
    }

    /// Build the style configuration for this theme.
    pub fn styles(&self) -> MenuStyles {
        match self {
            Self::Violet => violet(),
            Self::Nord => nord(),
            Self::Mono => mono(),
            Self::Plain => plain(),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Violet => write!(f, "violet"),
            Self::Nord => write!(f, "nord"),
            Self::Mono => write!(f, "mono"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

fn violet() -> MenuStyles {
    let bar_bg = Color::Rgb(0x5f, 0x00, 0xff);
    let white = Color::Rgb(0xff, 0xff, 0xff);
    MenuStyles {
        bar: Style::new().bg(bar_bg).fg(white),
        item: Style::new().padding(0, 1).bg(bar_bg).fg(white),
        selected_item: Style::new()
            .padding(0, 1)
            .bg(Color::Rgb(0xff, 0x5f, 0xaf))
            .fg(white),
        shortcut: Style::new().fg(Color::Rgb(0x66, 0x66, 0x66)),
        shortcut_selected: Style::new().fg(Color::Rgb(0x11, 0x11, 0x11)),
        dropdown: Style::new()
            .border(BORDER_SINGLE)
            .border_fg(Color::Rgb(0x5f, 0x5f, 0xd7)),
        dropdown_item: Style::new()
            .padding(0, 1)
            .fg(Color::Rgb(0xcc, 0xcc, 0xcc)),
        dropdown_selected: Style::new()
            .padding(0, 1)
            .bg(Color::Rgb(0x66, 0x66, 0x66)),
        disabled_item: Style::new()
            .padding(0, 1)
            .fg(Color::Rgb(0x58, 0x58, 0x58)),
        separator: Style::new().fg(Color::Rgb(0x5f, 0x5f, 0xd7)),
        hotkey: Style::new().underline(true),
    }
}

fn nord() -> MenuStyles {
    let polar = Color::Rgb(0x3b, 0x42, 0x52);
    let snow = Color::Rgb(0xec, 0xef, 0xf4);
    let frost = Color::Rgb(0x88, 0xc0, 0xd0);
    MenuStyles {
        bar: Style::new().bg(polar).fg(snow),
        item: Style::new().padding(0, 1).bg(polar).fg(snow),
        selected_item: Style::new()
            .padding(0, 1)
            .bg(frost)
            .fg(Color::Rgb(0x2e, 0x34, 0x40)),
        shortcut: Style::new().fg(Color::Rgb(0x81, 0xa1, 0xc1)),
        shortcut_selected: Style::new().fg(Color::Rgb(0x2e, 0x34, 0x40)),
        dropdown: Style::new().border(BORDER_ROUNDED).border_fg(frost),
        dropdown_item: Style::new().padding(0, 1).fg(snow),
        dropdown_selected: Style::new()
            .padding(0, 1)
            .bg(Color::Rgb(0x43, 0x4c, 0x5e))
            .bold(true),
        disabled_item: Style::new()
            .padding(0, 1)
            .fg(Color::Rgb(0x4c, 0x56, 0x6a)),
        separator: Style::new().fg(Color::Rgb(0x4c, 0x56, 0x6a)),
        hotkey: Style::new().underline(true).fg(Color::Rgb(0xeb, 0xcb, 0x8b)),
    }
}

fn mono() -> MenuStyles {
    MenuStyles {
        bar: Style::new().bg(Color::Ansi(4)).fg(Color::Ansi(15)),
        item: Style::new().padding(0, 1).bg(Color::Ansi(4)).fg(Color::Ansi(15)),
        selected_item: Style::new().padding(0, 1).reverse(true),
        shortcut: Style::new().fg(Color::Ansi(8)),
        shortcut_selected: Style::new().fg(Color::Ansi(0)),
        dropdown: Style::new().border(BORDER_HEAVY).border_fg(Color::Ansi(12)),
        dropdown_item: Style::new().padding(0, 1),
        dropdown_selected: Style::new().padding(0, 1).reverse(true),
        disabled_item: Style::new().padding(0, 1).faint(true),
        separator: Style::new().fg(Color::Ansi(8)),
        hotkey: Style::new().underline(true),
    }
}

fn plain() -> MenuStyles {
    MenuStyles {
        bar: Style::new(),
        item: Style::new().padding(0, 1),
        selected_item: Style::new().padding(0, 1),
        shortcut: Style::new(),
        shortcut_selected: Style::new(),
        dropdown: Style::new().border(BORDER_ASCII),
        dropdown_item: Style::new().padding(0, 1),
        dropdown_selected: Style::new().padding(0, 1),
        disabled_item: Style::new().padding(0, 1),
        separator: Style::new(),
        hotkey: Style::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_from_name_parses_valid() {
        assert_eq!(Theme::from_name("violet"), Some(Theme::Violet));
        assert_eq!(Theme::from_name("default"), Some(Theme::Violet));
        assert_eq!(Theme::from_name("NORD"), Some(Theme::Nord));
        assert_eq!(Theme::from_name("ansi16"), Some(Theme::Mono));
        assert_eq!(Theme::from_name("none"), Some(Theme::Plain));
    }

    #[test]
    fn theme_from_name_rejects_invalid() {
        assert_eq!(Theme::from_name("invalid"), None);
        assert_eq!(Theme::from_name(""), None);
    }

    #[test]
    fn theme_display_round_trips_available_names() {
        for name in Theme::available() {
            let theme = Theme::from_name(name).expect("listed theme parses");
            assert_eq!(theme.to_string(), *name);
        }
    }

    #[test]
    fn every_theme_frames_dropdowns_and_pads_items() {
        for name in Theme::available() {
            let styles = Theme::from_name(name).unwrap().styles();
            assert_eq!(styles.dropdown.frame_size(), (2, 2), "{name}");
            assert_eq!(styles.item.horizontal_frame_size(), 2, "{name}");
            assert_eq!(styles.bar.horizontal_frame_size(), 0, "{name}");
        }
    }

    #[test]
    fn plain_theme_emits_no_escape_codes() {
        let styles = Theme::Plain.styles();
        assert!(!styles.selected_item.render("File").contains('\x1b'));
        assert!(!styles.dropdown.render("x").contains('\x1b'));
    }
}
