//! Menu entry data so the bar, dropdowns, and host configuration share one schema.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Side effect requested by an activated entry. The host decides what it means.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCommand {
    /// Application-defined token.
    Custom(String),
    /// Well-known request to close the application.
    Quit,
}

impl MenuCommand {
    pub fn custom(token: impl Into<String>) -> Self {
        Self::Custom(token.into())
    }
}

/// One menu item or separator. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotkey: Option<char>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<MenuCommand>,
    #[serde(default = "no_entries", skip_serializing_if = "is_empty")]
    pub submenu: Arc<[MenuEntry]>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub separator: bool,
}

fn no_entries() -> Arc<[MenuEntry]> {
    Arc::from(Vec::new())
}

fn is_empty(entries: &Arc<[MenuEntry]>) -> bool {
    entries.is_empty()
}

impl MenuEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hotkey: None,
            shortcut: None,
            action: None,
            submenu: no_entries(),
            disabled: false,
            separator: false,
        }
    }

    /// A horizontal rule in a dropdown (a divider glyph on the bar).
    pub fn separator() -> Self {
        Self {
            separator: true,
            ..Self::new("")
        }
    }

    #[must_use]
    pub fn hotkey(mut self, key: char) -> Self {
        self.hotkey = Some(key);
        self
    }

    #[must_use]
    pub fn shortcut(mut self, hint: impl Into<String>) -> Self {
        self.shortcut = Some(hint.into());
        self
    }

    /// Emit `MenuCommand::Custom(token)` when activated.
    #[must_use]
    pub fn action(self, token: impl Into<String>) -> Self {
        self.command(MenuCommand::custom(token))
    }

    /// Emit `MenuCommand::Quit` when activated.
    #[must_use]
    pub fn quit(self) -> Self {
        self.command(MenuCommand::Quit)
    }

    #[must_use]
    pub fn command(mut self, command: MenuCommand) -> Self {
        self.action = Some(command);
        self
    }

    #[must_use]
    pub fn submenu(mut self, entries: Vec<MenuEntry>) -> Self {
        self.submenu = Arc::from(entries);
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Separators and disabled entries can never hold the selection.
    pub fn is_selectable(&self) -> bool {
        !self.separator && !self.disabled
    }

    pub fn has_submenu(&self) -> bool {
        !self.submenu.is_empty()
    }

    /// Whether a pressed character triggers this entry's hotkey.
    pub(crate) fn hotkey_matches(&self, pressed: char, exact: bool) -> bool {
        if !self.is_selectable() {
            return false;
        }
        match self.hotkey {
            Some(hotkey) if exact => hotkey == pressed,
            Some(hotkey) => hotkey.to_lowercase().eq(pressed.to_lowercase()),
            None => false,
        }
    }
}

/// Parse a menu tree from JSON (an array of entries).
pub fn entries_from_json(json: &str) -> serde_json::Result<Arc<[MenuEntry]>> {
    let entries: Vec<MenuEntry> = serde_json::from_str(json)?;
    Ok(Arc::from(entries))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separators_and_disabled_entries_are_not_selectable() {
        assert!(MenuEntry::new("Open").is_selectable());
        assert!(!MenuEntry::separator().is_selectable());
        assert!(!MenuEntry::new("Paste").disabled(true).is_selectable());
    }

    #[test]
    fn hotkey_matching_is_exact_or_case_folded() {
        let entry = MenuEntry::new("Open").hotkey('O');
        assert!(entry.hotkey_matches('O', true));
        assert!(!entry.hotkey_matches('o', true));
        assert!(entry.hotkey_matches('o', false));
        assert!(!MenuEntry::new("Cut").hotkey('t').disabled(true).hotkey_matches('t', true));
    }

    #[test]
    fn entries_from_json_reads_nested_menus() {
        let json = r#"[
            {"label": "File", "hotkey": "F", "submenu": [
                {"label": "New", "hotkey": "n", "shortcut": "^N", "action": {"custom": "new"}},
                {"separator": true},
                {"label": "Exit", "action": "quit"}
            ]},
            {"label": "Help", "disabled": true}
        ]"#;
        let entries = entries_from_json(json).expect("valid menu json");
        assert_eq!(entries.len(), 2);
        let file = &entries[0];
        assert_eq!(file.hotkey, Some('F'));
        assert_eq!(file.submenu.len(), 3);
        assert_eq!(file.submenu[0].action, Some(MenuCommand::custom("new")));
        assert!(file.submenu[1].separator);
        assert_eq!(file.submenu[2].action, Some(MenuCommand::Quit));
        assert!(entries[1].disabled);
    }

    #[test]
    fn entries_from_json_rejects_multi_char_hotkeys() {
        assert!(entries_from_json(r#"[{"label": "File", "hotkey": "Fi"}]"#).is_err());
    }
}
