//! Menu navigation state so the bar and every open dropdown route input consistently.
//!
//! A [`MenuNode`] is one menu level. It owns at most one open child, so the open
//! dropdowns always form a single chain hanging off the bar. Closing a level drops its
//! child outright; a parent notices an inactive child on the next event and discards it.

use std::sync::Arc;

use tracing::debug;

use crate::input::{InputEvent, Key};
use crate::theme::MenuStyles;

use super::entry::{MenuCommand, MenuEntry};

/// The open submenu of a node. Index and child live together so one never exists
/// without the other.
#[derive(Debug, Clone)]
pub(super) struct OpenChild {
    pub(super) index: usize,
    pub(super) node: Box<MenuNode>,
}

/// One level of the menu: the bar itself or an open dropdown.
#[derive(Debug, Clone)]
pub struct MenuNode {
    pub(super) entries: Arc<[MenuEntry]>,
    pub(super) active: bool,
    pub(super) selection: usize,
    pub(super) open: Option<OpenChild>,
    pub(super) dropdown: bool,
    pub(super) styles: Arc<MenuStyles>,
}

impl MenuNode {
    /// Build the root bar.
    pub fn new(
        entries: impl Into<Arc<[MenuEntry]>>,
        styles: impl Into<Arc<MenuStyles>>,
        start_active: bool,
    ) -> Self {
        let entries = entries.into();
        Self {
            selection: first_selectable(&entries),
            entries,
            active: start_active,
            open: None,
            dropdown: false,
            styles: styles.into(),
        }
    }

    fn dropdown(entries: Arc<[MenuEntry]>, styles: Arc<MenuStyles>) -> Self {
        Self {
            selection: first_selectable(&entries),
            entries,
            active: true,
            open: None,
            dropdown: true,
            styles,
        }
    }

    /// Apply one input event and return the next state plus any requested side effect.
    pub fn update(mut self, event: &InputEvent) -> (Self, Option<MenuCommand>) {
        let command = match event {
            InputEvent::Pointer(pointer) => self.handle_pointer(pointer),
            InputEvent::Key(key) => self.handle_key(key),
        };
        (self, command)
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn styles(&self) -> &MenuStyles {
        &self.styles
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_dropdown(&self) -> bool {
        self.dropdown
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_entry(&self) -> Option<&MenuEntry> {
        self.entries.get(self.selection)
    }

    pub fn open_child_index(&self) -> Option<usize> {
        self.open.as_ref().map(|open| open.index)
    }

    pub fn child(&self) -> Option<&MenuNode> {
        self.open.as_ref().map(|open| open.node.as_ref())
    }

    pub fn has_open_child(&self) -> bool {
        self.open.is_some()
    }

    /// Number of open dropdowns below this level.
    pub fn depth(&self) -> usize {
        self.child().map_or(0, |child| 1 + child.depth())
    }

    /// Give the bar keyboard focus.
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Drop focus and collapse every open dropdown.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.close_child();
    }

    pub fn set_active(&mut self, active: bool) {
        if active {
            self.activate();
        } else {
            self.deactivate();
        }
    }

    pub(super) fn handle_key(&mut self, key: &Key) -> Option<MenuCommand> {
        if !self.active {
            return None;
        }

        if self.open.is_some() {
            if let Some(delta) = self.bar_switch_delta(key) {
                self.move_selection(delta);
                self.open_selected();
                return None;
            }
            return self.delegate_key(key);
        }

        if let Key::Char(pressed) = key {
            if let Some(index) = self.find_hotkey(*pressed) {
                return self.activate_entry(index);
            }
        }

        match key {
            Key::Left if self.dropdown => self.close_self(),
            Key::Left => self.move_selection(-1),
            Key::Right if self.dropdown => {
                if self.selected_entry().is_some_and(MenuEntry::has_submenu) {
                    self.open_submenu(self.selection);
                }
            }
            Key::Right => self.move_selection(1),
            Key::Up if self.dropdown => self.move_selection(-1),
            Key::Down if self.dropdown => self.move_selection(1),
            Key::Down => self.open_submenu(self.selection),
            Key::Enter => return self.activate_entry(self.selection),
            Key::Esc if self.dropdown => self.close_self(),
            Key::Esc => self.close_child(),
            _ => {}
        }
        None
    }

    /// On the bar with a dropdown open, left/right switch sibling menus unless the open
    /// chain wants the key for itself.
    fn bar_switch_delta(&self, key: &Key) -> Option<isize> {
        if self.dropdown {
            return None;
        }
        let child = &self.open.as_ref()?.node;
        match key {
            Key::Left if !child.has_open_child() => Some(-1),
            Key::Right if !child.wants_right() => Some(1),
            _ => None,
        }
    }

    fn delegate_key(&mut self, key: &Key) -> Option<MenuCommand> {
        let open = self.open.as_mut()?;
        let command = open.node.handle_key(key);
        if !open.node.active {
            debug!(index = open.index, "dropdown closed");
            self.open = None;
        }
        command
    }

    /// Whether `right` should drill into a submenu somewhere down the open chain.
    pub(crate) fn wants_right(&self) -> bool {
        match &self.open {
            Some(open) => open.node.wants_right(),
            None => self
                .selected_entry()
                .is_some_and(|entry| entry.is_selectable() && entry.has_submenu()),
        }
    }

    /// Exact case match first, then a case-insensitive pass. First match wins.
    fn find_hotkey(&self, pressed: char) -> Option<usize> {
        let find = |exact| {
            self.entries
                .iter()
                .position(|entry| entry.hotkey_matches(pressed, exact))
        };
        find(true).or_else(|| find(false))
    }

    /// Select `index` and either open its submenu or return its command.
    pub(super) fn activate_entry(&mut self, index: usize) -> Option<MenuCommand> {
        let entries = Arc::clone(&self.entries);
        let entry = entries.get(index)?;
        if !entry.is_selectable() {
            return None;
        }
        self.selection = index;
        if entry.has_submenu() {
            self.open_submenu(index);
            return None;
        }
        let command = entry.action.clone();
        if let Some(command) = &command {
            debug!(label = %entry.label, ?command, "menu command");
        }
        command
    }

    /// Replace any open child with the submenu of `index`.
    pub(super) fn open_submenu(&mut self, index: usize) {
        let Some(entry) = self.entries.get(index) else {
            return;
        };
        if !entry.is_selectable() || !entry.has_submenu() {
            return;
        }
        let child = MenuNode::dropdown(Arc::clone(&entry.submenu), Arc::clone(&self.styles));
        debug!(index, label = %entry.label, "submenu opened");
        self.open = Some(OpenChild {
            index,
            node: Box::new(child),
        });
    }

    /// Follow the selection: open its submenu, or close the open one if it has none.
    pub(super) fn open_selected(&mut self) {
        if self.selected_entry().is_some_and(MenuEntry::has_submenu) {
            self.open_submenu(self.selection);
        } else {
            self.close_child();
        }
    }

    pub(super) fn close_child(&mut self) {
        if let Some(open) = self.open.take() {
            debug!(index = open.index, "submenu closed");
        }
    }

    fn close_self(&mut self) {
        self.active = false;
        self.close_child();
    }

    /// Step the selection by `delta` with wraparound, skipping separators and disabled
    /// entries. Gives up after one full cycle, leaving the selection untouched.
    pub(super) fn move_selection(&mut self, delta: isize) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        let start = self.selection.min(len - 1);
        let mut index = start;
        loop {
            index = (index as isize + delta).rem_euclid(len as isize) as usize;
            if self.entries[index].is_selectable() {
                self.selection = index;
                return;
            }
            if index == start {
                return;
            }
        }
    }
}

fn first_selectable(entries: &[MenuEntry]) -> usize {
    entries
        .iter()
        .position(MenuEntry::is_selectable)
        .unwrap_or(0)
}
