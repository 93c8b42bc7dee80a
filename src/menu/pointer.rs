//! Pointer hit-testing against the geometry the renderer draws.
//!
//! The deepest open dropdown is tested first so an overlapping child always wins over
//! its parent. Coordinates are relative to the bar's top-left corner.

use std::sync::Arc;

use tracing::debug;

use crate::input::{PointerEvent, PointerKind};

use super::entry::MenuCommand;
use super::node::MenuNode;

/// Outcome of testing one level of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Hit {
    /// Outside this level and all of its descendants.
    Miss,
    /// Inside the menu; nothing further to report.
    Absorbed,
    Command(MenuCommand),
}

impl MenuNode {
    pub(super) fn handle_pointer(&mut self, event: &PointerEvent) -> Option<MenuCommand> {
        match self.hit_test(event, 0, 0) {
            Hit::Miss => {
                if event.kind == PointerKind::Release && (self.active || self.has_open_child()) {
                    debug!(column = event.column, row = event.row, "release outside menu");
                    self.deactivate();
                }
                None
            }
            Hit::Absorbed => None,
            Hit::Command(command) => {
                debug!(?command, "menu command");
                Some(command)
            }
        }
    }

    fn hit_test(&mut self, event: &PointerEvent, x: usize, y: usize) -> Hit {
        if let Some(index) = self.open_child_index() {
            let (child_x, child_y) = self.child_origin(index, x, y);
            if let Some(open) = self.open.as_mut() {
                let hit = open.node.hit_test(event, child_x, child_y);
                if hit != Hit::Miss {
                    return hit;
                }
            }
        }
        if self.dropdown {
            self.hit_dropdown(event, x, y)
        } else {
            self.hit_bar(event, x, y)
        }
    }

    fn hit_bar(&mut self, event: &PointerEvent, x: usize, y: usize) -> Hit {
        if !(y..y + self.bar_height()).contains(&event.row) {
            return Hit::Miss;
        }
        let mut left = x + self.styles.bar.left_frame_size();
        for index in 0..self.entries.len() {
            let width = self.item_width(index);
            if (left..left + width).contains(&event.column) {
                return self.press_bar_item(index, event.kind);
            }
            left += width;
        }
        // Spacer and right-hand segment still belong to the bar.
        Hit::Absorbed
    }

    fn press_bar_item(&mut self, index: usize, kind: PointerKind) -> Hit {
        let entries = Arc::clone(&self.entries);
        let entry = &entries[index];
        if !entry.is_selectable() {
            return Hit::Absorbed;
        }
        match kind {
            PointerKind::Press | PointerKind::Motion => {
                self.selection = index;
                if self.active && self.open_child_index().is_some_and(|open| open != index) {
                    self.open_selected();
                }
            }
            PointerKind::Release => {
                self.selection = index;
                self.active = true;
                if entry.has_submenu() {
                    self.toggle_submenu(index);
                } else {
                    self.close_child();
                    if let Some(command) = entry.action.clone() {
                        return Hit::Command(command);
                    }
                }
            }
        }
        Hit::Absorbed
    }

    fn hit_dropdown(&mut self, event: &PointerEvent, x: usize, y: usize) -> Hit {
        let size = self.dropdown_size();
        let inside = (x..x + size.width).contains(&event.column)
            && (y..y + size.height).contains(&event.row);
        if !inside {
            return Hit::Miss;
        }
        let frame = &self.styles.dropdown;
        let left = x + frame.left_frame_size();
        let right = x + size.width - (frame.horizontal_frame_size() - frame.left_frame_size());
        if !(left..right).contains(&event.column) {
            return Hit::Absorbed;
        }
        let Some(index) = self.entry_at_row(event.row - y) else {
            return Hit::Absorbed;
        };
        let entries = Arc::clone(&self.entries);
        let entry = &entries[index];
        if !entry.is_selectable() {
            return Hit::Absorbed;
        }
        self.selection = index;
        match event.kind {
            PointerKind::Press | PointerKind::Motion => {
                if self.open_child_index().is_some_and(|open| open != index) {
                    self.close_child();
                }
            }
            PointerKind::Release => {
                if entry.has_submenu() {
                    self.toggle_submenu(index);
                } else if let Some(command) = entry.action.clone() {
                    return Hit::Command(command);
                }
            }
        }
        Hit::Absorbed
    }

    fn toggle_submenu(&mut self, index: usize) {
        if self.open_child_index() == Some(index) {
            self.close_child();
        } else {
            self.open_submenu(index);
        }
    }
}
