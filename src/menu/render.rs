//! Geometry and drawing for the bar and its dropdowns.
//!
//! Every size here is measured from text rendered with the style that is actually drawn,
//! and hit-testing reuses the same functions, so what the pointer hits is what is on screen.

use crate::ansi::{display_width, measure, pad_display, Size};
use crate::overlay::composite;
use crate::style::Style;

use super::entry::MenuEntry;
use super::node::MenuNode;

/// Blank columns between the label column and the shortcut column.
const COLUMN_GAP: usize = 2;
/// Right-column marker for rows that open a nested submenu.
const SUBMENU_INDICATOR: &str = " >";

const FALLBACK_VERTICAL: char = '│';
const FALLBACK_HORIZONTAL: char = '─';

/// A rendered dropdown and its position relative to the first dropdown's corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownLayer {
    pub content: String,
    pub x: usize,
    pub y: usize,
}

/// Every open dropdown in chain order, plus the bar-relative column of the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownLayers {
    pub layers: Vec<DropdownLayer>,
    pub offset_x: usize,
}

impl DropdownLayers {
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Column widths shared by every row of one dropdown.
#[derive(Debug, Clone, Copy)]
struct Columns {
    label: usize,
    right: usize,
}

impl Columns {
    fn inner_width(&self) -> usize {
        self.label + COLUMN_GAP + self.right
    }
}

impl MenuNode {
    /// Render the bar: items left to right, a spacer, then `right` flush to `width`.
    ///
    /// With `width == 0` the bar is as wide as its items plus `right`. If items and
    /// `right` already exceed `width` nothing is truncated.
    pub fn render_bar(&self, right: &str, width: usize) -> String {
        let bar = &self.styles.bar;
        let fill = bar.clone().without_frame();
        let mut blocks: Vec<String> = (0..self.entries.len())
            .map(|index| self.render_bar_item(index))
            .collect();

        if width > 0 {
            let used: usize = blocks.iter().map(|block| display_width(block)).sum();
            let available = width.saturating_sub(bar.horizontal_frame_size());
            let spacer = available.saturating_sub(used + display_width(right));
            if spacer > 0 {
                blocks.push(fill.render(&" ".repeat(spacer)));
            }
        }
        if !right.is_empty() {
            blocks.push(fill.render(right));
        }

        bar.render(&join_horizontal(&blocks))
    }

    /// Rows occupied by the rendered bar.
    pub fn bar_height(&self) -> usize {
        measure(&self.render_bar("", 0)).height
    }

    /// Rendered width of bar item `index`.
    pub fn item_width(&self, index: usize) -> usize {
        if index >= self.entries.len() {
            return 0;
        }
        display_width(&self.render_bar_item(index))
    }

    /// Column where bar item `index` starts, relative to the bar's left edge.
    pub fn item_offset(&self, index: usize) -> usize {
        self.styles.bar.left_frame_size()
            + (0..index.min(self.entries.len()))
                .map(|i| self.item_width(i))
                .sum::<usize>()
    }

    fn bar_item_style(&self, index: usize, entry: &MenuEntry) -> &Style {
        if entry.disabled {
            &self.styles.disabled_item
        } else if self.active && index == self.selection {
            &self.styles.selected_item
        } else {
            &self.styles.item
        }
    }

    fn render_bar_item(&self, index: usize) -> String {
        let entry = &self.entries[index];
        let style = self.bar_item_style(index, entry);
        if entry.separator {
            let glyph = self
                .styles
                .dropdown
                .border_set()
                .map_or(FALLBACK_VERTICAL, |border| border.vertical);
            return style.render(&glyph.to_string());
        }
        let base = style.clone().unset_padding();
        style.render(&self.render_label(entry, &base))
    }

    /// Label text with the hotkey character emphasized. The first exact match wins,
    /// then the first case-insensitive one.
    fn render_label(&self, entry: &MenuEntry, base: &Style) -> String {
        let span = entry
            .hotkey
            .and_then(|hotkey| hotkey_span(&entry.label, hotkey));
        let Some((start, end)) = span else {
            return base.render(&entry.label);
        };
        let hot = self.styles.hotkey.clone().inherit(base);
        let label = &entry.label;
        format!(
            "{}{}{}",
            base.render(&label[..start]),
            hot.render(&label[start..end]),
            base.render(&label[end..])
        )
    }

    fn columns(&self) -> Columns {
        let rows = self.entries.iter().filter(|entry| !entry.separator);
        let label = rows
            .clone()
            .map(|entry| display_width(&entry.label))
            .max()
            .unwrap_or(0);
        let shortcut = rows
            .clone()
            .filter_map(|entry| entry.shortcut.as_deref())
            .map(display_width)
            .max()
            .unwrap_or(0);
        let right = if rows.clone().any(MenuEntry::has_submenu) {
            shortcut.max(display_width(SUBMENU_INDICATOR))
        } else {
            shortcut
        };
        Columns { label, right }
    }

    /// Width of one dropdown row including its own padding. Rows are sized for the widest
    /// of the row styles so selection never changes the dropdown's footprint.
    fn row_width(&self, columns: &Columns) -> usize {
        let blank = " ".repeat(columns.inner_width());
        [
            &self.styles.dropdown_item,
            &self.styles.dropdown_selected,
            &self.styles.disabled_item,
        ]
        .iter()
        .map(|style| display_width(&style.render(&blank)))
        .max()
        .unwrap_or(0)
    }

    fn entry_height(&self, index: usize) -> usize {
        match self.entries.get(index) {
            Some(entry) if entry.separator => 1,
            Some(_) => measure(&self.styles.dropdown_item.render("A")).height,
            None => 0,
        }
    }

    /// Rows from the dropdown's top edge to the first row of entry `index`.
    pub fn entry_row_offset(&self, index: usize) -> usize {
        self.styles.dropdown.top_frame_size()
            + (0..index).map(|i| self.entry_height(i)).sum::<usize>()
    }

    /// Entry drawn at `row` (relative to the dropdown's top edge), if any.
    pub(super) fn entry_at_row(&self, row: usize) -> Option<usize> {
        let mut top = self.styles.dropdown.top_frame_size();
        for index in 0..self.entries.len() {
            let height = self.entry_height(index);
            if (top..top + height).contains(&row) {
                return Some(index);
            }
            top += height;
        }
        None
    }

    /// Footprint of this level drawn as a dropdown.
    pub fn dropdown_size(&self) -> Size {
        let (frame_x, frame_y) = self.styles.dropdown.frame_size();
        let rows: usize = (0..self.entries.len()).map(|i| self.entry_height(i)).sum();
        Size {
            width: self.row_width(&self.columns()) + frame_x,
            height: rows + frame_y,
        }
    }

    /// Render this level as a bordered dropdown.
    pub fn render_dropdown(&self) -> String {
        let columns = self.columns();
        let row_width = self.row_width(&columns);
        let rows: Vec<String> = self
            .entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                if entry.separator {
                    self.render_separator(row_width)
                } else {
                    pad_display(&self.render_row(index, entry, &columns), row_width)
                }
            })
            .collect();
        let top = self.styles.dropdown.top_frame_size();
        let dividers: Vec<usize> = (0..self.entries.len())
            .filter(|&index| self.entries[index].separator)
            .map(|index| self.entry_row_offset(index) - top)
            .collect();
        self.styles.dropdown.render_divided(&rows.join("\n"), &dividers)
    }

    fn render_separator(&self, width: usize) -> String {
        let glyph = self
            .styles
            .dropdown
            .border_set()
            .map_or(FALLBACK_HORIZONTAL, |border| border.horizontal);
        let rule: String = std::iter::repeat(glyph).take(width).collect();
        self.styles.separator.render(&rule)
    }

    fn render_row(&self, index: usize, entry: &MenuEntry, columns: &Columns) -> String {
        let selected = index == self.selection;
        let style = if entry.disabled {
            &self.styles.disabled_item
        } else if selected {
            &self.styles.dropdown_selected
        } else {
            &self.styles.dropdown_item
        };
        let base = style.clone().unset_padding();

        let label = self.render_label(entry, &base);
        let gap = columns.label - display_width(&entry.label) + COLUMN_GAP;
        let mut row = format!("{label}{}", base.render(&" ".repeat(gap)));

        match entry.shortcut.as_deref().filter(|hint| !hint.is_empty()) {
            Some(hint) => {
                let hint_style = if entry.disabled {
                    base.clone()
                } else if selected {
                    self.styles.shortcut_selected.clone().inherit(&base)
                } else {
                    self.styles.shortcut.clone().inherit(&base)
                };
                let lead = columns.right.saturating_sub(display_width(hint));
                row.push_str(&base.render(&" ".repeat(lead)));
                row.push_str(&hint_style.render(hint));
            }
            None if entry.has_submenu() => {
                let lead = columns.right.saturating_sub(display_width(SUBMENU_INDICATOR));
                row.push_str(&base.render(&format!("{}{SUBMENU_INDICATOR}", " ".repeat(lead))));
            }
            None => row.push_str(&base.render(&" ".repeat(columns.right))),
        }

        style.render(&row)
    }

    /// Where the open child at `index` is drawn, given this level's own origin.
    pub(super) fn child_origin(&self, index: usize, x: usize, y: usize) -> (usize, usize) {
        if self.dropdown {
            (x + self.dropdown_size().width, y + self.entry_row_offset(index))
        } else {
            (x + self.item_offset(index), y + self.bar_height())
        }
    }

    /// Every open dropdown in the chain, positioned relative to the first one.
    pub fn dropdown_layers(&self) -> DropdownLayers {
        let Some(index) = self.open_child_index() else {
            return DropdownLayers::default();
        };
        let Some(child) = self.child() else {
            return DropdownLayers::default();
        };
        let mut layers = Vec::with_capacity(self.depth());
        child.collect_layers(0, 0, &mut layers);
        let (offset_x, _) = self.child_origin(index, 0, 0);
        DropdownLayers { layers, offset_x }
    }

    fn collect_layers(&self, x: usize, y: usize, layers: &mut Vec<DropdownLayer>) {
        layers.push(DropdownLayer {
            content: self.render_dropdown(),
            x,
            y,
        });
        if let (Some(index), Some(child)) = (self.open_child_index(), self.child()) {
            let (child_x, child_y) = self.child_origin(index, x, y);
            child.collect_layers(child_x, child_y, layers);
        }
    }

    /// Compose a full frame: the bar, `background` below it, and every open dropdown on top.
    pub fn view(&self, background: &str, right: &str, width: usize) -> String {
        let mut frame = self.render_bar(right, width);
        let top = measure(&frame).height;
        if !background.is_empty() {
            frame.push('\n');
            frame.push_str(background);
        }
        let dropdowns = self.dropdown_layers();
        for layer in &dropdowns.layers {
            frame = composite(
                &frame,
                &layer.content,
                dropdowns.offset_x + layer.x,
                top + layer.y,
            );
        }
        frame
    }
}

/// Byte span of the character to emphasize for `hotkey`.
fn hotkey_span(label: &str, hotkey: char) -> Option<(usize, usize)> {
    label
        .char_indices()
        .find(|&(_, ch)| ch == hotkey)
        .or_else(|| {
            label
                .char_indices()
                .find(|&(_, ch)| ch.to_lowercase().eq(hotkey.to_lowercase()))
        })
        .map(|(start, ch)| (start, start + ch.len_utf8()))
}

/// Place blocks side by side, top-aligned, padding shorter blocks with blank rows.
fn join_horizontal(blocks: &[String]) -> String {
    if blocks.iter().all(|block| !block.contains('\n')) {
        return blocks.concat();
    }
    let split: Vec<(Vec<&str>, usize)> = blocks
        .iter()
        .map(|block| (block.split('\n').collect(), display_width(block)))
        .collect();
    let height = split.iter().map(|(lines, _)| lines.len()).max().unwrap_or(0);
    (0..height)
        .map(|row| {
            split
                .iter()
                .map(|(lines, width)| pad_display(lines.get(row).copied().unwrap_or(""), *width))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::strip;
    use crate::input::InputEvent;
    use crate::theme::{MenuStyles, Theme};

    fn menu() -> Vec<MenuEntry> {
        vec![
            MenuEntry::new("File").hotkey('F').submenu(vec![
                MenuEntry::new("New").shortcut("^N").action("new"),
                MenuEntry::separator(),
                MenuEntry::new("Recent").submenu(vec![MenuEntry::new("a.txt").action("a")]),
            ]),
            MenuEntry::new("Edit").hotkey('E').submenu(vec![MenuEntry::new("Copy")]),
            MenuEntry::new("Help").hotkey('H').action("help"),
        ]
    }

    fn open(node: MenuNode, keys: &[&str]) -> MenuNode {
        keys.iter().fold(node, |node, name| {
            node.update(&InputEvent::key(name).expect("valid key")).0
        })
    }

    #[test]
    fn bar_fills_requested_width() {
        let node = MenuNode::new(menu(), MenuStyles::default(), false);
        let bar = node.render_bar("12:00", 40);
        assert_eq!(display_width(&bar), 40);
        assert_eq!(strip(&bar), format!(" File  Edit  Help {}12:00", " ".repeat(17)));
    }

    #[test]
    fn bar_never_truncates_when_too_narrow() {
        let node = MenuNode::new(menu(), Theme::Plain.styles(), false);
        assert_eq!(display_width(&node.render_bar("right", 5)), 18 + 5);
        assert_eq!(node.bar_height(), 1);
    }

    #[test]
    fn item_offsets_accumulate_rendered_widths() {
        let node = MenuNode::new(menu(), MenuStyles::default(), true);
        assert_eq!(node.item_width(0), 6);
        assert_eq!(node.item_offset(0), 0);
        assert_eq!(node.item_offset(2), 12);
    }

    #[test]
    fn hotkey_character_is_emphasized() {
        let styles = MenuStyles::default();
        let node = MenuNode::new(menu(), styles.clone(), false);
        let bar = node.render_bar("", 0);
        assert!(bar.contains("\x1b[4;38;2;255;255;255;48;2;95;0;255mF\x1b[0m"));
        assert_eq!(hotkey_span("Exit", 'x'), Some((1, 2)));
        assert_eq!(hotkey_span("eXit", 'x'), Some((1, 2)));
        assert_eq!(hotkey_span("Exit", 'q'), None);
    }

    #[test]
    fn dropdown_size_matches_rendering() {
        for theme in [Theme::Violet, Theme::Nord, Theme::Plain] {
            let node = open(MenuNode::new(menu(), theme.styles(), true), &["F"]);
            let child = node.child().expect("File is open");
            let rendered = child.render_dropdown();
            assert_eq!(measure(&rendered), child.dropdown_size(), "{theme}");
        }
    }

    #[test]
    fn dropdown_rows_align_shortcuts_and_indicators() {
        let node = open(MenuNode::new(menu(), Theme::Plain.styles(), true), &["F"]);
        let rendered = strip(&node.child().unwrap().render_dropdown());
        let expected = [
            "+------------+",
            "| New     ^N |",
            "+------------+",
            "| Recent   > |",
            "+------------+",
        ];
        assert_eq!(rendered, expected.join("\n"));
    }

    #[test]
    fn separator_rule_joins_the_dropdown_border() {
        let node = open(MenuNode::new(menu(), MenuStyles::default(), true), &["F"]);
        let rendered = strip(&node.child().unwrap().render_dropdown());
        let rows: Vec<&str> = rendered.lines().collect();
        assert_eq!(rows[2], "├────────────┤");
        assert!(rows[1].starts_with('│') && rows[3].ends_with('│'));
    }

    #[test]
    fn entry_row_offset_skips_frame_and_earlier_rows() {
        let node = open(MenuNode::new(menu(), MenuStyles::default(), true), &["F"]);
        let child = node.child().unwrap();
        assert_eq!(child.entry_row_offset(0), 1);
        assert_eq!(child.entry_row_offset(2), 3);
        assert_eq!(child.entry_at_row(0), None);
        assert_eq!(child.entry_at_row(2), Some(1));
        assert_eq!(child.entry_at_row(3), Some(2));
        assert_eq!(child.entry_at_row(4), None);
    }

    #[test]
    fn layers_follow_the_open_chain() {
        let node = open(
            MenuNode::new(menu(), MenuStyles::default(), true),
            &["E", "left", "up", "right"],
        );
        assert_eq!(node.depth(), 2);
        let dropdowns = node.dropdown_layers();
        assert_eq!(dropdowns.offset_x, 0);
        assert_eq!(dropdowns.layers.len(), 2);
        let first = &dropdowns.layers[0];
        assert_eq!((first.x, first.y), (0, 0));
        let second = &dropdowns.layers[1];
        assert_eq!(second.x, measure(&first.content).width);
        assert_eq!(second.y, 3);

        let closed = MenuNode::new(menu(), MenuStyles::default(), true);
        assert!(closed.dropdown_layers().is_empty());
    }

    #[test]
    fn view_draws_dropdown_under_its_bar_item() {
        let node = open(MenuNode::new(menu(), Theme::Plain.styles(), true), &["E"]);
        let background = ".".repeat(30);
        let frame = strip(&node.view(&format!("{background}\n{background}"), "", 30));
        let rows: Vec<&str> = frame.lines().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[1].starts_with("......+"));
        assert!(rows[2].starts_with("......| Copy"));
        assert_eq!(rows[3], "      +--------+");
    }
}
