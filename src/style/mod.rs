//! Terminal text styling: colors, attributes, padding, and box borders.
//!
//! A [`Style`] turns plain or already-styled text into an ANSI block. Measurement goes
//! through [`crate::ansi::measure`], so anything rendered here can be sized exactly.

mod borders;

pub use borders::{
    BorderSet, BORDER_ASCII, BORDER_HEAVY, BORDER_ROUNDED, BORDER_SINGLE,
};

use crate::ansi::{display_width, RESET};

/// Terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// One of the 16 basic ANSI colors (0-7 normal, 8-15 bright).
    Ansi(u8),
    /// 256-color palette index.
    Indexed(u8),
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse `#RRGGBB` or `#RGB`.
    pub fn hex(value: &str) -> Option<Self> {
        let digits = value.strip_prefix('#').filter(|d| d.is_ascii())?;
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Self::Rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let expand = |s: &str| channel(s).map(|v| v * 17);
                Some(Self::Rgb(
                    expand(&digits[0..1])?,
                    expand(&digits[1..2])?,
                    expand(&digits[2..3])?,
                ))
            }
            _ => None,
        }
    }

    fn fg_param(&self) -> String {
        match *self {
            Self::Ansi(n) if n < 8 => format!("{}", 30 + u16::from(n)),
            Self::Ansi(n) => format!("{}", 90 + u16::from(n.min(15) - 8)),
            Self::Indexed(n) => format!("38;5;{n}"),
            Self::Rgb(r, g, b) => format!("38;2;{r};{g};{b}"),
        }
    }

    fn bg_param(&self) -> String {
        match *self {
            Self::Ansi(n) if n < 8 => format!("{}", 40 + u16::from(n)),
            Self::Ansi(n) => format!("{}", 100 + u16::from(n.min(15) - 8)),
            Self::Indexed(n) => format!("48;5;{n}"),
            Self::Rgb(r, g, b) => format!("48;2;{r};{g};{b}"),
        }
    }
}

/// Cell padding around rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

/// Visual style for a block of text.
///
/// Attributes are optional so a style can [`inherit`](Style::inherit) whatever another
/// style sets without clobbering its own choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    bold: Option<bool>,
    faint: Option<bool>,
    italic: Option<bool>,
    underline: Option<bool>,
    reverse: Option<bool>,
    padding: Padding,
    border: Option<BorderSet>,
    border_fg: Option<Color>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub fn bold(mut self, on: bool) -> Self {
        self.bold = Some(on);
        self
    }

    #[must_use]
    pub fn faint(mut self, on: bool) -> Self {
        self.faint = Some(on);
        self
    }

    #[must_use]
    pub fn italic(mut self, on: bool) -> Self {
        self.italic = Some(on);
        self
    }

    #[must_use]
    pub fn underline(mut self, on: bool) -> Self {
        self.underline = Some(on);
        self
    }

    #[must_use]
    pub fn reverse(mut self, on: bool) -> Self {
        self.reverse = Some(on);
        self
    }

    /// Vertical and horizontal padding, CSS shorthand style.
    #[must_use]
    pub fn padding(mut self, vertical: usize, horizontal: usize) -> Self {
        self.padding = Padding {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        };
        self
    }

    #[must_use]
    pub fn padding_sides(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn border(mut self, border: BorderSet) -> Self {
        self.border = Some(border);
        self
    }

    #[must_use]
    pub fn border_fg(mut self, color: Color) -> Self {
        self.border_fg = Some(color);
        self
    }

    #[must_use]
    pub fn unset_padding(mut self) -> Self {
        self.padding = Padding::default();
        self
    }

    /// Drop padding and border, leaving only colors and attributes.
    #[must_use]
    pub fn without_frame(mut self) -> Self {
        self.padding = Padding::default();
        self.border = None;
        self
    }

    /// Fill any color or attribute this style leaves unset from `parent`.
    /// Padding and borders are never inherited.
    #[must_use]
    pub fn inherit(mut self, parent: &Style) -> Self {
        self.fg = self.fg.or(parent.fg);
        self.bg = self.bg.or(parent.bg);
        self.bold = self.bold.or(parent.bold);
        self.faint = self.faint.or(parent.faint);
        self.italic = self.italic.or(parent.italic);
        self.underline = self.underline.or(parent.underline);
        self.reverse = self.reverse.or(parent.reverse);
        self
    }

    pub fn border_set(&self) -> Option<BorderSet> {
        self.border
    }

    pub fn padding_values(&self) -> Padding {
        self.padding
    }

    /// Columns added around content by padding and border.
    pub fn horizontal_frame_size(&self) -> usize {
        let border = if self.border.is_some() { 2 } else { 0 };
        self.padding.left + self.padding.right + border
    }

    /// Rows added around content by padding and border.
    pub fn vertical_frame_size(&self) -> usize {
        self.top_frame_size() + self.padding.bottom + usize::from(self.border.is_some())
    }

    /// Rows above the first content line.
    pub fn top_frame_size(&self) -> usize {
        self.padding.top + usize::from(self.border.is_some())
    }

    /// Columns left of the first content cell.
    pub fn left_frame_size(&self) -> usize {
        self.padding.left + usize::from(self.border.is_some())
    }

    pub fn frame_size(&self) -> (usize, usize) {
        (self.horizontal_frame_size(), self.vertical_frame_size())
    }

    /// SGR prefix for text drawn in this style, empty when nothing is set.
    fn text_sgr(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        if self.bold == Some(true) {
            params.push("1".into());
        }
        if self.faint == Some(true) {
            params.push("2".into());
        }
        if self.italic == Some(true) {
            params.push("3".into());
        }
        if self.underline == Some(true) {
            params.push("4".into());
        }
        if self.reverse == Some(true) {
            params.push("7".into());
        }
        if let Some(fg) = self.fg {
            params.push(fg.fg_param());
        }
        if let Some(bg) = self.bg {
            params.push(bg.bg_param());
        }
        sgr(&params)
    }

    /// SGR prefix for padding and alignment whitespace (background only).
    fn whitespace_sgr(&self) -> String {
        let params: Vec<String> = self.bg.iter().map(Color::bg_param).collect();
        sgr(&params)
    }

    fn border_sgr(&self) -> String {
        let params: Vec<String> = self.border_fg.iter().map(Color::fg_param).collect();
        sgr(&params)
    }

    /// Render `text` as a styled block.
    ///
    /// Each line is left-aligned and padded to the widest line, then padding and the
    /// border are added. Every painted run ends with its own reset, so the output never
    /// leaves attributes active.
    pub fn render(&self, text: &str) -> String {
        self.render_divided(text, &[])
    }

    /// Like [`render`](Style::render), but content lines listed in `dividers` are drawn
    /// as rules: the side padding is filled with the border's horizontal glyph and the
    /// sides become junctions, so the line meets the frame. Without a border this is
    /// the same as `render`.
    pub fn render_divided(&self, text: &str, dividers: &[usize]) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        let width = lines.iter().map(|line| display_width(line)).max().unwrap_or(0);
        let text_codes = self.text_sgr();
        let space_codes = self.whitespace_sgr();
        let pad = self.padding;
        let inner_width = width + pad.left + pad.right;

        let blank = paint(&space_codes, &" ".repeat(inner_width));
        let mut rows = Vec::with_capacity(lines.len() + pad.top + pad.bottom);
        rows.extend(std::iter::repeat(blank.clone()).take(pad.top));
        for (index, line) in lines.into_iter().enumerate() {
            let fill = width - display_width(line);
            let divider = self.border.filter(|_| dividers.contains(&index));
            let row = match divider {
                Some(border) => {
                    let codes = self.border_sgr();
                    let edge = |n: usize| paint(&codes, &border.horizontal.to_string().repeat(n));
                    format!("{}{line}{}", edge(pad.left), edge(pad.right + fill))
                }
                None => {
                    let mut row = paint(&space_codes, &" ".repeat(pad.left));
                    row.push_str(&paint(&text_codes, line));
                    row.push_str(&paint(&space_codes, &" ".repeat(pad.right + fill)));
                    row
                }
            };
            rows.push(row);
        }
        rows.extend(std::iter::repeat(blank).take(pad.bottom));

        if let Some(border) = self.border {
            let codes = self.border_sgr();
            let rule: String = std::iter::repeat(border.horizontal).take(inner_width).collect();
            let side = paint(&codes, &border.vertical.to_string());
            let t_left = paint(&codes, &border.t_left.to_string());
            let t_right = paint(&codes, &border.t_right.to_string());
            let mut framed = Vec::with_capacity(rows.len() + 2);
            framed.push(paint(
                &codes,
                &format!("{}{rule}{}", border.top_left, border.top_right),
            ));
            for (index, row) in rows.into_iter().enumerate() {
                let content_line = index.checked_sub(pad.top);
                if content_line.is_some_and(|line| dividers.contains(&line)) {
                    framed.push(format!("{t_left}{row}{t_right}"));
                } else {
                    framed.push(format!("{side}{row}{side}"));
                }
            }
            framed.push(paint(
                &codes,
                &format!("{}{rule}{}", border.bottom_left, border.bottom_right),
            ));
            rows = framed;
        }

        rows.join("\n")
    }
}

fn sgr(params: &[String]) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("\x1b[{}m", params.join(";"))
    }
}

fn paint(codes: &str, text: &str) -> String {
    if codes.is_empty() || text.is_empty() {
        text.to_string()
    } else {
        format!("{codes}{text}{RESET}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::{measure, strip};

    #[test]
    fn plain_style_renders_text_unchanged() {
        assert_eq!(Style::new().render("hello"), "hello");
        assert_eq!(Style::new().render(""), "");
    }

    #[test]
    fn color_codes_follow_palette_kind() {
        let style = Style::new().fg(Color::Ansi(1)).bg(Color::Ansi(12));
        assert_eq!(style.render("x"), "\x1b[31;104mx\x1b[0m");
        let style = Style::new().fg(Color::Rgb(1, 2, 3)).underline(true);
        assert_eq!(style.render("x"), "\x1b[4;38;2;1;2;3mx\x1b[0m");
        assert_eq!(Color::hex("#5F00FF"), Some(Color::Rgb(0x5f, 0, 0xff)));
        assert_eq!(Color::hex("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(Color::hex("5F00FF"), None);
    }

    #[test]
    fn padding_and_border_grow_the_block() {
        let style = Style::new().padding(0, 1).border(BORDER_SINGLE);
        let rendered = style.render("ab\nc");
        assert_eq!(strip(&rendered), "┌────┐\n│ ab │\n│ c  │\n└────┘");
        assert_eq!(measure(&rendered).width, 2 + style.horizontal_frame_size());
        assert_eq!(style.frame_size(), (4, 2));
        assert_eq!(style.top_frame_size(), 1);
    }

    #[test]
    fn divider_lines_meet_the_frame() {
        let style = Style::new().padding(0, 1).border(BORDER_HEAVY);
        let rendered = style.render_divided("ab\n━━\nc", &[1]);
        assert_eq!(strip(&rendered), "┏━━━━┓\n┃ ab ┃\n┣━━━━┫\n┃ c  ┃\n┗━━━━┛");
        assert_eq!(
            Style::new().render_divided("a\n-", &[1]),
            Style::new().render("a\n-")
        );
    }

    #[test]
    fn padding_uses_background_only() {
        let style = Style::new().bg(Color::Ansi(4)).underline(true).padding(0, 1);
        let rendered = style.render("a");
        assert_eq!(rendered, "\x1b[44m \x1b[0m\x1b[4;44ma\x1b[0m\x1b[44m \x1b[0m");
    }

    #[test]
    fn inherit_fills_only_unset_attributes() {
        let parent = Style::new().fg(Color::Ansi(2)).bg(Color::Ansi(0)).padding(0, 3);
        let child = Style::new().fg(Color::Ansi(5)).inherit(&parent);
        assert_eq!(child.fg, Some(Color::Ansi(5)));
        assert_eq!(child.bg, Some(Color::Ansi(0)));
        assert_eq!(child.horizontal_frame_size(), 0);
    }
}
