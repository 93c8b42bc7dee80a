//! ANSI-aware text primitives shared by measurement, styling, and overlay splicing.
//!
//! Everything here walks a string as a sequence of [`Segment`]s: visible text runs
//! and terminal control sequences. Width counting and style replay both consume the
//! same tokenizer, so a column computed for hit-testing is the column that gets drawn.

use unicode_width::UnicodeWidthChar;

/// SGR sequence that clears every active attribute.
pub const RESET: &str = "\x1b[0m";

const ESC: u8 = 0x1b;
const BEL: u8 = 0x07;

/// One run of a styled string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Printable text (may contain newlines).
    Text(&'a str),
    /// A complete escape sequence (CSI, OSC, or a two-byte escape).
    Control(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Text(s) | Segment::Control(s) => s,
        }
    }

    /// True for `ESC [ ... m` select-graphic-rendition sequences.
    pub fn is_sgr(&self) -> bool {
        match self {
            Segment::Control(seq) => seq.starts_with("\x1b[") && seq.ends_with('m'),
            Segment::Text(_) => false,
        }
    }

    /// True for SGR sequences that clear all attributes.
    pub fn is_reset(&self) -> bool {
        matches!(self, Segment::Control(seq) if *seq == "\x1b[0m" || *seq == "\x1b[m")
    }
}

/// Iterator over the [`Segment`]s of a string.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
}

/// Tokenize `s` into text runs and control sequences.
pub fn segments(s: &str) -> Segments<'_> {
    Segments { rest: s }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let bytes = self.rest.as_bytes();
        if bytes[0] == ESC {
            let len = control_len(bytes);
            let (seq, rest) = self.rest.split_at(len);
            self.rest = rest;
            Some(Segment::Control(seq))
        } else {
            let len = self.rest.find('\x1b').unwrap_or(self.rest.len());
            let (text, rest) = self.rest.split_at(len);
            self.rest = rest;
            Some(Segment::Text(text))
        }
    }
}

#[inline]
fn is_csi_final(byte: u8) -> bool {
    (0x40..=0x7e).contains(&byte)
}

/// Byte length of the escape sequence at the start of `bytes` (which begins with ESC).
/// Every returned length ends on an ASCII byte, so it is always a char boundary.
fn control_len(bytes: &[u8]) -> usize {
    match bytes.get(1) {
        None => 1,
        Some(b'[') => {
            let mut idx = 2;
            while idx < bytes.len() && (0x20..=0x3f).contains(&bytes[idx]) {
                idx += 1;
            }
            if idx < bytes.len() && is_csi_final(bytes[idx]) {
                idx + 1
            } else {
                idx
            }
        }
        Some(b']') => {
            let mut idx = 2;
            while idx < bytes.len() {
                match bytes[idx] {
                    BEL => return idx + 1,
                    ESC if bytes.get(idx + 1) == Some(&b'\\') => return idx + 2,
                    _ => idx += 1,
                }
            }
            bytes.len()
        }
        Some(byte) if byte.is_ascii() => 2,
        Some(_) => 1,
    }
}

/// Terminal cell width of a single character (control characters count as zero).
#[inline]
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Width of the widest line in `s`, ignoring escape sequences.
pub fn display_width(s: &str) -> usize {
    let mut widest = 0;
    let mut current: usize = 0;
    for segment in segments(s) {
        if let Segment::Text(text) = segment {
            for ch in text.chars() {
                if ch == '\n' {
                    widest = widest.max(current);
                    current = 0;
                } else {
                    current = current.saturating_add(char_width(ch));
                }
            }
        }
    }
    widest.max(current)
}

/// On-screen footprint of a rendered block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

/// Measure the cell width and row count of a (possibly multi-line) styled block.
pub fn measure(s: &str) -> Size {
    Size {
        width: display_width(s),
        height: s.split('\n').count(),
    }
}

/// Right-pad `s` with spaces until it is `width` cells wide.
pub fn pad_display(s: &str, width: usize) -> String {
    let current = display_width(s);
    let mut result = String::with_capacity(s.len() + width.saturating_sub(current));
    result.push_str(s);
    result.push_str(&" ".repeat(width.saturating_sub(current)));
    result
}

/// Split a single row at visible column `column`.
///
/// Returns `(head, tail, head_width)`. The cut lands at the earliest byte position whose
/// cumulative width reaches `column`, so escape sequences sitting on the boundary travel
/// with the tail. When a wide character would straddle the cut the head stops before it
/// and `head_width < column`; callers pad the shortfall.
pub fn split_at_column(s: &str, column: usize) -> (&str, &str, usize) {
    let mut width = 0;
    let mut offset = 0;
    for segment in segments(s) {
        if width == column {
            return (&s[..offset], &s[offset..], width);
        }
        match segment {
            Segment::Control(seq) => offset += seq.len(),
            Segment::Text(text) => {
                for (idx, ch) in text.char_indices() {
                    let ch_width = char_width(ch);
                    if width == column || width + ch_width > column {
                        let cut = offset + idx;
                        return (&s[..cut], &s[cut..], width);
                    }
                    width += ch_width;
                }
                offset += text.len();
            }
        }
    }
    (s, "", width)
}

/// Drop the first `column` visible cells of a row.
///
/// Returns `(skipped, tail, overshoot)` where `tail` starts at the first character boundary
/// at or past `column`. A wide character straddling the cut is dropped along with the head;
/// `overshoot` is how many cells past `column` the tail actually starts.
pub fn skip_columns(s: &str, column: usize) -> (&str, &str, usize) {
    let mut width = 0;
    let mut offset = 0;
    for segment in segments(s) {
        if width >= column {
            return (&s[..offset], &s[offset..], width - column);
        }
        match segment {
            Segment::Control(seq) => offset += seq.len(),
            Segment::Text(text) => {
                for (idx, ch) in text.char_indices() {
                    if width >= column {
                        let cut = offset + idx;
                        return (&s[..cut], &s[cut..], width - column);
                    }
                    width += char_width(ch);
                }
                offset += text.len();
            }
        }
    }
    (s, "", width.saturating_sub(column))
}

/// Concatenate the SGR sequences still in effect at the end of `s`.
///
/// Sequences before the most recent full reset are discarded since they no longer apply.
pub fn active_sgr(s: &str) -> String {
    let mut active = String::new();
    for segment in segments(s) {
        if segment.is_reset() {
            active.clear();
        } else if segment.is_sgr() {
            active.push_str(segment.as_str());
        }
    }
    active
}

/// Remove every escape sequence, keeping only visible text.
///
/// Part of the public API for hosts that need the plain text of a frame, e.g. for
/// logging or accessibility output. Uses the same tokenizer as the width functions,
/// so `display_width(s) == display_width(&strip(s))` always holds.
pub fn strip(s: &str) -> String {
    segments(s)
        .filter_map(|segment| match segment {
            Segment::Text(text) => Some(text),
            Segment::Control(_) => None,
        })
        .collect()
}
