//! Splice one styled text block over another at a cell offset.
//!
//! Rows of the background are cut at visible columns, never inside an escape sequence.
//! The styles active at each cut are tracked so text on either side of the foreground
//! keeps the look it had before the splice.

use crate::ansi::{active_sgr, display_width, skip_columns, split_at_column, RESET};

/// Draw `foreground` over `background` with its top-left corner at column `x`, row `y`.
///
/// Rows and columns the background lacks are filled with blanks. Wide characters cut
/// by either edge are replaced with spaces so the surrounding columns stay aligned.
pub fn composite(background: &str, foreground: &str, x: usize, y: usize) -> String {
    let mut rows: Vec<String> = background.split('\n').map(str::to_owned).collect();
    for (offset, fg_row) in foreground.split('\n').enumerate() {
        let target = y + offset;
        if target >= rows.len() {
            rows.resize(target + 1, String::new());
        }
        rows[target] = splice_row(&rows[target], fg_row, x);
    }
    rows.join("\n")
}

fn splice_row(background: &str, foreground: &str, x: usize) -> String {
    let (prefix, _, prefix_width) = split_at_column(background, x);
    let end = x + display_width(foreground);
    let (covered, suffix, overshoot) = skip_columns(background, end);

    let mut row = String::with_capacity(background.len() + foreground.len() + 16);
    row.push_str(prefix);
    if !active_sgr(prefix).is_empty() {
        row.push_str(RESET);
    }
    row.push_str(&" ".repeat(x - prefix_width));
    row.push_str(foreground);

    if suffix.is_empty() && overshoot == 0 {
        return row;
    }
    if !active_sgr(foreground).is_empty() {
        row.push_str(RESET);
    }
    let restore = active_sgr(covered);
    row.push_str(&restore);
    row.push_str(&" ".repeat(overshoot));
    row.push_str(suffix);
    row
}
