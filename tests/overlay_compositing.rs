use termbar::ansi::{active_sgr, display_width, split_at_column, strip};
use termbar::{composite, Color, MenuEntry, MenuNode, Style, Theme};

fn striped_row(width: usize) -> String {
    let colors = [Color::Ansi(1), Color::Ansi(2), Color::Ansi(4)];
    (0..width)
        .map(|i| Style::new().fg(colors[i % colors.len()]).render("#"))
        .collect()
}

#[test]
fn splice_keeps_prefix_and_suffix_runs() {
    let bg = striped_row(30);
    let fg = Style::new().bg(Color::Ansi(7)).render("[menu]");
    let out = composite(&bg, &fg, 10, 0);

    let (bg_prefix, _, _) = split_at_column(&bg, 10);
    let (out_prefix, _, _) = split_at_column(&out, 10);
    assert_eq!(out_prefix, bg_prefix);

    let end = 10 + display_width(&fg);
    let (_, bg_suffix, _) = split_at_column(&bg, end);
    let (_, out_suffix, _) = split_at_column(&out, end);
    assert!(out_suffix.ends_with(bg_suffix));
    assert_eq!(
        strip_ansi_escapes::strip_str(out_suffix),
        strip_ansi_escapes::strip_str(bg_suffix)
    );
    assert_eq!(active_sgr(&out), "");
    assert_eq!(display_width(&out), 30);
}

#[test]
fn unterminated_background_style_does_not_leak_into_layer() {
    let bg = "\x1b[45mmagenta without reset";
    let out = composite(bg, "box", 3, 0);
    let (head, tail, _) = split_at_column(&out, 3);
    assert_eq!(head, "\x1b[45mmag");
    assert!(tail.starts_with("\x1b[0mbox\x1b[45m"));
    assert_eq!(strip_ansi_escapes::strip_str(&out), "magboxa without reset");
}

#[test]
fn dropdown_over_styled_text_keeps_row_widths() {
    let entries = vec![MenuEntry::new("Menu").submenu(vec![
        MenuEntry::new("First").shortcut("^1"),
        MenuEntry::separator(),
        MenuEntry::new("Second"),
    ])];
    let (node, _) = MenuNode::new(entries, Theme::Nord.styles(), true)
        .update(&termbar::InputEvent::key("down").expect("valid key"));
    let background = vec![striped_row(40); 6].join("\n");
    let frame = node.view(&background, "", 40);
    for row in frame.split('\n') {
        assert_eq!(display_width(row), 40);
        assert_eq!(
            strip_ansi_escapes::strip_str(row).chars().count(),
            40,
            "{row:?}"
        );
        assert_eq!(strip(row), strip_ansi_escapes::strip_str(row));
    }
}
