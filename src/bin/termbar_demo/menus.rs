//! Built-in menu tree and background text for the demo.

use termbar::{Color, MenuEntry, Style};

pub(crate) fn default_menu() -> Vec<MenuEntry> {
    let file = vec![
        MenuEntry::new("New")
            .hotkey('n')
            .shortcut("⌃+N")
            .action("New File Created"),
        MenuEntry::new("Open")
            .hotkey('O')
            .shortcut("⌃+O")
            .action("File Opened"),
        MenuEntry::new("Save")
            .hotkey('S')
            .shortcut("⌃+S")
            .action("File Saved"),
        MenuEntry::separator(),
        MenuEntry::new("Exit").hotkey('x').shortcut("⌃+C").quit(),
    ];

    let find = vec![
        MenuEntry::new("Find...")
            .hotkey('F')
            .shortcut("⌃⌘+F")
            .action("Find"),
        MenuEntry::new("Replace...").hotkey('R').action("Replace"),
        MenuEntry::new("Advanced").submenu(vec![
            MenuEntry::new("Regex").action("Regex Search"),
            MenuEntry::new("Case Sensitive").action("Case Sensitive Search"),
        ]),
    ];

    let edit = vec![
        MenuEntry::new("Cut").hotkey('t').shortcut("⌃⌘+X").action("Cut"),
        MenuEntry::new("Copy").hotkey('C').shortcut("⌃⌘+C").action("Copied"),
        MenuEntry::new("Paste")
            .hotkey('P')
            .shortcut("⌃⌘+P")
            .action("Pasted")
            .disabled(true),
        MenuEntry::separator(),
        MenuEntry::new("Find").hotkey('F').submenu(find),
    ];

    vec![
        MenuEntry::new("File").hotkey('F').submenu(file),
        MenuEntry::new("Edit").hotkey('E').submenu(edit),
        MenuEntry::separator(),
        MenuEntry::new("Help")
            .hotkey('H')
            .submenu(vec![MenuEntry::new("About").hotkey('A').action("termbar demo")]),
    ]
}

const LOREM: &str = "\
Lorem ipsum dolor sit amet, consectetur adipiscing elit.
Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.
Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris
nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in
reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.
Excepteur sint occaecat cupidatat non proident, sunt in culpa qui
officia deserunt mollit anim id est laborum.

Press esc to focus the menu, or click it.
Notice how the dropdowns overlay this text.";

const RAINBOW: [Color; 7] = [
    Color::Rgb(0xff, 0x00, 0x00),
    Color::Rgb(0xff, 0x7f, 0x00),
    Color::Rgb(0xff, 0xff, 0x00),
    Color::Rgb(0x00, 0xff, 0x00),
    Color::Rgb(0x00, 0x00, 0xff),
    Color::Rgb(0x4b, 0x00, 0x82),
    Color::Rgb(0x94, 0x00, 0xd3),
];

const MARGIN_LEFT: &str = "  ";

/// Every visible character in its own color, cycling through the rainbow, so dropdowns
/// are composited over densely styled text.
pub(crate) fn rainbow_content() -> String {
    let mut colors = RAINBOW.iter().cycle();
    let mut lines = vec![String::new()];
    for line in LOREM.lines() {
        let mut row = String::from(MARGIN_LEFT);
        for ch in line.chars() {
            if ch == ' ' {
                row.push(ch);
                continue;
            }
            let color = colors.next().copied().unwrap_or(Color::Ansi(7));
            row.push_str(&Style::new().fg(color).render(&ch.to_string()));
        }
        lines.push(row);
    }
    lines.push(String::new());
    lines.join("\n")
}
