//! Demo host state: the menu, the background text, and the clock segment.

use std::time::{SystemTime, UNIX_EPOCH};

use termbar::{Color, InputEvent, Key, MenuCommand, MenuNode, Style};
use tracing::info;

use crate::menus::rainbow_content;

const SECONDS_PER_DAY: u64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

pub(crate) struct DemoApp {
    menu: MenuNode,
    content: String,
    messages: Vec<String>,
    clock: String,
}

impl DemoApp {
    pub(crate) fn new(menu: MenuNode) -> Self {
        Self {
            menu,
            content: rainbow_content(),
            messages: Vec::new(),
            clock: format_clock(SystemTime::now()),
        }
    }

    pub(crate) fn menu(&self) -> &MenuNode {
        &self.menu
    }

    pub(crate) fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Route one event. `ctrl+c` always quits; `esc` toggles bar focus while no dropdown
    /// is open. Everything else goes to the menu.
    pub(crate) fn handle_event(mut self, event: &InputEvent) -> (Self, Flow) {
        if let InputEvent::Key(key) = event {
            match key {
                Key::Ctrl('c') => return (self, Flow::Quit),
                Key::Esc if !self.menu.is_active() => {
                    self.menu.activate();
                    return (self, Flow::Continue);
                }
                Key::Esc if !self.menu.has_open_child() => {
                    self.menu.deactivate();
                    return (self, Flow::Continue);
                }
                _ => {}
            }
        }

        let (menu, command) = self.menu.update(event);
        self.menu = menu;
        match command {
            Some(MenuCommand::Quit) => (self, Flow::Quit),
            Some(MenuCommand::Custom(token)) => {
                info!(%token, "menu action");
                self.messages.push(token);
                (self, Flow::Continue)
            }
            None => (self, Flow::Continue),
        }
    }

    pub(crate) fn tick(&mut self, now: SystemTime) {
        self.clock = format_clock(now);
    }

    pub(crate) fn view(&self, width: usize) -> String {
        let right = Style::new().padding(0, 1).render(&self.clock);
        let highlight = Style::new().fg(Color::Rgb(0xff, 0x00, 0xff));
        let mut body = self.content.clone();
        for message in &self.messages {
            body.push('\n');
            body.push_str(&highlight.render(message));
        }
        self.menu.view(&body, &right, width)
    }
}

/// `HH:MM:SS` in UTC.
fn format_clock(now: SystemTime) -> String {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
        % SECONDS_PER_DAY;
    format!("{:02}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
}
