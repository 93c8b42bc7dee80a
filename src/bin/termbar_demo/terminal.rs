//! Full-screen terminal session for the interactive demo.
//!
//! The session owns raw mode, the alternate screen, and mouse reporting for as long as
//! it lives. Dropping it gives the terminal back; so does a panic, through a hook that
//! shares the same one-shot restore.

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    terminal::{
        disable_raw_mode, enable_raw_mode, size as terminal_size, Clear, ClearType,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io::{self, Write};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Set while a session holds the screen. Whoever clears it first restores.
static SCREEN_HELD: AtomicBool = AtomicBool::new(false);
static MOUSE_HELD: AtomicBool = AtomicBool::new(false);
static PANIC_RESTORE: Once = Once::new();

pub(crate) struct TerminalSession {
    _held: (),
}

impl TerminalSession {
    /// Take over the terminal. On error, whatever was already switched is undone.
    pub(crate) fn enter(out: &mut impl Write, mouse: bool) -> io::Result<Self> {
        PANIC_RESTORE.call_once(|| {
            let previous = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                release_screen();
                tracing::error!("demo panicked: {info}");
                previous(info);
            }));
        });

        enable_raw_mode()?;
        SCREEN_HELD.store(true, Ordering::SeqCst);
        let session = Self { _held: () };
        execute!(out, EnterAlternateScreen, Hide)?;
        if mouse {
            execute!(out, EnableMouseCapture)?;
            MOUSE_HELD.store(true, Ordering::SeqCst);
        }
        Ok(session)
    }

    /// Current `(columns, rows)`, or 80x24 when the size cannot be queried.
    pub(crate) fn size(&self) -> (usize, usize) {
        let (cols, rows) = terminal_size().unwrap_or(FALLBACK_SIZE);
        (usize::from(cols), usize::from(rows))
    }

    /// Redraw the whole screen with `frame`, clipped to `rows` lines.
    pub(crate) fn draw(&self, out: &mut impl Write, frame: &str, rows: usize) -> io::Result<()> {
        queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
        for (index, line) in frame.split('\n').take(rows).enumerate() {
            if index > 0 {
                out.write_all(b"\r\n")?;
            }
            out.write_all(line.as_bytes())?;
        }
        out.flush()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        release_screen();
    }
}

fn release_screen() {
    if !SCREEN_HELD.swap(false, Ordering::SeqCst) {
        return;
    }
    let mut out = io::stdout();
    if MOUSE_HELD.swap(false, Ordering::SeqCst) {
        let _ = execute!(out, DisableMouseCapture);
    }
    let _ = execute!(out, LeaveAlternateScreen, Show);
    let _ = disable_raw_mode();
    let _ = out.flush();
}
