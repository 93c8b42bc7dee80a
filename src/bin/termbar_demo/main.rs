//! Termbar demo entrypoint: a menu bar over rainbow text, driven by keyboard and mouse.
//!
//! # Architecture
//!
//! - Input thread: blocks on crossterm events and forwards them over a channel
//! - Ticker: refreshes the clock segment once a second
//! - Main loop: `select!` over both, updates the app, redraws the full frame
//!
//! With `--script` no terminal is touched: keys are replayed and the last frame printed.

mod app;
mod config;
mod menus;
mod telemetry;
mod terminal;

use anyhow::{Context, Result};
use crossbeam_channel::{bounded, select, tick, Sender};
use crossterm::event::{self, Event};
use std::io;
use std::thread;
use std::time::{Duration, SystemTime};
use termbar::{InputEvent, Key, MenuNode};
use tracing::{debug, info};

use crate::app::{DemoApp, Flow};
use crate::config::DemoConfig;
use crate::telemetry::init_tracing;
use crate::terminal::TerminalSession;

/// Max pending terminal events before the input thread blocks.
const INPUT_CHANNEL_CAPACITY: usize = 256;

const CLOCK_TICK: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    let config = DemoConfig::parse_args()?;
    if let Some(path) = config.trace_log_path() {
        init_tracing(&path)?;
    }

    let entries = config.load_entries()?;
    let theme = config.theme();
    info!(%theme, entries = entries.len(), "termbar demo starting");
    let menu = MenuNode::new(entries, theme.styles(), config.start_active);
    let app = DemoApp::new(menu);

    match config.script_keys()? {
        Some(keys) => run_script(app, &keys, config.script_width()),
        None => run_interactive(app, &config),
    }
}

fn run_script(mut app: DemoApp, keys: &[Key], width: usize) -> Result<()> {
    for key in keys {
        let flow;
        (app, flow) = app.handle_event(&InputEvent::Key(key.clone()));
        if flow == Flow::Quit {
            debug!(%key, "script quit");
            break;
        }
    }
    println!("{}", app.view(width));
    Ok(())
}

fn spawn_input_thread(tx: Sender<Event>) -> thread::JoinHandle<()> {
    thread::spawn(move || loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(err) => {
                debug!("terminal read error: {err}");
                break;
            }
        };
        if tx.send(event).is_err() {
            return;
        }
    })
}

fn run_interactive(mut app: DemoApp, config: &DemoConfig) -> Result<()> {
    let mut stdout = io::stdout();
    let session = TerminalSession::enter(&mut stdout, !config.no_mouse)
        .context("failed to set up the terminal")?;

    let (mut cols, mut rows) = session.size();
    if let Some(width) = config.width {
        cols = usize::from(width);
    }

    let (input_tx, input_rx) = bounded(INPUT_CHANNEL_CAPACITY);
    let _input_thread = spawn_input_thread(input_tx);
    let ticker = tick(CLOCK_TICK);

    session.draw(&mut stdout, &app.view(cols), rows)?;
    loop {
        select! {
            recv(input_rx) -> message => {
                let Ok(event) = message else {
                    break;
                };
                if let Event::Resize(new_cols, new_rows) = event {
                    if config.width.is_none() {
                        cols = usize::from(new_cols);
                    }
                    rows = usize::from(new_rows);
                } else if let Some(input) = InputEvent::from_crossterm(&event) {
                    let flow;
                    (app, flow) = app.handle_event(&input);
                    if flow == Flow::Quit {
                        break;
                    }
                } else {
                    continue;
                }
            }
            recv(ticker) -> _ => app.tick(SystemTime::now()),
        }
        session.draw(&mut stdout, &app.view(cols), rows)?;
    }

    info!(
        depth = app.menu().depth(),
        actions = app.messages().len(),
        "termbar demo exiting"
    );
    Ok(())
}
