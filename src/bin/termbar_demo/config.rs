//! Command-line options for the demo host.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use termbar::{entries_from_json, Key, MenuEntry, Theme};

use crate::menus::default_menu;

const MIN_WIDTH: u16 = 20;
const MAX_WIDTH: u16 = 1000;
const DEFAULT_SCRIPT_WIDTH: u16 = 80;
const DEFAULT_TRACE_LOG: &str = "termbar_trace.jsonl";

/// CLI options for the termbar demo.
#[derive(Debug, Parser, Clone)]
#[command(about = "Termbar demo: a menu bar over rainbow text", author, version)]
pub(crate) struct DemoConfig {
    /// Style preset (violet, nord, mono, plain)
    #[arg(long = "theme", env = "TERMBAR_THEME", default_value = "violet")]
    pub(crate) theme_name: String,

    /// JSON file describing the menu tree (defaults to the built-in menu)
    #[arg(long = "menu-file", value_name = "PATH")]
    pub(crate) menu_file: Option<PathBuf>,

    /// Give the bar keyboard focus at startup
    #[arg(long = "start-active", default_value_t = false)]
    pub(crate) start_active: bool,

    /// Leave mouse reporting off
    #[arg(long = "no-mouse", default_value_t = false)]
    pub(crate) no_mouse: bool,

    /// Write JSON trace events to the trace log
    #[arg(long = "logs", default_value_t = false)]
    pub(crate) logs: bool,

    /// Trace log path used with --logs (defaults to termbar_trace.jsonl in the temp dir)
    #[arg(long = "log-file", env = "TERMBAR_TRACE_LOG", value_name = "PATH")]
    pub(crate) log_file: Option<PathBuf>,

    /// Replay comma separated key names without a terminal, print the last frame, and exit
    #[arg(long = "script", value_name = "KEYS")]
    pub(crate) script: Option<String>,

    /// Frame width in cells (defaults to the terminal width, or 80 with --script)
    #[arg(long = "width")]
    pub(crate) width: Option<u16>,
}

impl DemoConfig {
    /// Parse CLI arguments and validate them right away.
    pub(crate) fn parse_args() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if Theme::from_name(&self.theme_name).is_none() {
            bail!(
                "--theme must be one of {}, got '{}'",
                Theme::available().join(", "),
                self.theme_name
            );
        }
        if let Some(width) = self.width {
            if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
                bail!("--width must be between {MIN_WIDTH} and {MAX_WIDTH}, got {width}");
            }
        }
        if let Some(path) = &self.menu_file {
            if !path.is_file() {
                bail!("--menu-file {} is not a readable file", path.display());
            }
        }
        self.script_keys()?;
        Ok(())
    }

    pub(crate) fn theme(&self) -> Theme {
        Theme::from_name(&self.theme_name).unwrap_or_default()
    }

    /// Keys from `--script`, or `None` for an interactive session.
    pub(crate) fn script_keys(&self) -> Result<Option<Vec<Key>>> {
        let Some(script) = &self.script else {
            return Ok(None);
        };
        let mut keys = Vec::new();
        for name in script.split(',').map(str::trim) {
            match Key::from_name(name) {
                Some(key) => keys.push(key),
                None => bail!("--script contains an empty key name: '{script}'"),
            }
        }
        Ok(Some(keys))
    }

    /// Where trace events go, or `None` when `--logs` is off.
    pub(crate) fn trace_log_path(&self) -> Option<PathBuf> {
        if !self.logs {
            return None;
        }
        Some(
            self.log_file
                .clone()
                .unwrap_or_else(|| env::temp_dir().join(DEFAULT_TRACE_LOG)),
        )
    }

    pub(crate) fn script_width(&self) -> usize {
        usize::from(self.width.unwrap_or(DEFAULT_SCRIPT_WIDTH))
    }

    /// Menu tree from `--menu-file`, or the built-in one.
    pub(crate) fn load_entries(&self) -> Result<Arc<[MenuEntry]>> {
        let Some(path) = &self.menu_file else {
            return Ok(default_menu().into());
        };
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read menu file {}", path.display()))?;
        let entries = entries_from_json(&json)
            .with_context(|| format!("invalid menu file {}", path.display()))?;
        if entries.is_empty() {
            bail!("menu file {} has no entries", path.display());
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static MENU_COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn parse(args: &[&str]) -> DemoConfig {
        let mut argv = vec!["termbar-demo"];
        argv.extend_from_slice(args);
        DemoConfig::parse_from(argv)
    }

    fn temp_menu(contents: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let count = MENU_COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = env::temp_dir().join(format!(
            "termbar_menu_{}_{nanos}_{count}.json",
            std::process::id()
        ));
        fs::write(&path, contents).expect("write temp menu");
        path
    }

    #[test]
    fn defaults_validate() {
        let config = parse(&[]);
        assert!(config.validate().is_ok());
        assert!(config.script_keys().unwrap().is_none());
        assert_eq!(config.script_width(), 80);
    }

    #[test]
    fn trace_log_only_with_logs_flag() {
        assert!(parse(&["--log-file", "/tmp/termbar.jsonl"]).trace_log_path().is_none());
        let config = parse(&["--logs", "--log-file", "/tmp/termbar.jsonl"]);
        assert_eq!(
            config.trace_log_path(),
            Some(PathBuf::from("/tmp/termbar.jsonl"))
        );
    }

    #[test]
    fn rejects_unknown_theme() {
        let config = parse(&["--theme", "sepia"]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("--theme"));
    }

    #[test]
    fn rejects_width_out_of_bounds() {
        assert!(parse(&["--width", "5"]).validate().is_err());
        assert!(parse(&["--width", "5000"]).validate().is_err());
        assert!(parse(&["--width", "20"]).validate().is_ok());
    }

    #[test]
    fn script_keys_parse_names() {
        let config = parse(&["--script", "F, down ,enter,ctrl+c"]);
        let keys = config.script_keys().unwrap().unwrap();
        assert_eq!(keys, vec![Key::Char('F'), Key::Down, Key::Enter, Key::Ctrl('c')]);
        assert!(parse(&["--script", "F,,down"]).validate().is_err());
    }

    #[test]
    fn missing_menu_file_is_rejected() {
        let config = parse(&["--menu-file", "/nonexistent/termbar/menu.json"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn menu_file_loads_entries() {
        let path = temp_menu(r#"[{"label": "Go", "hotkey": "G", "action": {"custom": "went"}}]"#);
        let config = parse(&["--menu-file", path.to_str().unwrap()]);
        assert!(config.validate().is_ok());
        let entries = config.load_entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Go");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn empty_or_malformed_menu_file_is_an_error() {
        let empty = temp_menu("[]");
        let config = parse(&["--menu-file", empty.to_str().unwrap()]);
        assert!(config.load_entries().is_err());
        let _ = fs::remove_file(empty);

        let broken = temp_menu("{not json");
        let config = parse(&["--menu-file", broken.to_str().unwrap()]);
        let err = config.load_entries().unwrap_err();
        assert!(format!("{err:#}").contains("invalid menu file"));
        let _ = fs::remove_file(broken);
    }
}
