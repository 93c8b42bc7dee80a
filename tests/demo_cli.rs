use std::process::Command;

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn demo_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_termbar-demo").expect("termbar-demo test binary not built")
}

fn run_script(args: &[&str]) -> std::process::Output {
    Command::new(demo_bin())
        .env_remove("TERMBAR_THEME")
        .args(args)
        .output()
        .expect("run termbar-demo --script")
}

#[test]
fn demo_help_mentions_name() {
    let output = Command::new(demo_bin())
        .arg("--help")
        .output()
        .expect("run termbar-demo --help");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("Termbar demo"));
    assert!(combined.contains("--script"));
}

#[test]
fn script_prints_frame_with_open_dropdown() {
    let output = run_script(&["--theme", "plain", "--width", "60", "--script", "esc,F"]);
    assert!(output.status.success(), "{}", combined_output(&output));
    let frame = String::from_utf8_lossy(&output.stdout);
    let visible = strip_ansi_escapes::strip_str(frame.as_ref());
    let rows: Vec<&str> = visible.lines().collect();
    assert!(rows[0].starts_with(" File  Edit "));
    assert!(rows[1].starts_with('+'));
    assert!(rows[2].starts_with("| New"));
    assert!(visible.contains("| Exit"));
}

#[test]
fn script_actions_are_appended_to_content() {
    let output = run_script(&["--theme", "plain", "--script", "esc,F,S,esc,esc"]);
    assert!(output.status.success());
    let visible = strip_ansi_escapes::strip_str(String::from_utf8_lossy(&output.stdout).as_ref());
    assert!(visible.contains("File Saved"));
    assert!(!visible.contains("| New"));
}

#[test]
fn script_quit_command_stops_replay() {
    let output = run_script(&["--theme", "plain", "--script", "esc,F,x,H"]);
    assert!(output.status.success());
    let visible = strip_ansi_escapes::strip_str(String::from_utf8_lossy(&output.stdout).as_ref());
    assert!(visible.contains("| Exit"), "File dropdown still drawn when quit fired");
    assert!(!visible.contains("About"));
}

#[test]
fn invalid_theme_is_rejected() {
    let output = run_script(&["--theme", "sepia", "--script", "esc"]);
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("--theme"));
}
