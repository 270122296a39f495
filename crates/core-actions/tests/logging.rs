mod common;
use common::*;

use tracing::Level;

#[test]
fn command_failures_are_logged_with_target() {
    let logs = capture_logs(Level::WARN, || {
        let mut ed = editor_with(&["a"]);
        play(&mut ed, ":missing<CR>");
    });
    assert!(logs.contains("command_failed"), "{logs}");
    assert!(logs.contains("Unable to find 'missing'"), "{logs}");
}

#[test]
fn help_listing_is_logged_at_info() {
    let logs = capture_logs(Level::INFO, || {
        let mut ed = editor_with(&["a"]);
        play(&mut ed, ":help<CR>");
        assert!(ed.status().text.starts_with("Usage of open"));
    });
    assert!(logs.contains("Usage of split"), "{logs}");
    assert!(logs.contains("command_execute"), "{logs}");
}

#[test]
fn save_failure_is_logged_as_error() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("no_such_dir").join("f.txt");
    let logs = capture_logs(Level::ERROR, || {
        let mut ed = editor_with(&["a"]);
        let err = ed
            .execute_command(&format!("save '{}'", target.display()))
            .unwrap_err();
        assert!(err.to_string().starts_with("Unable to save"));
    });
    assert!(logs.contains("file_write_error"), "{logs}");
}
