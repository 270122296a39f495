#![cfg(unix)]

use std::time::{Duration, Instant};

use core_model::{Pane, PaneStack};
use core_state::Mode;
use core_stream::ProcessStream;

fn spawn(script: &str) -> ProcessStream {
    ProcessStream::spawn(&["sh".to_string(), "-c".to_string(), script.to_string()]).unwrap()
}

fn tick_until_finished(pane: &mut Pane) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        pane.tick_stream();
        if pane.buffer().to_text().contains("Process finished") {
            return;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    panic!("process did not finish: {:?}", pane.buffer().lines());
}

#[test]
fn output_is_appended_and_exit_reported() {
    let mut pane = Pane::stream(spawn("printf 'one\\ntwo\\n'; exit 2"));
    assert!(pane.is_stream());
    assert!(pane.document_id().unwrap().starts_with("terminal_process_"));
    assert_eq!(pane.mode, Mode::Insert);
    tick_until_finished(&mut pane);
    assert_eq!(
        pane.buffer().lines(),
        &["one", "two", "", "", "Process finished with exit code 2"]
    );
    // Caret follows the output in insert mode.
    assert_eq!(pane.caret().row, 4);
    assert!(!pane.is_dirty());
}

#[test]
fn caret_stays_put_outside_insert_mode() {
    let mut pane = Pane::stream(spawn("echo hi"));
    pane.mode = Mode::Command;
    tick_until_finished(&mut pane);
    assert_eq!(pane.caret().cell(), (0, 0));
    assert_eq!(pane.tokens().len(), pane.buffer().line_count());
}

#[test]
fn closing_a_stream_pane_kills_the_process() {
    let mut stack = PaneStack::default();
    stack.resize(80, 20);
    stack.add(Pane::stream(spawn("sleep 30")));
    let started = Instant::now();
    let closed = stack.remove_focused();
    assert!(closed.is_some());
    assert!(started.elapsed() < Duration::from_secs(10));
    assert_eq!(stack.len(), 1);
}
