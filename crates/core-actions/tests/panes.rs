mod common;
use common::*;

use core_state::Mode;
use pretty_assertions::assert_eq;

#[test]
fn split_adds_focused_empty_pane() {
    let mut ed = editor_with(&["first"]);
    play(&mut ed, ":split<CR>");
    assert_eq!(ed.panes.len(), 2);
    assert_eq!(ed.panes.focused_index(), 1);
    assert_eq!(lines(&ed), vec![""]);
    assert_eq!(ed.status().text, "[No Name] (text file); 1 line at 0");
    let heights: Vec<usize> = ed
        .panes
        .panes()
        .iter()
        .map(|p| p.viewport().visible)
        .collect();
    assert_eq!(heights, vec![10, 10]);
}

#[test]
fn panes_keep_independent_modes_and_carets() {
    let mut ed = editor_with(&["top"]);
    play(&mut ed, ":split<CR>ihi");
    assert_eq!(ed.panes.focused().mode, Mode::Insert);
    play(&mut ed, "<C-Down>");
    assert_eq!(ed.panes.focused_index(), 0);
    assert_eq!(ed.panes.focused().mode, Mode::Command);
    assert_eq!(lines(&ed), vec!["top"]);
    play(&mut ed, "p");
    assert_eq!(ed.panes.focused_index(), 1);
    assert_eq!(lines(&ed), vec!["hi"]);
    assert_eq!(caret(&ed), (2, 0));
}

#[test]
fn grow_and_shrink_redistribute_height() {
    let mut ed = editor_with(&["a"]);
    play(&mut ed, ":split<CR>");
    play(&mut ed, "<S-Up><S-Up><S-Up><S-Up>");
    let heights: Vec<usize> = ed
        .panes
        .panes()
        .iter()
        .map(|p| p.viewport().visible)
        .collect();
    assert_eq!(heights, vec![6, 14]);
    for _ in 0..20 {
        play(&mut ed, "<S-Down>");
    }
    assert_eq!(ed.panes.focused().weight(), 1);
}

#[test]
fn close_key_removes_clean_pane() {
    let mut ed = editor_with(&["a"]);
    play(&mut ed, ":split<CR>:split<CR>");
    assert_eq!(ed.panes.len(), 3);
    play(&mut ed, "x");
    assert_eq!(ed.panes.len(), 2);
    assert_eq!(ed.panes.focused_index(), 0);
    assert_eq!(lines(&ed), vec!["a"]);
}

#[test]
fn exit_on_last_pane_quits() {
    let mut ed = editor_with(&["a"]);
    play(&mut ed, ":split<CR>");
    let r = play(&mut ed, ":exit<CR>");
    assert!(!r.quit);
    assert_eq!(ed.panes.len(), 1);
    let r = play(&mut ed, ":close<CR>");
    assert!(r.quit);
    assert!(ed.should_quit());
}

#[test]
fn focus_change_marks_buffer_replaced() {
    let mut ed = editor_with(&["a", "b"]);
    let r = play(&mut ed, "<Down>");
    assert!(r.dirty);
    assert!(!r.buffer_replaced);
    let r = play(&mut ed, ":split<CR>");
    assert!(r.buffer_replaced);
    let r = play(&mut ed, "<C-Down>");
    assert!(r.buffer_replaced);
    assert_eq!(ed.panes.focused_index(), 0);
    let r = play(&mut ed, "<Down>");
    assert!(!r.dirty, "caret already on the last line");
}
