mod common;
use common::*;

use core_state::{Mode, Severity};
use pretty_assertions::assert_eq;

#[test]
fn enter_at_line_end_opens_empty_line() {
    let mut ed = editor_with(&["abc", "def"]);
    set_caret(&mut ed, 3, 0);
    play(&mut ed, "i<CR>");
    assert_eq!(lines(&ed), vec!["abc", "", "def"]);
    assert_eq!(caret(&ed), (0, 1));
}

#[test]
fn backspace_inside_indented_line() {
    let mut ed = editor_with(&["  foo", "bar"]);
    set_caret(&mut ed, 5, 0);
    play(&mut ed, "i<BS>");
    assert_eq!(lines(&ed), vec!["  fo", "bar"]);
    assert_eq!(caret(&ed), (4, 0));
}

#[test]
fn backspace_at_line_start_joins_up() {
    let mut ed = editor_with(&["ab", "cd"]);
    set_caret(&mut ed, 0, 1);
    play(&mut ed, "i<BS>");
    assert_eq!(lines(&ed), vec!["abcd"]);
    assert_eq!(caret(&ed), (2, 0));
}

#[test]
fn delete_at_line_end_joins_down() {
    let mut ed = editor_with(&["ab", "cd"]);
    set_caret(&mut ed, 2, 0);
    play(&mut ed, "i<Del>");
    assert_eq!(lines(&ed), vec!["abcd"]);
    assert_eq!(caret(&ed), (2, 0));
}

#[test]
fn line_jump_moves_to_line_end() {
    let numbered = numbered_lines(10);
    let refs: Vec<&str> = numbered.iter().map(String::as_str).collect();
    let mut ed = editor_with(&refs);
    play(&mut ed, ":5<CR>");
    assert_eq!(caret(&ed), (6, 4));
    assert_eq!(ed.panes.focused().mode, Mode::Command);
}

#[test]
fn line_jump_centers_in_long_document() {
    let numbered = numbered_lines(100);
    let refs: Vec<&str> = numbered.iter().map(String::as_str).collect();
    let mut ed = editor_with(&refs);
    play(&mut ed, ":50<CR>");
    assert_eq!(caret(&ed), (7, 49));
    assert_eq!(ed.panes.focused().viewport().scroll_offset, 39);
}

#[test]
fn invalid_line_reports_error_and_stays() {
    let numbered = numbered_lines(10);
    let refs: Vec<&str> = numbered.iter().map(String::as_str).collect();
    let mut ed = editor_with(&refs);
    play(&mut ed, ":42<CR>");
    assert_eq!(caret(&ed), (0, 0));
    let status = ed.status();
    assert_eq!(status.text, "Invalid line! Available range: 1...10");
    assert_eq!(status.severity, Some(Severity::Error));
}

#[test]
fn command_letters_are_not_inserted() {
    let mut ed = editor_with(&["text"]);
    play(&mut ed, "wbzq");
    assert_eq!(lines(&ed), vec!["text"]);
    assert!(!ed.panes.focused().is_dirty());
}

#[test]
fn typing_in_insert_then_status_reports_position() {
    let mut ed = editor_with(&[""]);
    play(&mut ed, "ihello<Esc>");
    assert_eq!(lines(&ed), vec!["hello"]);
    let status = ed.status();
    assert_eq!(status.sign, 'C');
    assert_eq!(status.text, "scratch.txt (text file); 1 line at 5");
}

#[test]
fn mode_signs_follow_transitions() {
    let mut ed = editor_with(&["x"]);
    assert_eq!(ed.status().sign, 'C');
    play(&mut ed, "i");
    assert_eq!(ed.status().sign, 'I');
    play(&mut ed, "<Esc>:");
    assert_eq!(ed.status().sign, 'X');
    play(&mut ed, "<Esc>");
    assert_eq!(ed.status().sign, 'C');
}

#[test]
fn history_browse_restores_in_progress_text() {
    let mut ed = editor_with(&["a", "b", "c"]);
    play(&mut ed, ":1<CR>:2<CR>:x");
    play(&mut ed, "<Up>");
    assert_eq!(ed.session.command_line.text(), "2");
    play(&mut ed, "<Up><Up>");
    assert_eq!(ed.session.command_line.text(), "1");
    play(&mut ed, "<Down>");
    assert_eq!(ed.session.command_line.text(), "2");
    play(&mut ed, "<Down>");
    assert_eq!(ed.session.command_line.text(), "x");
    assert_eq!(ed.status().text, ":x");
}

#[test]
fn empty_submission_is_invalid_and_not_recorded() {
    let mut ed = editor_with(&["a"]);
    play(&mut ed, ":<CR>");
    assert_eq!(ed.status().text, "Invalid command");
    assert!(ed.session.history().is_empty());
}

#[test]
fn search_then_repeat_wraps() {
    let mut ed = editor_with(&["needle one", "hay", "needle two"]);
    play(&mut ed, ":needle<CR>");
    assert_eq!(caret(&ed), (0, 2));
    assert_eq!(ed.session.last_search.as_deref(), Some("needle"));
    play(&mut ed, "r");
    assert_eq!(caret(&ed), (0, 0));
    play(&mut ed, "r");
    assert_eq!(caret(&ed), (0, 2));
}

#[test]
fn failed_search_forgets_pattern() {
    let mut ed = editor_with(&["alpha", "beta"]);
    play(&mut ed, ":beta<CR>");
    assert_eq!(caret(&ed), (0, 1));
    play(&mut ed, ":gamma<CR>");
    assert_eq!(caret(&ed), (0, 1));
    assert_eq!(ed.status().text, "Unable to find 'gamma'");
    assert_eq!(ed.session.last_search, None);
    play(&mut ed, "r");
    assert_eq!(caret(&ed), (0, 1));
}

#[test]
fn cut_copy_paste_shortcuts() {
    let mut ed = editor_with(&["one", "two", "three"]);
    play(&mut ed, "dv");
    assert_eq!(lines(&ed), vec!["two", "one", "three"]);
    play(&mut ed, "yv");
    assert_eq!(lines(&ed), vec!["two", "one", "one", "three"]);
}

#[test]
fn open_line_below_keeps_indent() {
    let mut ed = editor_with(&["    body", "end"]);
    play(&mut ed, "ox");
    assert_eq!(lines(&ed), vec!["    body", "    x", "end"]);
    assert_eq!(ed.panes.focused().mode, Mode::Insert);
}

#[test]
fn caret_stays_visible_while_scrolling_down() {
    let numbered = numbered_lines(60);
    let refs: Vec<&str> = numbered.iter().map(String::as_str).collect();
    let mut ed = editor_sized(&refs, 10);
    let mut last_offset = 0;
    for _ in 0..59 {
        play(&mut ed, "<Down>");
        let pane = ed.panes.focused();
        let offset = pane.viewport().scroll_offset;
        let row = pane.caret().row;
        assert!(offset >= last_offset);
        assert!(row >= offset && row < offset + 10);
        last_offset = offset;
    }
    assert_eq!(last_offset, 50);
}

#[test]
fn word_jumps_follow_tokens() {
    let mut ed = editor_with(&["let x = 1;", "done"]);
    play(&mut ed, "w");
    assert_eq!(caret(&ed), (3, 0));
    play(&mut ed, "<C-Right>");
    assert_eq!(caret(&ed), (5, 0));
    play(&mut ed, "b");
    assert_eq!(caret(&ed), (4, 0));
}
