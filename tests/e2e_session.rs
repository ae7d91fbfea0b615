//! End-to-end editing sessions.
//!
//! Raw terminal bytes go in through the key decoder, frames come out through
//! a `vt100` screen. Covers the full path: decode, edit, scroll, highlight,
//! render.

mod common;

use common::*;
use hayai::{Outcome, SearchState};

// ============================================
// Startup screen
// ============================================

#[test]
fn test_empty_session_shows_welcome_and_tildes() {
    let mut s = Session::new(24, 80);
    let lines = s.lines();

    assert_eq!(lines[0], "~");
    assert!(lines[7].starts_with('~'));
    assert!(lines[7].contains("Hayai Editor -- version"));
    assert_eq!(lines[21], "~");
    assert!(lines[22].starts_with("[No Name] - 0 lines"));
    assert!(lines[22].ends_with("1/0"));
    assert_eq!(lines[23], "");
}

#[test]
fn test_status_bar_is_inverted() {
    let mut s = Session::with_lines(6, 30, &["a"]);
    s.draw();
    assert!(s.screen().cell(4, 0).unwrap().inverse());
    assert!(s.screen().cell(4, 29).unwrap().inverse());
    assert!(!s.screen().cell(0, 0).unwrap().inverse());
}

#[test]
fn test_small_document_screen() {
    let mut s = Session::with_lines(6, 30, &["fn main() {", "\tlet x = 1;", "}"]);
    let screen = s.lines().join("\n");
    insta::assert_snapshot!(screen.trim_end(), @r"
fn main() {
        let x = 1;
}
~
[No Name] - 3 lines        1/3
");
}

#[test]
fn test_help_message_on_message_bar() {
    let mut s = Session::new(10, 60);
    s.editor
        .set_status("Ctrl-Q to Quit | Ctrl-S to Save | Ctrl-F to Find");
    assert_eq!(
        s.row_text(9),
        "Ctrl-Q to Quit | Ctrl-S to Save | Ctrl-F to Find"
    );
}

// ============================================
// Editing through the decoder
// ============================================

#[test]
fn test_typing_shows_text_and_modified_flag() {
    let mut s = Session::new(10, 40);
    s.type_text("hello");
    s.send(ENTER);
    s.type_text("world");

    let lines = s.lines();
    assert_eq!(lines[0], "hello");
    assert_eq!(lines[1], "world");
    assert!(lines[8].starts_with("[No Name] - 2 lines [Modified]"));
    assert!(lines[8].ends_with("2/2"));
    assert_eq!(s.screen().cursor_position(), (1, 5));
}

#[test]
fn test_tab_renders_to_next_stop_and_cursor_follows() {
    let mut s = Session::new(6, 40);
    s.send(b"\tx");
    assert_eq!(s.row_text(0), "        x");
    assert_eq!(s.screen().cursor_position(), (0, 9));
}

#[test]
fn test_backspace_joins_lines() {
    let mut s = Session::with_lines(8, 40, &["foo", "bar"]);
    s.send(DOWN);
    s.send(BACKSPACE);
    assert_eq!(s.row_text(0), "foobar");
    assert_eq!(s.row_text(1), "~");
    assert_eq!(s.screen().cursor_position(), (0, 3));
}

#[test]
fn test_delete_key_removes_char_under_cursor() {
    let mut s = Session::with_lines(8, 40, &["abc"]);
    s.send(RIGHT);
    s.send(DELETE);
    assert_eq!(s.row_text(0), "ac");
}

#[test]
fn test_arrow_keys_wrap_between_lines() {
    let mut s = Session::with_lines(8, 40, &["ab", "cd"]);
    s.send(b"\x1b[F");
    s.send(RIGHT);
    s.draw();
    assert_eq!(s.screen().cursor_position(), (1, 0));
    s.send(LEFT);
    s.draw();
    assert_eq!(s.screen().cursor_position(), (0, 2));
}

// ============================================
// Highlighting
// ============================================

#[test]
fn test_numbers_are_red() {
    let mut s = Session::with_lines(6, 40, &["x = 42 + y2"]);
    s.draw();
    let fg = |col| s.screen().cell(0, col).unwrap().fgcolor();

    assert_eq!(fg(0), vt100::Color::Default);
    assert_eq!(fg(4), vt100::Color::Idx(1));
    assert_eq!(fg(5), vt100::Color::Idx(1));
    assert_eq!(fg(6), vt100::Color::Default);
    assert_eq!(fg(10), vt100::Color::Default);
}

#[test]
fn test_frame_uses_one_escape_per_colour_run() {
    let mut s = Session::with_lines(4, 40, &["1234567"]);
    let frame = String::from_utf8(s.draw()).unwrap();
    assert_eq!(frame.matches("\x1b[31m").count(), 1);
}

// ============================================
// Scrolling
// ============================================

#[test]
fn test_vertical_scroll_follows_cursor() {
    let lines: Vec<String> = (0..50).map(|i| format!("line {i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut s = Session::with_lines(12, 40, &refs);

    for _ in 0..30 {
        s.send(DOWN);
    }
    assert_eq!(s.row_text(0), "line 21");
    assert_eq!(s.row_text(9), "line 30");
    assert_eq!(s.screen().cursor_position(), (9, 0));
}

#[test]
fn test_horizontal_scroll_on_long_line() {
    let long = "abcdefghijklmnopqrstuvwxyz";
    let mut s = Session::with_lines(5, 10, &[long, "short"]);
    s.send(b"\x1b[F");

    assert_eq!(s.row_text(0), "rstuvwxyz");
    assert_eq!(s.row_text(1), "");
    assert_eq!(s.screen().cursor_position(), (0, 9));
}

#[test]
fn test_page_down_moves_a_screen() {
    let lines: Vec<String> = (0..100).map(|i| format!("{i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut s = Session::with_lines(12, 20, &refs);

    s.send(PAGE_DOWN);
    assert_eq!(s.editor.buffer().cursor().cy, 19);
    assert_eq!(s.row_text(0), "10");
}

// ============================================
// Search
// ============================================

#[test]
fn test_search_highlights_match_in_blue() {
    let mut s = Session::with_lines(8, 60, &["hello", "world"]);
    s.send(CTRL_F);
    s.type_text("wor");

    assert_eq!(s.row_text(7), "Search wor [ESC to Cancel, ARROW_KEYS to Navigate]");
    // The matched row is scrolled to the top of the screen.
    assert_eq!(s.row_text(0), "world");
    assert_eq!(s.screen().cursor_position(), (0, 0));
    for col in 0..3 {
        assert_eq!(s.screen().cell(0, col).unwrap().fgcolor(), vt100::Color::Idx(4));
    }
    assert_eq!(s.screen().cell(0, 3).unwrap().fgcolor(), vt100::Color::Default);
}

#[test]
fn test_search_cancel_restores_everything() {
    let lines: Vec<String> = (0..40).map(|i| format!("row {i}")).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    let mut s = Session::with_lines(8, 40, &refs);
    s.send(RIGHT);

    s.send(CTRL_F);
    s.type_text("row 33");
    assert_eq!(s.row_text(0), "row 33");

    s.send(ESC);
    assert_eq!(s.editor.search_state(), SearchState::Idle);
    assert_eq!(s.row_text(0), "row 0");
    assert_eq!(s.screen().cursor_position(), (0, 1));
    assert_eq!(s.screen().cell(0, 0).unwrap().fgcolor(), vt100::Color::Default);
    assert_eq!(s.row_text(7), "");
}

#[test]
fn test_search_enter_keeps_position() {
    let mut s = Session::with_lines(8, 40, &["alpha", "beta", "gamma"]);
    s.send(CTRL_F);
    s.type_text("mm");
    s.send(ENTER);

    assert!(s.editor.prompt().is_none());
    assert_eq!(s.row_text(0), "gamma");
    assert_eq!(s.screen().cursor_position(), (0, 2));
    assert_eq!(s.screen().cell(0, 2).unwrap().fgcolor(), vt100::Color::Default);
}

#[test]
fn test_search_arrows_step_through_matches() {
    let mut s = Session::with_lines(10, 40, &["x", "a", "x", "b", "x"]);
    s.send(CTRL_F);
    s.type_text("x");
    assert_eq!(s.editor.buffer().cursor().cy, 0);
    s.send(DOWN);
    assert_eq!(s.editor.buffer().cursor().cy, 2);
    s.send(DOWN);
    assert_eq!(s.editor.buffer().cursor().cy, 4);
    s.send(DOWN);
    assert_eq!(s.editor.buffer().cursor().cy, 0);
    s.send(UP);
    assert_eq!(s.editor.buffer().cursor().cy, 4);
}

#[test]
fn test_search_without_match_keeps_cursor() {
    let mut s = Session::with_lines(8, 40, &["one", "two"]);
    s.send(DOWN);
    s.send(CTRL_F);
    s.type_text("zzz");
    assert_eq!(s.editor.search_state(), SearchState::NoMatch);
    assert_eq!(s.editor.buffer().cursor().cy, 1);
}

// ============================================
// Files and quitting
// ============================================

#[test]
fn test_open_edit_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, "first\nsecond\n").unwrap();

    let mut s = Session::new(10, 60);
    s.editor.open(&path);
    assert!(s.row_text(8).contains(" - 2 lines"));

    s.send(b"\x1b[F");
    s.type_text("!");
    assert!(s.row_text(8).contains("[Modified]"));

    s.send(CTRL_S);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "first!\nsecond\n");
    assert_eq!(s.row_text(9), "14 bytes written to disk");
    assert!(!s.row_text(8).contains("[Modified]"));
}

#[test]
fn test_save_as_through_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.txt");

    let mut s = Session::new(10, 80);
    s.type_text("text");
    s.send(CTRL_S);
    assert_eq!(s.row_text(9), "Save As :  [ESC to Cancel]");

    s.type_text(path.to_str().unwrap());
    s.send(ENTER);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "text\n");
    assert_eq!(s.row_text(9), "5 bytes written to disk");
}

#[test]
fn test_save_as_cancelled() {
    let mut s = Session::new(10, 80);
    s.type_text("text");
    let dirty = s.editor.buffer().dirty();
    s.send(CTRL_S);
    s.type_text("name");
    s.send(ESC);
    assert_eq!(s.row_text(9), "Save Aborted");
    assert_eq!(s.editor.buffer().dirty(), dirty);
    assert_eq!(s.editor.buffer().filename(), None);
}

#[test]
fn test_quit_needs_confirmation_when_dirty() {
    let mut s = Session::new(10, 80);
    s.type_text("x");

    for remaining in [3, 2, 1] {
        assert_eq!(s.send(CTRL_Q), Outcome::Continue);
        assert_eq!(
            s.row_text(9),
            format!("WARNING: File has unsaved changes. Press Ctrl + Q {remaining} times to quit.")
        );
    }
    assert_eq!(s.send(CTRL_Q), Outcome::Quit);
}

#[test]
fn test_quit_immediately_when_clean() {
    let mut s = Session::with_lines(10, 80, &["saved"]);
    assert_eq!(s.send(CTRL_Q), Outcome::Quit);
}
