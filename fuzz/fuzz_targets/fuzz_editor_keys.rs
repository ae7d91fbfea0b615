//! Fuzz target for the editing session.
//!
//! Decodes arbitrary bytes into keys, drives an editor with them and renders
//! after every key. The cursor must stay inside the document throughout.

#![no_main]

use hayai::{Editor, EditorOptions, KeyReader, Outcome};
use libfuzzer_sys::fuzz_target;
use std::time::Instant;

fuzz_target!(|data: &[u8]| {
    let mut editor = Editor::new(8, 20, EditorOptions::default());
    let mut keys = KeyReader::new(data);

    while let Ok(Some(key)) = keys.read_key() {
        // Saving would touch the file system.
        if key.is_ctrl('s') {
            continue;
        }
        if editor.process_key(key) == Outcome::Quit {
            break;
        }
        let _ = editor.render(Instant::now());

        let buffer = editor.buffer();
        let cursor = buffer.cursor();
        assert!(cursor.cy <= buffer.len());
        assert!(cursor.cx <= buffer.row_len(cursor.cy));
    }
});
