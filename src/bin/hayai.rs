//! `hayai` - terminal text editor
//!
//! # Usage
//!
//! ```bash
//! hayai                      # empty buffer
//! hayai notes.txt            # open (or create) a file
//! hayai notes.txt --log-file /tmp/hayai.log
//! ```
//!
//! Ctrl-S saves, Ctrl-F searches, Ctrl-Q quits.

use clap::Parser;
use hayai::config::{DEFAULT_MESSAGE_TIMEOUT, DEFAULT_QUIT_TIMES};
use hayai::terminal::{clear_screen, write_frame};
use hayai::{Editor, EditorOptions, KeyReader, Outcome, enable_raw_mode, terminal_size, window_size};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

const HELP_MESSAGE: &str = "Ctrl-Q to Quit | Ctrl-S to Save | Ctrl-F to Find";

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "HAYAI_LOG";

/// A small terminal text editor
#[derive(Parser, Debug)]
#[command(name = "hayai")]
#[command(version, about, long_about = None)]
struct Args {
    /// File to edit. Created on first save if it does not exist.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Write diagnostics to this file (filter with HAYAI_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Extra Ctrl-Q presses required to quit with unsaved changes
    #[arg(long, value_name = "N", default_value_t = DEFAULT_QUIT_TIMES)]
    quit_times: u32,

    /// Seconds a status message stays visible
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_MESSAGE_TIMEOUT.as_secs())]
    message_timeout: u64,
}

impl Args {
    fn options(&self) -> EditorOptions {
        EditorOptions {
            quit_times: self.quit_times,
            message_timeout: Duration::from_secs(self.message_timeout),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(err) = init_logging(path) {
            eprintln!("hayai: can't open log file {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "fatal");
            let _ = clear_screen(&mut io::stdout());
            eprintln!("hayai: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Log to a file; the terminal itself belongs to the editor.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(args: &Args) -> hayai::Result<()> {
    let _raw_guard = enable_raw_mode()?;
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();

    let (rows, cols) = window_size(&mut stdin, &mut stdout)?;
    tracing::info!(rows, cols, "starting");

    let mut editor = Editor::new(rows, cols, args.options());
    editor.set_status(HELP_MESSAGE);
    if let Some(path) = &args.file {
        editor.open(path);
    }

    let mut keys = KeyReader::new(stdin);
    loop {
        if let Ok((rows, cols)) = terminal_size() {
            editor.resize(usize::from(rows), usize::from(cols));
        }
        write_frame(&mut stdout, &editor.render(Instant::now()))?;

        let Some(key) = keys.read_key()? else {
            continue;
        };
        if editor.process_key(key) == Outcome::Quit {
            break;
        }
    }

    clear_screen(&mut stdout)?;
    Ok(())
}
