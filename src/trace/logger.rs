use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

use crate::trace::trace::BindEvent;

/// Append-only JSONL sink for [`BindEvent`]s.
///
/// Logging is best effort: open, serialize, or write failures downgrade to a
/// warning on stderr and never surface to the binding call.
pub struct TraceLogger {
    sink: Option<Mutex<File>>,
}

impl TraceLogger {
    pub fn new(path: &str) -> Self {
        let file = OpenOptions::new().create(true).append(true).open(path);

        match file {
            Ok(file) => Self {
                sink: Some(Mutex::new(file)),
            },
            Err(e) => {
                eprintln!("Warning: could not open trace file '{}': {}", path, e);
                Self { sink: None }
            }
        }
    }

    /// A logger that drops everything.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn log(&self, event: &BindEvent) {
        let Some(sink) = &self.sink else {
            return;
        };

        let line = match serde_json::to_string(event) {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Warning: failed to serialize trace event: {}", e);
                return;
            }
        };

        let mut file = match sink.lock() {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Warning: trace logger lock poisoned: {}", e);
                return;
            }
        };

        if let Err(e) = writeln!(file, "{}", line) {
            eprintln!("Warning: failed to write trace event: {}", e);
        }
    }
}
