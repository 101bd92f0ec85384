use std::error::Error;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use log::warn;

/// Append-only failure log.
///
/// One record per failed conversion: timestamp, message, debug context, and
/// every nested cause. The file is never rotated or truncated.
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ErrorLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Best effort: a record that cannot be written is reported through `log`
    /// and otherwise dropped.
    pub fn append(&self, err: &(dyn Error + 'static)) {
        let record = format_record(Local::now(), err);
        if let Err(e) = self.write(&record) {
            warn!("Could not write to error log {}: {}", self.path.display(), e);
        }
    }

    fn write(&self, record: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(record.as_bytes())?;
        file.flush()
    }
}

pub fn format_record(timestamp: DateTime<Local>, err: &(dyn Error + 'static)) -> String {
    let mut record = format!(
        "{}: {}\n{:?}\n",
        timestamp.format("%Y-%m-%d %H:%M:%S"),
        err,
        err
    );
    let mut cause = err.source();
    while let Some(inner) = cause {
        record.push_str(&format!("Inner cause: {}\n{:?}\n", inner, inner));
        cause = inner.source();
    }
    record
}
