//! Log file sink

use crate::core::{LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Open (creating if needed) a log file for writing.
///
/// With `truncate` the existing content is discarded, otherwise new lines are
/// appended after it. The file is unbuffered, so every log line reaches the
/// OS as soon as it is written.
pub fn open_log_file(path: impl AsRef<Path>, truncate: bool) -> Result<File> {
    let path = path.as_ref();
    let mut options = OpenOptions::new();
    options.create(true);
    if truncate {
        options.write(true).truncate(true);
    } else {
        options.append(true);
    }

    options
        .open(path)
        .map_err(|e| LoggerError::file_sink(path.display().to_string(), e.to_string()))
}
