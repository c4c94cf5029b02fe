use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{AppError, AppResult, SinkError};

/// Writes one delay (whole microseconds) per line, newline terminated, no header.
///
/// # Errors
///
/// Returns an error when the file cannot be created or written.
pub fn write_delays(path: &Path, delays: &[u64]) -> AppResult<()> {
    let to_sink_error = |err: std::io::Error| {
        AppError::sink(SinkError::WriteDelays {
            path: path.to_path_buf(),
            source: err,
        })
    };

    let file = File::create(path).map_err(to_sink_error)?;
    let mut writer = BufWriter::new(file);
    for delay in delays {
        writeln!(writer, "{}", delay).map_err(to_sink_error)?;
    }
    writer.flush().map_err(to_sink_error)
}
