//! Toggle a file on disk between split and unsplit layouts.
//!
//! The run is strictly sequential: the read handle is dropped before the
//! file is opened for writing, since the write truncates the same path.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::config::{ToggleOptions, WriteStrategy};
use crate::detector::{Detection, detect};
use crate::error::ToggleError;
use crate::format::{FormatTag, LineEnding};
use crate::record::{Record, total_len};
use crate::rewriter::rewrite;

/// What a toggle run did. Only `Toggled` modified the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file cannot hold more than one record.
    TooShort { len: u64, record_len: usize },
    /// End of stream was hit while peeking past the first record.
    Undetermined { record_len: usize },
    Toggled {
        from: FormatTag,
        to: FormatTag,
        records: usize,
        bytes_written: usize,
    },
}

impl Outcome {
    /// Console text describing the outcome.
    pub fn message(&self) -> String {
        match self {
            Outcome::TooShort { len, record_len } => format!(
                "File is {len} bytes long; it must be longer than {record_len} bytes \
                 to contain more than one record. Nothing to do."
            ),
            Outcome::Undetermined { record_len } => format!(
                "Could not read position {} to tell whether the file is split or unsplit. \
                 Nothing to do.",
                record_len + 1
            ),
            Outcome::Toggled {
                from,
                to,
                records,
                bytes_written,
            } => format!("Toggled {from} -> {to}: {records} records, {bytes_written} bytes written"),
        }
    }
}

/// Detect the layout of the file at `path` and overwrite it with the
/// opposite layout.
///
/// # Errors
///
/// Any I/O failure is returned as [`ToggleError`]. With
/// [`WriteStrategy::InPlace`] a failure during the write phase leaves the
/// file truncated or partially written.
pub fn toggle_file(path: &Path, opts: &ToggleOptions) -> Result<Outcome, ToggleError> {
    let detection = match read_phase(path, opts.record_len)? {
        ReadPhase::TooShort(len) => {
            return Ok(Outcome::TooShort {
                len,
                record_len: opts.record_len,
            });
        }
        ReadPhase::Detected(detection) => detection,
    };

    let source = detection.format;
    let Some(target) = source.opposite() else {
        return Ok(Outcome::Undetermined {
            record_len: opts.record_len,
        });
    };
    debug!(
        "{}: {} records, {} payload bytes",
        path.display(),
        detection.records.len(),
        total_len(&detection.records)
    );

    let bytes_written = match opts.write_strategy {
        WriteStrategy::InPlace => {
            write_in_place(path, source, &detection.records, opts.line_ending)?
        }
        WriteStrategy::AtomicRename => {
            write_atomic(path, source, &detection.records, opts.line_ending)?
        }
    };

    info!("{}: toggled {source} -> {target}", path.display());
    Ok(Outcome::Toggled {
        from: source,
        to: target,
        records: detection.records.len(),
        bytes_written,
    })
}

enum ReadPhase {
    TooShort(u64),
    Detected(Detection),
}

/// Open, size-check and detect. The read handle is closed on return.
fn read_phase(path: &Path, record_len: usize) -> Result<ReadPhase, ToggleError> {
    let file = File::open(path).map_err(|e| ToggleError::io(path, e))?;
    let len = file.metadata().map_err(|e| ToggleError::io(path, e))?.len();
    debug!("{}: {len} bytes", path.display());
    if len <= record_len as u64 {
        return Ok(ReadPhase::TooShort(len));
    }

    let mut reader = BufReader::new(file);
    let detection = detect(&mut reader, record_len).map_err(|e| ToggleError::io(path, e))?;
    debug!("{}: detected {}", path.display(), detection.format);
    Ok(ReadPhase::Detected(detection))
}

fn write_in_place(
    path: &Path,
    source: FormatTag,
    records: &[Record],
    line_ending: LineEnding,
) -> Result<usize, ToggleError> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| ToggleError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    rewrite(&mut writer, source, records, line_ending).map_err(|e| ToggleError::io(path, e))
}

fn write_atomic(
    path: &Path,
    source: FormatTag,
    records: &[Record],
    line_ending: LineEnding,
) -> Result<usize, ToggleError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ToggleError::io(dir, e))?;
    let tmp_path = tmp.path().to_path_buf();

    let written = {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        rewrite(&mut writer, source, records, line_ending)
            .map_err(|e| ToggleError::io(&tmp_path, e))?
    };
    let perms = fs::metadata(path)
        .map_err(|e| ToggleError::io(path, e))?
        .permissions();
    tmp.as_file()
        .set_permissions(perms)
        .map_err(|e| ToggleError::io(&tmp_path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| ToggleError::io(&tmp_path, e))?;

    tmp.persist(path).map_err(|e| ToggleError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(written)
}
