//! Format detection and record extraction.
//!
//! The detector reads one record's worth of bytes and then peeks at the
//! byte that follows. A line terminator there means the file is already
//! split; anything else means the records run together. Once the layout is
//! known the whole file is read into a record sequence for the rewriter.

use std::io::{self, BufRead, Read, Seek, SeekFrom};

use log::{debug, warn};

use crate::format::FormatTag;
use crate::record::Record;

/// Result of one detection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub format: FormatTag,
    /// Records in file order. Empty when the format is undetermined.
    pub records: Vec<Record>,
}

/// Classify the stream and extract its records.
///
/// The reader must be positioned at offset 0. For split input the stream is
/// rewound and read again line by line.
///
/// # Errors
///
/// Returns any I/O error from the reader, or `InvalidInput` when
/// `record_len` is zero.
pub fn detect<R: BufRead + Seek>(reader: &mut R, record_len: usize) -> io::Result<Detection> {
    if record_len == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "record length must be at least 1",
        ));
    }

    let first = read_block(reader, record_len)?;

    let next = reader.fill_buf()?.first().copied();
    let Some(next) = next else {
        warn!(
            "could not read position {} to determine the format; nothing to do",
            record_len + 1
        );
        return Ok(Detection {
            format: FormatTag::Undetermined,
            records: Vec::new(),
        });
    };

    if next == b'\n' || next == b'\r' {
        debug!("terminator found at position {}: split", record_len + 1);
        reader.seek(SeekFrom::Start(0))?;
        let mut records = Vec::new();
        while let Some(line) = read_line(reader)? {
            records.push(Record::from_bytes(line));
        }
        return Ok(Detection {
            format: FormatTag::Split,
            records,
        });
    }

    debug!("no terminator at position {}: unsplit", record_len + 1);
    let mut records = vec![Record::from_bytes(first)];
    loop {
        let block = read_block(reader, record_len)?;
        if block.is_empty() {
            break;
        }
        records.push(Record::from_bytes(block));
    }
    Ok(Detection {
        format: FormatTag::Unsplit,
        records,
    })
}

/// Read up to `len` bytes. Fewer are returned only at end of stream.
fn read_block<R: Read>(reader: &mut R, len: usize) -> io::Result<Vec<u8>> {
    let mut block = Vec::with_capacity(len);
    reader.by_ref().take(len as u64).read_to_end(&mut block)?;
    Ok(block)
}

/// Read one line ended by `\n`, `\r` or `\r\n`, terminator excluded.
///
/// Returns `None` at end of stream. A last line without a terminator is
/// still returned.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let mut line = Vec::new();
    let mut read_any = false;
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(read_any.then_some(line));
        }
        read_any = true;
        match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) => {
                let terminator = buf[i];
                line.extend_from_slice(&buf[..i]);
                reader.consume(i + 1);
                if terminator == b'\r' && reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                return Ok(Some(line));
            }
            None => {
                let n = buf.len();
                line.extend_from_slice(buf);
                reader.consume(n);
            }
        }
    }
}
