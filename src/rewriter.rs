//! Writes a record sequence back out in the opposite layout.

use std::io::{self, Write};

use crate::format::{FormatTag, LineEnding};
use crate::record::Record;

/// Write `records` in the layout opposite to `source` and flush.
///
/// Split input is written back concatenated; unsplit input is written with
/// `line_ending` after every record. Returns the number of bytes written.
///
/// # Errors
///
/// Returns `InvalidInput` without writing anything when `source` is
/// [`FormatTag::Undetermined`], otherwise any error from the writer.
pub fn rewrite<W: Write>(
    writer: &mut W,
    source: FormatTag,
    records: &[Record],
    line_ending: LineEnding,
) -> io::Result<usize> {
    let target = source.opposite().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "cannot rewrite a file of undetermined format",
        )
    })?;

    let mut written = 0;
    for record in records {
        writer.write_all(record.as_bytes())?;
        written += record.len();
        if target == FormatTag::Split {
            let terminator = line_ending.as_bytes();
            writer.write_all(terminator)?;
            written += terminator.len();
        }
    }
    writer.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(lines: &[&str]) -> Vec<Record> {
        lines.iter().map(|l| Record::from_str(l)).collect()
    }

    #[test]
    fn test_split_source_is_concatenated() {
        let mut out = Vec::new();
        let n = rewrite(
            &mut out,
            FormatTag::Split,
            &records(&["AAA", "BBB"]),
            LineEnding::Lf,
        )
        .unwrap();
        assert_eq!(out, b"AAABBB");
        assert_eq!(n, 6);
    }

    #[test]
    fn test_unsplit_source_gets_terminators() {
        let mut out = Vec::new();
        let n = rewrite(
            &mut out,
            FormatTag::Unsplit,
            &records(&["AAA", "BBB"]),
            LineEnding::Lf,
        )
        .unwrap();
        assert_eq!(out, b"AAA\nBBB\n");
        assert_eq!(n, 8);
    }

    #[test]
    fn test_crlf_line_ending() {
        let mut out = Vec::new();
        rewrite(
            &mut out,
            FormatTag::Unsplit,
            &records(&["AAA", "BBB"]),
            LineEnding::CrLf,
        )
        .unwrap();
        assert_eq!(out, b"AAA\r\nBBB\r\n");
    }

    #[test]
    fn test_undetermined_writes_nothing() {
        let mut out = Vec::new();
        let err = rewrite(
            &mut out,
            FormatTag::Undetermined,
            &records(&["AAA"]),
            LineEnding::Lf,
        )
        .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(out.is_empty());
    }
}
