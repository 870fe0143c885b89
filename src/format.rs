//! Physical layouts an ACH file can be stored in.

use std::fmt;

/// Classification produced by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatTag {
    /// One record per line.
    Split,
    /// All records concatenated on a single line.
    Unsplit,
    /// The detector ran out of input before it could decide.
    Undetermined,
}

impl FormatTag {
    /// The layout a file in this format is toggled into.
    pub fn opposite(self) -> Option<FormatTag> {
        match self {
            FormatTag::Split => Some(FormatTag::Unsplit),
            FormatTag::Unsplit => Some(FormatTag::Split),
            FormatTag::Undetermined => None,
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatTag::Split => "split",
            FormatTag::Unsplit => "unsplit",
            FormatTag::Undetermined => "undetermined",
        };
        f.write_str(name)
    }
}

/// Terminator written after each record in split output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_bytes(self) -> &'static [u8] {
        match self {
            LineEnding::Lf => b"\n",
            LineEnding::CrLf => b"\r\n",
        }
    }
}
