//! # ach-toggle
//!
//! Toggle an ACH payment file between its two physical layouts.
//!
//! ACH files are sequences of fixed-width 94-byte records. Some systems
//! store them one record per line ("split"), others concatenate every
//! record into one unbroken line ("unsplit"). This crate detects which
//! layout a file is in and rewrites it in the other one, keeping every
//! record byte for byte.
//!
//! ## Overview
//!
//! - **Detection**: read one record, then peek at the next byte. A line
//!   terminator means split; anything else means unsplit.
//! - **Rewrite**: split input is written back concatenated; unsplit input is
//!   written with a terminator after each record.
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//! use ach_toggle::{FormatTag, LineEnding, RECORD_LENGTH, detect, rewrite};
//!
//! let input = format!("{}{}", "1".repeat(RECORD_LENGTH), "9".repeat(RECORD_LENGTH));
//! let detection = detect(&mut Cursor::new(input.into_bytes()), RECORD_LENGTH).unwrap();
//! assert_eq!(detection.format, FormatTag::Unsplit);
//!
//! let mut out = Vec::new();
//! rewrite(&mut out, detection.format, &detection.records, LineEnding::Lf).unwrap();
//! assert_eq!(out.len(), 2 * RECORD_LENGTH + 2);
//! ```

pub mod config;
pub mod detector;
pub mod error;
pub mod format;
pub mod record;
pub mod rewriter;
pub mod toggle;

pub use config::{ToggleOptions, WriteStrategy};
pub use detector::{Detection, detect};
pub use error::ToggleError;
pub use format::{FormatTag, LineEnding};
pub use record::{RECORD_LENGTH, Record, total_len};
pub use rewriter::rewrite;
pub use toggle::{Outcome, toggle_file};
