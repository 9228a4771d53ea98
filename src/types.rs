//! Core types for string extraction.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Byte order of the two-byte code units recognized by the 16-bit scanner.
///
/// Little-endian text stores the character byte first (`H\0i\0`),
/// big-endian the null byte first (`\0H\0i`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    #[default]
    Little,
    Big,
}

/// Error returned when an endianness selector is not `b` or `l`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized endianness {0:?} (expected \"b\" or \"l\")")]
pub struct ParseEndiannessError(String);

impl FromStr for Endianness {
    type Err = ParseEndiannessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l" | "little" => Ok(Endianness::Little),
            "b" | "big" => Ok(Endianness::Big),
            other => Err(ParseEndiannessError(other.to_string())),
        }
    }
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => f.write_str("little"),
            Endianness::Big => f.write_str("big"),
        }
    }
}

/// A printable run found in a scanned buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedString {
    /// Zero-based byte offset where the run begins.
    pub offset: usize,
    /// Decoded text of the run. Null bytes of 16-bit runs are stripped;
    /// the only control character that can appear is tab.
    pub text: String,
}
