//! Printable-run scanning over in-memory buffers.
//!
//! Two recognizers cover the text a triage pass cares about: plain ASCII
//! runs, and the null-interleaved byte pattern of English-language UTF-16
//! (one printable byte per code unit, the other byte zero). Both collapse
//! into a single byte-level regex per endianness: the null byte is optional,
//! so an ASCII run and a 16-bit run match the same pattern, and the `{n,}`
//! quantifier enforces the minimum length in characters.
//!
//! The scan is left to right, greedy, and non-overlapping. A maximal run is
//! reported exactly once with the byte offset where it begins.

use regex::bytes::{Matches, Regex};
use thiserror::Error;

use crate::types::{Endianness, ExtractedString};

/// Error building a scanner from caller-supplied configuration.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The minimum run length must be a positive character count.
    #[error("minimum run length must be at least 1, got {0}")]
    InvalidMinimum(usize),
    /// The minimum was large enough to break pattern compilation.
    #[error("failed to compile scan pattern")]
    Pattern(#[from] regex::Error),
}

/// A compiled recognizer for one endianness and minimum run length.
///
/// Building the scanner validates the configuration; scanning itself cannot
/// fail, since the pattern only admits bytes that decode cleanly.
#[derive(Debug)]
pub struct StringScanner {
    pattern: Regex,
}

impl StringScanner {
    pub fn new(endianness: Endianness, min_length: usize) -> Result<Self, ScanError> {
        if min_length < 1 {
            return Err(ScanError::InvalidMinimum(min_length));
        }
        // Each repeat consumes exactly one printable byte (tab or space
        // through tilde) plus an optional null on the endianness-appropriate
        // side, so the repeat count is the character count.
        let pattern = match endianness {
            Endianness::Little => format!(r"(?-u:(?:[\t\x20-\x7E]\x00?){{{min_length},}})"),
            Endianness::Big => format!(r"(?-u:(?:\x00?[\t\x20-\x7E]){{{min_length},}})"),
        };
        Ok(StringScanner {
            pattern: Regex::new(&pattern)?,
        })
    }

    /// Scan `data` lazily, yielding runs in ascending offset order.
    ///
    /// The iterator is forward-only and computes matches on demand; dropping
    /// it early stops the scan.
    pub fn scan<'s, 'd>(&'s self, data: &'d [u8]) -> Scan<'s, 'd> {
        Scan {
            matches: self.pattern.find_iter(data),
        }
    }
}

/// Lazy iterator over the printable runs of one buffer.
pub struct Scan<'s, 'd> {
    matches: Matches<'s, 'd>,
}

impl Iterator for Scan<'_, '_> {
    type Item = ExtractedString;

    fn next(&mut self) -> Option<ExtractedString> {
        let m = self.matches.next()?;
        Some(ExtractedString {
            offset: m.start(),
            text: decode(m.as_bytes()),
        })
    }
}

/// Decode a matched run: drop the nulls of 16-bit code units, keep the
/// printable ASCII bytes in source order. Infallible by construction.
fn decode(run: &[u8]) -> String {
    run.iter()
        .filter(|&&b| b != 0)
        .map(|&b| b as char)
        .collect()
}

/// One-shot convenience: scan the whole buffer into a vector.
pub fn extract_strings(
    data: &[u8],
    endianness: Endianness,
    min_length: usize,
) -> Result<Vec<ExtractedString>, ScanError> {
    let scanner = StringScanner::new(endianness, min_length)?;
    Ok(scanner.scan(data).collect())
}
