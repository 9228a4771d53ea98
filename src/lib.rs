//! # scry - printable-string extraction and file triage
//!
//! scry pulls human-readable text out of arbitrary files and pairs it with
//! the metadata a triage pass wants first: stat fields, content hashes, and
//! a byte-signature type guess.
//!
//! The extraction engine recognizes two encodings over a raw byte buffer:
//! plain ASCII runs, and the null-interleaved pattern of English-language
//! UTF-16 in either byte order. Matches come back lazily, in source order,
//! tagged with the byte offset where each run begins.
//!
//! ## Usage
//!
//! ```
//! use scry::{extract_strings, Endianness};
//!
//! let data = b"\x00\x01who goes there\x02\x03";
//! let found = extract_strings(data, Endianness::Little, 4).unwrap();
//!
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].offset, 2);
//! assert_eq!(found[0].text, "who goes there");
//! ```
//!
//! The metadata side is independent of extraction; both operate on the same
//! file without either feeding the other:
//!
//! ```no_run
//! use scry::FileRecord;
//!
//! let mut record = FileRecord::stat("suspect.bin")?;
//! println!("{}", record.status_report());
//! println!("sha256 {}", record.sha256()?);
//! println!("type   {}", record.file_type()?);
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod extract;
pub mod logging;
pub mod record;
pub mod sniff;
pub mod types;
pub mod walk;

pub use extract::{extract_strings, ScanError, StringScanner};
pub use record::FileRecord;
pub use types::{Endianness, ExtractedString};
pub use walk::walk;
