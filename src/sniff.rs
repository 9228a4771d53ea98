//! Byte-signature file classification.
//!
//! A small magic table covering the formats a triage pass meets most often,
//! with a printable-ratio fallback that separates text from opaque data.
//! Pure functions over a leading-bytes sample; callers do the reading.

/// Classification result: a coarse human label and a MIME label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub description: &'static str,
    pub mime: &'static str,
}

struct Signature {
    offset: usize,
    magic: &'static [u8],
    description: &'static str,
    mime: &'static str,
}

const SIGNATURES: &[Signature] = &[
    Signature {
        offset: 0,
        magic: b"\x7fELF",
        description: "ELF executable",
        mime: "application/x-executable",
    },
    Signature {
        offset: 0,
        magic: &[0xfe, 0xed, 0xfa, 0xce],
        description: "Mach-O executable",
        mime: "application/x-mach-binary",
    },
    Signature {
        offset: 0,
        magic: &[0xce, 0xfa, 0xed, 0xfe],
        description: "Mach-O executable",
        mime: "application/x-mach-binary",
    },
    Signature {
        offset: 0,
        magic: &[0xfe, 0xed, 0xfa, 0xcf],
        description: "Mach-O 64-bit executable",
        mime: "application/x-mach-binary",
    },
    Signature {
        offset: 0,
        magic: &[0xcf, 0xfa, 0xed, 0xfe],
        description: "Mach-O 64-bit executable",
        mime: "application/x-mach-binary",
    },
    Signature {
        offset: 0,
        magic: &[0xca, 0xfe, 0xba, 0xbe],
        description: "Mach-O universal binary",
        mime: "application/x-mach-binary",
    },
    Signature {
        offset: 0,
        magic: &[0xbe, 0xba, 0xfe, 0xca],
        description: "Mach-O universal binary",
        mime: "application/x-mach-binary",
    },
    Signature {
        offset: 0,
        magic: b"MZ",
        description: "PE executable",
        mime: "application/vnd.microsoft.portable-executable",
    },
    Signature {
        offset: 0,
        magic: b"\x89PNG\r\n\x1a\n",
        description: "PNG image",
        mime: "image/png",
    },
    Signature {
        offset: 0,
        magic: &[0xff, 0xd8, 0xff],
        description: "JPEG image",
        mime: "image/jpeg",
    },
    Signature {
        offset: 0,
        magic: b"GIF8",
        description: "GIF image",
        mime: "image/gif",
    },
    Signature {
        offset: 0,
        magic: b"%PDF-",
        description: "PDF document",
        mime: "application/pdf",
    },
    Signature {
        offset: 0,
        magic: b"PK\x03\x04",
        description: "Zip archive",
        mime: "application/zip",
    },
    Signature {
        offset: 0,
        magic: &[0x1f, 0x8b],
        description: "gzip compressed data",
        mime: "application/gzip",
    },
    Signature {
        offset: 0,
        magic: b"BZh",
        description: "bzip2 compressed data",
        mime: "application/x-bzip2",
    },
    Signature {
        offset: 0,
        magic: b"\xfd7zXZ\x00",
        description: "XZ compressed data",
        mime: "application/x-xz",
    },
    Signature {
        offset: 0,
        magic: &[0x28, 0xb5, 0x2f, 0xfd],
        description: "Zstandard compressed data",
        mime: "application/zstd",
    },
    Signature {
        offset: 0,
        magic: b"7z\xbc\xaf\x27\x1c",
        description: "7-zip archive",
        mime: "application/x-7z-compressed",
    },
    Signature {
        offset: 0,
        magic: b"Rar!\x1a\x07",
        description: "RAR archive",
        mime: "application/vnd.rar",
    },
    Signature {
        offset: 257,
        magic: b"ustar",
        description: "POSIX tar archive",
        mime: "application/x-tar",
    },
    Signature {
        offset: 0,
        magic: b"SQLite format 3\x00",
        description: "SQLite 3.x database",
        mime: "application/vnd.sqlite3",
    },
    Signature {
        offset: 0,
        magic: b"\x00asm",
        description: "WebAssembly binary",
        mime: "application/wasm",
    },
];

/// Classify a leading-bytes sample.
///
/// First signature wins; unmatched samples fall back to the text heuristic
/// and finally to plain "data".
pub fn classify(sample: &[u8]) -> Classification {
    for sig in SIGNATURES {
        let end = sig.offset + sig.magic.len();
        if sample.len() >= end && &sample[sig.offset..end] == sig.magic {
            return Classification {
                description: sig.description,
                mime: sig.mime,
            };
        }
    }
    if looks_like_text(sample) {
        Classification {
            description: "ASCII text",
            mime: "text/plain",
        }
    } else {
        Classification {
            description: "data",
            mime: "application/octet-stream",
        }
    }
}

/// Check if a sample appears to be a text file rather than a binary.
///
/// Text files carry at most a stray null or two and are overwhelmingly
/// printable; anything else reads as data.
fn looks_like_text(sample: &[u8]) -> bool {
    if sample.is_empty() {
        return false;
    }

    let mut printable = 0usize;
    let mut null_bytes = 0usize;
    for &b in sample {
        if b == 0 {
            null_bytes += 1;
        } else if b.is_ascii_graphic() || b.is_ascii_whitespace() {
            printable += 1;
        }
    }

    if null_bytes > 2 {
        return false;
    }

    // At least 85% printable for the sample to read as text.
    printable * 100 / sample.len() >= 85
}
