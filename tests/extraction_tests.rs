//! Library-level integration tests: extraction over realistic mixed
//! buffers, plus the metadata side driven through the public API.

use scry::{extract_strings, Endianness, FileRecord, StringScanner};

/// Build a binary-ish buffer: header junk, an ASCII table, a UTF-16LE
/// block, trailing noise.
fn mixed_buffer() -> Vec<u8> {
    let mut data = vec![0x7f, 0x45, 0x4c, 0x46, 0x02, 0x01, 0x01, 0x00];
    data.extend_from_slice(b"\x00\x00/usr/lib/libfake.so\x00");
    data.extend_from_slice(b"error: %s not found\x00");
    data.extend_from_slice(&[0x90, 0x90, 0x90]);
    for c in "C:\\Windows\\System32".chars() {
        data.push(c as u8);
        data.push(0x00);
    }
    data.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
    data
}

#[test]
fn test_mixed_buffer_finds_ascii_and_wide() {
    let data = mixed_buffer();
    let found = extract_strings(&data, Endianness::Little, 4).unwrap();
    let texts: Vec<&str> = found.iter().map(|s| s.text.as_str()).collect();

    assert!(texts.contains(&"/usr/lib/libfake.so"));
    assert!(texts.contains(&"error: %s not found"));
    assert!(texts.contains(&"C:\\Windows\\System32"));
}

#[test]
fn test_mixed_buffer_offsets_are_ordered_and_valid() {
    let data = mixed_buffer();
    let found = extract_strings(&data, Endianness::Little, 4).unwrap();

    assert!(!found.is_empty());
    for pair in found.windows(2) {
        assert!(pair[0].offset < pair[1].offset, "offsets out of order");
    }
    for s in &found {
        assert!(s.offset < data.len());
        assert!(s.text.chars().count() >= 4);
    }
}

#[test]
fn test_raising_minimum_only_drops_matches() {
    let data = mixed_buffer();
    let at_4 = extract_strings(&data, Endianness::Little, 4).unwrap();
    let at_10 = extract_strings(&data, Endianness::Little, 10).unwrap();

    assert!(at_10.len() <= at_4.len());
    for s in &at_10 {
        assert!(s.text.chars().count() >= 10);
    }
}

#[test]
fn test_wide_block_found_under_both_orders_at_shifted_offsets() {
    // "ABCD" encoded big-endian: nulls lead each character.
    let mut data = vec![0xffu8];
    for c in "ABCD".chars() {
        data.push(0x00);
        data.push(c as u8);
    }
    data.push(0xff);

    let big = extract_strings(&data, Endianness::Big, 4).unwrap();
    let little = extract_strings(&data, Endianness::Little, 4).unwrap();

    assert_eq!(big.len(), 1);
    assert_eq!(little.len(), 1);
    assert_eq!(big[0].text, "ABCD");
    assert_eq!(little[0].text, "ABCD");
    // Big consumes the leading null of the first unit, little cannot.
    assert_eq!(big[0].offset + 1, little[0].offset);
}

#[test]
fn test_scanner_is_reusable_and_deterministic() {
    let scanner = StringScanner::new(Endianness::Little, 4).unwrap();
    let data = mixed_buffer();

    let first: Vec<_> = scanner.scan(&data).collect();
    let second: Vec<_> = scanner.scan(&data).collect();
    assert_eq!(first, second);
}

#[test]
fn test_extraction_and_metadata_compose() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("specimen.bin");
    std::fs::write(&path, mixed_buffer()).unwrap();

    // Metadata and extraction are siblings over the same file: read once
    // for scanning, stat/hash independently.
    let data = std::fs::read(&path).unwrap();
    let found = extract_strings(&data, Endianness::Little, 4).unwrap();
    assert!(!found.is_empty());

    let mut record = FileRecord::stat(&path).unwrap();
    assert_eq!(record.size, data.len() as u64);
    assert_eq!(record.file_type().unwrap(), "ELF executable");
    assert_eq!(record.sha256().unwrap().len(), 64);
}
