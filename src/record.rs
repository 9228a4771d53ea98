//! File metadata records: stat snapshot, on-demand hashing and typing.
//!
//! A [`FileRecord`] wraps a filesystem path and the stat fields captured
//! when it was built. Hash digests and type labels cost a full or partial
//! read of the file, so they are not computed up front; each is filled on
//! first request and cached for the life of the record.

use std::fmt::Write as _;
use std::fs::{self, File};
use std::io::{self, Read};
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::debug;
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use crate::sniff;

/// Hashing reads in 64 KiB chunks, so memory use is flat no matter how
/// large the file is.
const HASH_CHUNK: usize = 64 * 1024;

/// Leading-bytes sample handed to the signature matcher.
const SNIFF_SAMPLE: usize = 8192;

const S_IFMT: u32 = 0o170_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFLNK: u32 = 0o120_000;

/// Metadata snapshot for one filesystem path.
///
/// The stat fields are captured once at construction; the digest and type
/// fields start empty and are filled at most once, through the accessors.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// The path exactly as given at construction.
    pub relative_path: String,
    /// Absolute form of the path. Symlinks are not resolved.
    pub absolute_path: PathBuf,
    /// File name extension, if any, without the dot.
    pub extension: Option<String>,

    pub size: u64,
    pub blocks: u64,
    pub block_size: u64,
    pub device: u64,
    pub inode: u64,
    pub hardlinks: u64,
    pub uid: u32,
    pub gid: u32,
    pub mode: u32,

    pub modified: DateTime<Utc>,
    pub accessed: DateTime<Utc>,
    pub changed: DateTime<Utc>,
    pub created: DateTime<Utc>,

    md5: Option<String>,
    sha1: Option<String>,
    sha256: Option<String>,
    file_type: Option<String>,
    mime_type: Option<String>,
}

impl FileRecord {
    /// Capture the stat snapshot for `path`.
    ///
    /// A symlink is inspected as itself (lstat); its target is never
    /// followed. I/O failures propagate unchanged.
    pub fn stat(path: impl AsRef<Path>) -> io::Result<FileRecord> {
        let path = path.as_ref();
        let meta = fs::symlink_metadata(path)?;

        let changed = timestamp(meta.ctime(), meta.ctime_nsec());
        // Not every filesystem reports a birth time; the change time
        // stands in when it is unavailable.
        let created = meta.created().map(DateTime::<Utc>::from).unwrap_or(changed);

        Ok(FileRecord {
            relative_path: path.display().to_string(),
            absolute_path: std::path::absolute(path)?,
            extension: path
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned()),
            size: meta.size(),
            blocks: meta.blocks(),
            block_size: meta.blksize(),
            device: meta.dev(),
            inode: meta.ino(),
            hardlinks: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
            mode: meta.mode(),
            modified: timestamp(meta.mtime(), meta.mtime_nsec()),
            accessed: timestamp(meta.atime(), meta.atime_nsec()),
            changed,
            created,
            md5: None,
            sha1: None,
            sha256: None,
            file_type: None,
            mime_type: None,
        })
    }

    pub fn is_dir(&self) -> bool {
        self.mode & S_IFMT == S_IFDIR
    }

    pub fn is_symlink(&self) -> bool {
        self.mode & S_IFMT == S_IFLNK
    }

    /// Hex MD5 digest of the file content, computed on first call.
    pub fn md5(&mut self) -> io::Result<&str> {
        let digest = match self.md5.take() {
            Some(cached) => cached,
            None => hash_file::<Md5>(&self.absolute_path)?,
        };
        Ok(self.md5.insert(digest).as_str())
    }

    /// Hex SHA1 digest of the file content, computed on first call.
    pub fn sha1(&mut self) -> io::Result<&str> {
        let digest = match self.sha1.take() {
            Some(cached) => cached,
            None => hash_file::<Sha1>(&self.absolute_path)?,
        };
        Ok(self.sha1.insert(digest).as_str())
    }

    /// Hex SHA256 digest of the file content, computed on first call.
    pub fn sha256(&mut self) -> io::Result<&str> {
        let digest = match self.sha256.take() {
            Some(cached) => cached,
            None => hash_file::<Sha256>(&self.absolute_path)?,
        };
        Ok(self.sha256.insert(digest).as_str())
    }

    /// Coarse file-type label from the signature matcher.
    ///
    /// Directories are labeled `"directory"` without reading any content.
    pub fn file_type(&mut self) -> io::Result<&str> {
        let label = match self.file_type.take() {
            Some(cached) => cached,
            None => self.sniff_label(false)?,
        };
        Ok(self.file_type.insert(label).as_str())
    }

    /// MIME-type label from the signature matcher.
    ///
    /// Directories are labeled `"binary"`, matching the convention of the
    /// status tooling this record feeds.
    pub fn mime_type(&mut self) -> io::Result<&str> {
        let label = match self.mime_type.take() {
            Some(cached) => cached,
            None => self.sniff_label(true)?,
        };
        Ok(self.mime_type.insert(label).as_str())
    }

    fn sniff_label(&self, mime: bool) -> io::Result<String> {
        if self.is_dir() {
            return Ok(if mime { "binary" } else { "directory" }.to_string());
        }
        let sample = read_sample(&self.absolute_path)?;
        let hit = sniff::classify(&sample);
        Ok(if mime { hit.mime } else { hit.description }.to_string())
    }

    /// Fixed-label status block in the familiar stat(1) layout.
    pub fn status_report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "  File: {}", self.absolute_path.display());
        let _ = writeln!(
            out,
            "  Size: {}\tBlocks: {}\tBlock Sz: {}",
            self.size, self.blocks, self.block_size
        );
        let _ = writeln!(
            out,
            "Device: {}\tInode: {}\tLinks: {}",
            self.device, self.inode, self.hardlinks
        );
        let _ = writeln!(
            out,
            "  Mode: {:06o}\tUID: {}\tGID: {}",
            self.mode, self.uid, self.gid
        );
        let _ = writeln!(out, "Access: {}", self.accessed);
        let _ = writeln!(out, "Modify: {}", self.modified);
        let _ = writeln!(out, "Change: {}", self.changed);
        let _ = write!(out, "Create: {}", self.created);
        out
    }
}

fn timestamp(secs: i64, nsecs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, nsecs as u32).unwrap_or_default()
}

/// Stream the file through `D` in fixed-size chunks and hex-encode the
/// digest.
fn hash_file<D: Digest>(path: &Path) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut hasher = D::new();
    let mut chunk = vec![0u8; HASH_CHUNK];
    loop {
        let n = file.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        hasher.update(&chunk[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

fn read_sample(path: &Path) -> io::Result<Vec<u8>> {
    let mut sample = Vec::with_capacity(SNIFF_SAMPLE);
    File::open(path)?
        .take(SNIFF_SAMPLE as u64)
        .read_to_end(&mut sample)?;
    debug!("sampled {} bytes from {}", sample.len(), path.display());
    Ok(sample)
}
