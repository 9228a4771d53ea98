//! scry - extract ASCII and UTF-16 strings from a file.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use scry::{logging, Endianness, FileRecord, StringScanner};

#[derive(Parser, Debug)]
#[command(name = "scry")]
#[command(
    author,
    version,
    about = "Extract ASCII and UTF-16 strings from a file"
)]
#[command(long_about = "
scry scans a file for runs of printable text in two encodings: plain
ASCII and single-byte-per-character UTF-16 in either byte order. Each
match can be printed with its decimal byte offset and the source
filename.

EXAMPLES:
    scry unknown.bin                 # all strings of length >= 4
    scry -n 8 -o unknown.bin         # longer strings, with offsets
    scry -e b firmware.img           # big-endian 16-bit text
    scry --status unknown.bin        # stat-style metadata report
    scry --hash --type unknown.bin   # digests and type labels
")]
struct Cli {
    /// File from which to extract strings
    #[arg(required = true, value_name = "FILE")]
    file: PathBuf,

    /// 16-bit byte order: "b" big endian, "l" little endian
    #[arg(short, long, default_value = "l")]
    endianness: Endianness,

    /// Print the filename with each string (with -o)
    #[arg(short, long)]
    filename: bool,

    /// Minimum string length
    #[arg(short, long, default_value_t = 4, value_name = "INT")]
    number: usize,

    /// Print the decimal byte offset of each string
    #[arg(short, long)]
    offset: bool,

    /// Stop after this many strings
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Output matches as JSON
    #[arg(long)]
    json: bool,

    /// Print a stat-style status report instead of scanning
    #[arg(long)]
    status: bool,

    /// Print MD5, SHA1 and SHA256 digests instead of scanning
    #[arg(long)]
    hash: bool,

    /// Print file-type and MIME labels instead of scanning
    #[arg(long = "type")]
    type_labels: bool,
}

fn main() -> Result<()> {
    logging::init().ok();
    let cli = Cli::parse();

    // Configuration is validated before the input file is touched.
    let scanner = StringScanner::new(cli.endianness, cli.number)?;

    if cli.status || cli.hash || cli.type_labels {
        return inspect(&cli);
    }

    let data = fs::read(&cli.file)
        .with_context(|| format!("cannot read {}", cli.file.display()))?;
    debug!(
        "scanning {} bytes from {} ({} endian, min length {})",
        data.len(),
        cli.file.display(),
        cli.endianness,
        cli.number
    );

    let limit = cli.limit.unwrap_or(usize::MAX);
    let matches = scanner.scan(&data).take(limit);

    if cli.json {
        let collected: Vec<_> = matches.collect();
        println!("{}", serde_json::to_string_pretty(&collected)?);
        return Ok(());
    }

    let fname = cli.file.display();
    for m in matches {
        if cli.filename && cli.offset {
            println!("{fname}: {} {}", m.offset, m.text);
        } else if cli.offset {
            println!("{} {}", m.offset, m.text);
        } else {
            println!("{}", m.text);
        }
    }
    Ok(())
}

/// Metadata modes: status report, digests, type labels.
fn inspect(cli: &Cli) -> Result<()> {
    let mut record = FileRecord::stat(&cli.file)
        .with_context(|| format!("cannot stat {}", cli.file.display()))?;

    if cli.status {
        println!("{}", record.status_report());
    }
    if cli.hash {
        println!("   MD5: {}", record.md5()?);
        println!("  SHA1: {}", record.sha1()?);
        println!("SHA256: {}", record.sha256()?);
    }
    if cli.type_labels {
        println!("  Type: {}", record.file_type()?);
        println!("  MIME: {}", record.mime_type()?);
    }
    Ok(())
}
