//! ZMH CLI
//! Usage:
//!   zmh -f <file> -m compress     (or -m 1)  → <stem>.zmh
//!   zmh -f <file.zmh> -m decompress (or -m 2) → <stem>.<stored ext>
//!   zmh -f <file> -m test         (or -m 3)  → compress, restore to <stem>_new.<ext>, compare

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use zmh::files::{self, FileReport};
use zmh::paths::TEST_SUFFIX;

#[derive(Parser, Debug)]
#[command(name = "zmh")]
#[command(version)]
#[command(about = "Compress and decompress files with static Huffman coding", long_about = None)]
struct Args {
    /// File to compress or decompress
    #[arg(short, long)]
    filename: PathBuf,

    /// What to do with the file
    #[arg(short, long, value_enum)]
    mode: Mode,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    #[value(alias = "1")]
    Compress,
    #[value(alias = "2")]
    Decompress,
    /// Compress, decompress to a `_new` file, then compare with the input
    #[value(alias = "3")]
    Test,
}

fn init_logging(log_level: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: a tracing subscriber was already installed");
    }
}

fn compress(args: &Args) -> zmh::Result<FileReport> {
    let start = Instant::now();
    let report = files::compress_file(&args.filename)?;
    println!("Input file size: {} bytes.", report.input_len);
    println!("Compression time: {:.4} seconds.", start.elapsed().as_secs_f64());
    println!("Compression file size: {} bytes.", report.output_len);
    Ok(report)
}

fn decompress(path: &std::path::Path, suffix: Option<&str>) -> zmh::Result<FileReport> {
    let start = Instant::now();
    let report = files::decompress_file(path, suffix)?;
    println!("Decompression time: {:.4} seconds.", start.elapsed().as_secs_f64());
    println!("Decompression file size: {} bytes.", report.output_len);
    Ok(report)
}

/// Round-trip the input and report whether the restored copy matches.
fn test(args: &Args) -> zmh::Result<bool> {
    let packed = compress(args)?;
    let restored = decompress(&packed.output_path, Some(TEST_SUFFIX))?;

    if !files::same_contents(&args.filename, &restored.output_path)? {
        println!("Error: input file and decompress file (after compression) don't equal.");
        return Ok(false);
    }
    println!("OK: input file and decompress file (after compression) are equal.");
    if let Some(pct) = packed.deflated_percent() {
        println!("Deflated {:.1}% of the original file.", pct);
    }
    Ok(true)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(?args, "starting");

    if !args.filename.exists() {
        eprintln!("File not found: {}", args.filename.display());
        return ExitCode::FAILURE;
    }

    let result = match args.mode {
        Mode::Compress => compress(&args).map(|_| true),
        Mode::Decompress => decompress(&args.filename, None).map(|_| true),
        Mode::Test => test(&args),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error ({}): {}", e.category(), e);
            ExitCode::FAILURE
        }
    }
}
