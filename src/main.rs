use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use pdf_raster_compressor::format::{format_file_size, format_reduction};
use pdf_raster_compressor::{
    CompressionPreset, PdfiumRasterizer, Progress, Session, Settings, SourceDocument,
};

/// Shrink a PDF by rasterizing its pages to JPEG
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input PDF file
    input: PathBuf,

    /// Output PDF file (defaults to <input>_comprimido.pdf next to the input)
    output: Option<PathBuf>,

    /// Compression level; `high` gives the smallest file
    #[arg(long, value_enum, default_value_t = CompressionPreset::Medium)]
    preset: CompressionPreset,

    /// Path to the PDFium shared library
    #[arg(long)]
    pdfium_library: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let settings = Settings::default().with_preset(args.preset);
    let mut session = Session::new(settings);

    let source = SourceDocument::from_path(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    session.select(source)?;

    let rasterizer = match &args.pdfium_library {
        Some(path) => PdfiumRasterizer::bind_to(path),
        None => PdfiumRasterizer::bind(),
    }
    .context("Failed to load PDFium")?;

    println!("Compressing {:?} with preset {}", args.input, args.preset);
    let start = Instant::now();
    let mut print_progress = |progress: Progress| {
        println!("[{:>3}%] {}", progress.percent, progress.label);
    };
    let outcome = session.compress(&rasterizer, &mut print_progress)?;
    println!("Done in {:.2?}", start.elapsed());

    if outcome.fell_back {
        println!("Rasterized output was larger; keeping the original content.");
    }
    println!("Original size:   {}", format_file_size(outcome.original_size));
    println!("Compressed size: {}", format_file_size(outcome.compressed_size));
    println!(
        "Reduction:       {}",
        format_reduction(outcome.original_size, outcome.compressed_size)
    );

    let download = session
        .download()
        .context("Compression produced no output")?;
    let output = args.output.clone().unwrap_or_else(|| {
        args.input
            .parent()
            .unwrap_or_else(|| std::path::Path::new(""))
            .join(download.file_name)
    });
    std::fs::write(&output, download.bytes)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Saved {:?}", output);

    Ok(())
}
