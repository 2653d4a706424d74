//! # chatlift CLI
//!
//! Command-line interface for chatlift library.

use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlift::cli::Args;
use chatlift::extract::Extractor;
use chatlift::format::{ExportFormat, to_format_string, write_to_format};
use chatlift::output::json::read_compressed_json;
use chatlift::{ChatliftError, Transcript};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatliftError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // With --stdout the artifact is the only thing printed, so it can be piped.
    let quiet = args.stdout;

    if !quiet {
        println!("📦 chatlift v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("🎬 Action:  {}", args.action);
        println!("📂 Input:   {}", args.input.display());
        if let Some(ref url) = args.url {
            println!("🔗 URL:     {}", url);
        }
        println!();
    }

    let transcript = if args.action.extracts() {
        extract(&args, quiet)?
    } else {
        restore(&args, quiet)?
    };

    // Decode has no format of its own: it republishes plain JSON unless
    // the output extension names another format.
    let format = args.action.format().unwrap_or_else(|| {
        args.output
            .as_deref()
            .and_then(|path| ExportFormat::from_path(path).ok())
            .unwrap_or_default()
    });

    if args.stdout {
        println!("{}", to_format_string(&transcript, format)?);
        return Ok(());
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format.default_filename(transcript.meta().timestamp)));

    println!("💾 Writing {}...", format);
    write_to_format(&transcript, &output_path, format)?;
    println!("✅ Done! Output saved to {}", output_path.display());

    println!();
    println!("📊 Summary:");
    println!("   Total:      {} messages", transcript.len());
    println!("   User:       {}", transcript.user_count());
    println!("   Assistant:  {}", transcript.assistant_count());
    if transcript.unknown_count() > 0 {
        println!("   Unknown:    {}", transcript.unknown_count());
    }

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Parse a saved page and extract its transcript.
fn extract(args: &Args, quiet: bool) -> Result<Transcript, ChatliftError> {
    let html = fs::read_to_string(&args.input)?;
    let url = args
        .url
        .clone()
        .unwrap_or_else(|| args.input.display().to_string());

    if !quiet {
        println!("⏳ Extracting conversation...");
    }
    let extract_start = Instant::now();
    let extractor = Extractor::new();
    let (transcript, stats) = extractor.extract_with_stats(&html, &url)?;

    if !quiet {
        println!(
            "   Found {} messages ({:.2}s)",
            transcript.len(),
            extract_start.elapsed().as_secs_f64()
        );
        println!(
            "   Container: {}, messages: {}",
            stats.container_strategy,
            stats.message_strategy_name()
        );
        if stats.skipped > 0 {
            println!("   Skipped {} near-empty candidates", stats.skipped);
        }
    }

    Ok(transcript)
}

/// Restore a transcript from a compressed export.
fn restore(args: &Args, quiet: bool) -> Result<Transcript, ChatliftError> {
    if !quiet {
        println!("⏳ Decoding compressed export...");
    }
    let decode_start = Instant::now();
    let transcript = read_compressed_json(&args.input)?;

    if !quiet {
        println!(
            "   Restored {} messages ({:.2}s)",
            transcript.len(),
            decode_start.elapsed().as_secs_f64()
        );
    }

    Ok(transcript)
}
