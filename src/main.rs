// src/main.rs
mod document;
mod extractors;
mod ism;
mod storage;
mod utils;

use clap::Parser;
use dialoguer::Input;
use extractors::ReportSegmenter;
use std::path::PathBuf;
use std::time::Duration;
use storage::StorageManager;
use utils::AppError;

/// Converts an ISM manufacturing report PDF into a spreadsheet of industry rankings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// ISM report PDF (prompted for when omitted)
    input: Option<PathBuf>,

    /// Output spreadsheet path (defaults to the input path with an .xlsx extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seconds to wait before exiting after a successful run
    #[arg(long, default_value = "5")]
    exit_delay: u64,

    /// Also write a JSON summary next to the spreadsheet
    #[arg(long)]
    summary: bool,
}

fn prompt_for_input() -> Result<PathBuf, AppError> {
    let filename: String = Input::new()
        .with_prompt("Enter the ISM report filename (ex: ism-report-2023.pdf)")
        .interact_text()
        .map_err(|e| AppError::Prompt(e.to_string()))?;

    Ok(PathBuf::from(filename.trim()))
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    let input = match args.input {
        Some(path) => path,
        None => prompt_for_input()?,
    };

    if input.as_os_str().is_empty() {
        return Err(AppError::Config("No input file given".to_string()));
    }
    if !input.exists() {
        return Err(utils::error::DocumentError::NotFound(input).into());
    }

    let output = args
        .output
        .unwrap_or_else(|| storage::default_output_path(&input));
    if output == input {
        return Err(AppError::Config(format!(
            "Output path would overwrite the input: {}",
            input.display()
        )));
    }

    // 3. Read the report text
    println!("Opening input file and parsing the text...");
    let text = document::read_report_text(&input)?;

    // 4. Split into indicator paragraphs and rank industries
    println!("Parsing the text to build the list of indicators and industries...");
    let report = ReportSegmenter::default().extract(&text)?;
    tracing::info!("Extracted {} indicators from {}", report.len(), input.display());

    // 5. Write the spreadsheet
    println!("Generating Excel file...");
    let storage = StorageManager::new(&output)?;
    storage.save_workbook(&report)?;

    if args.summary {
        let path = storage.save_summary(&report, &input)?;
        tracing::info!("Saved summary to: {}", path.display());
    }

    println!("Excel was generated successfully: {}", storage.output_path().display());
    println!("Command prompt will close in {} seconds! Beware!", args.exit_delay);
    std::thread::sleep(Duration::from_secs(args.exit_delay));

    Ok(())
}
