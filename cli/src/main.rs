//! pdfstruct CLI - structure recovery from PDF text

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

use pdfstruct::render::{self, ExtractionStats};
use pdfstruct::{
    extract_text_data_with_options, process_batch, process_file_with_options, ExtractOptions,
    JsonFormat, PageSelection, ParseOptions, ProcessOptions, ProcessResult,
};

#[derive(Parser)]
#[command(name = "pdfstruct")]
#[command(version)]
#[command(about = "Recover tables, lists, sections and key-value data from PDF text", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a PDF (or .txt) file and print the full result as JSON
    Extract {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        process: ProcessArgs,
    },

    /// Run extraction over an already-extracted text file
    Text {
        /// Input text file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        /// Minimum lines (header included) for a table
        #[arg(long, default_value = "3")]
        min_table_rows: usize,
    },

    /// Print datasets and chart suggestions as JSON
    #[command(alias = "viz")]
    Visualize {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        #[command(flatten)]
        process: ProcessArgs,
    },

    /// Show document information and extraction counts
    Info {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Process many files in parallel, writing one JSON file each
    Batch {
        /// Input files
        #[arg(value_name = "FILES", required = true)]
        inputs: Vec<PathBuf>,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: PathBuf,

        #[command(flatten)]
        process: ProcessArgs,
    },

    /// Show version information
    Version,
}

#[derive(Args)]
struct OutputArgs {
    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,
}

impl OutputArgs {
    fn format(&self) -> JsonFormat {
        if self.compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        }
    }
}

#[derive(Args)]
struct ProcessArgs {
    /// Page range (e.g., "1-10", "1,3,5")
    #[arg(long)]
    pages: Option<String>,

    /// Fail on the first undecodable page instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Minimum lines (header included) for a table
    #[arg(long, default_value = "3")]
    min_table_rows: usize,
}

impl ProcessArgs {
    fn options(&self) -> Result<ProcessOptions, Box<dyn std::error::Error>> {
        let page_selection = if let Some(p) = &self.pages {
            PageSelection::parse(p).map_err(|e| format!("Invalid page range: {}", e))?
        } else {
            PageSelection::All
        };

        // Lenient unless asked otherwise, so one bad page doesn't lose the document
        let mut parse = ParseOptions::new().with_pages(page_selection);
        if !self.strict {
            parse = parse.lenient();
        }

        Ok(ProcessOptions::new()
            .with_parse_options(parse)
            .with_extract_options(ExtractOptions::new().with_min_table_rows(self.min_table_rows)))
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input,
            output,
            process,
        } => cmd_extract(&input, &output, &process),
        Commands::Text {
            input,
            output,
            min_table_rows,
        } => cmd_text(&input, &output, min_table_rows),
        Commands::Visualize {
            input,
            output,
            process,
        } => cmd_visualize(&input, &output, &process),
        Commands::Info { input } => cmd_info(&input),
        Commands::Batch {
            inputs,
            output,
            process,
        } => cmd_batch(&inputs, &output, &process),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_extract(
    input: &Path,
    output: &OutputArgs,
    process: &ProcessArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = process_file_with_options(input, &process.options()?);

    let json = render::to_json(&result, output.format())?;
    write_output(output.output.as_deref(), &json)?;

    match result.error {
        Some(error) if !result.success => Err(error.into()),
        _ => Ok(()),
    }
}

fn cmd_text(
    input: &Path,
    output: &OutputArgs,
    min_table_rows: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let options = ExtractOptions::new().with_min_table_rows(min_table_rows);
    let data = extract_text_data_with_options(&text, &options)?;

    let json = render::to_json(&data, output.format())?;
    write_output(output.output.as_deref(), &json)
}

fn cmd_visualize(
    input: &Path,
    output: &OutputArgs,
    process: &ProcessArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = process.options()?;
    let (_, data) = process_file_with_options(input, &options).into_result()?;

    let viz = render::visualize_with_ratio(&data, options.extract.numeric_column_ratio);
    log::debug!("{} chart suggestion(s)", viz.charts.len());

    let json = render::to_json(&viz, output.format())?;
    write_output(output.output.as_deref(), &json)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    // Lenient: show metadata even if some pages cannot be decoded
    let options = ProcessOptions::new().lenient();
    let (metadata, data) = process_file_with_options(input, &options).into_result()?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());

    match &metadata {
        Some(metadata) => {
            println!("{}: PDF {}", "Format".bold(), metadata.version);
            println!("{}: {}", "Pages".bold(), metadata.pages);
            println!(
                "{}: {}",
                "Encrypted".bold(),
                if metadata.encrypted { "Yes" } else { "No" }
            );

            for key in ["Title", "Author", "Creator", "Producer"] {
                if let Some(value) = metadata.info_str(key) {
                    println!("{}: {}", key.bold(), value);
                }
            }
            if let Some(ref created) = metadata.created {
                println!("{}: {}", "Created".bold(), created);
            }
            if let Some(ref modified) = metadata.modified {
                println!("{}: {}", "Modified".bold(), modified);
            }
            if let Some(Value::Bool(true)) = metadata.info.get("IsAcroFormPresent") {
                println!("{}: Yes", "AcroForm".bold());
            }
        }
        None => println!("{}: text", "Format".bold()),
    }

    let stats = ExtractionStats::from_data(&data);

    println!();
    println!("{}", "Extraction Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!(
        "{}: {} ({} rows)",
        "Tables".bold(),
        stats.table_count,
        stats.table_row_count
    );
    println!(
        "{}: {} ({} items)",
        "Lists".bold(),
        stats.list_count,
        stats.list_item_count
    );
    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Key-value pairs".bold(), stats.key_value_count);
    println!("{}: {}", "Numbers".bold(), stats.number_count);
    println!("{}: {}", "Dates".bold(), stats.date_count);

    Ok(())
}

fn cmd_batch(
    inputs: &[PathBuf],
    output_dir: &Path,
    process: &ProcessArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;
    let options = process.options()?;

    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Processing {} file(s)...", inputs.len()));
    let results = process_batch(inputs, &options);
    pb.finish_and_clear();

    let pb = ProgressBar::new(results.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut totals = ExtractionStats::default();
    let mut failed = 0;
    let mut used = HashSet::new();

    for (input, result) in inputs.iter().zip(&results) {
        let name = output_name(input, &mut used);
        pb.set_message(name.clone());

        let json = render::to_json(result, JsonFormat::Pretty)?;
        fs::write(output_dir.join(name), json)?;

        report_result(&pb, input, result, &mut totals, &mut failed);
        pb.inc(1);
    }

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} processed, {} failed",
        "Done!".green().bold(),
        results.len() - failed,
        failed
    );
    println!(
        "  {} {} tables, {} key-value pairs, {} dates",
        "└─".dimmed(),
        totals.table_count,
        totals.key_value_count,
        totals.date_count
    );

    Ok(())
}

/// JSON file name for a batch input: the full file name plus `.json`, with a
/// `-N` suffix when an earlier input already took that name.
fn output_name(input: &Path, used: &mut HashSet<String>) -> String {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    let mut name = format!("{}.json", file_name);
    let mut n = 2;
    while !used.insert(name.clone()) {
        name = format!("{}-{}.json", file_name, n);
        n += 1;
    }
    name
}

fn report_result(
    pb: &ProgressBar,
    input: &Path,
    result: &ProcessResult,
    totals: &mut ExtractionStats,
    failed: &mut usize,
) {
    match (&result.extracted_data, &result.error) {
        (Some(data), _) => totals.merge(&ExtractionStats::from_data(data)),
        (None, error) => {
            *failed += 1;
            pb.println(format!(
                "{} {}: {}",
                "Failed".red(),
                input.display(),
                error.as_deref().unwrap_or("unknown error")
            ));
        }
    }
}

fn cmd_version() {
    println!("{} {}", "pdfstruct".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Structure recovery from PDF text");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_name_keeps_extension() {
        let mut used = HashSet::new();
        assert_eq!(output_name(Path::new("in/a.pdf"), &mut used), "a.pdf.json");
        assert_eq!(output_name(Path::new("in/a.txt"), &mut used), "a.txt.json");
    }

    #[test]
    fn test_output_name_deduplicates() {
        let mut used = HashSet::new();
        assert_eq!(output_name(Path::new("q1/report.pdf"), &mut used), "report.pdf.json");
        assert_eq!(output_name(Path::new("q2/report.pdf"), &mut used), "report.pdf-2.json");
        assert_eq!(output_name(Path::new("q3/report.pdf"), &mut used), "report.pdf-3.json");
    }
}
