mod logger;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use pdf_mix::{PageRangeSet, SelectionRow, SelectionTable};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pdfmix", about = "Plan alternate mix inputs for PDF documents", version)]
struct Cli {
    /// Log planning details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a page selection into the high and low sets used to reverse a single document
    Partition {
        /// Number of pages in the document
        #[arg(long)]
        pages: u32,

        /// Page selection (ex: 2 or 5-23 or 2,5-7,12-), all pages when omitted
        #[arg(long, default_value = "")]
        ranges: String,
    },

    /// Build the mix inputs for a set of documents
    Plan {
        #[command(flatten)]
        rows: RowsArgs,

        /// Write the inputs as JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the page count of PDF documents
    Count {
        /// Input PDF file(s)
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,
    },
}

#[derive(Args)]
struct RowsArgs {
    /// Selection table (.csv with file,pages,pace,reverse columns, JSON otherwise)
    #[arg(long, conflicts_with = "input", required_unless_present = "input")]
    table: Option<PathBuf>,

    /// Input PDF file(s), in mix order
    #[arg(short, long, num_args = 1..)]
    input: Vec<PathBuf>,

    /// Page selection applied to every input, all pages when omitted
    #[arg(long)]
    ranges: Option<String>,

    /// Pace applied to every input
    #[arg(long)]
    pace: Option<String>,

    /// Reverse every input
    #[arg(long)]
    reverse: bool,
}

impl RowsArgs {
    async fn load_rows(&self) -> Result<Vec<SelectionRow>> {
        if let Some(path) = &self.table {
            let table = load_table(path)
                .await
                .with_context(|| format!("Failed to load selection table {}", path.display()))?;
            return Ok(table.to_rows());
        }

        Ok(self
            .input
            .iter()
            .map(|path| {
                SelectionRow::new(path.clone())
                    .with_pages(self.ranges.clone().unwrap_or_default())
                    .with_pace(self.pace.clone().unwrap_or_default())
                    .reversed(self.reverse)
            })
            .collect())
    }
}

async fn load_table(path: &Path) -> pdf_mix::Result<SelectionTable> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        SelectionTable::load_csv(path).await
    } else {
        SelectionTable::load(path).await
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logger::StderrLogger::new(level).init()?;

    match cli.command {
        Commands::Partition { pages, ranges } => {
            let requested: PageRangeSet = ranges.parse()?;
            let split = pdf_mix::partition(pages, &requested)?;
            println!("High pages: {}", split.high);
            println!("Low pages: {}", split.low);
            println!("Selected pages: {}", split.total_selected_pages);
        }

        Commands::Plan { rows, output } => {
            let rows = rows.load_rows().await?;
            let plan = pdf_mix::plan(&rows).await?;

            for message in plan.messages() {
                eprintln!("{}", message);
            }
            if plan.is_empty() {
                bail!("No mix inputs to write");
            }

            let json = serde_json::to_string_pretty(&plan.inputs)?;
            match output {
                Some(path) => {
                    tokio::fs::write(&path, json).await?;
                    log::info!("Wrote {} mix inputs to {}", plan.inputs.len(), path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Count { input } => {
            for path in &input {
                let pages = pdf_mix::count_pages(path)
                    .await
                    .with_context(|| format!("Could not open {}", path.display()))?;
                println!("{}: {} pages", path.display(), pages);
            }
        }
    }

    Ok(())
}
