use anyhow::{Context, Result};
use clap::Parser;
use lfsr_sentinel::analyzer::{self, AnalysisReport};
use lfsr_sentinel::bits::{self, Bit};
use lfsr_sentinel::cli::{Cli, OutputFormat};
use lfsr_sentinel::json_output::JsonOutput;
use lfsr_sentinel::monitor::{MonitorConfig, TracingSink, WriterSink};
use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber
///
/// Monitor records go through `tracing`, so a subscriber is always installed:
/// `--debug` enables everything, otherwise `RUST_LOG` or WARN and above.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve monitor configuration: file or built-in defaults, then flag overrides
fn resolve_config(args: &Cli) -> Result<MonitorConfig> {
    let mut config = match &args.config {
        Some(path) => MonitorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None if args.demo => analyzer::demo_config(),
        None => MonitorConfig::default(),
    };

    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }

    config.validate().context("Invalid monitor configuration")?;
    Ok(config)
}

/// Read the whole input from a file, or stdin for `-`/no path
fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    match path {
        Some(p) if p != Path::new("-") => {
            File::open(p)
                .with_context(|| format!("Failed to open input {}", p.display()))?
                .read_to_end(&mut buffer)?;
        }
        _ => {
            std::io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read stdin")?;
        }
    }
    Ok(buffer)
}

/// Chunks to deliver: the demo scenario, or the decoded input split evenly
fn load_chunks(args: &Cli) -> Result<Vec<Vec<Bit>>> {
    if args.demo {
        return Ok(analyzer::demo_chunks(args.seed));
    }

    let raw = read_input(args.input.as_deref())?;
    let stream = bits::decode(&raw, args.input_format.into()).context("Failed to decode input")?;
    tracing::debug!("Decoded {} bits from input", stream.len());

    Ok(stream
        .chunks(args.chunk_size.get())
        .map(<[Bit]>::to_vec)
        .collect())
}

fn run_analysis(args: &Cli, chunks: &[Vec<Bit>], config: MonitorConfig) -> Result<AnalysisReport> {
    let slices = chunks.iter().map(Vec::as_slice);

    let report = match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            analyzer::analyze_chunks(slices, config, WriterSink::new(BufWriter::new(file)))?
        }
        None => analyzer::analyze_chunks(slices, config, TracingSink)?,
    };

    Ok(report)
}

fn print_report(report: &AnalysisReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for chunk in &report.chunks {
                println!("{}", chunk.to_line());
            }
        }
        OutputFormat::Json => {
            println!("{}", JsonOutput::from_report(report).to_json()?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    let config = resolve_config(&args)?;
    let chunks = load_chunks(&args)?;
    let report = run_analysis(&args, &chunks, config)?;

    print_report(&report, args.format)?;

    if args.summary {
        report.stats.print_summary();
    }

    Ok(())
}
