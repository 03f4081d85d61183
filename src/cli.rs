use crate::api::{self, Components};
use crate::services::log::ActivityLogger;
use crate::tools::extract::extract_emails;
use crate::types::{ApiResponse, Context, DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_MS};
use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mailsweep",
    version,
    about = "Harvest contact emails from candidate sites (CLI + Rust API)"
)]
pub struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the full pipeline: filter, fetch, extract, report
    Harvest(HarvestArgs),
    /// Extract emails from a local file or stdin
    Extract(ExtractArgs),
    /// Read back the activity log
    Log(LogArgs),
}

#[derive(Args)]
struct HarvestArgs {
    /// Candidate site URLs
    urls: Vec<String>,

    /// Read additional candidate URLs from a file, one per line
    #[arg(long)]
    file: Option<PathBuf>,

    /// Maximum concurrent fetches
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    concurrency: usize,

    /// Per-fetch timeout in milliseconds
    #[arg(long = "timeout-ms", default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Extra blocked host substrings, on top of the built-in blocklist
    #[arg(long = "block")]
    block: Vec<String>,

    /// Write the CSV report here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Emit records as JSON instead of CSV
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ExtractArgs {
    /// Input file, or '-' for stdin
    input: String,
}

#[derive(Args)]
struct LogArgs {
    /// Only error entries
    #[arg(long)]
    errors: bool,

    /// Only entries for this domain
    #[arg(long)]
    domain: Option<String>,
}

pub fn run() {
    let cli = Cli::parse();
    let result = match cli.cmd {
        Command::Harvest(args) => harvest_cmd(args),
        Command::Extract(args) => extract_cmd(args),
        Command::Log(args) => log_cmd(args),
    };
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn harvest_cmd(args: HarvestArgs) -> anyhow::Result<()> {
    let mut urls = args.urls;
    if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        urls.extend(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from),
        );
    }
    if urls.is_empty() {
        anyhow::bail!("no candidate URLs given (pass URLs or --file)");
    }

    let mut ctx = Context::new()
        .with_concurrency(args.concurrency)
        .with_timeout_ms(args.timeout_ms);
    ctx.block_domains.extend(args.block);

    let components = Components::with_ctx(ctx)?;
    eprintln!("Harvesting {} candidate URLs...", urls.len());

    if args.json {
        let records = crate::runtime::block_on(api::harvest(&urls, &components));
        print_json(&ApiResponse::ok(records));
        return Ok(());
    }

    let csv = crate::runtime::block_on(api::harvest_csv(&urls, &components))?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &csv)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("✓ Report written to {}", path.display());
        }
        None => print!("{csv}"),
    }
    Ok(())
}

fn extract_cmd(args: ExtractArgs) -> anyhow::Result<()> {
    let text = if args.input == "-" {
        use std::io::Read;
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.input)
            .with_context(|| format!("failed to read {}", args.input))?
    };
    print_json(&ApiResponse::ok(extract_emails(&text)));
    Ok(())
}

fn log_cmd(args: LogArgs) -> anyhow::Result<()> {
    let logger = ActivityLogger::new()?;
    for line in logger.read_logs(args.domain.as_deref(), args.errors)? {
        println!("{line}");
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(val: &T) {
    // pretty JSON output
    println!("{}", serde_json::to_string_pretty(val).unwrap());
}
