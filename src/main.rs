use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use iptv_aggregator::{
    config::{defaults::DEFAULT_CONFIG_FILE, Config},
    pipeline::PlaylistPipeline,
    playlist::{group_rows, read_playlist, write_playlist},
    sources::{SourceRegistry, CURATED_CHANNELS},
};

#[derive(Parser)]
#[command(name = "iptv-aggregator")]
#[command(version)]
#[command(about = "Builds one verified, categorized playlist from many live TV feeds")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log level
    #[arg(short = 'v', long, global = true, default_value = "info")]
    log_level: String,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch, verify and write the playlist (default)
    Generate(GenerateArgs),
    /// Show the category rows of a rendered playlist
    Inspect {
        /// Playlist file to read
        file: PathBuf,
        /// Also list the channels in each row
        #[arg(long)]
        entries: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args, Default)]
struct GenerateArgs {
    /// Output playlist path (overrides config file)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Number of concurrent stream probes
    #[arg(short, long)]
    workers: Option<usize>,

    /// Per-stream probe timeout, e.g. "8s"
    #[arg(long, value_parser = humantime::parse_duration)]
    probe_timeout: Option<Duration>,

    /// Write a JSON run summary to this path
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,
}

fn init_logging(level: &str, format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("iptv_aggregator={level}").into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_format);

    let mut config = Config::load(Some(cli.config.as_path()))?;

    match cli.command.unwrap_or(Command::Generate(GenerateArgs::default())) {
        Command::Generate(args) => {
            if let Some(output) = args.output {
                config.output_path = output;
            }
            if let Some(workers) = args.workers {
                config.health_check.workers = Some(workers);
            }
            if let Some(timeout) = args.probe_timeout {
                config.health_check.timeout = timeout;
            }
            config.validate()?;
            generate(&config, args.summary).await
        }
        Command::Inspect { file, entries } => inspect(&config, &file, entries).await,
        Command::Config => {
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
    }
}

async fn generate(config: &Config, summary_path: Option<PathBuf>) -> Result<()> {
    info!("Starting IPTV aggregator v{}", env!("CARGO_PKG_VERSION"));

    let registry = SourceRegistry::builtin();
    let pipeline = PlaylistPipeline::from_config(config)?;
    let output = pipeline
        .run(&registry, CURATED_CHANNELS)
        .await
        .context("Playlist generation failed")?;

    write_playlist(&config.output_path, &output.playlist).await?;
    output.summary.log();

    if let Some(path) = summary_path {
        output.summary.write_json(&path).await?;
    }

    info!(
        "Done: {} live channels written to {}",
        output.channels.len(),
        config.output_path.display()
    );
    Ok(())
}

async fn inspect(config: &Config, file: &Path, show_entries: bool) -> Result<()> {
    let content = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let entries = read_playlist(&content);
    let rows = group_rows(&entries, config.playlist.max_row_items);

    println!("{} channels in {} rows", entries.len(), rows.len());
    for row in rows {
        println!("{}", row.title);
        if show_entries {
            for entry in &row.entries {
                println!("    {}", entry.name);
            }
        }
    }
    Ok(())
}
