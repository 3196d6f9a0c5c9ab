use anyhow::Result;
use clap::{Parser, ValueEnum};
use depwalk::config::OutputFormat;
use depwalk::{WalkConfig, run};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version="1.0.0", about="Deploy-manifest dependency walker", long_about = None)]
struct Args {
    /// Directory containing the top-level deploy.json or package.js
    path: Option<PathBuf>,

    /// Output file path (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load from file or default
    let mut config = WalkConfig::load_from_file().unwrap_or_default();

    // 2. Override with CLI args
    if let Some(p) = args.path {
        config.path = p;
    }
    if let Some(o) = args.output {
        config.output = Some(o);
    }
    if let Some(f) = args.format {
        config.output_format = f.into();
    }
    if args.verbose {
        config.verbose = true;
    }

    config.validate()?;

    run(config)
}
