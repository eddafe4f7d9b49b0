// src/main.rs
use std::path::PathBuf;
use std::process::exit;
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, error, info, Level};

use subhunt::{App, Config, EnumerateOptions, ReportFormat};

#[derive(Parser)]
#[command(name = "subhunt")]
#[command(version)]
#[command(about = "Run a subdomain enumeration tool and report what it finds")]
struct Args {
    #[command(subcommand)]
    command: Cli,

    #[arg(long, short, global = true, help = "Enable debug logging")]
    verbose: bool,

    #[arg(long, short, global = true, help = "Path to a configuration file")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Cli {
    /// Enumerate subdomains of a domain
    Enum {
        #[arg(help = "Target domain")]
        domain: String,

        #[arg(short = 'x', long, help = "Path to the enumeration tool (default ./subfinder)")]
        executable: Option<PathBuf>,

        #[arg(short, long, help = "Kill the tool after this many seconds (0 disables)")]
        timeout: Option<u64>,

        #[arg(short, long, value_enum, help = "Output format")]
        format: Option<ReportFormat>,

        #[arg(short, long, help = "Write the report to a file instead of stdout")]
        output: Option<PathBuf>,

        #[arg(long, help = "Header line printed before the subdomains")]
        header: Option<String>,
    },

    /// Write the default configuration file
    Init {
        #[arg(short, long, help = "Force overwrite existing configuration")]
        force: bool,
    },

    /// Print the effective configuration
    ShowConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout only carries the report
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args).await {
        error!("{}", e);
        exit(1);
    }

    Ok(())
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Cli::Init { force } => {
            let path = Config::init(args.config.as_deref(), force)?;
            println!("Configuration initialized at {}", path.display());
        }
        Cli::ShowConfig => {
            let config = Config::load(args.config.as_deref())?;
            print!("{}", config.to_toml()?);
        }
        Cli::Enum { domain, executable, timeout, format, output, header } => {
            let config = Config::load(args.config.as_deref())?;
            let app = App::new(config);

            let options = EnumerateOptions {
                domain,
                executable,
                timeout_seconds: timeout,
                format,
                header,
                output,
            };

            let report = app.run(&options).await?;
            debug!("Enumeration took {} ms", report.duration_ms);
            info!("Done: {} entries for {}", report.total, report.domain);
        }
    }

    Ok(())
}
