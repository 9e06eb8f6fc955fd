//! unreal-locres CLI - inspect, convert and translate Unreal Engine `.locres` files

pub mod commands;
pub mod progress;

use clap::Parser;
use locreslib::formats::locres::SheetFormat;
use tracing_subscriber::EnvFilter;

use commands::{Commands, Options};

#[derive(Parser)]
#[command(name = "unreal-locres")]
#[command(version, about = "Unreal Engine .locres tools", long_about = None)]
struct Cli {
    /// Show debug logging (`RUST_LOG` takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress step and timing output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Translation sheet field separator
    #[arg(long, global = true, default_value_t = '→')]
    separator: char,

    /// Marks a separator that is part of the text in a translation sheet
    #[arg(long, global = true, default_value_t = '¶')]
    escape: char,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn options(&self) -> anyhow::Result<Options> {
        if self.separator == self.escape {
            anyhow::bail!(
                "Separator and escape must differ (both are '{}')",
                self.separator
            );
        }
        if [self.separator, self.escape].into_iter().any(|c| matches!(c, '\r' | '\n')) {
            anyhow::bail!("Separator and escape cannot be line breaks");
        }

        Ok(Options {
            quiet: self.quiet,
            sheet: SheetFormat {
                separator: self.separator,
                escape: self.escape,
            },
        })
    }
}

/// Run the unreal-locres CLI
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let options = cli.options()?;
    cli.command.execute(options)
}
