mod completions;
mod describe;
mod generate;
mod init;

use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use describe::DescribeCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use log::LevelFilter;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for entgen_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "entgen")]
#[command(version)]
#[command(about = "Generate typed row decoders from entity schemas")]
pub(crate) struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Initialize the logger. `RUST_LOG` overrides the level picked by `-v`.
    pub fn init_logging(&self) {
        let level = match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .parse_default_env()
            .init();
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Describe(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create schema files for new entities
    Init(InitCommand),

    /// Print a description of the schema graph
    Describe(DescribeCommand),

    /// Generate entity modules from a schema
    Generate(GenerateCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
