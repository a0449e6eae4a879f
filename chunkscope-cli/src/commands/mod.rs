//! CLI command implementations

use clap::Subcommand;

pub mod chunk;
pub mod describe;
pub mod generate_config;
pub mod list;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into chunks
    Chunk(chunk::ChunkArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Show the catalog entry of a strategy
    Describe(describe::DescribeArgs),

    /// Generate a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available chunking strategies
    Strategies {
        /// Print the strategy catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// List available output formats
    Formats,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Chunk(args) => args.execute(),
            Commands::List { subcommand } => {
                let mut stdout = std::io::stdout().lock();
                match subcommand {
                    ListCommands::Strategies { json } => list::write_strategies(&mut stdout, *json),
                    ListCommands::Formats => list::write_formats(&mut stdout),
                }
            }
            Commands::Describe(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}
