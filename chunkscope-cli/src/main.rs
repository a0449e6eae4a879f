//! chunkscope command-line entry point

use chunkscope_cli::commands::Commands;
use clap::Parser;
use std::process::ExitCode;

/// Split text into chunks for retrieval pipelines and inspect the result
#[derive(Debug, Parser)]
#[command(name = "chunkscope", author, version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_about_comes_from_doc_comment() {
        let about = Cli::command().get_about().map(|s| s.to_string());
        assert_eq!(
            about.as_deref(),
            Some("Split text into chunks for retrieval pipelines and inspect the result")
        );
    }

    #[test]
    fn test_parse_chunk_command() {
        let cli = Cli::try_parse_from([
            "chunkscope",
            "chunk",
            "-i",
            "a.txt",
            "-s",
            "fixed",
            "--chunk-size",
            "10",
            "-f",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Chunk(args) => {
                assert_eq!(args.input, vec!["a.txt"]);
                assert_eq!(args.strategy.as_deref(), Some("fixed"));
                assert_eq!(args.chunk_size, Some(10));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_request_conflicts_with_input() {
        let result = Cli::try_parse_from([
            "chunkscope",
            "chunk",
            "-i",
            "a.txt",
            "--request",
            "req.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_chunk_requires_input_or_request() {
        assert!(Cli::try_parse_from(["chunkscope", "chunk"]).is_err());
        assert!(Cli::try_parse_from(["chunkscope", "chunk", "--request", "req.json"]).is_ok());
    }
}
