use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::PlacementMode;

#[derive(Parser, Debug)]
#[command(
    name = "sno-adder",
    version,
    about = "Insert serial numbers into pasted multi-part prompt lists"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Format(FormatArgs),
    Check(CheckArgs),
    Example(ExampleArgs),
}

#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub start_index: u64,

    #[arg(long, default_value_t = false)]
    pub force_renumber: bool,

    #[arg(long, value_enum, default_value_t = PlacementMode::NewlineAfterUrl)]
    pub placement_mode: PlacementMode,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExampleArgs {
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn format_defaults_match_original_tool() {
        let cli = Cli::try_parse_from(["sno-adder", "format"]).expect("format should parse");

        let Commands::Format(args) = cli.command else {
            panic!("expected format subcommand");
        };
        assert_eq!(args.start_index, 1);
        assert!(!args.force_renumber);
        assert_eq!(args.placement_mode, PlacementMode::NewlineAfterUrl);
        assert!(args.input.is_none());
        assert!(!args.json);
    }

    #[test]
    fn format_rejects_zero_start_index() {
        let result = Cli::try_parse_from(["sno-adder", "format", "--start-index", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn format_accepts_placement_mode_and_flags() {
        let cli = Cli::try_parse_from([
            "sno-adder",
            "format",
            "--input",
            "prompts.txt",
            "--start-index",
            "10",
            "--force-renumber",
            "--placement-mode",
            "append-to-url-end",
            "--output",
            "out/formatted_prompts.txt",
        ])
        .expect("format flags should parse");

        let Commands::Format(args) = cli.command else {
            panic!("expected format subcommand");
        };
        assert_eq!(args.start_index, 10);
        assert!(args.force_renumber);
        assert_eq!(args.placement_mode, PlacementMode::AppendToUrlEnd);
        assert_eq!(args.input, Some(PathBuf::from("prompts.txt")));
        assert_eq!(
            args.output,
            Some(PathBuf::from("out/formatted_prompts.txt"))
        );
    }
}
