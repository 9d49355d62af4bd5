//! CLI argument definitions for highscores.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use highscores_core::{DEFAULT_TOP_COUNT, ExportFormat, ReadOrder};

#[derive(Parser)]
#[command(name = "highscores")]
#[command(about = "Inspect and maintain a game high score board", version)]
pub struct Args {
    /// Leaderboard file (defaults to the per-user data directory)
    #[arg(long, value_name = "FILE", env = "HIGHSCORES_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Ordering used by `list`
    #[arg(long, default_value = "score-only", global = true)]
    pub read_order: ReadOrder,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Record a score
    Add {
        /// Player name
        #[arg(long, required_unless_present = "json")]
        name: Option<String>,
        /// Score value
        #[arg(long, required_unless_present = "json", allow_negative_numbers = true)]
        score: Option<i32>,
        /// Level reached
        #[arg(long, default_value = "1")]
        level: i32,
        /// Timestamp (RFC 3339 or local ISO-8601, defaults to now)
        #[arg(long)]
        date: Option<String>,
        /// Full entry as JSON (`null` is rejected)
        #[arg(long, conflicts_with_all = ["name", "score", "level", "date"])]
        json: Option<String>,
    },
    /// Show the whole board, highest score first
    List {
        #[arg(long, short, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Show the first entries of the board
    Top {
        /// Number of entries
        #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_COUNT)]
        count: usize,
        #[arg(long, short, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Remove every entry
    Clear,
    /// Print the resolved leaderboard file path
    Path,
    /// Export the board
    Export {
        /// Output format (tsv, json)
        #[arg(long, short, default_value = "tsv")]
        format: ExportFormat,
        /// Output file path (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Tsv,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("highscores").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_add_with_fields() {
        let args = parse(&["add", "--name", "Snake", "--score", "1200", "--level", "4"]);
        match args.command {
            Command::Add {
                name,
                score,
                level,
                date,
                json,
            } => {
                assert_eq!(name.as_deref(), Some("Snake"));
                assert_eq!(score, Some(1200));
                assert_eq!(level, 4);
                assert!(date.is_none());
                assert!(json.is_none());
            }
            _ => panic!("Expected Add command"),
        }
    }

    #[test]
    fn test_add_negative_score() {
        let args = parse(&["add", "--name", "Snake", "--score", "-5"]);
        assert!(matches!(args.command, Command::Add { score: Some(-5), level: 1, .. }));
    }

    #[test]
    fn test_add_requires_name_and_score_without_json() {
        let result = Args::try_parse_from(["highscores", "add", "--name", "Snake"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_add_json_conflicts_with_fields() {
        let result =
            Args::try_parse_from(["highscores", "add", "--json", "null", "--name", "Snake"]);
        assert!(result.is_err());

        let args = parse(&["add", "--json", "null"]);
        assert!(matches!(args.command, Command::Add { json: Some(_), .. }));
    }

    #[test]
    fn test_add_json_conflicts_with_level() {
        let result =
            Args::try_parse_from(["highscores", "add", "--json", "null", "--level", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_top_default_count() {
        let args = parse(&["top"]);
        match args.command {
            Command::Top { count, format } => {
                assert_eq!(count, DEFAULT_TOP_COUNT);
                assert_eq!(format, OutputFormat::Table);
            }
            _ => panic!("Expected Top command"),
        }
    }

    #[test]
    fn test_top_with_count_and_format() {
        let args = parse(&["top", "-n", "3", "--format", "json"]);
        assert!(matches!(
            args.command,
            Command::Top {
                count: 3,
                format: OutputFormat::Json
            }
        ));
    }

    #[test]
    fn test_global_file_and_read_order() {
        let args = parse(&["list", "--file", "/tmp/board.json", "--read-order", "ranked"]);
        assert_eq!(args.file, Some(PathBuf::from("/tmp/board.json")));
        assert_eq!(args.read_order, ReadOrder::Ranked);
    }

    #[test]
    fn test_read_order_default() {
        let args = parse(&["list"]);
        assert_eq!(args.read_order, ReadOrder::ScoreOnly);
    }

    #[test]
    fn test_export_format() {
        let args = parse(&["export", "--format", "json", "-o", "out.json"]);
        match args.command {
            Command::Export { format, output } => {
                assert_eq!(format, ExportFormat::Json);
                assert_eq!(output, Some(PathBuf::from("out.json")));
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_export_rejects_unknown_format() {
        let result = Args::try_parse_from(["highscores", "export", "--format", "xml"]);
        assert!(result.is_err());
    }
}
