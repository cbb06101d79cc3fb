use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resub")]
#[command(about = "Regex search and replace with a recent-expression history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (default: platform config dir)
    #[arg(long, global = true, env = "RESUB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search and replace in a file
    #[command(visible_alias = "search-replace")]
    Replace(ReplaceArgs),

    /// Browse or edit recently used expressions
    #[command(subcommand)]
    History(HistoryCommands),

    /// Show or change settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Args)]
pub struct ReplaceArgs {
    /// File to rewrite in place
    pub file: PathBuf,

    /// Search pattern (regex)
    #[arg(short, long, conflicts_with = "recent")]
    pub pattern: Option<String>,

    /// Replacement text; `$1`, `${name}` reference groups, `$$` is a literal `$`
    #[arg(short, long, default_value = "", conflicts_with = "recent")]
    pub replacement: String,

    /// Reuse the recent expression at this index (see `history list`)
    #[arg(long)]
    pub recent: Option<usize>,

    /// Cursor position to carry through, as LINE:COL
    #[arg(long)]
    pub cursor: Option<String>,
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List recent expressions, most recent first
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a recent expression
    Remove {
        /// Index shown by `history list`
        index: usize,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print current settings
    Show,

    /// Print the settings file path
    Path,

    /// Set how many recent expressions to keep
    SetMaxRecent {
        /// Positive integer
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_entry_points_parse_the_same() {
        for name in ["replace", "search-replace"] {
            let cli = Cli::try_parse_from(["resub", name, "notes.md", "-p", "a+", "-r", "b"]).unwrap();
            let Commands::Replace(args) = cli.command else {
                panic!("expected replace command");
            };
            assert_eq!(args.file, PathBuf::from("notes.md"));
            assert_eq!(args.pattern.as_deref(), Some("a+"));
            assert_eq!(args.replacement, "b");
        }
    }

    #[test]
    fn test_replacement_defaults_to_empty() {
        let cli = Cli::try_parse_from(["resub", "replace", "notes.md", "-p", "x"]).unwrap();
        let Commands::Replace(args) = cli.command else {
            panic!("expected replace command");
        };
        assert_eq!(args.replacement, "");
        assert_eq!(args.recent, None);
    }

    #[test]
    fn test_recent_conflicts_with_pattern() {
        let parsed = Cli::try_parse_from(["resub", "replace", "f", "-p", "x", "--recent", "0"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_set_max_recent_takes_raw_text() {
        let cli = Cli::try_parse_from(["resub", "config", "set-max-recent", "abc"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config(ConfigCommands::SetMaxRecent { ref value }) if value == "abc"
        ));
    }
}
