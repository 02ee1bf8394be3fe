use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "dolah")]
#[command(about = "Interpret natural language task manager commands and dates")]
#[command(long_about = "dolah - natural language command interpreter

Turns a line typed into a task manager into a structured command, resolving
dates such as 'next monday', 'tomorrow', '3 weeks' or '25/12/23' on the way.

QUICK START:
  dolah parse buy milk by friday       Interpret a line (defaults to add)
  dolah parse done 3                   Mark task 3 as done
  dolah date next week                 Resolve a date expression
  dolah repl                           Interpret lines from stdin

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to the `general.default_output` config setting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Resolve relative dates against this day instead of today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_iso_date, global = true)]
    pub today: Option<NaiveDate>,

    /// Path to the config file (default: ~/.dolah/config.yaml)
    #[arg(long, env = "DOLAH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interpret a command line
    ///
    /// Words without a leading keyword are treated as a new task.
    ///
    /// # Examples
    ///
    ///   dolah parse buy milk by friday
    ///   dolah parse edit 2 dentist on 25 dec
    ///   dolah parse del 4
    #[command(alias = "p")]
    Parse {
        /// The words of the command line
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Resolve a date expression
    ///
    /// # Examples
    ///
    ///   dolah date tomorrow
    ///   dolah date next friday
    ///   dolah date 25th of december
    #[command(alias = "d")]
    Date {
        /// The words of the date expression
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Interpret every line read from stdin
    ///
    /// Errors are reported per line. Stops at end of input or on `quit`.
    Repl,

    /// Show or create the config file
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as YAML
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_iso_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{value}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_words() {
        let cli = Cli::try_parse_from(["dolah", "parse", "buy", "milk"]).unwrap();
        match cli.command {
            Commands::Parse { words } => assert_eq!(words, vec!["buy", "milk"]),
            _ => panic!("expected parse"),
        }
    }

    #[test]
    fn test_parse_words_with_hyphen() {
        let cli = Cli::try_parse_from(["dolah", "parse", "done", "-1"]).unwrap();
        match cli.command {
            Commands::Parse { words } => assert_eq!(words, vec!["done", "-1"]),
            _ => panic!("expected parse"),
        }
    }

    #[test]
    fn test_parse_requires_words() {
        assert!(Cli::try_parse_from(["dolah", "parse"]).is_err());
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::try_parse_from([
            "dolah", "-o", "json", "-vv", "--today", "2023-06-14", "date", "tomorrow",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2023, 6, 14));
    }

    #[test]
    fn test_output_defaults_to_config() {
        let cli = Cli::try_parse_from(["dolah", "repl"]).unwrap();
        assert_eq!(cli.output, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_bad_today() {
        assert!(Cli::try_parse_from(["dolah", "--today", "14/06/2023", "repl"]).is_err());
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::try_parse_from(["dolah", "config", "init", "--force"]).unwrap();
        match cli.command {
            Commands::Config(args) => {
                assert!(matches!(args.command, ConfigCommands::Init { force: true }));
            },
            _ => panic!("expected config"),
        }
    }
}
