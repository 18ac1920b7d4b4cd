use std::path::PathBuf;

use clap::Parser;

use crate::logging::LogDestination;

/// Animated follower counters for a saved dashboard page.
#[derive(Debug, Parser)]
#[command(name = "subs_counter", version)]
pub struct Cli {
    /// Saved dashboard page to read counts and timestamps from.
    #[arg(required_unless_present = "write_default_config")]
    pub page: Option<PathBuf>,

    /// RON config file; defaults to ./subs_counter.ron when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the finished dashboard as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    /// Print every digit frame as the counters run.
    #[arg(long)]
    pub frames: bool,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    pub log: LogDestination,

    /// Cancel the animations after this many milliseconds.
    #[arg(long, value_name = "MS")]
    pub cancel_after: Option<u64>,

    /// Write the default config to PATH and exit.
    #[arg(long, value_name = "PATH")]
    pub write_default_config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Cli;
    use crate::logging::LogDestination;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn page_is_required_unless_writing_config() {
        assert!(Cli::try_parse_from(["subs_counter"]).is_err());
        let cli = Cli::try_parse_from(["subs_counter", "--write-default-config", "x.ron"]).unwrap();
        assert!(cli.page.is_none());
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "subs_counter",
            "page.html",
            "--json",
            "--log",
            "both",
            "--cancel-after",
            "250",
        ])
        .unwrap();
        assert_eq!(cli.page.as_deref(), Some(std::path::Path::new("page.html")));
        assert!(cli.json);
        assert!(!cli.frames);
        assert_eq!(cli.log, LogDestination::Both);
        assert_eq!(cli.cancel_after, Some(250));
    }
}
