//! CLI argument definitions for the checklist browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use torist_display::Locale;

#[derive(Parser)]
#[command(
    name = "torist",
    version,
    about = "Torist - browse and cross-reference bird checklists",
    long_about = "Load national and world bird checklists from a folder of spreadsheets\n\
                  and view them side by side, linked on scientific name.\n\n\
                  Supported: China CBR, Taiwan (CWBF), Japan (OSJ) and the IOC World Bird List."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Folder holding the checklist spreadsheets.
    #[arg(long = "index-dir", value_name = "DIR", default_value = "original_index", global = true)]
    pub index_dir: PathBuf,

    /// Display language for headers and messages.
    #[arg(long = "locale", value_enum, default_value = "en", global = true)]
    pub locale: LocaleArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List loaded checklists, the synonym count and skipped files.
    Labels(LabelsArgs),

    /// Show a base checklist cross-referenced with compare checklists.
    View(ViewArgs),
}

#[derive(Args)]
pub struct LabelsArgs {
    /// Print JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct ViewArgs {
    /// Base checklist label, e.g. "Taiwan (2023)".
    #[arg(value_name = "BASE")]
    pub base: String,

    /// Compare checklist label (repeatable). Defaults to the latest IOC list.
    #[arg(short = 'c', long = "compare", value_name = "LABEL")]
    pub compare: Vec<String>,

    /// Do not add the latest IOC list when no compare list is given.
    #[arg(long = "no-default-compare")]
    pub no_default_compare: bool,

    /// Keep rows where any cell contains this text (case-insensitive).
    #[arg(long = "query", value_name = "TEXT")]
    pub query: Option<String>,

    /// Maximum rows to print (0 for all).
    #[arg(long = "limit", default_value_t = 200)]
    pub limit: usize,

    /// Print JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LocaleArg {
    /// Simplified Chinese.
    Sc,
    /// Traditional Chinese.
    Tc,
    En,
    /// Japanese.
    Jp,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Sc => Locale::Sc,
            LocaleArg::Tc => Locale::Tc,
            LocaleArg::En => Locale::En,
            LocaleArg::Jp => Locale::Jp,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn view_defaults() {
        let cli = Cli::parse_from(["torist", "view", "Taiwan (2023)"]);
        assert_eq!(cli.index_dir, PathBuf::from("original_index"));
        assert_eq!(Locale::from(cli.locale), Locale::En);
        let Command::View(args) = cli.command else {
            panic!("expected view");
        };
        assert_eq!(args.base, "Taiwan (2023)");
        assert!(args.compare.is_empty());
        assert_eq!(args.limit, 200);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "torist",
            "view",
            "Japan (v8)",
            "-c",
            "IOC (15.1)",
            "-c",
            "Taiwan (2023)",
            "--locale",
            "jp",
            "--query",
            "passer",
        ]);
        assert_eq!(Locale::from(cli.locale), Locale::Jp);
        let Command::View(args) = cli.command else {
            panic!("expected view");
        };
        assert_eq!(args.compare, vec!["IOC (15.1)", "Taiwan (2023)"]);
        assert_eq!(args.query.as_deref(), Some("passer"));
    }
}
