//! CLI argument definitions for nth-of-type.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::logging::{LogConfig, LogFormat};
use sidecar_model::{
    DEFAULT_GROUP_EXPRESSION, DEFAULT_SORT_EXPRESSION, NthOfTypeOptions, SIDECAR_EXTENSION,
};

#[derive(Parser)]
#[command(
    name = "nth-of-type",
    version,
    about = "Order and group sidecar metadata files by their properties",
    long_about = "Order JSON sidecar files by one property and group them by others.\n\n\
                  Each sidecar is given its ordinal position (1st, 2nd, ...) within\n\
                  the group of sidecars sharing the same group-by values."
)]
pub struct Cli {
    /// Sidecar files, or directories to search for sidecars.
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Property to sort by, optionally followed by `:asc` or `:desc`.
    #[arg(
        long = "nth-of-type-sort-by",
        value_name = "EXPR",
        default_value = DEFAULT_SORT_EXPRESSION
    )]
    pub sort_by: String,

    /// Comma-separated properties that define a group.
    #[arg(
        long = "nth-of-type-group-by",
        value_name = "EXPR",
        default_value = DEFAULT_GROUP_EXPRESSION
    )]
    pub group_by: String,

    /// File-name suffix that marks a sidecar (case-sensitive).
    #[arg(long = "extension", value_name = "SUFFIX", default_value = SIDECAR_EXTENSION)]
    pub extension: String,

    /// Search directories recursively.
    #[arg(short = 'r', long = "recursive")]
    pub recursive: bool,

    /// Output format for the result.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

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
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Log a timed close event for each pipeline stage.
    #[arg(long = "log-span-events", global = true)]
    pub log_span_events: bool,
}

impl Cli {
    /// Sort and group expressions as given on the command line.
    pub fn options(&self) -> NthOfTypeOptions {
        NthOfTypeOptions::new()
            .with_sort_by(self.sort_by.as_str())
            .with_group_by(self.group_by.as_str())
    }

    /// Logging configuration from the verbosity, color and `--log-*` flags.
    ///
    /// `--log-level` wins over `-v`/`-q`; `RUST_LOG` is honored only when
    /// neither is given.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = match self.log_level {
            Some(LogLevelArg::Error) => LevelFilter::ERROR,
            Some(LogLevelArg::Warn) => LevelFilter::WARN,
            Some(LogLevelArg::Info) => LevelFilter::INFO,
            Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
            Some(LogLevelArg::Trace) => LevelFilter::TRACE,
            None => self.verbosity.tracing_level_filter(),
        };
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            level_filter,
            use_env_filter: !(self.verbosity.is_present() || self.log_level.is_some()),
            with_timestamps: self.log_timestamps,
            with_target: self.log_target,
            with_spans: self.log_span_events,
            with_ansi,
            format,
            log_file: self.log_file.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
