//! CLI argument definitions for the lab report extractor.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use health_support_lib::Domain;

#[derive(Parser)]
#[command(
    name = "health-support",
    version,
    about = "Extract prediction inputs from lab reports",
    long_about = "Extract the fields a disease-prediction service needs from a lab report.\n\n\
                  Reads PDF or plain-text reports and builds the fixed request for the\n\
                  liver, diabetes or heart-attack prediction service."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

impl Cli {
    /// Explicit level requested by flags, `None` to fall back to defaults.
    pub fn log_level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical prediction request extracted from a report.
    Extract(ReportArgs),

    /// Extract a report and submit it to the prediction service.
    Predict(PredictArgs),

    /// List supported domains and their request fields.
    Domains,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Lab report to read (PDF or UTF-8 text).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Prediction domain (liver, diabetes, heart-attack).
    #[arg(short = 'd', long = "domain", value_name = "DOMAIN")]
    pub domain: Domain,

    /// Also print the lines and parsed record behind the request.
    #[arg(long = "details")]
    pub details: bool,
}

#[derive(Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Prediction service base URL (default: $HEALTH_SUPPORT_API_BASE or the hosted service).
    #[arg(long = "api-base", value_name = "URL")]
    pub api_base: Option<String>,

    /// Request timeout in seconds.
    #[arg(long = "timeout", value_name = "SECS", default_value_t = health_support_lib::config::DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Json,
}
