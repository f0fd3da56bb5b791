use std::path::PathBuf;

use clap::Parser;

use crate::logging::LogLevel;
use crate::printer::SerializationFormat;
use crate::sort::order::SectionOrder;

#[derive(Debug, Parser)]
#[command(author, about = "Impsort: A fast import-block sorter for Go files.")]
#[command(version)]
pub struct Cli {
    /// Files or directories to process.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Module prefix identifying internal imports (e.g.
    /// `github.com/acme/platform`).
    #[arg(long)]
    pub internal_prefix: String,
    /// Comma-separated section order. Unrecognized tokens are ignored;
    /// unmentioned sections keep their default relative position.
    #[arg(long, default_value = "standard,external,internal")]
    pub order: SectionOrder,
    /// Rewrite import blocks in place instead of only reporting.
    #[arg(long)]
    pub fix: bool,
    /// Output serialization format for the report.
    #[arg(long, value_enum, default_value_t = SerializationFormat::Text)]
    pub format: SerializationFormat,
    /// Enable verbose logging.
    #[arg(short, long, group = "verbosity")]
    pub verbose: bool,
    /// Only log errors.
    #[arg(short, long, group = "verbosity")]
    pub quiet: bool,
    /// Disable all logging (but still exit with status code "1" upon
    /// detecting violations).
    #[arg(short, long, group = "verbosity")]
    pub silent: bool,
    /// Exit with status code "0", even upon detecting violations.
    #[arg(short, long)]
    pub exit_zero: bool,
}

/// Map the CLI settings to a `LogLevel`.
pub fn extract_log_level(cli: &Cli) -> LogLevel {
    if cli.silent {
        LogLevel::Silent
    } else if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Default
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::Cli;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
