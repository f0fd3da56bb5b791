use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use impsort::checker::{check_path, Mode};
use impsort::cli::{extract_log_level, Cli};
use impsort::fs::iter_go_files;
use impsort::logging::{set_up_logging, LogLevel};
use impsort::printer::Printer;
use impsort::settings::Settings;

fn inner_main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let log_level = extract_log_level(&cli);
    set_up_logging(log_level)?;

    let settings = Settings::new(cli.internal_prefix, cli.order);
    let mode = if cli.fix { Mode::Fix } else { Mode::Check };

    let mut flagged = Vec::new();
    for path in &cli.files {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("failed to access {}", path.display()))?;
        if metadata.is_dir() {
            for file in iter_go_files(path) {
                if check_path(file.path(), &settings, mode)? {
                    flagged.push(file.path().to_path_buf());
                }
            }
        } else if check_path(path, &settings, mode)? {
            flagged.push(path.clone());
        }
    }

    if log_level != LogLevel::Silent {
        Printer::new(io::stdout().lock(), cli.format).write_once(mode, &flagged)?;
    }

    if mode == Mode::Check && !flagged.is_empty() && !cli.exit_zero {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match inner_main() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:?}", "error".red().bold());
            ExitCode::FAILURE
        }
    }
}
