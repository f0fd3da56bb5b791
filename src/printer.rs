use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::checker::Mode;

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq, Debug, Default)]
pub enum SerializationFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    path: &'a Path,
    message: &'static str,
}

fn message_for(mode: Mode) -> &'static str {
    match mode {
        Mode::Check => "Import block is un-sorted or un-formatted",
        Mode::Fix => "Rewrote import block",
    }
}

pub struct Printer<W> {
    writer: W,
    format: SerializationFormat,
}

impl<W: Write> Printer<W> {
    pub fn new(writer: W, format: SerializationFormat) -> Self {
        Self { writer, format }
    }

    /// Report the per-run outcome: the flagged (check) or rewritten (fix)
    /// files plus a one-line summary.
    pub fn write_once(&mut self, mode: Mode, paths: &[PathBuf]) -> Result<()> {
        match self.format {
            SerializationFormat::Json => {
                let messages: Vec<Message> = paths
                    .iter()
                    .map(|path| Message {
                        path,
                        message: message_for(mode),
                    })
                    .collect();
                writeln!(self.writer, "{}", serde_json::to_string_pretty(&messages)?)?;
            }
            SerializationFormat::Text => match mode {
                Mode::Check => {
                    for path in paths {
                        writeln!(self.writer, "{}: {}", path.display(), message_for(mode))?;
                    }
                    writeln!(
                        self.writer,
                        "Found {} file(s) with an un-sorted or un-formatted import block.",
                        paths.len()
                    )?;
                }
                Mode::Fix => {
                    writeln!(self.writer, "Fixed {} file(s).", paths.len())?;
                }
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use anyhow::Result;

    use super::{Printer, SerializationFormat};
    use crate::checker::Mode;

    #[test]
    fn text_check_report_lists_paths_and_summary() -> Result<()> {
        let mut buffer = Vec::new();
        Printer::new(&mut buffer, SerializationFormat::Text)
            .write_once(Mode::Check, &[PathBuf::from("a/main.go")])?;
        let report = String::from_utf8(buffer)?;
        assert!(report.contains("a/main.go"));
        assert!(report.contains("Found 1 file(s)"));
        Ok(())
    }

    #[test]
    fn json_report_is_a_message_array() -> Result<()> {
        let mut buffer = Vec::new();
        Printer::new(&mut buffer, SerializationFormat::Json)
            .write_once(Mode::Fix, &[PathBuf::from("a/main.go")])?;
        let report: serde_json::Value = serde_json::from_slice(&buffer)?;
        assert_eq!(report[0]["path"], "a/main.go");
        assert_eq!(report[0]["message"], "Rewrote import block");
        Ok(())
    }
}
