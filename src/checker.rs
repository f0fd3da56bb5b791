use std::path::Path;

use anyhow::Result;
use log::{debug, warn};

use crate::settings::Settings;
use crate::sort::{format_imports, is_unorganized};
use crate::splice::splice_lines;
use crate::{fs, gofmt, parser};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Report violations without touching any file.
    Check,
    /// Rewrite the import block to canonical form in place.
    Fix,
}

/// Process a single file.
///
/// In check mode, returns `true` if the file's import block violates the
/// convention. In fix mode, returns `true` if the file was rewritten; any
/// file with at least one import is rewritten to canonical form, whether or
/// not it currently violates.
pub fn check_path(path: &Path, settings: &Settings, mode: Mode) -> Result<bool> {
    let contents = fs::read_file(path)?;
    let Some(declaration) = parser::parse_imports(path, &contents)? else {
        debug!("No import declaration in {}", path.display());
        return Ok(false);
    };

    match mode {
        Mode::Check => Ok(is_unorganized(&declaration.entries, settings)),
        Mode::Fix => {
            if declaration.entries.is_empty() {
                return Ok(false);
            }
            let block = format_imports(&declaration.entries, settings);
            let spliced = splice_lines(
                &contents,
                declaration.start_row,
                declaration.end_row,
                &block,
            );
            let formatted = match gofmt::format_source(&spliced) {
                Some(formatted) => formatted,
                None => {
                    warn!(
                        "gofmt failed for {}; writing unformatted output",
                        path.display()
                    );
                    spliced
                }
            };
            fs::write_file(path, &formatted)?;
            Ok(true)
        }
    }
}
