use crate::sort::types::ImportEntry;

/// Render a lone import as an unparenthesized statement.
pub(crate) fn format_import(entry: &ImportEntry) -> String {
    match &entry.alias {
        Some(alias) => format!("import {alias} \"{}\"", entry.path),
        None => format!("import \"{}\"", entry.path),
    }
}

/// Render one spec line of a parenthesized block.
pub(crate) fn format_spec(entry: &ImportEntry) -> String {
    match &entry.alias {
        Some(alias) => format!("\t{alias} \"{}\"", entry.path),
        None => format!("\t\"{}\"", entry.path),
    }
}
