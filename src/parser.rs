use std::path::{Path, PathBuf};

use thiserror::Error;
use tree_sitter::{Node, Parser};

use crate::sort::types::ImportEntry;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to load the Go grammar")]
    Language(#[from] tree_sitter::LanguageError),
    #[error("{}:{}: invalid syntax", .path.display(), .line)]
    Syntax { path: PathBuf, line: usize },
}

/// The first top-level import declaration of a Go source file.
#[derive(Debug)]
pub struct ImportDecl {
    /// The imported paths in source order.
    pub entries: Vec<ImportEntry>,
    /// Zero-based first row of the declaration.
    pub start_row: usize,
    /// Zero-based last row of the declaration, inclusive.
    pub end_row: usize,
}

/// Parse `contents` and extract its import declaration, if any.
///
/// Go permits several top-level import declarations; only the first is
/// inspected. Syntax errors anywhere in the file are fatal: a formatting
/// tool must not guess intent from broken input.
pub fn parse_imports(path: &Path, contents: &str) -> Result<Option<ImportDecl>, ParseError> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_go::LANGUAGE.into())?;

    let tree = parser.parse(contents, None).ok_or_else(|| ParseError::Syntax {
        path: path.to_path_buf(),
        line: 1,
    })?;
    let root = tree.root_node();
    if root.has_error() {
        return Err(ParseError::Syntax {
            path: path.to_path_buf(),
            line: first_error_row(root).map_or(1, |row| row + 1),
        });
    }

    let mut cursor = root.walk();
    let Some(declaration) = root
        .named_children(&mut cursor)
        .find(|node| node.kind() == "import_declaration")
    else {
        return Ok(None);
    };

    let mut entries = Vec::new();
    collect_specs(declaration, contents, &mut entries);
    Ok(Some(ImportDecl {
        entries,
        start_row: declaration.start_position().row,
        end_row: declaration.end_position().row,
    }))
}

/// Row of the first ERROR or MISSING node, if any.
fn first_error_row(node: Node) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row);
    }
    let mut cursor = node.walk();
    let result = node
        .children(&mut cursor)
        .find_map(|child| first_error_row(child));
    result
}

fn collect_specs(declaration: Node, contents: &str, entries: &mut Vec<ImportEntry>) {
    let mut cursor = declaration.walk();
    for child in declaration.named_children(&mut cursor) {
        match child.kind() {
            "import_spec" => entries.extend(extract_spec(child, contents)),
            "import_spec_list" => {
                let mut list_cursor = child.walk();
                for spec in child.named_children(&mut list_cursor) {
                    if spec.kind() == "import_spec" {
                        entries.extend(extract_spec(spec, contents));
                    }
                }
            }
            _ => {}
        }
    }
}

fn extract_spec(spec: Node, contents: &str) -> Option<ImportEntry> {
    let path_node = spec.child_by_field_name("path")?;
    let path = path_node
        .utf8_text(contents.as_bytes())
        .ok()?
        .trim_matches(|quote| quote == '"' || quote == '`')
        .to_string();
    let alias = spec
        .child_by_field_name("name")
        .and_then(|name| name.utf8_text(contents.as_bytes()).ok())
        .map(ToString::to_string);
    Some(ImportEntry {
        path,
        alias,
        row: spec.start_position().row,
    })
}
