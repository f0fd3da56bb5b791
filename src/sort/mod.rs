use std::collections::BTreeMap;

use crate::settings::Settings;
use crate::sort::categorize::{categorize, ImportType};
use crate::sort::types::ImportEntry;

pub mod categorize;
mod format;
pub mod order;
pub mod types;
mod validate;

pub use validate::is_unorganized;

/// Generate the canonical text of the whole import declaration.
///
/// Entries are partitioned by section, sorted by path within each section
/// (stable byte ordering; the alias plays no role in the key), and emitted in
/// the configured section order with exactly one blank line between
/// consecutive non-empty sections. A block with a single entry collapses to
/// an unparenthesized statement. The result is a complete replacement for
/// the declaration's span.
pub fn format_imports(entries: &[ImportEntry], settings: &Settings) -> String {
    if let [entry] = entries {
        return format::format_import(entry);
    }

    let mut blocks: BTreeMap<ImportType, Vec<&ImportEntry>> = BTreeMap::new();
    for entry in entries {
        blocks
            .entry(categorize(&entry.path, &settings.internal_prefix))
            .or_default()
            .push(entry);
    }
    for block in blocks.values_mut() {
        block.sort_by(|left, right| left.path.cmp(&right.path));
    }

    let mut output = String::from("import (\n");
    let mut is_first_block = true;
    for section in settings.section_order.iter() {
        let Some(block) = blocks.get(&section) else {
            continue;
        };
        if is_first_block {
            is_first_block = false;
        } else {
            output.push('\n');
        }
        for entry in block {
            output.push_str(&format::format_spec(entry));
            output.push('\n');
        }
    }
    output.push(')');
    output
}

#[cfg(test)]
mod tests {
    use super::format_imports;
    use crate::settings::Settings;
    use crate::sort::order::SectionOrder;
    use crate::sort::types::ImportEntry;

    fn entry(path: &str) -> ImportEntry {
        ImportEntry {
            path: path.to_string(),
            alias: None,
            row: 0,
        }
    }

    fn aliased(path: &str, alias: &str) -> ImportEntry {
        ImportEntry {
            path: path.to_string(),
            alias: Some(alias.to_string()),
            row: 0,
        }
    }

    fn settings() -> Settings {
        Settings::new("git.co/internal", SectionOrder::default())
    }

    #[test]
    fn single_import_is_unparenthesized() {
        assert_eq!(format_imports(&[entry("fmt")], &settings()), "import \"fmt\"");
    }

    #[test]
    fn single_aliased_import_keeps_its_alias() {
        assert_eq!(
            format_imports(&[aliased("fmt", "f")], &settings()),
            "import f \"fmt\""
        );
    }

    #[test]
    fn one_import_per_section() {
        let entries = [
            entry("fmt"),
            entry("github.com/foo/bar"),
            entry("git.co/internal/x"),
        ];
        assert_eq!(
            format_imports(&entries, &settings()),
            "import (\n\t\"fmt\"\n\n\t\"github.com/foo/bar\"\n\n\t\"git.co/internal/x\"\n)"
        );
    }

    #[test]
    fn sorts_by_path_within_a_section() {
        let entries = [
            entry("strings"),
            aliased("fmt", "f"),
            entry("bytes"),
        ];
        assert_eq!(
            format_imports(&entries, &settings()),
            "import (\n\t\"bytes\"\n\tf \"fmt\"\n\t\"strings\"\n)"
        );
    }

    #[test]
    fn empty_sections_contribute_nothing() {
        let entries = [entry("github.com/foo/bar"), entry("github.com/foo/baz")];
        assert_eq!(
            format_imports(&entries, &settings()),
            "import (\n\t\"github.com/foo/bar\"\n\t\"github.com/foo/baz\"\n)"
        );
    }

    #[test]
    fn custom_order_reverses_sections() {
        let entries = [entry("fmt"), entry("github.com/foo/bar")];
        let custom = Settings::new(
            "git.co/internal",
            SectionOrder::parse("external,standard,internal"),
        );
        assert_eq!(
            format_imports(&entries, &custom),
            "import (\n\t\"github.com/foo/bar\"\n\n\t\"fmt\"\n)"
        );
    }

    #[test]
    fn duplicate_paths_survive() {
        let entries = [entry("fmt"), entry("fmt")];
        assert_eq!(
            format_imports(&entries, &settings()),
            "import (\n\t\"fmt\"\n\t\"fmt\"\n)"
        );
    }
}
