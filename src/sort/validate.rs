use itertools::Itertools;

use crate::settings::Settings;
use crate::sort::categorize::categorize;
use crate::sort::types::ImportEntry;

/// Return `true` if the import block deviates from the configured
/// grouping/ordering/spacing convention.
///
/// Scans adjacent entries in source order: a section may never regress to an
/// earlier position in the configured order, adjacent entries of different
/// sections must be separated by at least one blank line, and adjacent
/// entries of the same section must not be. Blocks of zero or one entries
/// are trivially well-formed.
///
/// The verdict is coarse: it reports that some pair violates, not which.
pub fn is_unorganized(entries: &[ImportEntry], settings: &Settings) -> bool {
    if entries.len() < 2 {
        return false;
    }
    entries.iter().tuple_windows().any(|(prev, curr)| {
        let prev_type = categorize(&prev.path, &settings.internal_prefix);
        let curr_type = categorize(&curr.path, &settings.internal_prefix);
        if settings.section_order.rank(curr_type) < settings.section_order.rank(prev_type) {
            return true;
        }
        let blank_between = curr.row.saturating_sub(prev.row) > 1;
        if curr_type == prev_type {
            blank_between
        } else {
            !blank_between
        }
    })
}

#[cfg(test)]
mod tests {
    use super::is_unorganized;
    use crate::settings::Settings;
    use crate::sort::order::SectionOrder;
    use crate::sort::types::ImportEntry;

    fn entry(path: &str, row: usize) -> ImportEntry {
        ImportEntry {
            path: path.to_string(),
            alias: None,
            row,
        }
    }

    fn settings() -> Settings {
        Settings::new("git.co/internal", SectionOrder::default())
    }

    #[test]
    fn empty_block_never_violates() {
        assert!(!is_unorganized(&[], &settings()));
    }

    #[test]
    fn single_entry_never_violates() {
        assert!(!is_unorganized(&[entry("github.com/foo/bar", 3)], &settings()));
    }

    #[test]
    fn well_formed_block_passes() {
        let entries = [
            entry("fmt", 3),
            entry("strings", 4),
            entry("github.com/foo/bar", 6),
            entry("git.co/internal/x", 8),
        ];
        assert!(!is_unorganized(&entries, &settings()));
    }

    #[test]
    fn section_regression_violates_despite_spacing() {
        let entries = [entry("github.com/foo/bar", 3), entry("fmt", 5)];
        assert!(is_unorganized(&entries, &settings()));
    }

    #[test]
    fn missing_blank_between_sections_violates() {
        let entries = [entry("fmt", 3), entry("github.com/foo/bar", 4)];
        assert!(is_unorganized(&entries, &settings()));
    }

    #[test]
    fn blank_line_within_a_section_violates() {
        let entries = [entry("fmt", 3), entry("strings", 5)];
        assert!(is_unorganized(&entries, &settings()));
    }

    #[test]
    fn custom_order_reverses_the_verdict() {
        let entries = [entry("fmt", 3), entry("github.com/foo/bar", 5)];
        assert!(!is_unorganized(&entries, &settings()));

        let custom = Settings::new("git.co/internal", SectionOrder::parse("external,standard,internal"));
        assert!(is_unorganized(&entries, &custom));
    }
}
