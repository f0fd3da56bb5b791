use log::debug;

#[derive(Debug, PartialOrd, Ord, PartialEq, Eq, Copy, Clone, Hash)]
pub enum ImportType {
    Standard,
    External,
    Internal,
}

/// Classify an import path by ownership.
///
/// Paths without a domain component belong to the standard library; dotted
/// paths under `internal_prefix` (exact, case-sensitive match) are internal;
/// everything else is external. A standard-library path that happens to
/// contain a dot, or a third-party path that happens to contain none, is
/// misclassified. Known limitation of the heuristic.
pub fn categorize(path: &str, internal_prefix: &str) -> ImportType {
    let import_type = if !path.contains('.') {
        ImportType::Standard
    } else if path.starts_with(internal_prefix) {
        ImportType::Internal
    } else {
        ImportType::External
    };
    debug!("Categorized '{path}' as {import_type:?}");
    import_type
}
