/// One imported path as it appears in the source file.
///
/// The section an entry belongs to is derived from `path` and the configured
/// internal prefix on demand; it is never stored. Duplicate literal paths are
/// carried through unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEntry {
    /// The unquoted import target.
    pub path: String,
    /// Binding name, when the import is aliased (including `_` and `.`).
    pub alias: Option<String>,
    /// Zero-based source row of the spec, used to measure blank separation.
    pub row: usize,
}
