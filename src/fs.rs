use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Result;
use walkdir::{DirEntry, WalkDir};

fn is_not_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| entry.depth() == 0 || !name.starts_with('.'))
        .unwrap_or(false)
}

/// Iterate over every Go source file under `path`, skipping hidden
/// directories.
pub fn iter_go_files(path: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_entry(is_not_hidden)
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file() && entry.path().to_string_lossy().ends_with(".go")
        })
}

pub fn read_file(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut buf_reader = BufReader::new(file);
    let mut contents = String::new();
    buf_reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Write `contents` to `path`, preserving the file's permission bits.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    let permissions = std::fs::metadata(path)?.permissions();
    std::fs::write(path, contents)?;
    std::fs::set_permissions(path, permissions)?;
    Ok(())
}
