use std::io::Write;
use std::process::{Command, Stdio};

use log::debug;

/// Reformat Go source by piping it through `gofmt`.
///
/// Returns `None` when the binary is missing, fails, or produces non-UTF-8
/// output. Callers are expected to fall back to the unformatted content: a
/// cosmetic formatting failure must never prevent a structurally correct
/// rewrite from being saved.
pub fn format_source(contents: &str) -> Option<String> {
    let mut child = Command::new("gofmt")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;
    child.stdin.take()?.write_all(contents.as_bytes()).ok()?;
    let output = child.wait_with_output().ok()?;
    if !output.status.success() {
        debug!("gofmt exited with {}", output.status);
        return None;
    }
    String::from_utf8(output.stdout).ok()
}
