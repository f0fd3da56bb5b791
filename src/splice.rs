/// Replace the inclusive line range `start_row..=end_row` of `contents` with
/// `replacement`, leaving every surrounding line untouched.
///
/// Rows are zero-based. The replacement is inserted verbatim (it may span
/// any number of lines) and a trailing newline on the original content is
/// preserved.
pub fn splice_lines(
    contents: &str,
    start_row: usize,
    end_row: usize,
    replacement: &str,
) -> String {
    let lines: Vec<&str> = contents.lines().collect();
    let mut output = String::with_capacity(contents.len() + replacement.len());

    for line in &lines[..start_row.min(lines.len())] {
        output.push_str(line);
        output.push('\n');
    }
    output.push_str(replacement);
    output.push('\n');
    if end_row + 1 < lines.len() {
        for line in &lines[end_row + 1..] {
            output.push_str(line);
            output.push('\n');
        }
    }
    if !contents.ends_with('\n') {
        output.pop();
    }
    output
}
