//! Optional text cleanup passes
//!
//! Neither pass runs inside [`crate::reflow`]; callers apply them explicitly
//! to extracted text before reflowing it.

/// Zero-width and directional characters that leak out of PDF extraction.
const INVISIBLE_CHARS: [char; 4] = [
    '\u{200B}', // ZERO WIDTH SPACE
    '\u{FEFF}', // BOM / ZERO WIDTH NO-BREAK SPACE
    '\u{200E}', // LEFT-TO-RIGHT MARK
    '\u{200F}', // RIGHT-TO-LEFT MARK
];

/// Remove zero-width spaces, BOMs and LTR/RTL marks.
pub fn sanitize_invisible(text: &str) -> String {
    text.chars().filter(|ch| !INVISIBLE_CHARS.contains(ch)).collect()
}

/// Drop a non-empty line whose trimmed content repeats the previous
/// non-empty line, as repeated running headers tend to.
///
/// A blank line is always kept and resets the comparison, so only directly
/// consecutive duplicates are removed. Lines are re-joined with `\n`.
pub fn collapse_consecutive_duplicate_lines(text: &str) -> String {
    let mut out: Vec<&str> = Vec::new();
    let mut prev: Option<&str> = None;

    for line in text.lines() {
        let key = line.trim();
        if key.is_empty() {
            out.push(line);
            prev = None;
            continue;
        }
        if prev == Some(key) {
            continue;
        }
        out.push(line);
        prev = Some(key);
    }

    out.join("\n")
}
