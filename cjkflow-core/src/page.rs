//! Page markers shared between the PDF extractor and the reflow driver
//!
//! The extractor prefixes every page with `=== [Page n/m] ===` surrounded by
//! blank lines; the driver treats any `=== … ===` line as a hard break.

/// Marker prefix, including the separating space
const MARKER_OPEN: &str = "=== ";
/// Marker suffix, including the separating space
const MARKER_CLOSE: &str = " ===";

/// Format the marker line for page `page` of `total`.
pub fn page_marker(page: usize, total: usize) -> String {
    format!("{MARKER_OPEN}[Page {page}/{total}]{MARKER_CLOSE}")
}

/// Returns true if `line` matches `^=== .* ===$`.
pub fn is_page_marker(line: &str) -> bool {
    line.len() >= MARKER_OPEN.len() + MARKER_CLOSE.len()
        && line.starts_with(MARKER_OPEN)
        && line.ends_with(MARKER_CLOSE)
}

/// Concatenate extracted page texts the way the extractor does.
///
/// With `add_header`, every page is preceded by `"\n\n" + marker + "\n\n"`;
/// otherwise pages are joined with nothing in between.
pub fn assemble_pages<I, S>(pages: I, add_header: bool) -> String
where
    I: IntoIterator<Item = S>,
    I::IntoIter: ExactSizeIterator,
    S: AsRef<str>,
{
    let pages = pages.into_iter();
    let total = pages.len();
    let mut out = String::new();

    for (i, page) in pages.enumerate() {
        if add_header {
            out.push_str("\n\n");
            out.push_str(&page_marker(i + 1, total));
            out.push_str("\n\n");
        }
        out.push_str(page.as_ref());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_format() {
        assert_eq!(page_marker(3, 20), "=== [Page 3/20] ===");
        assert!(is_page_marker(&page_marker(1, 1)));
    }

    #[test]
    fn test_marker_pattern() {
        assert!(is_page_marker("=== anything ==="));
        assert!(is_page_marker("===  ==="));
        assert!(!is_page_marker("=== ==="));
        assert!(!is_page_marker("===[Page 1/2]==="));
        assert!(!is_page_marker("=== [Page 1/2]==="));
        assert!(!is_page_marker(" === [Page 1/2] ==="));
    }

    #[test]
    fn test_assemble_with_headers() {
        let text = assemble_pages(["第一页", "第二页"], true);
        assert_eq!(
            text,
            "\n\n=== [Page 1/2] ===\n\n第一页\n\n=== [Page 2/2] ===\n\n第二页"
        );
    }

    #[test]
    fn test_assemble_without_headers() {
        let pages = vec!["甲".to_string(), "乙".to_string()];
        assert_eq!(assemble_pages(&pages, false), "甲乙");
        assert_eq!(assemble_pages(Vec::<String>::new(), true), "");
    }
}
