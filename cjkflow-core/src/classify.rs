//! Single-line structural classifiers
//!
//! Each predicate looks at one line in isolation. The driver decides which
//! form of the line (normalized or probe) each classifier sees.

use crate::bracket::has_unclosed_bracket;
use crate::chars::{is_all_ascii, is_all_cjk, is_mixed_cjk_ascii};
use crate::page::is_page_marker;
use crate::tables::{
    contains_clause_or_end_punct, contains_comma_like, is_allowed_postfix_closer,
    is_clause_or_end_punct, is_colon_like, is_dialogue_opener, is_matching_bracket,
    is_metadata_key, is_metadata_separator, METADATA_MAX_CHARS, METADATA_MAX_KEY_CHARS,
};
use regex::Regex;
use std::sync::OnceLock;

/// Minimum number of rule characters in a divider line
const DIVIDER_MIN_CHARS: usize = 3;

/// ASCII and typographic characters that may form a divider
const DIVIDER_CHARS: [char; 7] = ['-', '=', '_', '~', '·', '•', '*'];

/// Longest line (in chars) accepted as a title/chapter heading
const TITLE_MAX_CHARS: usize = 50;

/// Heading length limit for ASCII or mixed CJK/ASCII lines
const HEADING_MAX_CHARS_ASCII: usize = 18;

/// Heading length limit for CJK lines
const HEADING_MAX_CHARS_CJK: usize = 8;

/// Structural keyword starting within the first ten characters.
///
/// `第…章` requires one more character after the unit that is not 分/合/的,
/// which keeps phrases like `第三章的内容` out.
const TITLE_PATTERN: &str = concat!(
    r"^.{0,10}?(?:",
    r"前言|序章|终章|尾声|后记|番外|尾聲|後記",
    r"|第.{0,5}?[章节部卷節回][^分合的]",
    r"|[卷章][一二三四五六七八九十]",
    r")"
);

static TITLE_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn title_regex() -> Option<&'static Regex> {
    TITLE_REGEX
        .get_or_init(|| match Regex::new(TITLE_PATTERN) {
            Ok(regex) => Some(regex),
            Err(e) => {
                log::error!("title pattern failed to compile: {e}");
                None
            }
        })
        .as_ref()
}

#[inline]
fn is_box_drawing(ch: char) -> bool {
    ('\u{2500}'..='\u{257F}').contains(&ch)
}

/// Returns true if `s` is a visual rule such as `------`, `* * *` or a
/// box-drawing line.
///
/// Every non-whitespace character must be a box-drawing character or one of
/// `- = _ ~ · • *`, and at least three of them must be present.
pub fn is_visual_divider(s: &str) -> bool {
    let mut total = 0usize;

    for ch in s.chars() {
        if ch.is_whitespace() {
            continue;
        }
        if !is_box_drawing(ch) && !DIVIDER_CHARS.contains(&ch) {
            return false;
        }
        total += 1;
    }

    total >= DIVIDER_MIN_CHARS
}

/// Returns true for short front-matter lines like `作者：某某` or
/// `ISBN　978-7-0000-0000-0`.
///
/// The earliest separator found at char index 1..=10 splits the line; the
/// key before it must be a known metadata key and the value after it must
/// not open a dialogue quote (`作者：“……”` is prose, not metadata).
pub fn is_metadata_line(line: &str) -> bool {
    let s = line.trim();
    if s.is_empty() {
        return false;
    }

    let chars: Vec<char> = s.chars().collect();
    if chars.len() > METADATA_MAX_CHARS {
        return false;
    }

    let Some(idx) = chars
        .iter()
        .enumerate()
        .skip(1)
        .take(METADATA_MAX_KEY_CHARS)
        .find_map(|(i, &c)| is_metadata_separator(c).then_some(i))
    else {
        return false;
    };

    let key: String = chars[..idx].iter().collect();
    if !is_metadata_key(key.trim()) {
        return false;
    }

    match chars[idx + 1..].iter().find(|c| !c.is_whitespace()) {
        Some(&next) => !is_dialogue_opener(next),
        None => false,
    }
}

/// Returns true for a strong title or chapter heading (`第一章 风起`,
/// `序章`, `番外 一`, `卷三`).
pub fn is_title_heading(line: &str) -> bool {
    if line.contains([',', '，']) {
        return false;
    }
    if line.chars().count() > TITLE_MAX_CHARS {
        return false;
    }
    title_regex().is_some_and(|regex| regex.is_match(line))
}

/// Heuristic for short heading-like lines.
///
/// The checks run in order and the first decisive one wins:
/// 1. bracket-wrapped titles such as `【番外】` or `（上）`
/// 2. short CJK item labels ending in a colon, e.g. `物品准备：`
/// 3. lines ending in `)`/`）` without any comma
/// 4. lines ending in clause/sentence punctuation are prose
/// 5. lines containing a comma are prose
/// 6. anything short enough with no internal stop punctuation
pub fn is_heading_like(line: &str) -> bool {
    let s = line.trim();
    if s.is_empty() || is_page_marker(s) || has_unclosed_bracket(s) {
        return false;
    }

    let len = s.chars().count();
    if len < 2 {
        return false;
    }

    let (Some(first), Some(last)) = (s.chars().next(), s.chars().next_back()) else {
        return false;
    };

    if len >= 3 && is_matching_bracket(first, last) {
        return true;
    }

    let max_len = if is_all_ascii(s) || is_mixed_cjk_ascii(s) {
        HEADING_MAX_CHARS_ASCII
    } else {
        HEADING_MAX_CHARS_CJK
    };

    if is_colon_like(last) && len < max_len {
        let body = &s[..s.len() - last.len_utf8()];
        if is_all_cjk(body, false) {
            return true;
        }
    }

    if is_allowed_postfix_closer(last) && !contains_comma_like(s) {
        return true;
    }

    if is_clause_or_end_punct(last) || contains_comma_like(s) {
        return false;
    }

    // Numbers, ASCII labels and CJK captions all qualify once short and
    // free of stop punctuation.
    len <= max_len && !contains_clause_or_end_punct(s)
}
