//! Paragraph-buffer boundary detectors
//!
//! Both detectors answer one question about the text accumulated so far:
//! does it already end a paragraph, so the next line should start a new one?
//!
//! The string forms scan the whole text when they need its script mix. The
//! reflow driver goes through [`crate::buffer::ParagraphBuffer`] instead,
//! which supplies that mix from running counts.

use crate::bracket::is_bracket_type_balanced;
use crate::chars::{is_cjk, is_mostly_cjk};
use crate::tables::{
    ends_with_ellipsis, is_allowed_postfix_closer, is_bracket_closer, is_colon_like,
    is_dialogue_closer, is_matching_bracket, is_strong_sentence_end,
};

/// Returns true if `s` ends a sentence.
///
/// In order:
/// 1. the last non-whitespace char is a strong ender (`。！？!?`)
/// 2. an OCR-produced `.` or `:` ends a mostly-CJK line right after a CJK char
/// 3. a dialogue closer or `)`/`）` follows a strong ender, or follows an OCR
///    `.` as in `好.”`
/// 4. a colon ends a mostly-CJK line (`他说：` before a quoted line)
/// 5. an ellipsis ends the line
///
/// A bare bracket closer is not a boundary, so `（亦作肥）` mid-sentence
/// does not flush.
pub fn ends_with_sentence_boundary(s: &str) -> bool {
    sentence_boundary(s, || is_mostly_cjk(s))
}

/// [`ends_with_sentence_boundary`] with the mostly-CJK answer for all of `s`
/// supplied by the caller. Apart from that only the tail of `s` is read.
pub(crate) fn sentence_boundary(s: &str, mostly_cjk: impl Fn() -> bool) -> bool {
    let mut tail = s.char_indices().rev().filter(|(_, ch)| !ch.is_whitespace());

    let Some((last_idx, last)) = tail.next() else {
        return false;
    };

    if is_strong_sentence_end(last) {
        return true;
    }

    let Some((prev_idx, prev)) = tail.next() else {
        return false;
    };

    if (last == '.' || last == ':') && is_ocr_punct_at_line_end(s, last_idx, &mostly_cjk) {
        return true;
    }

    if is_dialogue_closer(last) || is_allowed_postfix_closer(last) {
        if is_strong_sentence_end(prev) {
            return true;
        }
        if prev == '.' && is_ocr_punct_before_closers(s, prev_idx, &mostly_cjk) {
            return true;
        }
    }

    if is_colon_like(last) && mostly_cjk() {
        return true;
    }

    ends_with_ellipsis(s)
}

/// `punct_idx` is a byte offset of an ASCII `.`/`:` in `s`. True if only
/// whitespace follows it and it directly follows a CJK char in a mostly-CJK
/// string.
fn is_ocr_punct_at_line_end(s: &str, punct_idx: usize, mostly_cjk: &impl Fn() -> bool) -> bool {
    let after = &s[punct_idx + 1..];
    after.chars().all(char::is_whitespace) && follows_cjk_in_cjk_text(s, punct_idx, mostly_cjk)
}

/// Like [`is_ocr_punct_at_line_end`] but also lets dialogue and bracket
/// closers follow the punctuation (`.”`, `.」`, `.）`).
fn is_ocr_punct_before_closers(
    s: &str,
    punct_idx: usize,
    mostly_cjk: &impl Fn() -> bool,
) -> bool {
    let after = &s[punct_idx + 1..];
    after
        .chars()
        .all(|ch| ch.is_whitespace() || is_dialogue_closer(ch) || is_bracket_closer(ch))
        && follows_cjk_in_cjk_text(s, punct_idx, mostly_cjk)
}

fn follows_cjk_in_cjk_text(s: &str, idx: usize, mostly_cjk: &impl Fn() -> bool) -> bool {
    s[..idx].chars().next_back().is_some_and(is_cjk) && mostly_cjk()
}

/// Returns true if the whole buffer is one balanced bracketed CJK unit such
/// as `（完）`, `【番外】` or `《後記》`.
///
/// The content inside the outer pair must be mostly CJK, which also keeps
/// `(test)` and `[1.2]` out. The outer bracket type must be balanced across
/// the whole buffer.
pub fn ends_with_cjk_bracket_boundary(s: &str) -> bool {
    let Some((open, inner)) = outer_bracket_pair(s) else {
        return false;
    };

    is_mostly_cjk(inner) && is_bracket_type_balanced(s.trim(), open)
}

/// The opener and trimmed content of `s` when trimmed `s` starts with an
/// opener and ends with its matching closer.
///
/// Brackets and whitespace are script-neutral, so the content has the same
/// CJK mix as `s` itself.
pub(crate) fn outer_bracket_pair(s: &str) -> Option<(char, &str)> {
    let t = s.trim();

    let mut chars = t.chars();
    let (Some(open), Some(close)) = (chars.next(), chars.next_back()) else {
        return None;
    };

    if !is_matching_bracket(open, close) {
        return None;
    }

    Some((open, t[open.len_utf8()..t.len() - close.len_utf8()].trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_enders() {
        assert!(ends_with_sentence_boundary("今天天气很好。"));
        assert!(ends_with_sentence_boundary("真的吗？  "));
        assert!(ends_with_sentence_boundary("!"));
        assert!(!ends_with_sentence_boundary("今天天气"));
        assert!(!ends_with_sentence_boundary(""));
        assert!(!ends_with_sentence_boundary(" \u{3000} "));
    }

    #[test]
    fn test_ocr_ascii_period() {
        assert!(ends_with_sentence_boundary("这是一个句子."));
        assert!(ends_with_sentence_boundary("他说道:"));
        // Preceded by ASCII: a normal English period, not an OCR artifact
        assert!(!ends_with_sentence_boundary("see Fig. 2."));
        // Mostly English text
        assert!(!ends_with_sentence_boundary("this is english 中."));
    }

    #[test]
    fn test_closers_after_enders() {
        assert!(ends_with_sentence_boundary("“你好。”"));
        assert!(ends_with_sentence_boundary("（完了！）"));
        assert!(ends_with_sentence_boundary("「好.」"));
        assert!(ends_with_sentence_boundary("他说“好.” "));
        // A bare closer is not a boundary
        assert!(!ends_with_sentence_boundary("肥（亦作肥）"));
        assert!(!ends_with_sentence_boundary("“你好”"));
    }

    #[test]
    fn test_colon_and_ellipsis() {
        assert!(ends_with_sentence_boundary("他说："));
        assert!(!ends_with_sentence_boundary("Note："));
        assert!(ends_with_sentence_boundary("他想了想……"));
        assert!(ends_with_sentence_boundary("and then..."));
    }

    #[test]
    fn test_cjk_bracket_boundary() {
        assert!(ends_with_cjk_bracket_boundary("（完）"));
        assert!(ends_with_cjk_bracket_boundary(" 【番外】 "));
        assert!(ends_with_cjk_bracket_boundary("《後記》"));
        assert!(ends_with_cjk_bracket_boundary("(全文完)"));
    }

    #[test]
    fn test_cjk_bracket_boundary_rejections() {
        assert!(!ends_with_cjk_bracket_boundary("(test)"));
        assert!(!ends_with_cjk_bracket_boundary("[1.2]"));
        assert!(!ends_with_cjk_bracket_boundary("（ ）"));
        assert!(!ends_with_cjk_bracket_boundary("（"));
        assert!(!ends_with_cjk_bracket_boundary("正文（完）"));
        assert!(!ends_with_cjk_bracket_boundary("（（甲）"));
        assert!(!ends_with_cjk_bracket_boundary("（甲）（乙"));
    }
}
