//! Punctuation classes used by the reflow cascade
//!
//! Each class is a closed set known at compile time. Small classes are a
//! `matches!` on the character; the clause-or-end class is a `const` array
//! so [`is_clause_or_end_punct`] scans it with `contains`.

/// Clause-ending or sentence-ending punctuation.
///
/// Covers CJK full-width stops, closing quotes and brackets, and the ASCII
/// marks OCR tends to produce in their place.
pub const CLAUSE_OR_END_PUNCT: [char; 25] = [
    '。', '！', '？', '；', '：', '…', '—', '”', '’', '」', '』', '）', '】', '》', '〗', '〕', '〉',
    '］', '｝', '＞', '.', '!', '?', ')', ':',
];

/// Ellipsis suffixes, longest first.
pub const ELLIPSIS_SUFFIXES: [&str; 4] = ["……", "...", "..", "…"];

/// Clause-ending or sentence-ending punctuation
#[inline]
pub fn is_clause_or_end_punct(ch: char) -> bool {
    CLAUSE_OR_END_PUNCT.contains(&ch)
}

/// Returns true if any clause/end punctuation mark appears anywhere in `s`.
pub fn contains_clause_or_end_punct(s: &str) -> bool {
    s.chars().any(is_clause_or_end_punct)
}

/// `。！？!?`: these always close a sentence.
#[inline]
pub fn is_strong_sentence_end(ch: char) -> bool {
    matches!(ch, '。' | '！' | '？' | '!' | '?')
}

#[inline]
pub fn is_comma_like(ch: char) -> bool {
    matches!(ch, '，' | ',' | '、')
}

pub fn contains_comma_like(s: &str) -> bool {
    s.chars().any(is_comma_like)
}

#[inline]
pub fn is_colon_like(ch: char) -> bool {
    matches!(ch, '：' | ':')
}

/// Closers allowed to end a heading such as `目录（上）`.
#[inline]
pub fn is_allowed_postfix_closer(ch: char) -> bool {
    matches!(ch, ')' | '）')
}

/// Returns true if the last non-whitespace character is colon-like.
pub fn ends_with_colon_like(s: &str) -> bool {
    s.trim_end().chars().next_back().is_some_and(is_colon_like)
}

/// Returns true if the last non-whitespace character is `)` or `）`.
pub fn ends_with_allowed_postfix_closer(s: &str) -> bool {
    s.trim_end()
        .chars()
        .next_back()
        .is_some_and(is_allowed_postfix_closer)
}

/// Returns true if `s`, ignoring trailing whitespace, ends with an ellipsis.
pub fn ends_with_ellipsis(s: &str) -> bool {
    let t = s.trim_end();
    ELLIPSIS_SUFFIXES.iter().any(|suffix| t.ends_with(suffix))
}
