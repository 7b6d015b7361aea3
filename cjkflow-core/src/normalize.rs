//! Per-line normalization ahead of classification
//!
//! A raw line goes through four steps:
//! 1. trailing whitespace trim
//! 2. half-width indent strip (a leading U+3000 stops the strip)
//! 3. OCR repeat collapse, which also trims and re-joins whitespace-separated
//!    tokens with single spaces
//! 4. full indent strip, producing the classification probe
//!
//! Steps 1-3 produce the normalized line that goes into the paragraph buffer.

/// Full-width (ideographic) space
pub const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Minimum consecutive repeats before a phrase is collapsed
const MIN_PHRASE_REPEATS: usize = 3;
/// Longest phrase (in tokens) considered for repeat collapse
const MAX_PHRASE_TOKENS: usize = 8;

/// Token length range (in chars) eligible for unit collapse
const TOKEN_MIN_CHARS: usize = 4;
const TOKEN_MAX_CHARS: usize = 200;
/// Unit length range (in chars) tried when collapsing a token
const UNIT_MIN_CHARS: usize = 4;
const UNIT_MAX_CHARS: usize = 10;

/// One input line after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLine {
    text: String,
    probe_start: usize,
}

impl NormalizedLine {
    /// Run the full normalization pipeline on one raw line
    pub fn new(raw: &str) -> Self {
        let visual = raw.trim_end();
        let stripped = strip_half_width_indent(visual);
        let text = collapse_repeated_segments(stripped);
        let probe_start = text.len() - strip_all_indent(&text).len();
        Self { text, probe_start }
    }

    /// Normalized line: what gets buffered and emitted
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Classification form with every leading indent removed
    #[inline]
    pub fn probe(&self) -> &str {
        &self.text[self.probe_start..]
    }

    /// Returns true if nothing but whitespace remains
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.probe().trim().is_empty()
    }
}

/// Strip leading ASCII whitespace, stopping at the first ideographic space.
pub fn strip_half_width_indent(s: &str) -> &str {
    s.trim_start_matches(|ch: char| ch.is_ascii() && ch.is_whitespace())
}

/// Strip leading ASCII whitespace and ideographic spaces.
pub fn strip_all_indent(s: &str) -> &str {
    s.trim_start_matches([' ', '\t', '\r', '\n', IDEOGRAPHIC_SPACE])
}

/// Collapse OCR repetition in a line.
///
/// The line is split on whitespace. The first run of a phrase repeated three
/// or more times collapses to one copy, then every token that is an exact
/// tiling of a short unit collapses to that unit. Tokens are re-joined with
/// single spaces. A line with no tokens is returned unchanged.
pub fn collapse_repeated_segments(line: &str) -> String {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return line.to_string();
    }

    collapse_repeated_phrases(&parts)
        .into_iter()
        .map(collapse_repeated_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Collapse the first phrase of 1..=8 tokens that repeats at least three
/// times in a row.
pub fn collapse_repeated_phrases<'a>(parts: &[&'a str]) -> Vec<&'a str> {
    let n = parts.len();
    if n < MIN_PHRASE_REPEATS {
        return parts.to_vec();
    }

    for start in 0..n {
        for phrase_len in 1..=MAX_PHRASE_TOKENS {
            if start + phrase_len > n {
                break;
            }

            let phrase = &parts[start..start + phrase_len];
            let mut count = 1;
            loop {
                let next_start = start + count * phrase_len;
                match parts.get(next_start..next_start + phrase_len) {
                    Some(next) if next == phrase => count += 1,
                    _ => break,
                }
            }

            if count >= MIN_PHRASE_REPEATS {
                let tail = start + count * phrase_len;
                let mut out = Vec::with_capacity(n - tail + start + phrase_len);
                out.extend_from_slice(&parts[..start + phrase_len]);
                out.extend_from_slice(&parts[tail..]);
                return out;
            }
        }
    }

    parts.to_vec()
}

/// Collapse a token that is an exact repetition of one 4..=10 char unit,
/// e.g. `版权所有版权所有版权所有` collapses to `版权所有`.
///
/// Only tokens of 4..=200 chars are considered, and the unit must repeat at
/// least three times.
pub fn collapse_repeated_token(token: &str) -> &str {
    let len = token.chars().count();
    if !(TOKEN_MIN_CHARS..=TOKEN_MAX_CHARS).contains(&len) {
        return token;
    }

    let chars: Vec<char> = token.chars().collect();
    for unit_len in UNIT_MIN_CHARS..=UNIT_MAX_CHARS {
        if unit_len > len / 3 {
            break;
        }
        if len % unit_len != 0 {
            continue;
        }

        let unit = &chars[..unit_len];
        if chars.chunks(unit_len).all(|chunk| chunk == unit) {
            let end = unit.iter().map(|ch| ch.len_utf8()).sum();
            return &token[..end];
        }
    }

    token
}
