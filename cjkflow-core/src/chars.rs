//! Character classification for CJK reflow heuristics
//!
//! The CJK test is intentionally narrow: only the BMP ideograph blocks used by
//! Chinese text recovered from PDF/OCR extraction. Kana, Hangul and the
//! supplementary ideograph planes are not counted as CJK here.

/// Highest ASCII code point
const ASCII_MAX: u32 = 0x7F;

/// CJK Unified Ideographs Extension A
const CJK_EXT_A: (u32, u32) = (0x3400, 0x4DBF);
/// CJK Unified Ideographs
const CJK_UNIFIED: (u32, u32) = (0x4E00, 0x9FFF);
/// CJK Compatibility Ideographs
const CJK_COMPAT: (u32, u32) = (0xF900, 0xFAFF);

/// FULLWIDTH DIGIT ZERO..NINE
const FULLWIDTH_DIGITS: (u32, u32) = (0xFF10, 0xFF19);

/// ASCII characters that neither count as ASCII content nor reject a
/// mixed CJK/ASCII line (dates, paths, times, version numbers).
const MIXED_NEUTRAL: [char; 5] = [' ', '-', '/', ':', '.'];

#[inline]
fn in_range(c: u32, (lo, hi): (u32, u32)) -> bool {
    (lo..=hi).contains(&c)
}

/// Returns true if `ch` is a CJK ideograph in one of the BMP blocks.
#[inline]
pub fn is_cjk(ch: char) -> bool {
    let c = ch as u32;
    in_range(c, CJK_EXT_A) || in_range(c, CJK_UNIFIED) || in_range(c, CJK_COMPAT)
}

/// Returns true for FULLWIDTH DIGIT ZERO through NINE.
#[inline]
pub fn is_fullwidth_digit(ch: char) -> bool {
    in_range(ch as u32, FULLWIDTH_DIGITS)
}

/// Returns true for ASCII or fullwidth digits.
#[inline]
pub fn is_any_digit(ch: char) -> bool {
    ch.is_ascii_digit() || is_fullwidth_digit(ch)
}

/// Returns true if every character of `s` is ASCII (vacuously true for "").
pub fn is_all_ascii(s: &str) -> bool {
    s.chars().all(|ch| ch as u32 <= ASCII_MAX)
}

/// Returns true if every non-whitespace character is CJK and at least one
/// exists.
///
/// Whitespace rejects the string outright unless `allow_whitespace` is set,
/// in which case it is skipped.
pub fn is_all_cjk(s: &str, allow_whitespace: bool) -> bool {
    let mut seen = false;

    for ch in s.chars() {
        if ch.is_whitespace() {
            if !allow_whitespace {
                return false;
            }
            continue;
        }

        seen = true;
        if !is_cjk(ch) {
            return false;
        }
    }

    seen
}

/// Returns true once both a CJK character and ASCII alphanumeric content
/// (including fullwidth digits) have been seen.
///
/// Space, `-`, `/`, `:` and `.` are neutral. Any other ASCII punctuation, or
/// any non-ASCII character that is not CJK, rejects the line.
pub fn is_mixed_cjk_ascii(s: &str) -> bool {
    let mut has_cjk = false;
    let mut has_ascii = false;

    for ch in s.chars() {
        if MIXED_NEUTRAL.contains(&ch) {
            continue;
        }

        if ch.is_ascii() {
            if ch.is_ascii_alphanumeric() {
                has_ascii = true;
            } else {
                return false;
            }
        } else if is_fullwidth_digit(ch) {
            has_ascii = true;
        } else if is_cjk(ch) {
            has_cjk = true;
        } else {
            return false;
        }

        if has_cjk && has_ascii {
            return true;
        }
    }

    false
}

/// Returns true if CJK characters are present and at least as numerous as
/// ASCII letters.
///
/// Digits, whitespace and punctuation are neutral.
pub fn is_mostly_cjk(s: &str) -> bool {
    ScriptTally::of(s).is_mostly_cjk()
}

/// Running CJK and ASCII-letter counts behind [`is_mostly_cjk`], kept up to
/// date as text is appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptTally {
    cjk: usize,
    ascii_alpha: usize,
}

impl ScriptTally {
    pub fn of(s: &str) -> Self {
        let mut tally = Self::default();
        tally.add(s);
        tally
    }

    pub fn add(&mut self, s: &str) {
        for ch in s.chars() {
            if is_cjk(ch) {
                self.cjk += 1;
            } else if ch.is_ascii_alphabetic() {
                self.ascii_alpha += 1;
            }
        }
    }

    pub fn is_mostly_cjk(&self) -> bool {
        self.cjk > 0 && self.cjk >= self.ascii_alpha
    }
}

/// Returns true if `s` holds at least one digit and otherwise only ASCII
/// spaces, ASCII digits or fullwidth digits.
pub fn is_all_ascii_digits(s: &str) -> bool {
    let mut has_digit = false;

    for ch in s.chars() {
        if ch == ' ' {
            continue;
        }
        if is_any_digit(ch) {
            has_digit = true;
            continue;
        }
        return false;
    }

    has_digit
}

/// Last non-whitespace character of `s`.
#[inline]
pub fn last_non_whitespace(s: &str) -> Option<char> {
    s.chars().rev().find(|ch| !ch.is_whitespace())
}

/// Last two non-whitespace characters of `s` as `(last, previous)`.
pub fn last_two_non_whitespace(s: &str) -> Option<(char, char)> {
    let mut it = s.chars().rev().filter(|ch| !ch.is_whitespace());
    let last = it.next()?;
    let prev = it.next()?;
    Some((last, prev))
}
