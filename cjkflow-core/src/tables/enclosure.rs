//! Paired delimiters: dialogue quotes and brackets
//!
//! Dialogue quotes and brackets are tracked separately. Quotes only need
//! per-family counters (see [`crate::dialogue`]), while brackets need a strict
//! nesting check (see [`crate::bracket`]).

/// The six recognized dialogue quote families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DialogueQuote {
    /// `“ ”`
    DoubleCurly = 0,
    /// `‘ ’`
    SingleCurly = 1,
    /// `「 」`
    Corner = 2,
    /// `『 』`
    WhiteCorner = 3,
    /// `﹁ ﹂` (vertical presentation form)
    VerticalCorner = 4,
    /// `﹃ ﹄` (vertical presentation form)
    VerticalWhiteCorner = 5,
}

impl DialogueQuote {
    /// Number of quote families
    pub const COUNT: usize = 6;

    /// All families in index order
    pub const ALL: [DialogueQuote; Self::COUNT] = [
        DialogueQuote::DoubleCurly,
        DialogueQuote::SingleCurly,
        DialogueQuote::Corner,
        DialogueQuote::WhiteCorner,
        DialogueQuote::VerticalCorner,
        DialogueQuote::VerticalWhiteCorner,
    ];

    /// Counter slot for this family
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn open(self) -> char {
        match self {
            DialogueQuote::DoubleCurly => '“',
            DialogueQuote::SingleCurly => '‘',
            DialogueQuote::Corner => '「',
            DialogueQuote::WhiteCorner => '『',
            DialogueQuote::VerticalCorner => '﹁',
            DialogueQuote::VerticalWhiteCorner => '﹃',
        }
    }

    pub const fn close(self) -> char {
        match self {
            DialogueQuote::DoubleCurly => '”',
            DialogueQuote::SingleCurly => '’',
            DialogueQuote::Corner => '」',
            DialogueQuote::WhiteCorner => '』',
            DialogueQuote::VerticalCorner => '﹂',
            DialogueQuote::VerticalWhiteCorner => '﹄',
        }
    }

    /// Family whose opening mark is `ch`
    #[inline]
    pub fn from_opener(ch: char) -> Option<Self> {
        match ch {
            '“' => Some(DialogueQuote::DoubleCurly),
            '‘' => Some(DialogueQuote::SingleCurly),
            '「' => Some(DialogueQuote::Corner),
            '『' => Some(DialogueQuote::WhiteCorner),
            '﹁' => Some(DialogueQuote::VerticalCorner),
            '﹃' => Some(DialogueQuote::VerticalWhiteCorner),
            _ => None,
        }
    }

    /// Family whose closing mark is `ch`
    #[inline]
    pub fn from_closer(ch: char) -> Option<Self> {
        match ch {
            '”' => Some(DialogueQuote::DoubleCurly),
            '’' => Some(DialogueQuote::SingleCurly),
            '」' => Some(DialogueQuote::Corner),
            '』' => Some(DialogueQuote::WhiteCorner),
            '﹂' => Some(DialogueQuote::VerticalCorner),
            '﹄' => Some(DialogueQuote::VerticalWhiteCorner),
            _ => None,
        }
    }
}

#[inline]
pub fn is_dialogue_opener(ch: char) -> bool {
    DialogueQuote::from_opener(ch).is_some()
}

#[inline]
pub fn is_dialogue_closer(ch: char) -> bool {
    DialogueQuote::from_closer(ch).is_some()
}

/// Returns true if the first character after leading ASCII spaces and
/// ideographic spaces (U+3000) is a dialogue opener.
pub fn begins_with_dialogue_opener(s: &str) -> bool {
    s.chars()
        .find(|&ch| ch != ' ' && ch != '\u{3000}')
        .is_some_and(is_dialogue_opener)
}

/// Bracket pairs (open, close), ASCII and full-width/CJK forms.
pub const BRACKET_PAIRS: [(char, char); 14] = [
    // Parentheses
    ('（', '）'),
    ('(', ')'),
    // Square brackets
    ('［', '］'),
    ('[', ']'),
    // Curly braces
    ('｛', '｝'),
    ('{', '}'),
    // Angle brackets
    ('＜', '＞'),
    ('<', '>'),
    ('⟨', '⟩'),
    ('〈', '〉'),
    // CJK brackets
    ('【', '】'),
    ('《', '》'),
    ('〔', '〕'),
    ('〖', '〗'),
];

/// Closing bracket for an opening bracket
#[inline]
pub fn matching_closer(open: char) -> Option<char> {
    BRACKET_PAIRS
        .iter()
        .find(|(o, _)| *o == open)
        .map(|&(_, c)| c)
}

/// Opening bracket for a closing bracket
#[inline]
pub fn matching_opener(close: char) -> Option<char> {
    BRACKET_PAIRS
        .iter()
        .find(|(_, c)| *c == close)
        .map(|&(o, _)| o)
}

#[inline]
pub fn is_bracket_opener(ch: char) -> bool {
    matching_closer(ch).is_some()
}

#[inline]
pub fn is_bracket_closer(ch: char) -> bool {
    matching_opener(ch).is_some()
}

/// Returns true if `(open, close)` is one of the known bracket pairs.
#[inline]
pub fn is_matching_bracket(open: char, close: char) -> bool {
    matching_closer(open) == Some(close)
}
