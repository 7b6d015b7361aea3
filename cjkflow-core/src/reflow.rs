//! Paragraph reflow driver
//!
//! Lines are consumed in order. Each line is normalized once, then run
//! through a fixed cascade where the first applicable rule wins:
//!
//! | # | condition                                   | action                         |
//! |---|---------------------------------------------|--------------------------------|
//! | 1 | divider                                     | flush, emit divider            |
//! | 2 | blank line                                  | flush unless it is a soft wrap |
//! | 3 | page marker                                 | flush, emit marker             |
//! | 4 | title/chapter heading                       | flush, emit title              |
//! | 5 | metadata                                    | flush, emit metadata           |
//! | 6 | heading-like and the paragraph can end here | flush, emit heading            |
//! | 7 | line ends a sentence, paragraph is balanced | append, flush                  |
//! | 8 | no open paragraph                           | start one                      |
//! | 9 | line opens dialogue after a finished clause | flush, start                   |
//! |10 | line closes dialogue                        | append, maybe flush            |
//! |11 | paragraph already ends a sentence           | flush, start                   |
//! |12 | paragraph is one bracketed CJK unit         | flush, start                   |
//! |13 | otherwise                                   | append                         |
//!
//! CJK text needs no separator between merged lines, so appended lines are
//! concatenated directly. The open paragraph keeps running summaries (see
//! [`ParagraphBuffer`]), so every rule reads only the current line and the
//! paragraph tail and total cost stays linear in the input.

use crate::bracket::has_unclosed_bracket;
use crate::buffer::ParagraphBuffer;
use crate::chars::{is_all_cjk, is_cjk, last_non_whitespace, last_two_non_whitespace};
use crate::classify::{is_heading_like, is_metadata_line, is_title_heading, is_visual_divider};
use crate::config::ReflowOptions;
use crate::dialogue::DialogueState;
use crate::normalize::NormalizedLine;
use crate::page::is_page_marker;
use crate::segment::{join_segments, Segment, SegmentKind};
use crate::tables::{
    begins_with_dialogue_opener, ends_with_allowed_postfix_closer, ends_with_colon_like,
    is_clause_or_end_punct, is_comma_like, is_dialogue_closer, is_strong_sentence_end,
};
use log::{debug, trace};

/// Reflows ragged CJK text into paragraphs.
///
/// A `Reflower` holds only its options; every call owns its own paragraph
/// buffer, so one instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reflower {
    options: ReflowOptions,
}

impl Reflower {
    pub fn new(options: ReflowOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ReflowOptions {
        &self.options
    }

    /// Reflow `text` and join the segments.
    ///
    /// Empty or whitespace-only input is returned unchanged.
    pub fn reflow(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }
        join_segments(&self.segments(text), self.options.compact)
    }

    /// Run the cascade and return the segments in emission order.
    ///
    /// Whitespace-only input yields no segments.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let text = normalize_line_endings(text);
        let mut state = ReflowState::default();

        let mut lines = 0usize;
        for raw in text.split('\n') {
            lines += 1;
            let line = NormalizedLine::new(raw);
            state.consume(&line, lines, &self.options);
        }

        let segments = state.finish();
        debug!("reflowed {lines} lines into {} segments", segments.len());
        segments
    }
}

fn normalize_line_endings(text: &str) -> std::borrow::Cow<'_, str> {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n").into()
    } else {
        text.into()
    }
}

/// Paragraph buffer, its dialogue counters and everything emitted so far.
#[derive(Debug, Default)]
struct ReflowState {
    buffer: ParagraphBuffer,
    dialogue: DialogueState,
    segments: Vec<Segment>,
}

impl ReflowState {
    fn consume(&mut self, line: &NormalizedLine, line_no: usize, options: &ReflowOptions) {
        let text = line.text();
        let probe = line.probe();

        if is_visual_divider(probe) {
            trace!("line {line_no}: divider");
            self.emit(SegmentKind::Divider, probe);
            return;
        }

        let dialogue_unclosed = self.dialogue.is_unclosed();
        let buffer_unbalanced = self.buffer.has_unclosed_bracket();

        if line.is_blank() {
            if !options.add_pdf_page_header && !self.buffer.is_empty() {
                if dialogue_unclosed || buffer_unbalanced {
                    trace!("line {line_no}: blank inside open dialogue or bracket, ignored");
                    return;
                }
                if !self.buffer.last_char().is_some_and(is_strong_sentence_end) {
                    trace!("line {line_no}: blank after unfinished sentence, ignored");
                    return;
                }
            }
            trace!("line {line_no}: blank, paragraph break");
            self.flush();
            return;
        }

        if is_page_marker(probe) {
            trace!("line {line_no}: page marker");
            self.emit(SegmentKind::PageMarker, probe);
            return;
        }

        if is_title_heading(probe) {
            trace!("line {line_no}: title heading");
            self.emit(SegmentKind::Title, text);
            return;
        }

        if is_metadata_line(probe) {
            trace!("line {line_no}: metadata");
            self.emit(SegmentKind::Metadata, text);
            return;
        }

        if is_heading_like(text) && self.heading_can_split(text, buffer_unbalanced) {
            trace!("line {line_no}: heading");
            self.emit(SegmentKind::Heading, text);
            return;
        }

        if !self.buffer.is_empty()
            && !dialogue_unclosed
            && !buffer_unbalanced
            && last_non_whitespace(text).is_some_and(is_strong_sentence_end)
        {
            trace!("line {line_no}: sentence end, paragraph complete");
            self.buffer.push_str(text);
            self.flush();
            // The counters now track only this line until the next paragraph
            // starts and resets them.
            self.dialogue.update(text);
            return;
        }

        if self.buffer.is_empty() {
            trace!("line {line_no}: new paragraph");
            self.start(text);
            return;
        }

        if begins_with_dialogue_opener(text) {
            let continues = self
                .buffer
                .last_char()
                .is_some_and(|last| is_comma_like(last) || is_cjk(last));
            if !continues {
                trace!("line {line_no}: dialogue opens a new paragraph");
                self.flush();
                self.start(text);
                return;
            }
        }

        if let Some((last, prev)) = last_two_non_whitespace(text) {
            if is_dialogue_closer(last) {
                let line_unbalanced = has_unclosed_bracket(text);
                self.append(text);

                if !self.dialogue.is_unclosed()
                    && is_strong_sentence_end(prev)
                    && (!buffer_unbalanced || line_unbalanced)
                {
                    trace!("line {line_no}: dialogue closed, paragraph complete");
                    self.flush();
                } else {
                    trace!("line {line_no}: dialogue closer, merged");
                }
                return;
            }
        }

        if !dialogue_unclosed && !buffer_unbalanced && self.buffer.ends_with_sentence_boundary() {
            trace!("line {line_no}: previous paragraph ended a sentence");
            self.flush();
            self.start(text);
            return;
        }

        if !dialogue_unclosed && self.buffer.ends_with_cjk_bracket_boundary() {
            trace!("line {line_no}: previous paragraph is a bracketed unit");
            self.flush();
            self.start(text);
            return;
        }

        trace!("line {line_no}: merged");
        self.append(text);
    }

    /// Decide whether a heading-like line stands alone or continues the
    /// open paragraph.
    fn heading_can_split(&self, text: &str, buffer_unbalanced: bool) -> bool {
        if self.buffer.is_empty() {
            return true;
        }
        if buffer_unbalanced {
            return false;
        }

        let Some(last) = self.buffer.last_char() else {
            return true;
        };
        if is_comma_like(last) {
            return false;
        }

        let looks_like_continuation = is_all_cjk(text, true)
            || ends_with_colon_like(text)
            || ends_with_allowed_postfix_closer(text);

        !(looks_like_continuation && !is_clause_or_end_punct(last))
    }

    fn start(&mut self, text: &str) {
        self.buffer.clear();
        self.buffer.push_str(text);
        self.dialogue.reset();
        self.dialogue.update(text);
    }

    fn append(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.dialogue.update(text);
    }

    fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let paragraph = self.buffer.take();
        self.segments.push(Segment::paragraph(paragraph));
        self.dialogue.reset();
    }

    fn emit(&mut self, kind: SegmentKind, text: &str) {
        self.flush();
        self.segments.push(Segment::new(kind, text));
    }

    fn finish(mut self) -> Vec<Segment> {
        self.flush();
        self.segments
    }
}
