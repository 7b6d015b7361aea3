//! Paragraph reflow for CJK text recovered from PDFs and OCR
//!
//! Extracted text arrives with hard line breaks in the middle of sentences,
//! page headers, scattered headings and metadata, and quotes or brackets
//! left open across line boundaries. This crate rebuilds paragraph structure
//! line by line: each line is merged into the current paragraph, forces a
//! break, or stands alone as a structural unit (heading, metadata, divider,
//! page marker).
//!
//! # Architecture
//!
//! - **Tables**: fixed punctuation, quote, bracket and metadata-key sets
//! - **Classifiers**: character predicates and single-line classifiers
//! - **Trackers**: dialogue quote counters, bracket balance and the
//!   paragraph buffer's running summaries
//! - **Driver**: the [`Reflower`] cascade producing ordered [`Segment`]s
//!
//! The engine is a pure function of its input; it performs no I/O and holds
//! no mutable global state.
//!
//! # Example
//!
//! ```rust
//! use cjkflow_core::reflow;
//!
//! let text = "他们走进了那座很古老的\n房子里面，四处张望着\n什么也没有发现。";
//! assert_eq!(
//!     reflow(text, false, false),
//!     "他们走进了那座很古老的房子里面，四处张望着什么也没有发现。"
//! );
//! ```
//!
//! Structured output is available through [`Reflower::segments`]:
//!
//! ```rust
//! use cjkflow_core::{ReflowOptions, Reflower, SegmentKind};
//!
//! let reflower = Reflower::new(ReflowOptions::new().with_compact(true));
//! let segments = reflower.segments("第一章 风雪惊变\n钱塘江浩浩江水，\n东流入海。");
//! assert_eq!(segments[0].kind, SegmentKind::Title);
//! assert_eq!(segments[1].text, "钱塘江浩浩江水，东流入海。");
//! ```

pub mod boundary;
pub mod buffer;
pub mod bracket;
pub mod chars;
pub mod classify;
pub mod cleanup;
pub mod config;
pub mod dialogue;
pub mod normalize;
pub mod page;
pub mod reflow;
pub mod segment;
pub mod tables;

pub use cleanup::{collapse_consecutive_duplicate_lines, sanitize_invisible};
pub use config::ReflowOptions;
pub use dialogue::DialogueState;
pub use page::{assemble_pages, is_page_marker, page_marker};
pub use reflow::Reflower;
pub use segment::{join_segments, Segment, SegmentKind};

/// Reflow `text` into paragraphs.
///
/// With `add_pdf_page_header`, blank lines are trusted as paragraph breaks
/// (the input came from the page-marking extractor). With `compact`,
/// segments are joined by one newline instead of a blank line.
///
/// Empty or whitespace-only input is returned unchanged.
pub fn reflow(text: &str, add_pdf_page_header: bool, compact: bool) -> String {
    let options = ReflowOptions::new()
        .with_page_header(add_pdf_page_header)
        .with_compact(compact);
    Reflower::new(options).reflow(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflow_entry_point() {
        assert_eq!(reflow("   ", false, false), "   ");
        assert_eq!(
            reflow("这是开头的那一段文字\n到这里结束了。\n下一段。", false, true),
            "这是开头的那一段文字到这里结束了。\n下一段。"
        );
    }

    #[test]
    fn test_module_exports() {
        let options = ReflowOptions::default();
        let reflower = Reflower::new(options);
        assert_eq!(reflower.options(), &options);
        assert!(DialogueState::new().count(tables::DialogueQuote::ALL[0]) == 0);
    }
}
