//! End-to-end reflow scenarios
//!
//! Each test feeds a small extracted-text sample through the public API and
//! checks the resulting paragraph structure.

use cjkflow_core::{
    assemble_pages, collapse_consecutive_duplicate_lines, join_segments, reflow,
    sanitize_invisible, ReflowOptions, Reflower, SegmentKind,
};

fn kinds(text: &str, options: ReflowOptions) -> Vec<SegmentKind> {
    Reflower::new(options)
        .segments(text)
        .iter()
        .map(|s| s.kind)
        .collect()
}

#[test]
fn test_divider_forces_break() {
    let output = reflow("Title\n------\nBody", false, false);
    assert_eq!(output, "Title\n\n------\n\nBody");

    let segments = Reflower::default().segments("Title\n------\nBody");
    assert_eq!(segments[1].kind, SegmentKind::Divider);
    assert_eq!(segments[1].text, "------");
}

#[test]
fn test_dialogue_merge_then_close() {
    assert_eq!(reflow("“你好，\n世界。”", false, false), "“你好，世界。”");
}

#[test]
fn test_heading_split() {
    assert_eq!(
        reflow("物品准备：\n钢笔，纸张，橡皮。", false, false),
        "物品准备：\n\n钢笔，纸张，橡皮。"
    );
}

#[test]
fn test_blank_line_soft_wrap() {
    // The paragraph is open and does not end a sentence, so the blank
    // line is a wrap artifact.
    assert_eq!(
        reflow("我们出门的时候今天天气\n\n很好", false, false),
        "我们出门的时候今天天气很好"
    );
}

#[test]
fn test_short_first_line_stands_alone() {
    // A short line with no punctuation and nothing before it is heading-like,
    // so the blank line after it is never reached as a soft wrap.
    let segments = Reflower::default().segments("今天天气\n\n很好");
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].kind, SegmentKind::Heading);
    assert_eq!(segments[0].text, "今天天气");
}

#[test]
fn test_compact_join() {
    assert_eq!(join_segments(&["A", "B"], true), "A\nB");
    assert_eq!(join_segments(&["A", "B"], false), "A\n\nB");
    assert_eq!(reflow("A\n------\nB", false, true), "A\n------\nB");
}

#[test]
fn test_whitespace_input_is_identity() {
    for text in ["", " ", "\n\n", " \t \r\n \u{3000} "] {
        assert_eq!(reflow(text, false, false), text);
        assert_eq!(reflow(text, true, true), text);
    }
}

#[test]
fn test_multi_page_document() {
    let pages = [
        "第一页的正文到这里还没有\n说完",
        "就翻到了下一页。\n新的段落从这里开始",
    ];
    let text = assemble_pages(pages, true);
    let options = ReflowOptions::new().with_page_header(true);

    assert_eq!(
        kinds(&text, options),
        vec![
            SegmentKind::PageMarker,
            SegmentKind::Paragraph,
            SegmentKind::PageMarker,
            SegmentKind::Paragraph,
            SegmentKind::Paragraph,
        ]
    );
    assert_eq!(
        Reflower::new(options).reflow(&text),
        "=== [Page 1/2] ===\n\n第一页的正文到这里还没有说完\n\n=== [Page 2/2] ===\n\n就翻到了下一页。\n\n新的段落从这里开始"
    );
}

#[test]
fn test_sentence_continues_across_blank_line() {
    assert_eq!(
        reflow("第一页的正文到这里还没有\n说完\n\n就翻到了下一页。", false, false),
        "第一页的正文到这里还没有说完就翻到了下一页。"
    );
}

#[test]
fn test_front_matter() {
    let text = "书名：射雕英雄传\n作者：金庸\nISBN：978-7-108-00000-0\n\n第一回 风雪惊变\n钱塘江浩浩江水，日日夜夜\n无穷无休的从临安牛家村边绕过，\n东流入海。";
    let segments = Reflower::default().segments(text);
    let kinds: Vec<_> = segments.iter().map(|s| s.kind).collect();

    assert_eq!(
        kinds,
        vec![
            SegmentKind::Metadata,
            SegmentKind::Metadata,
            SegmentKind::Metadata,
            SegmentKind::Title,
            SegmentKind::Paragraph,
        ]
    );
    assert_eq!(
        segments[4].text,
        "钱塘江浩浩江水，日日夜夜无穷无休的从临安牛家村边绕过，东流入海。"
    );
}

#[test]
fn test_ocr_repeats_collapse() {
    assert_eq!(reflow("版权所有版权所有版权所有", false, false), "版权所有");
    assert_eq!(reflow("目录 目录 目录", false, false), "目录");
}

#[test]
fn test_indented_paragraphs() {
    let text = "\u{3000}\u{3000}这是第一段的正文内容，\n写到这里就结束了。\n\u{3000}\u{3000}下面另起一段来写一些\n别的内容";
    assert_eq!(
        reflow(text, false, false),
        "这是第一段的正文内容，写到这里就结束了。\n\n下面另起一段来写一些别的内容"
    );
}

#[test]
fn test_cleanup_then_reflow() {
    let raw = "\u{FEFF}页眉文字\n页眉文字\n正文被硬生生地切成了\u{200B}两行\n还没有结束。";
    let cleaned = collapse_consecutive_duplicate_lines(&sanitize_invisible(raw));
    assert_eq!(cleaned, "页眉文字\n正文被硬生生地切成了两行\n还没有结束。");
    assert_eq!(
        reflow(&cleaned, false, false),
        "页眉文字\n\n正文被硬生生地切成了两行还没有结束。"
    );
}
