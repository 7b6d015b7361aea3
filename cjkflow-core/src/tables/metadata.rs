//! Book front-matter vocabulary
//!
//! Keys that introduce a metadata line such as `作者：某某` or `ISBN 978…`,
//! in both simplified and traditional forms.

/// Separators between a metadata key and its value.
pub const METADATA_SEPARATORS: [char; 5] = ['：', ':', '\u{3000}', '·', '・'];

/// Maximum trimmed length (in chars) of a metadata line.
pub const METADATA_MAX_CHARS: usize = 30;

/// Maximum char index at which the separator may appear.
pub const METADATA_MAX_KEY_CHARS: usize = 10;

/// Recognized metadata keys.
#[rustfmt::skip]
pub const METADATA_KEYS: &[&str] = &[
    "書名", "书名",
    "作者",
    "譯者", "译者",
    "校訂", "校订",
    "出版社",
    "出版時間", "出版时间",
    "出版日期",
    "版權", "版权",
    "版權頁", "版权页",
    "版權信息", "版权信息",
    "責任編輯", "责任编辑",
    "編輯", "编辑",
    "責編", "责编",
    "定價", "定价",
    "前言",
    "序章",
    "終章", "终章",
    "尾聲", "尾声",
    "後記", "后记",
    "品牌方",
    "出品方",
    "授權方", "授权方",
    "電子版權", "数字版权",
    "掃描", "扫描",
    "OCR",
    "CIP",
    "在版編目", "在版编目",
    "分類號", "分类号",
    "主題詞", "主题词",
    "發行日", "发行日",
    "初版",
    "ISBN",
];

#[inline]
pub fn is_metadata_separator(ch: char) -> bool {
    METADATA_SEPARATORS.contains(&ch)
}

#[inline]
pub fn is_metadata_key(key: &str) -> bool {
    METADATA_KEYS.contains(&key)
}
