// Script routing: CJK-dominant text is split by character

use crate::common::mixed_script_text;
use notex::core::indexer::Chunker;
use notex::core::types::SplitUnit;

#[test]
fn test_forty_percent_cjk_splits_by_character() {
    let text = mixed_script_text(4, 10);
    assert_eq!(Chunker::detect_unit(&text), SplitUnit::Chars);

    let chunker = Chunker::new(3, 1).unwrap();
    let (unit, chunks) = chunker.split_with_unit(&text);

    assert_eq!(unit, SplitUnit::Chars);
    // 10 chars, step 2: windows start at 0, 2, 4, 6 and 8
    assert_eq!(chunks, vec!["文文文", "文文a", "aaa", "aaa", "aa"]);
}

#[test]
fn test_ten_percent_cjk_splits_by_word() {
    // One ideograph among eleven characters, grouped into three words
    let text = "文aa bbb ccc";
    assert_eq!(text.chars().count(), 11);
    assert_eq!(Chunker::detect_unit(text), SplitUnit::Words);

    let chunker = Chunker::new(2, 0).unwrap();
    let (unit, chunks) = chunker.split_with_unit(text);

    assert_eq!(unit, SplitUnit::Words);
    assert_eq!(chunks, vec!["文aa bbb", "ccc"]);
}

#[test]
fn test_exactly_thirty_percent_is_not_cjk_dominant() {
    let text = mixed_script_text(3, 10);
    assert_eq!(Chunker::detect_unit(&text), SplitUnit::Words);
}

#[test]
fn test_whitespace_counts_toward_total_characters() {
    // 4 ideographs + 6 spaces: ratio 0.4
    let text = "文 文 文 文   ";
    assert_eq!(Chunker::detect_unit(text), SplitUnit::Chars);
}

#[test]
fn test_chinese_chunks_keep_character_boundaries() {
    let text = "这份文档介绍了项目的背景和主要内容";
    let chunker = Chunker::new(5, 2).unwrap();
    let chunks = chunker.split(text);

    assert!(chunks.iter().all(|c| c.chars().count() <= 5));
    assert_eq!(chunks[0], "这份文档介");
    assert_eq!(chunks[1], "档介绍了项");

    // Non-overlapping prefixes reassemble the original text
    let mut rebuilt: String = chunks[..chunks.len() - 1]
        .iter()
        .map(|c| c.chars().take(3).collect::<String>())
        .collect();
    if let Some(last) = chunks.last() {
        rebuilt.push_str(last);
    }
    assert_eq!(rebuilt, text);
}

#[test]
fn test_empty_text_defaults_to_words() {
    assert_eq!(Chunker::detect_unit(""), SplitUnit::Words);
}
