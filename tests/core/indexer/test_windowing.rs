// Windowing properties: chunk counts, coverage and overlap

use crate::common::{expected_chunk_count, numbered_words, FOX_TEXT};
use notex::core::indexer::Chunker;

#[test]
fn test_chunk_count_matches_formula() {
    for (size, overlap) in [(5, 1), (3, 0), (10, 9), (7, 3), (1, 0)] {
        let chunker = Chunker::new(size, overlap).unwrap();
        for len in 0..40 {
            let text = numbered_words(len);
            let chunks = chunker.split(&text);
            assert_eq!(
                chunks.len(),
                expected_chunk_count(len, size, overlap),
                "len={len} size={size} overlap={overlap}"
            );
        }
    }
}

#[test]
fn test_windows_cover_sequence_without_gaps() {
    let chunker = Chunker::new(6, 2).unwrap();
    let len = 23;
    let windows = chunker.windows(len);

    assert_eq!(windows.first().map(|w| w.start), Some(0));
    assert_eq!(windows.last().map(|w| w.end), Some(len));

    for pair in windows.windows(2) {
        // Consecutive windows overlap by exactly `overlap` units
        assert_eq!(pair[0].end - pair[1].start, 2);
        assert_eq!(pair[0].len(), 6);
    }
}

#[test]
fn test_word_chunks_overlap_by_configured_words() {
    let chunker = Chunker::new(4, 1).unwrap();
    let chunks = chunker.split(&numbered_words(10));

    assert_eq!(chunks, vec!["w0 w1 w2 w3", "w3 w4 w5 w6", "w6 w7 w8 w9"]);
}

#[test]
fn test_short_text_yields_single_chunk() {
    let chunker = Chunker::new(100, 20).unwrap();
    let chunks = chunker.split("just a few words");

    assert_eq!(chunks, vec!["just a few words"]);
}

#[test]
fn test_fox_split_by_words() {
    let chunker = Chunker::resolve(5, 1).unwrap();
    let chunks = chunker.split(FOX_TEXT);

    assert_eq!(
        chunks,
        vec!["the quick brown fox jumps", "jumps over the lazy dog"]
    );
}

#[test]
fn test_word_split_normalizes_whitespace() {
    let chunker = Chunker::new(3, 0).unwrap();
    let chunks = chunker.split("alpha\n\nbeta\t gamma   delta");

    assert_eq!(chunks, vec!["alpha beta gamma", "delta"]);
}

#[test]
fn test_empty_and_whitespace_text_yield_nothing() {
    let chunker = Chunker::new(5, 1).unwrap();

    assert!(chunker.split("").is_empty());
    assert!(chunker.split("   \n\t ").is_empty());
}

#[test]
fn test_resolve_substitutes_defaults() {
    let chunker = Chunker::resolve(0, -1).unwrap();
    assert_eq!((chunker.chunk_size(), chunker.overlap()), (1000, 200));

    let chunker = Chunker::resolve(-50, 10).unwrap();
    assert_eq!((chunker.chunk_size(), chunker.overlap()), (1000, 10));
}

#[test]
fn test_degenerate_parameters_are_rejected() {
    assert!(Chunker::new(5, 5).is_err());
    assert!(Chunker::new(5, 9).is_err());
    assert!(Chunker::new(0, 0).is_err());
    // Default overlap (200) is not below an explicit size of 100
    assert!(Chunker::resolve(100, -1).is_err());
}

#[test]
fn test_split_is_deterministic() {
    let chunker = Chunker::new(7, 2).unwrap();
    let text = numbered_words(50);

    assert_eq!(chunker.split(&text), chunker.split(&text));
}
