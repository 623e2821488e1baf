//! Search module for lexical retrieval.
//!
//! This module ranks indexed chunks against a free-text query
//! with a heuristic scorer (substring, character coverage, word
//! and topic-keyword bonuses) and falls back to insertion order
//! when nothing matches.

mod retriever;
mod scorer;

pub use retriever::{SearchService, CANCEL_CHECK_INTERVAL, DEFAULT_LIMIT};
pub use scorer::{
    default_topic_keywords, LexicalScorer, PreparedQuery, COVERAGE_WEIGHT, SUBSTRING_BONUS,
    TOPIC_BONUS, WORD_BONUS,
};
