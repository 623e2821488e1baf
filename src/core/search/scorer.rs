//! Lexical relevance scoring.
//!
//! Scores a chunk against a query with four additive bonuses,
//! all computed on lower-cased text:
//!
//! | Bonus      | Condition                                      | Points                    |
//! |------------|------------------------------------------------|---------------------------|
//! | substring  | whole query occurs in the chunk                | 10.0                      |
//! | coverage   | at least one query character occurs in chunk   | 5.0 x matched / total     |
//! | word       | each query word longer than 2 chars in chunk   | 2.0 per word              |
//! | topic      | query contains any configured topic keyword    | 1.0 once                  |
//!
//! No embeddings are involved; ranking is purely lexical.

/// Points for the whole query occurring in the chunk
pub const SUBSTRING_BONUS: f64 = 10.0;

/// Maximum points for query character coverage
pub const COVERAGE_WEIGHT: f64 = 5.0;

/// Points per query word found in the chunk
pub const WORD_BONUS: f64 = 2.0;

/// Query words must be longer than this many characters to count
pub const MIN_WORD_CHARS: usize = 2;

/// Points when the query asks about the documents in general
pub const TOPIC_BONUS: f64 = 1.0;

/// Default topic keywords ("introduce", "what", "what" (colloquial),
/// "content", "document", "say")
pub fn default_topic_keywords() -> Vec<String> {
    ["介绍", "什么", "啥", "内容", "文档", "说"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// A query lower-cased and broken up once, then scored against
/// many chunks
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    lowered: String,
    chars: Vec<char>,
    words: Vec<String>,
    topic_bonus: f64,
}

impl PreparedQuery {
    /// Lower-cased query text
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Query words that qualify for the word bonus
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

/// Heuristic scorer with an injected topic-keyword policy
#[derive(Debug, Clone)]
pub struct LexicalScorer {
    topic_keywords: Vec<String>,
}

impl Default for LexicalScorer {
    fn default() -> Self {
        Self::new(default_topic_keywords())
    }
}

impl LexicalScorer {
    /// Create a scorer. Keywords are lower-cased; blank entries
    /// are dropped since they would match every query.
    pub fn new(topic_keywords: Vec<String>) -> Self {
        let topic_keywords = topic_keywords
            .into_iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        Self { topic_keywords }
    }

    /// Configured topic keywords (lower-cased)
    pub fn topic_keywords(&self) -> &[String] {
        &self.topic_keywords
    }

    /// Lower-case and split a query for scoring
    pub fn prepare(&self, query: &str) -> PreparedQuery {
        let lowered = query.to_lowercase();
        let chars = lowered.chars().collect();
        let words = lowered
            .split_whitespace()
            .filter(|w| w.chars().count() > MIN_WORD_CHARS)
            .map(str::to_string)
            .collect();
        let topic_bonus = if self
            .topic_keywords
            .iter()
            .any(|k| lowered.contains(k.as_str()))
        {
            TOPIC_BONUS
        } else {
            0.0
        };

        PreparedQuery {
            lowered,
            chars,
            words,
            topic_bonus,
        }
    }

    /// Score one chunk's text against a prepared query
    pub fn score(&self, query: &PreparedQuery, text: &str) -> f64 {
        let content = text.to_lowercase();
        let mut score = 0.0;

        if content.contains(query.lowered.as_str()) {
            score += SUBSTRING_BONUS;
        }

        let matched = query.chars.iter().filter(|&&c| content.contains(c)).count();
        if matched > 0 {
            score += COVERAGE_WEIGHT * (matched as f64 / query.chars.len() as f64);
        }

        for word in &query.words {
            if content.contains(word.as_str()) {
                score += WORD_BONUS;
            }
        }

        score + query.topic_bonus
    }
}
