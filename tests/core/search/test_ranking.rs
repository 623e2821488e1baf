// Ranking behaviour of lexical search

use crate::common::{create_test_services, hit_texts, ingest_all};
use notex::core::config::Config;
use notex::core::search::{LexicalScorer, SUBSTRING_BONUS};
use notex::core::services::Services;

#[test]
fn test_adding_exact_match_raises_its_score() {
    let services = create_test_services();
    ingest_all(&services, &[("a", "rust borrow checker"), ("b", "garbage collection")], 10, 0);

    let scorer = LexicalScorer::default();
    let query = scorer.prepare("ownership");
    let before = scorer.score(&query, "rust borrow checker");
    let after = scorer.score(&query, "rust borrow checker ownership");
    assert!(after > before);

    services.ingest("c", "rust borrow checker ownership", 10, 0).unwrap();
    let response = services.search("ownership", 1).unwrap();

    assert_eq!(response.results[0].source_tag, "c");
    assert!(response.results[0].score >= SUBSTRING_BONUS);
}

#[test]
fn test_results_sorted_by_descending_score() {
    let services = create_test_services();
    ingest_all(
        &services,
        &[
            ("a", "memory"),
            ("b", "memory safety without garbage collection"),
            ("c", "safety first"),
            ("d", "unrelated qqq"),
        ],
        10,
        0,
    );

    let response = services.search("memory safety", 10).unwrap();

    assert!(!response.fallback);
    assert_eq!(response.results[0].source_tag, "b");
    for pair in response.results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_limit_caps_results() {
    let services = create_test_services();
    for i in 0..20 {
        services.ingest(&format!("s{i}"), "fox den", 10, 0).unwrap();
    }

    assert_eq!(services.search("fox", 3).unwrap().count, 3);
    assert_eq!(services.search("fox", 50).unwrap().count, 20);
}

#[test]
fn test_nonpositive_limit_uses_configured_default() {
    let mut config = Config::default();
    config.search.default_limit = 4;
    let services = Services::new(config);
    for i in 0..10 {
        services.ingest(&format!("s{i}"), "fox den", 10, 0).unwrap();
    }

    assert_eq!(services.search("fox", 0).unwrap().count, 4);
    assert_eq!(services.search("fox", -1).unwrap().count, 4);
}

#[test]
fn test_search_is_case_insensitive() {
    let services = create_test_services();
    ingest_all(&services, &[("a", "The Borrow Checker")], 10, 0);

    let response = services.search("BORROW checker", 5).unwrap();

    assert!(response.results[0].score >= SUBSTRING_BONUS);
}

#[test]
fn test_topic_keyword_lifts_every_chunk_above_zero() {
    let services = create_test_services();
    ingest_all(&services, &[("a", "xyz"), ("b", "qrs")], 10, 0);

    // No character of the query occurs in the chunks, but "介绍"
    // is a topic keyword, so every chunk scores the topic bonus
    let response = services.search("介绍", 5).unwrap();

    assert!(!response.fallback);
    assert_eq!(response.count, 2);
    assert!(response.results.iter().all(|h| h.score == 1.0));
}

#[test]
fn test_custom_topic_keywords_replace_defaults() {
    let mut config = Config::default();
    config.search.topic_keywords = vec!["overview".to_string()];
    let services = Services::new(config);
    ingest_all(&services, &[("a", "zzz")], 10, 0);

    assert!(services.search("介绍", 5).unwrap().fallback);
    assert!(!services.search("overview", 5).unwrap().fallback);
}

#[test]
fn test_chinese_query_matches_chinese_chunk() {
    let services = create_test_services();
    ingest_all(
        &services,
        &[
            ("en", "installation steps and usage"),
            ("zh", "安装步骤和使用说明"),
        ],
        1000,
        200,
    );

    let response = services.search("安装步骤", 5).unwrap();

    assert_eq!(hit_texts(&response), vec!["安装步骤和使用说明"]);
}

#[test]
fn test_empty_query_returns_insertion_prefix() {
    let services = create_test_services();
    ingest_all(&services, &[("a", "one"), ("b", "two"), ("c", "three")], 10, 0);

    let response = services.search("", 2).unwrap();

    assert!(!response.fallback);
    assert_eq!(hit_texts(&response), vec!["one", "two"]);
    assert!(response.results.iter().all(|h| h.score == SUBSTRING_BONUS));
}
