// File ingestion through the service container

use crate::common::{create_test_services, TestNotes};
use notex::core::config::Config;
use notex::core::services::Services;
use notex::core::types::SplitUnit;
use notex::NotexError;

#[test]
fn test_ingest_file_tags_by_file_name() {
    let notes = TestNotes::small();
    let services = create_test_services();

    let stats = services.ingest_file(&notes.file("fox.txt"), None).unwrap();

    assert_eq!(stats.source_tag, "fox.txt");
    assert_eq!(stats.unit, SplitUnit::Words);
    assert_eq!(stats.chunks_created, 1);
}

#[test]
fn test_ingest_file_reports_character_unit_for_chinese() {
    let notes = TestNotes::small();
    let services = create_test_services();

    let stats = services.ingest_file(&notes.file("intro.md"), None).unwrap();

    assert_eq!(stats.unit, SplitUnit::Chars);
}

#[test]
fn test_ingest_file_uses_configured_chunking() {
    let notes = TestNotes::small();
    let mut config = Config::default();
    config.indexing.chunk_size = 5;
    config.indexing.chunk_overlap = 1;
    let services = Services::new(config);

    let stats = services
        .ingest_file(&notes.file("fox.txt"), Some("doc1"))
        .unwrap();

    assert_eq!(stats.source_tag, "doc1");
    assert_eq!(stats.chunks_created, 2);
}

#[test]
fn test_ingest_all_small_notes() {
    let notes = TestNotes::small();
    let services = create_test_services();

    for file in &notes.files {
        services.ingest_file(file, None).unwrap();
    }

    let stats = services.stats().unwrap();
    assert_eq!(stats.total_sources, 3);
    assert_eq!(stats.total_chunks, 3);
}

#[test]
fn test_ingest_file_rejects_office_documents() {
    let notes = TestNotes::with_files(&[("slides.pptx", "not really a deck")]);
    let services = create_test_services();

    let err = services
        .ingest_file(&notes.file("slides.pptx"), None)
        .unwrap_err();

    assert!(matches!(err, NotexError::UnsupportedFormat(_)));
    assert!(err.is_bad_request());
    assert_eq!(services.stats().unwrap().total_chunks, 0);
}

#[test]
fn test_ingest_empty_file_creates_no_source() {
    let notes = TestNotes::with_files(&[("empty.txt", "")]);
    let services = create_test_services();

    let stats = services.ingest_file(&notes.file("empty.txt"), None).unwrap();

    assert_eq!(stats.chunks_created, 0);
    assert_eq!(services.stats().unwrap().total_sources, 0);
}
