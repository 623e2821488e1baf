//! Storage layer tests
//!
//! Index invariants and concurrent ingest/search.
