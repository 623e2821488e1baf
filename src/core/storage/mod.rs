//! Storage layer for the in-memory chunk index.
//!
//! The index lives for the lifetime of the process and has no
//! persistence of its own. Hosts that need durability replay
//! their stored source text through ingestion on startup.
//!
//! # Architecture
//!
//! - **ChunkIndex**: ordered chunk collection behind one
//!   readers-writer lock
//! - **Snapshot**: copy-on-write view handed to the retriever
//!
//! # Lock discipline
//!
//! ```text
//! append / delete_by_source  -> exclusive (write) lock
//! snapshot / size / stats    -> shared (read) lock
//! scoring                    -> no lock, runs on the snapshot
//! ```

mod index;

pub use index::{ChunkIndex, Snapshot};
