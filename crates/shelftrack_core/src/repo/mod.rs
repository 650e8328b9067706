//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the snapshot contract the service layer depends on.
//! - Isolate SQLite query details from grid/service orchestration.
//!
//! # Invariants
//! - Saving always rewrites the full row sequence; there are no partial
//!   snapshot writes.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod snapshot_repo;
