//! Catalog core logic.
//!
//! This module contains:
//! - Catalog: the in-memory store and its operations
//! - IdAllocator: per-kind sequential identifier allocation
//! - ContentRegistry: append-only record of uploaded asset names
//! - ContentResolver: content reference to descriptive record mapping
//!
//! Everything here is synchronous and lock-free; concurrent callers must
//! serialize access around each top-level operation.

pub mod catalog;
pub mod error;
pub mod ids;
pub mod registry;
pub mod resolver;

// Re-export commonly used types
pub use catalog::{Catalog, CreateAssignment, CreateLesson, CreateQuiz, UpdateLesson};
pub use error::CatalogError;
pub use ids::{EntityKind, IdAllocator};
pub use registry::ContentRegistry;
pub use resolver::{ContentResolver, UNKNOWN_CONTENT_MESSAGE};
