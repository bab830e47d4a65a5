//! coursecat - in-memory educational content catalog
//!
//! Tracks courses, the lessons nested under them, quizzes, assignments, and
//! a registry of uploaded media, then resolves lesson content references
//! into descriptive records.
//!
//! # Architecture
//!
//! The core is a single `Catalog` value with no interior locking:
//! - Every operation is a synchronous transition between consistent
//!   snapshots
//! - Identifiers are allocated per entity kind, strictly increasing, never
//!   reused
//! - Content references are weak: a name absent from the registry resolves
//!   to an "unknown" record instead of erroring
//!
//! The HTTP layer owns the one lock that serializes catalog access and maps
//! the two error kinds onto status codes (400 invalid input, 404 not found).
//!
//! # Modules
//!
//! - `core`: catalog store, id allocator, content registry, resolver
//! - `domain`: entity records (Course, Lesson, Quiz, Assignment)
//! - `api`: HTTP delivery layer (routing, error mapping, request metrics)
//! - `locator`: CDN/static asset locator formatting
//! - `activity`: structured user-activity events
//! - `health`: liveness checks for attached dependencies
//! - `cli`: command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Start the service
//! coursecat serve --address 127.0.0.1:8080
//!
//! # Inspect resolved configuration
//! coursecat config
//! ```

pub mod activity;
pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod health;
pub mod locator;

// Re-export main types at crate root for convenience
pub use crate::core::{Catalog, CatalogError, ContentRegistry, ContentResolver, IdAllocator};
pub use domain::{Assignment, ContentKind, Course, Lesson, LessonContent, Quiz, ResolvedContent};
pub use locator::{join_url, AssetLocator, CdnLocator, PlaceholderLocator};
