//! Append-only registry of uploaded asset names.
//!
//! Names are the sole identifier: there is no numeric id and no
//! deduplication, so uploading the same name twice stores it twice.

use serde::{Deserialize, Serialize};

use crate::core::error::CatalogError;

/// Uploaded asset names, partitioned by kind, in upload order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRegistry {
    videos: Vec<String>,
    documents: Vec<String>,
}

impl ContentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an uploaded video name. Returns the stored name.
    pub fn register_video(&mut self, name: &str) -> Result<String, CatalogError> {
        Self::validate_name(name)?;
        self.videos.push(name.to_string());
        Ok(name.to_string())
    }

    /// Record an uploaded document name. Returns the stored name.
    pub fn register_document(&mut self, name: &str) -> Result<String, CatalogError> {
        Self::validate_name(name)?;
        self.documents.push(name.to_string());
        Ok(name.to_string())
    }

    /// Whether `name` was uploaded as a video. Linear scan; fine at catalog
    /// scale.
    pub fn is_video(&self, name: &str) -> bool {
        self.videos.iter().any(|n| n == name)
    }

    /// Whether `name` was uploaded as a document.
    pub fn is_document(&self, name: &str) -> bool {
        self.documents.iter().any(|n| n == name)
    }

    /// Uploaded video names in upload order.
    pub fn videos(&self) -> &[String] {
        &self.videos
    }

    /// Uploaded document names in upload order.
    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    fn validate_name(name: &str) -> Result<(), CatalogError> {
        if name.is_empty() {
            return Err(CatalogError::invalid("missing filename in request body"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_membership() {
        let mut registry = ContentRegistry::new();

        let stored = registry.register_video("intro.mp4").unwrap();
        assert_eq!(stored, "intro.mp4");
        registry.register_document("syllabus.pdf").unwrap();

        assert!(registry.is_video("intro.mp4"));
        assert!(!registry.is_document("intro.mp4"));
        assert!(registry.is_document("syllabus.pdf"));
        assert!(!registry.is_video("syllabus.pdf"));
        assert!(!registry.is_video("other.mp4"));
    }

    #[test]
    fn test_register_rejects_empty_name() {
        let mut registry = ContentRegistry::new();

        let err = registry.register_video("").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput { .. }));
        assert!(registry.videos().is_empty());

        let err = registry.register_document("").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidInput { .. }));
        assert!(registry.documents().is_empty());
    }

    #[test]
    fn test_duplicate_names_are_stored_twice() {
        let mut registry = ContentRegistry::new();

        registry.register_video("intro.mp4").unwrap();
        registry.register_video("intro.mp4").unwrap();

        assert_eq!(registry.videos(), ["intro.mp4", "intro.mp4"]);
        assert!(registry.is_video("intro.mp4"));
    }
}
