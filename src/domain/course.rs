//! Course and lesson records.
//!
//! A course carries an ordered back-list of its lesson ids (insertion order
//! is creation order); each lesson points at its course through `course_id`.
//! The catalog store keeps the two sides consistent.

use serde::{Deserialize, Serialize};

/// A course grouping lessons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier (externally supplied, never allocated)
    pub id: i64,

    /// Human-readable name
    pub name: String,

    /// Ids of lessons belonging to this course, in creation order
    #[serde(default)]
    pub lesson_ids: Vec<i64>,
}

impl Course {
    /// Create an empty course with the default placeholder name.
    ///
    /// Used when a lesson is created under a course id that does not exist
    /// yet.
    pub fn placeholder(id: i64) -> Self {
        Self {
            id,
            name: format!("Course {}", id),
            lesson_ids: Vec::new(),
        }
    }
}

/// A lesson within a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Unique identifier, allocated at creation and immutable afterwards
    pub id: i64,

    /// Owning course, set at creation and immutable afterwards
    pub course_id: i64,

    /// Lesson title
    pub title: String,

    /// Names of uploaded assets this lesson references. Weak references:
    /// an entry is not required to exist in the content registry.
    #[serde(default)]
    pub content_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_course_name() {
        let course = Course::placeholder(7);
        assert_eq!(course.id, 7);
        assert_eq!(course.name, "Course 7");
        assert!(course.lesson_ids.is_empty());
    }

    #[test]
    fn test_lesson_serialization_field_names() {
        let lesson = Lesson {
            id: 1,
            course_id: 7,
            title: "Intro".to_string(),
            content_ids: vec!["intro.mp4".to_string()],
        };

        let json = serde_json::to_value(&lesson).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["course_id"], 7);
        assert_eq!(json["title"], "Intro");
        assert_eq!(json["content_ids"][0], "intro.mp4");
    }
}
