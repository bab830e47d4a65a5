//! Quiz and assignment records.
//!
//! Both may carry an optional `lesson_id` link. The link is informational
//! only: the catalog never checks that the lesson exists.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A quiz with an ordered list of question records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    /// Unique identifier, allocated at creation
    pub id: i64,

    /// Quiz title
    pub title: String,

    /// Question records. Untyped at this layer; callers define their shape.
    pub questions: Vec<Value>,

    /// Optional lesson link (unchecked weak reference)
    pub lesson_id: Option<i64>,
}

/// A graded assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier, allocated at creation
    pub id: i64,

    /// Assignment title
    pub title: String,

    /// Task description shown to students
    pub description: String,

    /// Optional lesson link (unchecked weak reference)
    pub lesson_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quiz_serialization() {
        let quiz = Quiz {
            id: 1,
            title: "Q1".to_string(),
            questions: vec![json!({"prompt": "2 + 2?", "answer": 4})],
            lesson_id: None,
        };

        let json = serde_json::to_string(&quiz).unwrap();
        let parsed: Quiz = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, quiz);
        assert_eq!(parsed.questions[0]["answer"], 4);
    }

    #[test]
    fn test_assignment_keeps_unchecked_lesson_link() {
        let assignment = Assignment {
            id: 1,
            title: "Essay".to_string(),
            description: "Write 500 words".to_string(),
            lesson_id: Some(999),
        };

        assert_eq!(assignment.lesson_id, Some(999));
    }
}
