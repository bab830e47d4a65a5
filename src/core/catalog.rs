//! In-memory catalog of courses, lessons, quizzes, and assignments.
//!
//! The catalog is the only mutable state in the system. Every operation is
//! a synchronous, single-step transition from one consistent snapshot to the
//! next; nothing here blocks or suspends. The catalog performs no internal
//! locking, so callers that share one across threads must serialize access
//! around each operation (the HTTP layer wraps it in a single `RwLock`).
//!
//! Write payloads are explicit request records with `Option` fields so an
//! absent field is representable; the same records are the deserialization
//! targets of the HTTP layer. Identifier allocation happens strictly after
//! validation, so a rejected request never burns an id.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::core::error::CatalogError;
use crate::core::ids::{EntityKind, IdAllocator};
use crate::core::registry::ContentRegistry;
use crate::core::resolver::ContentResolver;
use crate::domain::{Assignment, Course, Lesson, LessonContent, Quiz};

/// Payload for creating a lesson under a course
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateLesson {
    /// Lesson title (required)
    pub title: Option<String>,

    /// Content references; defaults to empty
    pub content_ids: Option<Vec<String>>,
}

/// Partial update for a lesson. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLesson {
    pub title: Option<String>,
    pub content_ids: Option<Vec<String>>,
}

impl UpdateLesson {
    /// Whether the payload carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content_ids.is_none()
    }
}

/// Payload for creating a quiz
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuiz {
    /// Quiz title (required)
    pub title: Option<String>,

    /// Question records (required; an empty list is permitted)
    pub questions: Option<Vec<Value>>,

    /// Optional lesson link, not checked against the lesson store
    pub lesson_id: Option<i64>,
}

/// Payload for creating an assignment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAssignment {
    /// Assignment title (required)
    pub title: Option<String>,

    /// Task description (required)
    pub description: Option<String>,

    /// Optional lesson link, not checked against the lesson store
    pub lesson_id: Option<i64>,
}

/// The in-memory catalog
///
/// Entity maps are keyed by id; since allocated ids are strictly increasing,
/// iteration order is creation order.
#[derive(Debug)]
pub struct Catalog {
    courses: BTreeMap<i64, Course>,
    lessons: BTreeMap<i64, Lesson>,
    quizzes: BTreeMap<i64, Quiz>,
    assignments: BTreeMap<i64, Assignment>,
    registry: ContentRegistry,
    resolver: ContentResolver,
    ids: IdAllocator,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(ContentResolver::default())
    }
}

impl Catalog {
    /// Create an empty catalog using the given content resolver.
    pub fn new(resolver: ContentResolver) -> Self {
        Self {
            courses: BTreeMap::new(),
            lessons: BTreeMap::new(),
            quizzes: BTreeMap::new(),
            assignments: BTreeMap::new(),
            registry: ContentRegistry::new(),
            resolver,
            ids: IdAllocator::new(),
        }
    }

    /// The content registry (read access).
    pub fn registry(&self) -> &ContentRegistry {
        &self.registry
    }

    /// The content registry (write access, for the upload intake).
    pub fn registry_mut(&mut self) -> &mut ContentRegistry {
        &mut self.registry
    }

    /// Look up a course by id.
    pub fn course(&self, course_id: i64) -> Option<&Course> {
        self.courses.get(&course_id)
    }

    /// Look up a lesson by id.
    pub fn lesson(&self, lesson_id: i64) -> Option<&Lesson> {
        self.lessons.get(&lesson_id)
    }

    /// Create a lesson under `course_id`.
    ///
    /// Lazily creates the course with a placeholder name if it does not
    /// exist, and appends the new lesson id to the course back-list.
    pub fn create_lesson(
        &mut self,
        course_id: i64,
        req: CreateLesson,
    ) -> Result<Lesson, CatalogError> {
        let title = match req.title {
            Some(t) if !t.is_empty() => t,
            _ => return Err(CatalogError::invalid("missing title in request body")),
        };

        let id = self.ids.next(EntityKind::Lesson);
        let lesson = Lesson {
            id,
            course_id,
            title,
            content_ids: req.content_ids.unwrap_or_default(),
        };

        self.lessons.insert(id, lesson.clone());
        self.courses
            .entry(course_id)
            .or_insert_with(|| Course::placeholder(course_id))
            .lesson_ids
            .push(id);

        Ok(lesson)
    }

    /// All lessons belonging to `course_id`, in creation order.
    ///
    /// An unknown course yields an empty list rather than an error.
    pub fn list_lessons_for_course(&self, course_id: i64) -> Vec<Lesson> {
        self.lessons
            .values()
            .filter(|lesson| lesson.course_id == course_id)
            .cloned()
            .collect()
    }

    /// Apply a partial update to a lesson. Only supplied fields change.
    pub fn update_lesson(
        &mut self,
        lesson_id: i64,
        req: UpdateLesson,
    ) -> Result<Lesson, CatalogError> {
        let lesson = self
            .lessons
            .get_mut(&lesson_id)
            .ok_or(CatalogError::NotFound {
                entity: "lesson",
                id: lesson_id,
            })?;

        if req.is_empty() {
            return Err(CatalogError::invalid("request body cannot be empty"));
        }

        if let Some(title) = req.title {
            lesson.title = title;
        }
        if let Some(content_ids) = req.content_ids {
            lesson.content_ids = content_ids;
        }

        Ok(lesson.clone())
    }

    /// Delete a lesson and remove it from its course back-list.
    ///
    /// Cleanup is best-effort: a missing course record or a missing
    /// back-list entry is tolerated, not treated as corruption.
    pub fn delete_lesson(&mut self, lesson_id: i64) -> Result<(), CatalogError> {
        let lesson = self
            .lessons
            .remove(&lesson_id)
            .ok_or(CatalogError::NotFound {
                entity: "lesson",
                id: lesson_id,
            })?;

        if let Some(course) = self.courses.get_mut(&lesson.course_id) {
            course.lesson_ids.retain(|&id| id != lesson_id);
        }

        Ok(())
    }

    /// Resolve a lesson's content references, in `content_ids` order.
    pub fn get_lesson_content(&self, lesson_id: i64) -> Result<LessonContent, CatalogError> {
        let lesson = self.lessons.get(&lesson_id).ok_or(CatalogError::NotFound {
            entity: "lesson",
            id: lesson_id,
        })?;

        let content = lesson
            .content_ids
            .iter()
            .map(|content_id| self.resolver.resolve(&self.registry, content_id))
            .collect();

        Ok(LessonContent { lesson_id, content })
    }

    /// Create a quiz. An empty `questions` list is permitted; an absent one
    /// is not.
    pub fn create_quiz(&mut self, req: CreateQuiz) -> Result<Quiz, CatalogError> {
        let title = match req.title {
            Some(t) if !t.is_empty() => t,
            _ => {
                return Err(CatalogError::invalid(
                    "missing title or questions in request body",
                ))
            }
        };
        let questions = req.questions.ok_or_else(|| {
            CatalogError::invalid("missing title or questions in request body")
        })?;

        let id = self.ids.next(EntityKind::Quiz);
        let quiz = Quiz {
            id,
            title,
            questions,
            lesson_id: req.lesson_id,
        };
        self.quizzes.insert(id, quiz.clone());

        Ok(quiz)
    }

    /// Look up a quiz by id.
    pub fn get_quiz(&self, quiz_id: i64) -> Result<Quiz, CatalogError> {
        self.quizzes
            .get(&quiz_id)
            .cloned()
            .ok_or(CatalogError::NotFound {
                entity: "quiz",
                id: quiz_id,
            })
    }

    /// Create an assignment.
    pub fn create_assignment(&mut self, req: CreateAssignment) -> Result<Assignment, CatalogError> {
        let title = match req.title {
            Some(t) if !t.is_empty() => t,
            _ => {
                return Err(CatalogError::invalid(
                    "missing title or description in request body",
                ))
            }
        };
        let description = match req.description {
            Some(d) if !d.is_empty() => d,
            _ => {
                return Err(CatalogError::invalid(
                    "missing title or description in request body",
                ))
            }
        };

        let id = self.ids.next(EntityKind::Assignment);
        let assignment = Assignment {
            id,
            title,
            description,
            lesson_id: req.lesson_id,
        };
        self.assignments.insert(id, assignment.clone());

        Ok(assignment)
    }
}
