//! Sequential identifier allocation.
//!
//! One independent counter per allocated entity kind. Identifiers start at 1,
//! are strictly increasing, and are never reused after deletion. Course ids
//! are externally supplied and never pass through the allocator.

/// Entity kinds that receive allocated identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Lesson,
    Quiz,
    Assignment,
}

/// Per-kind monotonic id allocator
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next_lesson: i64,
    next_quiz: i64,
    next_assignment: i64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Create an allocator with every counter at 1.
    pub fn new() -> Self {
        Self {
            next_lesson: 1,
            next_quiz: 1,
            next_assignment: 1,
        }
    }

    /// Return the next id for `kind` and advance its counter.
    pub fn next(&mut self, kind: EntityKind) -> i64 {
        let counter = match kind {
            EntityKind::Lesson => &mut self.next_lesson,
            EntityKind::Quiz => &mut self.next_quiz,
            EntityKind::Assignment => &mut self.next_assignment,
        };
        let id = *counter;
        *counter += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_one() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.next(EntityKind::Lesson), 1);
        assert_eq!(ids.next(EntityKind::Quiz), 1);
        assert_eq!(ids.next(EntityKind::Assignment), 1);
    }

    #[test]
    fn test_counters_are_independent_and_increasing() {
        let mut ids = IdAllocator::new();

        assert_eq!(ids.next(EntityKind::Lesson), 1);
        assert_eq!(ids.next(EntityKind::Lesson), 2);
        assert_eq!(ids.next(EntityKind::Lesson), 3);

        // Other kinds are unaffected by lesson allocation
        assert_eq!(ids.next(EntityKind::Quiz), 1);
        assert_eq!(ids.next(EntityKind::Assignment), 1);
        assert_eq!(ids.next(EntityKind::Quiz), 2);
    }
}
