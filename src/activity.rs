//! Structured user-activity events.
//!
//! Activity events are emitted on a dedicated `user_activity` tracing target
//! so they can be routed separately from application logs, and a bounded
//! buffer of recent events is kept for inspection. Recording never fails and
//! never touches catalog state.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Outcome of a recorded action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    Success,
    Failure,
}

/// A single user-activity event
#[derive(Debug, Clone, Serialize)]
pub struct ActivityEvent {
    /// When the action happened (ISO 8601)
    pub timestamp: DateTime<Utc>,

    /// Who performed the action
    pub actor: String,

    /// The action performed (e.g. "create_lesson", "upload_video")
    pub verb: String,

    /// Whether the action succeeded
    pub status: ActivityStatus,

    /// Type of the object acted on (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,

    /// Id of the object acted on (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<String>,

    /// Any other relevant information
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub details: Map<String, Value>,
}

impl ActivityEvent {
    /// Create an event stamped with the current time.
    pub fn new(
        actor: impl Into<String>,
        verb: impl Into<String>,
        status: ActivityStatus,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            actor: actor.into(),
            verb: verb.into(),
            status,
            target_type: None,
            target_id: None,
            details: Map::new(),
        }
    }

    /// Attach the object the action was performed on.
    pub fn with_target(
        mut self,
        target_type: impl Into<String>,
        target_id: impl Into<String>,
    ) -> Self {
        self.target_type = Some(target_type.into());
        self.target_id = Some(target_id.into());
        self
    }

    /// Attach an extra detail field.
    pub fn with_detail(mut self, key: impl Into<String>, value: Value) -> Self {
        self.details.insert(key.into(), value);
        self
    }

    /// Human-readable summary used as the log message.
    pub fn summary(&self) -> String {
        let mut message = format!("User {} performed {}", self.actor, self.verb);
        if let (Some(target_type), Some(target_id)) = (&self.target_type, &self.target_id) {
            message.push_str(&format!(" on {}:{}", target_type, target_id));
        }
        let status = match self.status {
            ActivityStatus::Success => "success",
            ActivityStatus::Failure => "failure",
        };
        message.push_str(&format!(" (status: {})", status));
        message
    }
}

/// Bounded log of recent activity events
#[derive(Debug)]
pub struct ActivityLog {
    capacity: usize,
    recent: VecDeque<ActivityEvent>,
}

impl ActivityLog {
    /// Create a log keeping at most `capacity` recent events.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            recent: VecDeque::new(),
        }
    }

    /// Record an event: emit it on the `user_activity` target and keep it in
    /// the recent buffer, evicting the oldest entry when full.
    pub fn record(&mut self, event: ActivityEvent) {
        tracing::info!(
            target: "user_activity",
            payload = %serde_json::to_string(&event).unwrap_or_default(),
            "{}",
            event.summary()
        );

        if self.recent.len() == self.capacity {
            self.recent.pop_front();
        }
        self.recent.push_back(event);
    }

    /// Recent events, oldest first.
    pub fn recent(&self) -> impl Iterator<Item = &ActivityEvent> {
        self.recent.iter()
    }

    /// Number of buffered events.
    pub fn len(&self) -> usize {
        self.recent.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_with_target() {
        let event = ActivityEvent::new("user_123", "create_lesson", ActivityStatus::Success)
            .with_target("lesson", "1");

        assert_eq!(
            event.summary(),
            "User user_123 performed create_lesson on lesson:1 (status: success)"
        );
    }

    #[test]
    fn test_summary_without_target() {
        let event = ActivityEvent::new("user_123", "login", ActivityStatus::Failure);
        assert_eq!(
            event.summary(),
            "User user_123 performed login (status: failure)"
        );
    }

    #[test]
    fn test_buffer_evicts_oldest() {
        let mut log = ActivityLog::new(2);

        for verb in ["first", "second", "third"] {
            log.record(ActivityEvent::new("u", verb, ActivityStatus::Success));
        }

        assert_eq!(log.len(), 2);
        let verbs: Vec<&str> = log.recent().map(|e| e.verb.as_str()).collect();
        assert_eq!(verbs, ["second", "third"]);
    }

    #[test]
    fn test_details_serialize() {
        let event = ActivityEvent::new("u", "upload_video", ActivityStatus::Success)
            .with_detail("filename", json!("intro.mp4"));

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["details"]["filename"], "intro.mp4");
        assert_eq!(value["status"], "success");
    }
}
