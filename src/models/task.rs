use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task lifecycle stage, serialized with the backend's wire names.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub enum Progress {
    #[default]
    #[serde(rename = "planned")]
    Planned,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl Progress {
    pub const ALL: [Progress; 3] = [Progress::Planned, Progress::InProgress, Progress::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Progress::Planned => "planned",
            Progress::InProgress => "in-progress",
            Progress::Done => "done",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Progress::Planned => "Planned",
            Progress::InProgress => "In Progress",
            Progress::Done => "Done",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Progress::Planned => "📋",
            Progress::InProgress => "⏳",
            Progress::Done => "✅",
        }
    }

    /// Quick-toggle target. An in-progress task falls back to Planned
    /// instead of completing; current product behavior, keep as is.
    pub fn toggled(&self) -> Progress {
        match self {
            Progress::Planned => Progress::Done,
            Progress::InProgress => Progress::Planned,
            Progress::Done => Progress::Planned,
        }
    }

    /// Parse a `<select>` value; anything unexpected counts as Planned.
    pub fn from_value(value: &str) -> Progress {
        match value {
            "in-progress" => Progress::InProgress,
            "done" => Progress::Done,
            _ => Progress::Planned,
        }
    }
}

/// A single task as returned by the backend. `task_id` and `created_at`
/// are server-assigned and never produced locally.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Task {
    pub task_id: i64,
    pub title: String,
    pub content: String,
    pub progress: Progress,
    pub created_at: DateTime<Utc>,
}

/// Request body for task create and update calls.
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct TaskPayload {
    pub title: String,
    pub content: String,
    pub progress: Progress,
}

/// Per-status counts derived from the current collection. Recomputed on
/// every render, never cached.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TaskStats {
    pub planned: usize,
    pub in_progress: usize,
    pub done: usize,
    pub total: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut stats = TaskStats::default();
        for task in tasks {
            match task.progress {
                Progress::Planned => stats.planned += 1,
                Progress::InProgress => stats.in_progress += 1,
                Progress::Done => stats.done += 1,
            }
            stats.total += 1;
        }
        stats
    }

    /// Completion percentage, rounded; 0 for an empty collection.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.done as f64 / self.total as f64) * 100.0).round() as u32
    }

    pub fn all_done(&self) -> bool {
        self.total > 0 && self.done == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i64, progress: Progress) -> Task {
        Task {
            task_id: id,
            title: format!("Task {}", id),
            content: "content".to_string(),
            progress,
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn progress_uses_backend_wire_names() {
        assert_eq!(
            serde_json::to_string(&Progress::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::from_str::<Progress>("\"planned\"").unwrap(),
            Progress::Planned
        );
        assert_eq!(
            serde_json::from_str::<Progress>("\"done\"").unwrap(),
            Progress::Done
        );
    }

    #[test]
    fn toggle_is_an_involution_between_planned_and_done() {
        assert_eq!(Progress::Planned.toggled(), Progress::Done);
        assert_eq!(Progress::Planned.toggled().toggled(), Progress::Planned);
    }

    #[test]
    fn toggle_from_in_progress_falls_back_to_planned() {
        assert_eq!(Progress::InProgress.toggled(), Progress::Planned);
        assert_eq!(Progress::InProgress.toggled().toggled(), Progress::Done);
    }

    #[test]
    fn task_deserializes_backend_shape() {
        let json = r#"{
            "task_id": 1,
            "user_id": 7,
            "title": "Buy milk",
            "content": "2%",
            "progress": "planned",
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.task_id, 1);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.content, "2%");
        assert_eq!(task.progress, Progress::Planned);
        assert_eq!(task.created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    }

    #[test]
    fn payload_serializes_progress_wire_name() {
        let payload = TaskPayload {
            title: "t".to_string(),
            content: "c".to_string(),
            progress: Progress::InProgress,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"progress\":\"in-progress\""));
    }

    #[test]
    fn stats_on_empty_collection() {
        let stats = TaskStats::from_tasks(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.percent(), 0);
        assert!(!stats.all_done());
    }

    #[test]
    fn stats_counts_and_rounds_percentage() {
        let tasks = vec![
            task(1, Progress::Done),
            task(2, Progress::Planned),
            task(3, Progress::InProgress),
        ];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.planned, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.done, 1);
        assert_eq!(stats.total, 3);
        // 1/3 rounds down to 33
        assert_eq!(stats.percent(), 33);
        assert!(!stats.all_done());
    }

    #[test]
    fn stats_rounds_half_up() {
        let tasks = vec![
            task(1, Progress::Done),
            task(2, Progress::Done),
            task(3, Progress::Done),
            task(4, Progress::Done),
            task(5, Progress::Done),
            task(6, Progress::Planned),
            task(7, Progress::Planned),
            task(8, Progress::Planned),
        ];
        // 5/8 = 62.5% rounds to 63
        assert_eq!(TaskStats::from_tasks(&tasks).percent(), 63);
    }

    #[test]
    fn stats_all_done() {
        let tasks = vec![task(1, Progress::Done), task(2, Progress::Done)];
        let stats = TaskStats::from_tasks(&tasks);
        assert_eq!(stats.percent(), 100);
        assert!(stats.all_done());
    }
}
