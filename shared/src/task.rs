use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a task. Serialized as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Builds a new, not yet completed task. Returns `None` when `text` is
    /// blank once trimmed.
    pub fn new(id: TaskId, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            id,
            text: text.to_string(),
            completed: false,
        })
    }
}

/// Hands out strictly increasing ids.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Seeds the generator past every id already in use.
    pub fn after<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let last = tasks.into_iter().map(|t| t.id.0).max().unwrap_or(0);
        Self { last }
    }

    /// Next id past the counter. Once the counter reaches `u64::MAX` it stops
    /// advancing and the smallest id for which `in_use` is false is handed out.
    pub fn next_id(&mut self, in_use: impl Fn(TaskId) -> bool) -> TaskId {
        if let Some(next) = self.last.checked_add(1) {
            self.last = next;
            return TaskId(next);
        }
        (0..u64::MAX)
            .map(TaskId)
            .find(|&id| !in_use(id))
            .unwrap_or(TaskId(u64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_text() {
        let task = Task::new(TaskId(7), "  buy milk \n").unwrap();
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn new_rejects_blank_text() {
        assert!(Task::new(TaskId(1), "").is_none());
        assert!(Task::new(TaskId(1), " \t ").is_none());
    }

    #[test]
    fn serializes_with_integer_id() {
        let task = Task::new(TaskId(1700000000000), "x").unwrap();
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":1700000000000,"text":"x","completed":false}"#);
    }

    #[test]
    fn missing_completed_defaults_to_false() {
        let task: Task = serde_json::from_str(r#"{"id":3,"text":"a"}"#).unwrap();
        assert!(!task.completed);
    }

    #[test]
    fn generator_starts_after_highest_id() {
        let tasks = vec![
            Task::new(TaskId(40), "a").unwrap(),
            Task::new(TaskId(12), "b").unwrap(),
        ];
        let mut ids = IdGenerator::after(&tasks);
        assert_eq!(ids.next_id(|_| false), TaskId(41));
        assert_eq!(ids.next_id(|_| false), TaskId(42));
    }

    #[test]
    fn generator_on_empty_starts_at_one() {
        let mut ids = IdGenerator::after(std::iter::empty::<&Task>());
        assert_eq!(ids.next_id(|_| false), TaskId(1));
    }

    #[test]
    fn exhausted_counter_reuses_smallest_free_id() {
        let tasks = vec![
            Task::new(TaskId(0), "a").unwrap(),
            Task::new(TaskId(u64::MAX), "b").unwrap(),
        ];
        let mut ids = IdGenerator::after(&tasks);
        let taken = |id: TaskId| id == TaskId(0) || id == TaskId(2) || id == TaskId(u64::MAX);
        assert_eq!(ids.next_id(taken), TaskId(1));
        assert_eq!(ids.next_id(|id| taken(id) || id == TaskId(1)), TaskId(3));
    }
}
