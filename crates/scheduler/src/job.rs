use std::fmt;

use serde::Serialize;

/// Job priority
///
/// Higher values are more urgent. There is no fixed range and distinct jobs
/// may share a value.
pub type Priority = i64;

/// A named print job
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    /// Unique job name
    pub name: String,

    /// Scheduling priority
    pub priority: Priority,
}

impl Job {
    /// Create a new job
    pub fn new(name: impl Into<String>, priority: Priority) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Priority: {})", self.name, self.priority)
    }
}
