//! Scheduled job records.
//!
//! A ScheduledJob is one entry of a schedule: what runs, how often, at what
//! time of day and on which server roles.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::interval::Interval;
use super::types::{Role, TaskId};

/// How the scheduler invokes a job's task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    /// A rake task name.
    Rake,
    /// A runner expression evaluated inside the application.
    Runner,
    /// A raw shell command.
    #[default]
    Command,
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobKind::Rake => write!(f, "rake"),
            JobKind::Runner => write!(f, "runner"),
            JobKind::Command => write!(f, "command"),
        }
    }
}

/// A single scheduled job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledJob {
    /// The task this job runs.
    task: TaskId,
    /// How often the job recurs.
    #[serde(rename = "every")]
    interval: Interval,
    /// Time of day, as written in the schedule (e.g. "12:00 PM").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    at: Option<String>,
    /// Server roles the job is restricted to, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    roles: Vec<Role>,
    #[serde(default)]
    kind: JobKind,
}

impl ScheduledJob {
    /// Create a new command job with no time or roles.
    pub fn new(task: impl Into<TaskId>, interval: impl Into<Interval>) -> Self {
        Self {
            task: task.into(),
            interval: interval.into(),
            at: None,
            roles: Vec::new(),
            kind: JobKind::default(),
        }
    }

    /// Set the time of day.
    pub fn with_at(mut self, at: impl Into<String>) -> Self {
        self.at = Some(at.into());
        self
    }

    /// Set the roles, replacing any previous ones.
    pub fn with_roles<I, R>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Role>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Set the job kind.
    pub fn with_kind(mut self, kind: JobKind) -> Self {
        self.kind = kind;
        self
    }

    /// Get the task.
    pub fn task(&self) -> &TaskId {
        &self.task
    }

    /// Get the interval.
    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    /// Get the time of day, if any.
    pub fn at(&self) -> Option<&str> {
        self.at.as_deref()
    }

    /// Get the roles.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Get the job kind.
    pub fn kind(&self) -> JobKind {
        self.kind
    }
}
