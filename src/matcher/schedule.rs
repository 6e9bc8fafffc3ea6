//! The schedule matcher.
//!
//! [`ScheduleMatcher`] checks that a job list contains a job for a task,
//! optionally narrowed by interval, time of day and roles. Filters run in a
//! fixed order: interval, time, roles, then task.

use std::fmt;

use super::message;
use super::Matcher;
use crate::core::interval::Interval;
use crate::core::job::ScheduledJob;
use crate::core::job_list::JobSource;
use crate::core::types::{Role, TaskId};

/// Expect a job for `task` to be scheduled.
///
/// # Example
///
/// ```
/// use schedule_matchers::{schedule, Interval, JobList, TimeUnit};
///
/// let jobs = JobList::builder()
///     .every(Interval::every(1, TimeUnit::Day), |every| {
///         every.at("12:00 PM").rake("rake:every:day:at:noon")
///     })
///     .build();
///
/// let matcher = schedule("rake:every:day:at:noon")
///     .every(Interval::Seconds(86_400))
///     .at("12:00 PM");
///
/// assert!(matcher.matches(&jobs));
/// assert_eq!(
///     matcher.description(),
///     "schedule \"rake:every:day:at:noon\" every 86400 seconds at \"12:00 PM\""
/// );
/// ```
pub fn schedule(task: impl Into<TaskId>) -> ScheduleMatcher {
    ScheduleMatcher::new(task)
}

/// Alias of [`schedule`] for rake tasks.
pub fn schedule_rake(task: impl Into<TaskId>) -> ScheduleMatcher {
    schedule(task)
}

/// Alias of [`schedule`] for runner expressions.
pub fn schedule_runner(task: impl Into<TaskId>) -> ScheduleMatcher {
    schedule(task)
}

/// Alias of [`schedule`] for shell commands.
pub fn schedule_command(task: impl Into<TaskId>) -> ScheduleMatcher {
    schedule(task)
}

/// Matches job lists that schedule a task.
///
/// Each constraint method consumes the matcher and returns it with that
/// constraint set. Evaluation only reads the matcher, so one matcher can be
/// checked against any number of job lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleMatcher {
    task: TaskId,
    interval: Option<Interval>,
    time: Option<String>,
    roles: Option<Vec<Role>>,
}

impl ScheduleMatcher {
    /// Create a matcher for `task` with no constraints.
    pub fn new(task: impl Into<TaskId>) -> Self {
        Self {
            task: task.into(),
            interval: None,
            time: None,
            roles: None,
        }
    }

    /// Only match jobs in the group for exactly this interval.
    pub fn every(mut self, interval: impl Into<Interval>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    /// Only match jobs scheduled at exactly this time of day.
    pub fn at(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Only match jobs whose roles equal `roles`, in the same order.
    ///
    /// An empty list leaves roles unconstrained.
    pub fn with_roles<I, R>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Role>,
    {
        self.roles = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    /// Only match jobs restricted to exactly this one role.
    pub fn with_role(self, role: impl Into<Role>) -> Self {
        let role: Role = role.into();
        self.with_roles([role])
    }

    /// The task being matched.
    pub fn task(&self) -> &TaskId {
        &self.task
    }

    /// The interval constraint, if any.
    pub fn interval(&self) -> Option<&Interval> {
        self.interval.as_ref()
    }

    /// The time constraint, if any.
    pub fn time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    /// The roles constraint, if any.
    pub fn roles(&self) -> Option<&[Role]> {
        self.roles.as_deref()
    }

    /// Jobs in `source` that satisfy every constraint.
    pub fn matching_jobs<'a, S>(&self, source: &'a S) -> Vec<&'a ScheduledJob>
    where
        S: JobSource + ?Sized,
    {
        let jobs = self.filter_by_interval(source);
        tracing::trace!(stage = "interval", remaining = jobs.len());

        let jobs = self.filter_by_time(jobs);
        tracing::trace!(stage = "time", remaining = jobs.len());

        let jobs = self.filter_by_roles(jobs);
        tracing::trace!(stage = "roles", remaining = jobs.len());

        let jobs = self.filter_by_task(jobs);
        tracing::trace!(stage = "task", remaining = jobs.len());

        jobs
    }

    /// Whether `source` contains at least one matching job.
    pub fn matches<S>(&self, source: &S) -> bool
    where
        S: JobSource + ?Sized,
    {
        let matched = !self.matching_jobs(source).is_empty();
        tracing::debug!(task = %self.task, matched, "Evaluated schedule matcher");
        matched
    }

    fn filter_by_interval<'a, S>(&self, source: &'a S) -> Vec<&'a ScheduledJob>
    where
        S: JobSource + ?Sized,
    {
        match &self.interval {
            Some(interval) => source.jobs_every(interval),
            None => source.all_jobs(),
        }
    }

    fn filter_by_time<'a>(&self, jobs: Vec<&'a ScheduledJob>) -> Vec<&'a ScheduledJob> {
        let Some(time) = self.time.as_deref() else {
            return jobs;
        };
        jobs.into_iter().filter(|job| job.at() == Some(time)).collect()
    }

    fn filter_by_roles<'a>(&self, jobs: Vec<&'a ScheduledJob>) -> Vec<&'a ScheduledJob> {
        match self.roles.as_deref() {
            Some(roles) if !roles.is_empty() => jobs
                .into_iter()
                .filter(|job| job.roles() == roles)
                .collect(),
            _ => jobs,
        }
    }

    fn filter_by_task<'a>(&self, jobs: Vec<&'a ScheduledJob>) -> Vec<&'a ScheduledJob> {
        jobs.into_iter()
            .filter(|job| job.task() == &self.task)
            .collect()
    }

    /// Label for the expectation, e.g. `schedule "db:backup" at "3:00 AM"`.
    pub fn description(&self) -> String {
        message::compose(message::base_description(&self.task), self.fragments())
    }

    /// Message for a positive expectation that did not match.
    pub fn failure_message(&self) -> String {
        message::compose(message::base_failure_message(&self.task), self.fragments())
    }

    /// Message for a negative expectation that matched.
    pub fn failure_message_when_negated(&self) -> String {
        message::compose(
            message::base_failure_message_when_negated(&self.task),
            self.fragments(),
        )
    }

    fn fragments(&self) -> [Option<String>; 3] {
        [
            message::interval_fragment(self.interval.as_ref()),
            message::time_fragment(self.time.as_deref()),
            message::roles_fragment(self.roles.as_deref()),
        ]
    }
}

impl<S: JobSource + ?Sized> Matcher<S> for ScheduleMatcher {
    fn matches(&self, subject: &S) -> bool {
        ScheduleMatcher::matches(self, subject)
    }

    fn description(&self) -> String {
        ScheduleMatcher::description(self)
    }

    fn failure_message(&self) -> String {
        ScheduleMatcher::failure_message(self)
    }

    fn failure_message_when_negated(&self) -> String {
        ScheduleMatcher::failure_message_when_negated(self)
    }
}

impl fmt::Display for ScheduleMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
