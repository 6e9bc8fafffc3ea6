//! Job lists grouped by interval.
//!
//! A [`JobList`] keeps jobs grouped by their [`Interval`], in the order the
//! groups were first declared. The [`JobSource`] trait is the read interface
//! matchers use, so they never depend on how a list stores its groups.

use serde::{Deserialize, Serialize};

use super::interval::Interval;
use super::job::{JobKind, ScheduledJob};
use super::types::Role;

/// Read access to a collection of scheduled jobs.
pub trait JobSource {
    /// Every job, groups in declaration order, jobs in insertion order.
    fn all_jobs(&self) -> Vec<&ScheduledJob>;

    /// Jobs in the group keyed exactly by `interval`. Empty if there is none.
    fn jobs_every(&self, interval: &Interval) -> Vec<&ScheduledJob>;
}

impl<T: JobSource + ?Sized> JobSource for &T {
    fn all_jobs(&self) -> Vec<&ScheduledJob> {
        (**self).all_jobs()
    }

    fn jobs_every(&self, interval: &Interval) -> Vec<&ScheduledJob> {
        (**self).jobs_every(interval)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct JobGroup {
    interval: Interval,
    jobs: Vec<ScheduledJob>,
}

/// Scheduled jobs grouped by interval.
///
/// Serializes as a flat list of jobs; deserializing regroups them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ScheduledJob>", into = "Vec<ScheduledJob>")]
pub struct JobList {
    groups: Vec<JobGroup>,
}

impl JobList {
    /// Create an empty job list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a job list group by group.
    pub fn builder() -> JobListBuilder {
        JobListBuilder::new()
    }

    /// Add a job to the group for its interval, creating the group if needed.
    pub fn push(&mut self, job: ScheduledJob) {
        match self
            .groups
            .iter_mut()
            .find(|group| &group.interval == job.interval())
        {
            Some(group) => group.jobs.push(job),
            None => self.groups.push(JobGroup {
                interval: job.interval().clone(),
                jobs: vec![job],
            }),
        }
    }

    /// Iterate over `(interval, jobs)` groups in declaration order.
    pub fn groups(&self) -> impl Iterator<Item = (&Interval, &[ScheduledJob])> {
        self.groups
            .iter()
            .map(|group| (&group.interval, group.jobs.as_slice()))
    }

    /// Iterate over the distinct intervals in declaration order.
    pub fn intervals(&self) -> impl Iterator<Item = &Interval> {
        self.groups.iter().map(|group| &group.interval)
    }

    /// Total number of jobs.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.jobs.len()).sum()
    }

    /// Whether the list has no jobs.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl JobSource for JobList {
    fn all_jobs(&self) -> Vec<&ScheduledJob> {
        self.groups.iter().flat_map(|group| group.jobs.iter()).collect()
    }

    fn jobs_every(&self, interval: &Interval) -> Vec<&ScheduledJob> {
        self.groups
            .iter()
            .find(|group| &group.interval == interval)
            .map(|group| group.jobs.iter().collect())
            .unwrap_or_default()
    }
}

impl Extend<ScheduledJob> for JobList {
    fn extend<I: IntoIterator<Item = ScheduledJob>>(&mut self, iter: I) {
        for job in iter {
            self.push(job);
        }
    }
}

impl FromIterator<ScheduledJob> for JobList {
    fn from_iter<I: IntoIterator<Item = ScheduledJob>>(iter: I) -> Self {
        let mut list = JobList::new();
        list.extend(iter);
        list
    }
}

impl From<Vec<ScheduledJob>> for JobList {
    fn from(jobs: Vec<ScheduledJob>) -> Self {
        jobs.into_iter().collect()
    }
}

impl From<JobList> for Vec<ScheduledJob> {
    fn from(list: JobList) -> Self {
        list.groups
            .into_iter()
            .flat_map(|group| group.jobs)
            .collect()
    }
}

/// Builder for [`JobList`], declaring one interval block at a time.
///
/// # Example
///
/// ```
/// use schedule_matchers::{Interval, JobList, JobSource, TimeUnit};
///
/// let jobs = JobList::builder()
///     .every(Interval::every(3, TimeUnit::Hour), |every| {
///         every.rake("rake:every:3:hours")
///     })
///     .every(Interval::every(1, TimeUnit::Day), |every| {
///         every.at("12:00 PM").rake("rake:every:day:at:noon")
///     })
///     .build();
///
/// assert_eq!(jobs.all_jobs().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct JobListBuilder {
    list: JobList,
}

impl JobListBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare jobs that recur every `interval`.
    pub fn every<F>(mut self, interval: impl Into<Interval>, block: F) -> Self
    where
        F: FnOnce(EveryBlock) -> EveryBlock,
    {
        let block = block(EveryBlock::new(interval.into()));
        self.list.extend(block.jobs);
        self
    }

    /// Add an already built job.
    pub fn job(mut self, job: ScheduledJob) -> Self {
        self.list.push(job);
        self
    }

    /// Finish building.
    pub fn build(self) -> JobList {
        self.list
    }
}

/// Jobs declared inside one [`JobListBuilder::every`] block.
///
/// `at` and `roles` apply to the jobs added after them in the same block.
#[derive(Debug)]
pub struct EveryBlock {
    interval: Interval,
    at: Option<String>,
    roles: Vec<Role>,
    jobs: Vec<ScheduledJob>,
}

impl EveryBlock {
    fn new(interval: Interval) -> Self {
        Self {
            interval,
            at: None,
            roles: Vec::new(),
            jobs: Vec::new(),
        }
    }

    /// Run the following jobs at this time of day.
    pub fn at(mut self, at: impl Into<String>) -> Self {
        self.at = Some(at.into());
        self
    }

    /// Restrict the following jobs to these roles.
    pub fn roles<I, R>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Role>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Add a rake task.
    pub fn rake(self, task: impl Into<String>) -> Self {
        self.add(JobKind::Rake, task.into())
    }

    /// Add a runner expression.
    pub fn runner(self, task: impl Into<String>) -> Self {
        self.add(JobKind::Runner, task.into())
    }

    /// Add a shell command.
    pub fn command(self, task: impl Into<String>) -> Self {
        self.add(JobKind::Command, task.into())
    }

    fn add(mut self, kind: JobKind, task: String) -> Self {
        let mut job = ScheduledJob::new(task, self.interval.clone())
            .with_roles(self.roles.iter().cloned())
            .with_kind(kind);
        if let Some(at) = &self.at {
            job = job.with_at(at.clone());
        }
        self.jobs.push(job);
        self
    }
}
