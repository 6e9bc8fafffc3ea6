//! Assertion helpers for tests that inspect job lists.
//!
//! This module connects [`Matcher`]s to ordinary Rust tests:
//!
//! - [`expect`]: `expect(&jobs).to(matcher)` / `.not_to(matcher)`, panicking
//!   with the matcher's failure message
//! - [`check`] and [`check_not`]: the same checks returning a [`MatchFailure`]
//! - [`assert_schedules!`](crate::assert_schedules) and
//!   [`assert_not_schedules!`](crate::assert_not_schedules) macros

use thiserror::Error;

use crate::matcher::Matcher;

/// A failed expectation, carrying the matcher's message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct MatchFailure {
    message: String,
}

impl MatchFailure {
    /// Create a failure with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Check that `subject` matches, returning the failure message otherwise.
pub fn check<S, M>(subject: &S, matcher: &M) -> Result<(), MatchFailure>
where
    S: ?Sized,
    M: Matcher<S>,
{
    if matcher.matches(subject) {
        Ok(())
    } else {
        Err(MatchFailure::new(matcher.failure_message()))
    }
}

/// Check that `subject` does not match, returning the negated failure message
/// otherwise.
pub fn check_not<S, M>(subject: &S, matcher: &M) -> Result<(), MatchFailure>
where
    S: ?Sized,
    M: Matcher<S>,
{
    if matcher.matches(subject) {
        Err(MatchFailure::new(matcher.failure_message_when_negated()))
    } else {
        Ok(())
    }
}

/// Start an expectation about `subject`.
///
/// # Example
///
/// ```
/// use schedule_matchers::testing::expect;
/// use schedule_matchers::{schedule, JobList};
///
/// let jobs = JobList::builder()
///     .every("0 0 27-31 * *", |every| every.rake("invoices:close"))
///     .build();
///
/// expect(&jobs).to(schedule("invoices:close").every("0 0 27-31 * *"));
/// expect(&jobs).not_to(schedule("MyTask.run"));
/// ```
pub fn expect<S: ?Sized>(subject: &S) -> Expectation<'_, S> {
    Expectation { subject }
}

/// An expectation about a subject, created by [`expect`].
#[derive(Debug)]
pub struct Expectation<'a, S: ?Sized> {
    subject: &'a S,
}

impl<S: ?Sized> Expectation<'_, S> {
    /// Panic with the matcher's failure message unless it matches.
    #[track_caller]
    pub fn to<M: Matcher<S>>(&self, matcher: M) {
        if let Err(failure) = check(self.subject, &matcher) {
            panic!("{}", failure);
        }
    }

    /// Panic with the matcher's negated failure message if it matches.
    #[track_caller]
    pub fn not_to<M: Matcher<S>>(&self, matcher: M) {
        if let Err(failure) = check_not(self.subject, &matcher) {
            panic!("{}", failure);
        }
    }

    /// Alias of [`Expectation::not_to`].
    #[track_caller]
    pub fn to_not<M: Matcher<S>>(&self, matcher: M) {
        self.not_to(matcher)
    }
}

/// Assert that a job list matches a matcher.
///
/// ```
/// use schedule_matchers::{assert_schedules, schedule, JobList};
///
/// let jobs = JobList::builder()
///     .every(60u64, |every| every.command("echo hi"))
///     .build();
///
/// assert_schedules!(jobs, schedule("echo hi"));
/// ```
#[macro_export]
macro_rules! assert_schedules {
    ($subject:expr, $matcher:expr $(,)?) => {
        $crate::testing::expect(&$subject).to($matcher)
    };
}

/// Assert that a job list does not match a matcher.
///
/// ```
/// use schedule_matchers::{assert_not_schedules, schedule, JobList};
///
/// assert_not_schedules!(JobList::new(), schedule("MyTask.run"));
/// ```
#[macro_export]
macro_rules! assert_not_schedules {
    ($subject:expr, $matcher:expr $(,)?) => {
        $crate::testing::expect(&$subject).not_to($matcher)
    };
}
