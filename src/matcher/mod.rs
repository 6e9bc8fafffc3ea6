//! Matchers over scheduled job lists.
//!
//! A matcher decides whether a subject matches and explains the outcome in
//! messages suitable for a failed assertion.

mod message;
mod schedule;

pub use schedule::{schedule, schedule_command, schedule_rake, schedule_runner, ScheduleMatcher};

/// A predicate over a subject that can describe itself.
///
/// The message methods reflect the matcher's configuration only, so they
/// may be called before or after [`Matcher::matches`].
pub trait Matcher<S: ?Sized> {
    /// Whether `subject` satisfies the matcher.
    fn matches(&self, subject: &S) -> bool;

    /// Short label for the expectation.
    fn description(&self) -> String;

    /// Message for an expectation that should have matched but did not.
    fn failure_message(&self) -> String;

    /// Message for an expectation that should not have matched but did.
    fn failure_message_when_negated(&self) -> String;
}
