//! Message fragments for schedule matchers.

use crate::core::interval::Interval;
use crate::core::types::{Role, TaskId};

pub(super) fn quoted(value: impl std::fmt::Display) -> String {
    format!("\"{}\"", value)
}

pub(super) fn base_description(task: &TaskId) -> String {
    format!("schedule {}", quoted(task))
}

pub(super) fn base_failure_message(task: &TaskId) -> String {
    format!("expected to schedule {}", quoted(task))
}

pub(super) fn base_failure_message_when_negated(task: &TaskId) -> String {
    format!("expected not to schedule {}", quoted(task))
}

pub(super) fn interval_fragment(interval: Option<&Interval>) -> Option<String> {
    interval.map(|interval| format!("every {}", interval))
}

pub(super) fn time_fragment(time: Option<&str>) -> Option<String> {
    time.map(|time| format!("at {}", quoted(time)))
}

pub(super) fn roles_fragment(roles: Option<&[Role]>) -> Option<String> {
    let roles = roles.filter(|roles| !roles.is_empty())?;
    let names = roles.iter().map(quoted).collect::<Vec<_>>().join(", ");
    Some(format!("with {} role(s)", names))
}

/// Joins `base` and the present, non-empty fragments with single spaces.
pub(super) fn compose<I>(base: String, fragments: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    std::iter::once(base)
        .chain(fragments.into_iter().flatten())
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
