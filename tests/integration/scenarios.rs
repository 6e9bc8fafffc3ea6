//! End-to-end expectations against built job lists.

use schedule_matchers::testing::{check, check_not, expect};
use schedule_matchers::{schedule, schedule_rake, Interval, JobList, TimeUnit};

use crate::common::init_tracing;

fn every_three_hours() -> JobList {
    JobList::builder()
        .every(Interval::every(3, TimeUnit::Hour), |every| {
            every.rake("rake:every:3:hours")
        })
        .build()
}

fn every_day_at_noon() -> JobList {
    JobList::builder()
        .every(Interval::every(1, TimeUnit::Day), |every| {
            every.at("12:00 PM").rake("rake:every:day:at:noon")
        })
        .build()
}

#[test]
fn test_unscheduled_task_passes_negated_expectation() {
    init_tracing();

    expect(&JobList::new()).not_to(schedule("MyTask.run"));
}

#[test]
fn test_unscheduled_task_fails_with_message() {
    init_tracing();

    let failure = check(&JobList::new(), &schedule("MyTask.run")).unwrap_err();
    assert_eq!(failure.message(), "expected to schedule \"MyTask.run\"");
}

#[test]
fn test_scheduled_task_passes() {
    init_tracing();

    expect(&every_three_hours()).to(schedule("rake:every:3:hours"));
}

#[test]
fn test_scheduled_task_fails_negated_expectation() {
    init_tracing();

    let failure = check_not(&every_three_hours(), &schedule("rake:every:3:hours")).unwrap_err();
    assert_eq!(
        failure.message(),
        "expected not to schedule \"rake:every:3:hours\""
    );
}

#[test]
fn test_scheduled_with_duration_passes() {
    init_tracing();

    let matcher = schedule("rake:every:3:hours").every(Interval::every(3, TimeUnit::Hour));

    expect(&every_three_hours()).to(matcher.clone());
    assert_eq!(
        matcher.description(),
        "schedule \"rake:every:3:hours\" every 10800 seconds"
    );
}

#[test]
fn test_scheduled_with_duration_fails_negated_expectation() {
    init_tracing();

    let matcher = schedule("rake:every:3:hours").every(Interval::Seconds(10_800));

    let failure = check_not(&every_three_hours(), &matcher).unwrap_err();
    assert_eq!(
        failure.message(),
        "expected not to schedule \"rake:every:3:hours\" every 10800 seconds"
    );
}

#[test]
fn test_scheduled_at_time_passes() {
    init_tracing();

    expect(&every_day_at_noon()).to(schedule("rake:every:day:at:noon")
        .every(Interval::every(1, TimeUnit::Day))
        .at("12:00 PM"));
}

#[test]
fn test_scheduled_at_time_fails_negated_expectation() {
    init_tracing();

    let matcher = schedule("rake:every:day:at:noon")
        .every(Interval::Seconds(86_400))
        .at("12:00 PM");

    let failure = check_not(&every_day_at_noon(), &matcher).unwrap_err();
    assert_eq!(
        failure.message(),
        "expected not to schedule \"rake:every:day:at:noon\" every 86400 seconds at \"12:00 PM\""
    );
}

#[test]
#[should_panic(expected = "expected to schedule \"rake:every:day:at:noon\" at \"1:00 PM\"")]
fn test_wrong_time_panics_with_failure_message() {
    expect(&every_day_at_noon()).to(schedule("rake:every:day:at:noon").at("1:00 PM"));
}

#[test]
fn test_wrong_duration_does_not_match() {
    init_tracing();

    expect(&every_three_hours())
        .not_to(schedule("rake:every:3:hours").every(Interval::every(2, TimeUnit::Hour)));
}

#[test]
fn test_cron_expression_schedule() {
    init_tracing();

    let jobs = JobList::builder()
        .every("0 0 27-31 * *", |every| every.rake("rake:every:1:day:at:noon"))
        .build();
    let matcher = schedule_rake("rake:every:1:day:at:noon").every("0 0 27-31 * *");

    expect(&jobs).to(matcher.clone());
    assert_eq!(
        matcher.description(),
        "schedule \"rake:every:1:day:at:noon\" every \"0 0 27-31 * *\""
    );
}

#[test]
fn test_roles_scenario() {
    init_tracing();

    let jobs = JobList::builder()
        .every(Interval::keyword(":hour"), |every| {
            every.roles(["app", "worker"]).runner("Sweeper.run")
        })
        .build();

    expect(&jobs).to(schedule("Sweeper.run").with_roles(["app", "worker"]));
    expect(&jobs).not_to(schedule("Sweeper.run").with_roles(["worker", "app"]));

    let failure = check(&jobs, &schedule("Sweeper.run").with_role("db")).unwrap_err();
    assert_eq!(
        failure.message(),
        "expected to schedule \"Sweeper.run\" with \"db\" role(s)"
    );
}

#[test]
fn test_messages_available_before_evaluation() {
    let matcher = schedule("MyTask.run").every(Interval::keyword("reboot"));

    assert_eq!(
        matcher.failure_message(),
        "expected to schedule \"MyTask.run\" every \"reboot\""
    );

    assert!(!matcher.matches(&JobList::new()));
    assert_eq!(
        matcher.failure_message(),
        "expected to schedule \"MyTask.run\" every \"reboot\""
    );
}
