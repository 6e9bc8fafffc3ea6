//! Matching against job sources other than `JobList`.

use schedule_matchers::testing::{check, expect};
use schedule_matchers::{schedule, Interval, JobSource, ScheduledJob};

use crate::common::init_tracing;

/// A flat crontab that keeps jobs in file order.
struct Crontab {
    entries: Vec<ScheduledJob>,
}

impl JobSource for Crontab {
    fn all_jobs(&self) -> Vec<&ScheduledJob> {
        self.entries.iter().collect()
    }

    fn jobs_every(&self, interval: &Interval) -> Vec<&ScheduledJob> {
        self.entries
            .iter()
            .filter(|job| job.interval() == interval)
            .collect()
    }
}

fn crontab() -> Crontab {
    Crontab {
        entries: vec![
            ScheduledJob::new("logs:rotate", "0 0 * * *"),
            ScheduledJob::new("queue:drain", Interval::Seconds(300)).with_roles(["worker"]),
            ScheduledJob::new("logs:rotate", Interval::Seconds(3_600)).with_at("0:30"),
        ],
    }
}

#[test]
fn test_custom_source() {
    init_tracing();

    let tab = crontab();

    expect(&tab).to(schedule("logs:rotate").every("0 0 * * *"));
    expect(&tab).to(schedule("logs:rotate").every(Interval::Seconds(3_600)).at("0:30"));
    expect(&tab).to(schedule("queue:drain").with_role("worker"));
    expect(&tab).not_to(schedule("queue:drain").every(Interval::Seconds(3_600)));
}

#[test]
fn test_trait_object_source() {
    init_tracing();

    let tab = crontab();
    let source: &dyn JobSource = &tab;

    assert!(schedule("queue:drain").matches(source));
    assert!(!schedule("queue:fill").matches(source));

    let failure = check(source, &schedule("queue:fill")).unwrap_err();
    assert_eq!(failure.to_string(), "expected to schedule \"queue:fill\"");
}

#[test]
fn test_matching_jobs_returns_survivors() {
    let tab = crontab();

    let found = schedule("logs:rotate").matching_jobs(&tab);
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].interval(), &Interval::expression("0 0 * * *"));
    assert_eq!(found[1].at(), Some("0:30"));
}
