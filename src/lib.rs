//! schedule-matchers - assertions for scheduled job lists.
//!
//! Build a [`JobList`] (or implement [`JobSource`] for your own schedule type),
//! then check it with a [`ScheduleMatcher`]:
//!
//! ```
//! use schedule_matchers::testing::expect;
//! use schedule_matchers::{schedule, Interval, JobList, TimeUnit};
//!
//! let jobs = JobList::builder()
//!     .every(Interval::every(3, TimeUnit::Hour), |every| {
//!         every.rake("rake:every:3:hours")
//!     })
//!     .build();
//!
//! expect(&jobs).to(schedule("rake:every:3:hours").every(Interval::Seconds(10_800)));
//! ```

pub mod core;
pub mod matcher;
pub mod testing;

pub use crate::core::interval::{Interval, IntervalError, TimeUnit};
pub use crate::core::job::{JobKind, ScheduledJob};
pub use crate::core::job_list::{EveryBlock, JobList, JobListBuilder, JobSource};
pub use crate::core::types::{Role, TaskId};
pub use matcher::{
    schedule, schedule_command, schedule_rake, schedule_runner, Matcher, ScheduleMatcher,
};
pub use testing::{check, check_not, expect, Expectation, MatchFailure};
