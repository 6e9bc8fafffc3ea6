//! Core schedule types: identifiers, intervals, job records and job lists.

pub mod interval;
pub mod job;
pub mod job_list;
pub mod types;
