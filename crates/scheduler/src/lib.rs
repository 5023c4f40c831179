//! Print Job Scheduler Library
//!
//! Named print jobs ordered by an integer priority in an array-backed max-heap.
//!
//! This crate provides the scheduling engine used by the `printq` command
//! session. Jobs carry a unique name and a signed priority; the job with the
//! highest priority is always at the head of the queue. Names are kept in a
//! companion index so duplicates are rejected before they reach the heap.
//!
//! The engine performs no I/O. Every failure comes back as a
//! [`SchedulerError`] and leaves the queue exactly as it was.
//!
//! # Example
//!
//! ```
//! use printq_scheduler::{JobHeap, SchedulerError};
//!
//! let mut queue = JobHeap::new();
//!
//! queue.insert("quarterly-report", 5).unwrap();
//! queue.insert("boarding-pass", 9).unwrap();
//! queue.insert("flyer", 2).unwrap();
//!
//! // The most urgent job is at the head
//! assert_eq!(queue.peek_max().unwrap().name, "boarding-pass");
//!
//! // Names are unique
//! assert_eq!(
//!     queue.insert("flyer", 7),
//!     Err(SchedulerError::DuplicateName("flyer".to_string()))
//! );
//!
//! // Bump a job past everything else
//! queue.update_priority("flyer", 20).unwrap();
//! let job = queue.extract_max().unwrap();
//! assert_eq!(job.name, "flyer");
//!
//! // Descending view that leaves the heap untouched
//! let names: Vec<_> = queue.ordered_listing().into_iter().map(|j| j.name).collect();
//! assert_eq!(names, ["boarding-pass", "quarterly-report"]);
//! ```

mod error;
pub mod heap;
mod job;
mod queue;

// Re-export public API
pub use error::{Result, SchedulerError};
pub use job::{Job, Priority};
pub use queue::JobHeap;
