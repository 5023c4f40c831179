//! Priority queue of named print jobs
//!
//! [`JobHeap`] keeps its jobs in a dense vector ordered as a binary max-heap
//! and tracks the names it holds in a set that always mirrors the vector.

use std::collections::HashSet;

use crate::error::{Result, SchedulerError};
use crate::heap;
use crate::job::{Job, Priority};

/// Max-heap of print jobs keyed on priority
///
/// The job with the highest priority is always at the head. Names are unique
/// within one queue; independent queues do not share names.
///
/// Every operation either applies completely or returns an error and leaves
/// the queue untouched.
#[derive(Debug, Clone, Default)]
pub struct JobHeap {
    /// Jobs in heap order
    storage: Vec<Job>,

    /// Names of every job in `storage`
    names: HashSet<String>,
}

impl JobHeap {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with room for `capacity` jobs
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Vec::with_capacity(capacity),
            names: HashSet::with_capacity(capacity),
        }
    }

    /// Add a job to the queue
    ///
    /// Fails with [`SchedulerError::DuplicateName`] if a job with this name is
    /// already queued. Any priority is accepted. A job whose priority ties
    /// with an existing job is placed behind it.
    pub fn insert(&mut self, name: impl Into<String>, priority: Priority) -> Result<()> {
        let name = name.into();
        if self.names.contains(&name) {
            return Err(SchedulerError::DuplicateName(name));
        }

        self.names.insert(name.clone());
        self.storage.push(Job::new(name, priority));
        let last = self.storage.len() - 1;
        heap::sift_up(&mut self.storage, last);

        debug_assert!(heap::is_max_heap(&self.storage));
        Ok(())
    }

    /// Peek at the highest priority job without removing it
    pub fn peek_max(&self) -> Result<&Job> {
        self.storage.first().ok_or(SchedulerError::EmptyQueue)
    }

    /// Remove and return the highest priority job
    pub fn extract_max(&mut self) -> Result<Job> {
        if self.storage.is_empty() {
            return Err(SchedulerError::EmptyQueue);
        }

        // Move the last job into the root slot and take the old root out
        let job = self.storage.swap_remove(0);
        self.names.remove(&job.name);
        heap::sift_down(&mut self.storage, 0);

        debug_assert!(heap::is_max_heap(&self.storage));
        Ok(job)
    }

    /// Change the priority of a queued job
    ///
    /// The job is moved toward the root if its priority went up and toward
    /// the leaves otherwise. Returns the previous priority.
    pub fn update_priority(&mut self, name: &str, new_priority: Priority) -> Result<Priority> {
        let index = self
            .storage
            .iter()
            .position(|job| job.name == name)
            .ok_or_else(|| SchedulerError::NotFound(name.to_string()))?;

        let old_priority = std::mem::replace(&mut self.storage[index].priority, new_priority);
        if new_priority > old_priority {
            heap::sift_up(&mut self.storage, index);
        } else {
            heap::sift_down(&mut self.storage, index);
        }

        debug_assert!(heap::is_max_heap(&self.storage));
        Ok(old_priority)
    }

    /// All jobs from highest to lowest priority
    ///
    /// Sorts a copy of the heap, so the queue itself is not reordered.
    /// Jobs with equal priority come out in no particular order.
    pub fn ordered_listing(&self) -> Vec<Job> {
        let mut snapshot = self.storage.clone();
        heap::heap_sort(&mut snapshot);
        snapshot.reverse();
        snapshot
    }

    /// Returns true if a job with this name is queued
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate over the jobs in heap (array) order
    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.storage.iter()
    }

    /// Get the number of jobs in the queue
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl<'a> IntoIterator for &'a JobHeap {
    type Item = &'a Job;
    type IntoIter = std::slice::Iter<'a, Job>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
