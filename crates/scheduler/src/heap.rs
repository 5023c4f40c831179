//! Array-backed max-heap primitives
//!
//! The slice is read as a binary tree: the children of index `i` sit at
//! `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. The slice length is the
//! live bound, so heap-sort hands a shrinking sub-slice to [`sift_down`].
//!
//! Ties never move an element. An element only rises past a parent that is
//! strictly smaller and only sinks below a child that is strictly larger, so
//! among equal priorities the earlier-inserted job stays nearer the root.

use crate::job::Job;

fn parent(index: usize) -> Option<usize> {
    if index == 0 {
        None
    } else {
        Some((index - 1) / 2)
    }
}

/// Move the element at `index` toward the root while its parent is smaller.
pub fn sift_up(jobs: &mut [Job], mut index: usize) {
    while let Some(parent) = parent(index) {
        if jobs[parent].priority < jobs[index].priority {
            jobs.swap(parent, index);
            index = parent;
        } else {
            break;
        }
    }
}

/// Move the element at `index` toward the leaves while a child is larger.
pub fn sift_down(jobs: &mut [Job], mut index: usize) {
    let len = jobs.len();
    loop {
        let left = 2 * index + 1;
        let right = 2 * index + 2;
        let mut largest = index;

        if left < len && jobs[left].priority > jobs[largest].priority {
            largest = left;
        }
        if right < len && jobs[right].priority > jobs[largest].priority {
            largest = right;
        }

        if largest == index {
            break;
        }
        jobs.swap(index, largest);
        index = largest;
    }
}

/// Arrange an arbitrary slice into a max-heap.
///
/// A slice that already satisfies the heap property is left as is.
pub fn build_heap(jobs: &mut [Job]) {
    if jobs.len() < 2 {
        return;
    }
    let last_parent = (jobs.len() - 2) / 2;
    for index in (0..=last_parent).rev() {
        sift_down(jobs, index);
    }
}

/// Sort a slice into ascending priority order in place.
pub fn heap_sort(jobs: &mut [Job]) {
    build_heap(jobs);
    for end in (1..jobs.len()).rev() {
        jobs.swap(0, end);
        sift_down(&mut jobs[..end], 0);
    }
}

/// Returns true if every parent's priority is at least its children's.
pub fn is_max_heap(jobs: &[Job]) -> bool {
    (1..jobs.len()).all(|index| jobs[(index - 1) / 2].priority >= jobs[index].priority)
}
