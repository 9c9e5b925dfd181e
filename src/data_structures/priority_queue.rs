use std::fmt::Debug;

use crate::{Error, Result};

/// A single slot in the heap: an owned payload ordered by its priority
#[derive(Debug, Clone)]
struct Entry<T, P> {
    payload: T,
    priority: P,
}

/// Array-backed binary min-heap keyed by an explicit priority.
///
/// The entry with the LOWEST priority value is served first. Payloads are
/// never compared, only moved; they return to the caller on removal.
///
/// There is no decrease-key operation. Callers that need to lower the
/// priority of a payload insert it again and discard the outdated entry when
/// it is removed (see [`crate::algorithm::dijkstra::Dijkstra`]).
///
/// Ties between equal priorities are served in no particular order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, P>
where
    P: Ord + Copy + Debug,
{
    /// Heap-ordered entries: the children of `i` live at `2i + 1` and `2i + 2`
    entries: Vec<Entry<T, P>>,
}

impl<T, P> PriorityQueue<T, P>
where
    P: Ord + Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        PriorityQueue { entries: Vec::new() }
    }

    /// Creates an empty priority queue able to hold `capacity` entries
    /// without reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in the priority queue
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Inserts `payload` with the given priority in O(log n).
    ///
    /// Growth of the backing store is fallible: if the allocator refuses the
    /// request the queue is left untouched and `Error::OutOfMemory` is
    /// returned.
    pub fn insert(&mut self, payload: T, priority: P) -> Result<()> {
        self.entries
            .try_reserve(1)
            .map_err(|_| Error::OutOfMemory)?;
        self.entries.push(Entry { payload, priority });
        self.sift_up(self.entries.len() - 1);
        Ok(())
    }

    /// Returns the payload with the lowest priority without removing it
    pub fn peek_payload(&self) -> Result<&T> {
        self.entries
            .first()
            .map(|entry| &entry.payload)
            .ok_or(Error::EmptyQueue)
    }

    /// Returns the lowest priority currently stored
    pub fn peek_priority(&self) -> Result<P> {
        self.entries
            .first()
            .map(|entry| entry.priority)
            .ok_or(Error::EmptyQueue)
    }

    /// Removes the entry with the lowest priority and returns its payload
    pub fn remove_min(&mut self) -> Result<T> {
        self.pop().map(|(payload, _)| payload).ok_or(Error::EmptyQueue)
    }

    /// Removes the entry with the lowest priority, returning the payload
    /// together with its priority, or `None` if the queue is empty
    pub fn pop(&mut self) -> Option<(T, P)> {
        if self.entries.is_empty() {
            return None;
        }

        // Move the last entry into the root slot, then restore heap order
        let entry = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some((entry.payload, entry.priority))
    }

    /// Drops every stored entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Checks the min-heap invariant over the whole backing store in O(n)
    pub fn satisfies_heap_property(&self) -> bool {
        (1..self.entries.len())
            .all(|child| self.entries[(child - 1) / 2].priority <= self.entries[child].priority)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.entries[parent].priority <= self.entries[index].priority {
                break;
            }
            self.entries.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            // Left child wins a tie against the right one
            let smaller = if right < len
                && self.entries[right].priority < self.entries[left].priority
            {
                right
            } else {
                left
            };

            if self.entries[smaller].priority >= self.entries[index].priority {
                break;
            }
            self.entries.swap(index, smaller);
            index = smaller;
        }
    }
}

impl<T, P> Default for PriorityQueue<T, P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
