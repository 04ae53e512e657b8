use itertools::Itertools;
use log::{debug, trace};
use std::fmt;

use super::HeapError;

/// Capacity used by [BoundedMinHeap::default].
pub const DEFAULT_CAPACITY: usize = 1000;

/// A value paired with the priority that decides its extraction order.
/// Smaller priority means extracted earlier.
#[derive(Clone, Debug)]
pub struct Entry<T> {
    pub value: T,
    pub priority: f64,
}

impl<T> fmt::Display for Entry<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.value, self.priority)
    }
}

/// A min-heap holding at most `capacity` entries.
///
/// Backed by a vector laid out as a binary heap: the children of index k are
/// at 2k+1 and 2k+2, the parent at (k-1)/2, and every entry has priority >=
/// its parent's. The root (index 0) is therefore always a minimum.
///
/// The backing vector is allocated once at construction and never grows past
/// the capacity, so no reallocation happens after `with_capacity`.
pub struct BoundedMinHeap<T> {
    data: Vec<Entry<T>>,
    capacity: usize,
}

impl<T> BoundedMinHeap<T> {
    /// Create an empty heap holding at most `capacity` entries.
    /// Fails with [HeapError::InvalidCapacity] for a zero capacity.
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::invalid_capacity(capacity));
        }
        debug!("bounded min-heap created, capacity {}", capacity);
        Ok(Self {
            data: Vec::with_capacity(capacity),
            capacity,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.data.len() == self.capacity
    }

    /// Drop all entries. Capacity is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Read-only iteration over the entries in storage (array) order,
    /// not in priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T>> {
        self.data.iter()
    }

    /// Add `value` with priority `priority`. O(log len).
    ///
    /// Fails with [HeapError::CapacityExceeded] when the heap is full,
    /// leaving the heap untouched.
    pub fn push(&mut self, value: T, priority: f64) -> Result<(), HeapError> {
        if self.data.len() == self.capacity {
            trace!("push rejected, heap at capacity {}", self.capacity);
            return Err(HeapError::capacity_exceeded(self.capacity));
        }
        self.data.push(Entry { value, priority });
        self.bubble_up(self.data.len() - 1);
        Ok(())
    }

    /// Borrow the value with the smallest priority. O(1).
    /// Fails with [HeapError::Empty] when the heap is empty.
    pub fn peek(&self) -> Result<&T, HeapError> {
        match self.data.first() {
            Some(entry) => Ok(&entry.value),
            None => Err(HeapError::empty()),
        }
    }

    /// Remove and return the value with the smallest priority. O(log len).
    /// Fails with [HeapError::Empty] when the heap is empty.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            trace!("pop rejected, heap is empty");
            return Err(HeapError::empty());
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        //Vec::pop shrinks the live range before the bubble below, so the
        //removed entry can never take part in a comparison
        let entry = self.data.pop();
        if !self.data.is_empty() {
            self.bubble_down(0);
        }
        entry.map(|e| e.value).ok_or_else(HeapError::empty)
    }

    /// Render the priorities as `[p0, p1, ...]` in storage order.
    pub fn format_priorities(&self) -> String {
        format!("[{}]", self.data.iter().map(|e| e.priority).join(", "))
    }

    /// Move the entry at index k up to its place.
    /// Precondition: every entry except perhaps b[k] has priority >= its parent.
    fn bubble_up(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if self.data[k].priority >= self.data[parent].priority {
                return;
            }
            self.data.swap(k, parent);
            k = parent;
        }
    }

    /// Move the entry at index k down to its place.
    /// Precondition: k < len, and every entry except perhaps b[k] has
    /// priority <= its children's.
    fn bubble_down(&mut self, mut k: usize) {
        let len = self.data.len();
        let mut left = 2 * k + 1;
        while left < len {
            let mut chosen = left;
            //strict < : on a priority tie the left child wins
            if left + 1 < len && self.data[left + 1].priority < self.data[left].priority {
                chosen = left + 1;
            }
            if self.data[k].priority <= self.data[chosen].priority {
                return;
            }
            self.data.swap(k, chosen);
            k = chosen;
            left = 2 * k + 1;
        }
    }
}

impl<T> Default for BoundedMinHeap<T> {
    fn default() -> Self {
        Self {
            data: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Renders the entries as `[(v0, p0) (v1, p1) ...]` in storage order.
impl<T> fmt::Display for BoundedMinHeap<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.data.iter().join(" "))
    }
}

// NOTE: need to go through push to guarantee order; pairs arriving once the
// heap is full are dropped
impl<T> Extend<(T, f64)> for BoundedMinHeap<T> {
    fn extend<I: IntoIterator<Item = (T, f64)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            let _ = self.push(value, priority);
        }
    }
}
