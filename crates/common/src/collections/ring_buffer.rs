#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

//! A fixed-capacity ring that keeps the newest entries and evicts the oldest.
//!
//! A [`RingBuffer`] stores items in insertion order while keeping its length
//! bounded by the caller-provided capacity. When [`push`](RingBuffer::push)
//! receives a value and the ring is full, the oldest element is removed and
//! handed back to the caller, and the eviction counter is bumped.
//!
//! The ring is built for "most recent N" access: [`tail`](RingBuffer::tail)
//! walks the newest `n` items from oldest to newest without copying.
//!
//! # Complexity
//! - `push`, `len`, `is_empty`, `is_full`, `capacity` and `evicted` are
//!   **O(1)**.
//! - `tail(n)` is **O(1)** to create and **O(n)** to drain.
//!
//! # Thread Safety
//! - `RingBuffer<T>` uses no interior mutability. Wrap it in a lock to share
//!   it between threads.

use std::collections::VecDeque;

/// Slots reserved up front; the ring grows on demand up to its capacity.
const INITIAL_ALLOCATION: usize = 1_024;

/// A fixed-capacity ring storing elements in first-in-first-out order.
///
/// # Examples
///
/// ```rust
/// use querytap_common::collections::RingBuffer;
///
/// let mut ring = RingBuffer::new(3);
/// ring.push("a");
/// ring.push("b");
/// ring.push("c");
/// assert_eq!(ring.push("d"), Some("a"));
///
/// assert_eq!(ring.tail(2).copied().collect::<Vec<_>>(), vec!["c", "d"]);
/// assert_eq!(ring.evicted(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingBuffer<T> {
    buf: VecDeque<T>,
    capacity: usize,
    evicted: u64,
}

impl<T> RingBuffer<T> {
    /// Creates a new ring with the provided capacity.
    ///
    /// A capacity of zero is clamped to `1`. Storage is allocated as items
    /// arrive, so a large capacity costs nothing until it is used.
    #[inline]
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let buf = VecDeque::with_capacity(capacity.min(INITIAL_ALLOCATION));
        Self { buf, capacity, evicted: 0 }
    }

    /// Appends an item, returning the evicted oldest item when the ring was
    /// already full.
    #[inline]
    pub fn push(&mut self, item: T) -> Option<T> {
        let dropped = if self.is_full() { self.buf.pop_front() } else { None };
        if dropped.is_some() {
            self.evicted = self.evicted.saturating_add(1);
        }
        self.buf.push_back(item);
        dropped
    }

    /// Iterates over the newest `n` items, oldest first.
    ///
    /// Yields every stored item when fewer than `n` are present.
    #[inline]
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &T> + '_ {
        let skip = self.buf.len().saturating_sub(n);
        self.buf.iter().skip(skip)
    }

    /// Iterates over every stored item, oldest first.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.buf.iter()
    }

    /// Returns the newest item, if any.
    #[inline]
    #[must_use]
    pub fn newest(&self) -> Option<&T> {
        self.buf.back()
    }

    /// Returns the number of items currently stored.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` when the ring holds no items.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns `true` when the next push will evict.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.buf.len() >= self.capacity
    }

    /// Maximum number of items the ring holds.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items dropped by overflow since creation.
    #[inline]
    #[must_use]
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Removes all elements. Capacity and the eviction counter are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Clones the newest `n` items into a vector, oldest first.
    #[must_use]
    pub fn tail_vec(&self, n: usize) -> Vec<T> {
        self.tail(n).cloned().collect()
    }
}

impl<T> Default for RingBuffer<T> {
    #[inline]
    fn default() -> Self {
        Self::new(1)
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = std::collections::vec_deque::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}
