//! `Queue` — an unbounded FIFO sequence container.
//!
//! Elements are pushed at the tail and read from the head. There is no
//! capacity bound and no blocking: reading from an empty queue fails
//! immediately with [`QueueError::Empty`].
//!
//! Performance Characteristics:
//! - Push/Pop/Peek: O(1) amortized (ring buffer)
//! - Clear: O(1), the backing buffer is dropped rather than drained in place

use serde::{Deserialize, Serialize};
use std::collections::vec_deque::{self, VecDeque};
use std::fmt;

/// The error type for reads on an empty [`Queue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueError {
    /// A `peek` or `pop` was attempted while the queue held no elements.
    Empty,
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("attempted to read from an empty queue"),
        }
    }
}

impl std::error::Error for QueueError {}

/// A generic first-in, first-out queue.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Creates an empty queue with room for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a value to the tail of the queue.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Returns a reference to the head element without removing it.
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T, QueueError> {
        self.items.front().ok_or(QueueError::Empty)
    }

    /// Removes the head element and returns it.
    ///
    /// # Errors
    /// Returns [`QueueError::Empty`] if the queue is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T, QueueError> {
        self.items.pop_front().ok_or(QueueError::Empty)
    }

    /// Removes all elements.
    ///
    /// The backing buffer is released, so the cost does not depend on
    /// how many elements were queued (beyond dropping them).
    pub fn clear(&mut self) {
        self.items = VecDeque::new();
    }

    /// Iterates from head to tail without consuming the queue.
    pub fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    /// Seeds the queue; the first element yielded becomes the head.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> From<Vec<T>> for Queue<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: VecDeque::from(items),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = vec_deque::IntoIter<T>;

    /// Drains the queue in FIFO order.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = vec_deque::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
