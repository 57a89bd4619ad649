//! `Walker` — breadth-first traversal of an implicit graph.
//!
//! The walker owns a FIFO frontier and a visited set. Each loop iteration
//! pops the frontier head, drops it if it was already visited, otherwise
//! marks it visited and hands it to the [`Visitor`], which may push peers
//! back onto the frontier through an [`Enqueue`] handle.
//!
//! Two ordering rules carry the correctness argument:
//!
//! - The visited check happens when a node is *popped*, not when it is
//!   pushed. A node with several incoming edges may sit in the frontier
//!   several times; only its first entry is dispatched.
//! - A node is marked visited *before* its visitor runs, so a visitor that
//!   enqueues its own node (or a cycle leading back to it) never causes a
//!   second dispatch.
//!
//! Visit order is the order in which nodes were first enqueued, seeds
//! included. For seeds `[a]` with `a -> {b, c}`, `b -> {d}`, `c -> {d}` the
//! visitor sees `a, b, c, d`.

use core::hash::Hash;
use std::borrow::Borrow;
use std::fmt;

use super::error::WalkError;
use super::visitor::{Enqueue, FnVisitor, Visitor};
use crate::collections::{Queue, Set};

/// Lifecycle of a [`Walker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkerState {
    /// Seeded (or reseeded) and waiting for [`Walker::visit`].
    Idle,
    /// Inside [`Walker::visit`].
    Running,
    /// The frontier was exhausted or a visit failed.
    Done,
}

/// A graph walker that dispatches every distinct node exactly once.
pub struct Walker<T> {
    frontier: Queue<T>,
    seen: Set<T>,
    state: WalkerState,
}

impl<T> Walker<T> {
    /// Creates a walker with an empty frontier.
    pub fn new() -> Self {
        Self {
            frontier: Queue::new(),
            seen: Set::new(),
            state: WalkerState::Idle,
        }
    }

    /// Creates an empty walker with preallocated frontier and visited storage.
    pub fn with_capacity(frontier: usize, visited: usize) -> Self {
        Self {
            frontier: Queue::with_capacity(frontier),
            seen: Set::with_capacity(visited),
            state: WalkerState::Idle,
        }
    }

    /// Creates a walker whose frontier holds `seeds`, in order.
    pub fn with_seeds<I>(seeds: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            frontier: seeds.into_iter().collect(),
            seen: Set::new(),
            state: WalkerState::Idle,
        }
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> WalkerState {
        self.state
    }

    /// Number of frontier entries not yet popped, duplicates included.
    #[inline]
    pub fn pending(&self) -> usize {
        self.frontier.len()
    }

    /// The nodes dispatched so far.
    #[inline]
    pub fn visited(&self) -> &Set<T> {
        &self.seen
    }

    /// Appends a node to the frontier.
    ///
    /// Meant for seeding before [`Walker::visit`]. Pushing onto a walker that
    /// is already `Done` reseeds it: the next `visit` continues with the same
    /// visited set, so nodes dispatched earlier stay skipped.
    pub fn push(&mut self, node: T) {
        self.frontier.push(node);
        if self.state == WalkerState::Done {
            self.state = WalkerState::Idle;
        }
    }
}

impl<T> Walker<T>
where
    T: Eq + Hash + Clone,
{
    /// Returns `true` if `node` has already been handed to a visitor.
    pub fn has_visited<Q>(&self, node: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.seen.contains(node)
    }

    /// Drains the frontier, dispatching each unseen node to `visitor`.
    ///
    /// Pass `&mut visitor` to keep ownership of a stateful visitor.
    ///
    /// # Errors
    /// Returns [`WalkError::Visitor`] with the first visitor failure, or
    /// [`WalkError::Queue`] if the frontier could not be read. In both cases
    /// the remaining frontier is abandoned and the walker is `Done`.
    pub fn visit<V>(&mut self, mut visitor: V) -> Result<(), WalkError<V::Error>>
    where
        V: Visitor<T>,
    {
        self.state = WalkerState::Running;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            pending = self.frontier.len(),
            visited = self.seen.len(),
            "starting traversal"
        );

        while !self.frontier.is_empty() {
            let node = match self.frontier.pop() {
                Ok(node) => node,
                Err(err) => {
                    self.abandon();
                    return Err(WalkError::Queue(err));
                }
            };

            if self.seen.contains(&node) {
                #[cfg(feature = "tracing")]
                tracing::trace!(pending = self.frontier.len(), "discarding visited node");
                continue;
            }

            // Mark before dispatch; see the module docs.
            self.seen.add(node.clone());

            let mut enqueue = Enqueue::new(&mut self.frontier);
            if let Err(err) = visitor.visit(node, &mut enqueue) {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    abandoned = self.frontier.len(),
                    visited = self.seen.len(),
                    "visitor failed, stopping traversal"
                );
                self.abandon();
                return Err(WalkError::Visitor(err));
            }
        }

        self.state = WalkerState::Done;

        #[cfg(feature = "tracing")]
        tracing::debug!(visited = self.seen.len(), "traversal complete");

        Ok(())
    }

    /// Like [`Walker::visit`], with a closure as the visitor.
    ///
    /// # Errors
    /// See [`Walker::visit`].
    pub fn visit_with<F, E>(&mut self, f: F) -> Result<(), WalkError<E>>
    where
        F: FnMut(T, &mut Enqueue<'_, T>) -> Result<(), E>,
    {
        self.visit(FnVisitor::new(f))
    }

    fn abandon(&mut self) {
        self.frontier.clear();
        self.state = WalkerState::Done;
    }
}

impl<T> Default for Walker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Walker<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for node in iter {
            self.push(node);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Walker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walker")
            .field("state", &self.state)
            .field("frontier", &self.frontier)
            .field("visited", &self.seen)
            .finish()
    }
}
