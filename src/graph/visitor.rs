//! The per-node callback contract and the enqueue handle handed to it.

use crate::collections::Queue;
use core::marker::PhantomData;

/// Processes one node of an implicit graph.
///
/// The walker calls [`Visitor::visit`] exactly once per distinct node. Any
/// neighbours the visitor discovers are declared through `enqueue`; the
/// graph itself is never stored anywhere else.
pub trait Visitor<T> {
    /// The error a visit may fail with. It is returned to the caller of
    /// [`Walker::visit`](crate::Walker::visit) unchanged.
    type Error;

    /// Handles `node`, pushing any discovered peers onto `enqueue`.
    ///
    /// # Errors
    /// Returning an error stops the traversal immediately.
    fn visit(&mut self, node: T, enqueue: &mut Enqueue<'_, T>) -> Result<(), Self::Error>;
}

impl<T, V> Visitor<T> for &mut V
where
    V: Visitor<T> + ?Sized,
{
    type Error = V::Error;

    #[inline]
    fn visit(&mut self, node: T, enqueue: &mut Enqueue<'_, T>) -> Result<(), Self::Error> {
        (**self).visit(node, enqueue)
    }
}

/// Adapts a closure into a [`Visitor`].
pub(crate) struct FnVisitor<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

impl<F, E> FnVisitor<F, E> {
    pub(crate) fn new(f: F) -> Self {
        Self {
            f,
            _error: PhantomData,
        }
    }
}

impl<T, F, E> Visitor<T> for FnVisitor<F, E>
where
    F: FnMut(T, &mut Enqueue<'_, T>) -> Result<(), E>,
{
    type Error = E;

    #[inline]
    fn visit(&mut self, node: T, enqueue: &mut Enqueue<'_, T>) -> Result<(), E> {
        (self.f)(node, enqueue)
    }
}

/// Write access to a walker's frontier for the duration of one visit.
///
/// Pushing is unconditional: duplicates and already visited nodes are
/// accepted here and discarded when they reach the head of the frontier.
pub struct Enqueue<'a, T> {
    frontier: &'a mut Queue<T>,
}

impl<'a, T> Enqueue<'a, T> {
    pub(crate) fn new(frontier: &'a mut Queue<T>) -> Self {
        Self { frontier }
    }

    /// Schedules `node` at the tail of the frontier.
    #[inline]
    pub fn push(&mut self, node: T) {
        self.frontier.push(node);
    }

    /// Number of entries currently waiting in the frontier, duplicates
    /// included.
    #[inline]
    pub fn len(&self) -> usize {
        self.frontier.len()
    }

    /// Returns `true` if nothing is waiting in the frontier.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }
}

impl<T> Extend<T> for Enqueue<'_, T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.frontier.extend(iter);
    }
}
