//! Error surface of a traversal.

use crate::collections::QueueError;
use std::fmt;

/// The error returned by [`Walker::visit`](crate::Walker::visit).
///
/// Either the frontier could not be read, or the visitor reported a failure
/// which is handed back verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkError<E> {
    /// The frontier was read while empty.
    Queue(QueueError),
    /// The visitor returned an error; traversal stopped at that node.
    Visitor(E),
}

impl<E> WalkError<E> {
    /// Returns the visitor's error, if that is what stopped the traversal.
    pub fn into_visitor_error(self) -> Option<E> {
        match self {
            Self::Visitor(err) => Some(err),
            Self::Queue(_) => None,
        }
    }
}

impl<E> From<QueueError> for WalkError<E> {
    fn from(err: QueueError) -> Self {
        Self::Queue(err)
    }
}

impl<E: fmt::Display> fmt::Display for WalkError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queue(err) => write!(f, "frontier access failed: {err}"),
            Self::Visitor(err) => write!(f, "visitor failed: {err}"),
        }
    }
}

impl<E> std::error::Error for WalkError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Queue(err) => Some(err),
            Self::Visitor(err) => Some(err),
        }
    }
}
