//! Container types the graph walker is built on.
//!
//! - `queue`: an unbounded FIFO sequence
//! - `set`: a hash-backed set with algebraic operations

pub mod queue;
pub mod set;

pub use queue::{Queue, QueueError};
pub use set::Set;
