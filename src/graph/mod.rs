//! Breadth-first traversal over implicit graphs.
//!
//! There is no stored graph here. Connectivity is whatever the [`Visitor`]
//! declares, node by node, through the [`Enqueue`] handle it receives.

pub mod error;
pub mod visitor;
pub mod walker;

pub use error::WalkError;
pub use visitor::{Enqueue, Visitor};
pub use walker::{Walker, WalkerState};
