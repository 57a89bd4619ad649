//! # `frontier` - Queue, Set and a Breadth-First Graph Walker
//!
//! A small toolkit of generic containers and the traversal engine built on
//! top of them.
//!
//! ## Components
//!
//! 1. **Queue** (`Queue<T>`):
//!    - Unbounded FIFO; push at the tail, peek/pop at the head
//!    - Reads on an empty queue fail with `QueueError::Empty`
//!
//! 2. **Set** (`Set<T, S>`):
//!    - Hash-backed membership with idempotent `add`/`delete`
//!    - Pure `union`, `intersection`, `difference` and `symmetric_difference`
//!    - Unordered iteration, plus sorted iteration on request
//!
//! 3. **Walker** (`Walker<T>`):
//!    - Breadth-first traversal over an implicit graph
//!    - Each distinct node reaches the `Visitor` exactly once, regardless of
//!      cycles, repeated edges or self-enqueueing
//!    - The first visitor error stops the walk and is returned verbatim
//!
//! ## Guarantees
//!
//! **No duplicate visits**: a node is marked visited before its visitor runs,
//! and the visited check happens when a node leaves the frontier. Duplicate
//! frontier entries collapse into a single dispatch.
//!
//! **Termination**: every finite implicit graph is walked in finite time,
//! because each distinct node is dispatched at most once and each dispatch
//! enqueues finitely many entries.
//!
//! **Order**: nodes are visited in the order they were first enqueued,
//! starting with the seeds.
//!
//! ## Cargo features
//!
//! - `tracing`: emit `tracing` events at traversal start, end and abort
//! - `parallel`: `rayon`-backed `Set::par_iter`
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use std::convert::Infallible;
//! use frontier::Walker;
//!
//! let peers = HashMap::from([("a", vec!["b", "c"]), ("b", vec!["d"]), ("c", vec!["d"])]);
//! let mut order = Vec::new();
//!
//! let mut walker = Walker::with_seeds(["a"]);
//! walker
//!     .visit_with(|node, enqueue| -> Result<(), Infallible> {
//!         order.push(node);
//!         if let Some(next) = peers.get(node) {
//!             enqueue.extend(next.iter().copied());
//!         }
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! assert_eq!(order, ["a", "b", "c", "d"]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod graph;

pub use collections::{Queue, QueueError, Set};
pub use graph::{Enqueue, Visitor, WalkError, Walker, WalkerState};

// The walker is a thin composition of its two containers.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<QueueError>() <= 1);
    assert!(
        mem::size_of::<Walker<u64>>()
            <= mem::size_of::<Queue<u64>>() + mem::size_of::<Set<u64>>() + mem::size_of::<usize>()
    );
};
