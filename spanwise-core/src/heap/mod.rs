//! Binary min-heaps used by the spanning-tree and shortest-path algorithms.
//!
//! - [`IndexedMinHeap`] orders vertex ids by a mutable priority array and
//!   tracks each vertex's position so priorities can be lowered in place.
//! - [`EdgeMinHeap`] yields a graph's edges in ascending weight order.
//!
//! Both heaps are 1-based: position `k` has children `2k` and `2k + 1` and
//! parent `k / 2`.

mod edge;
mod indexed;

pub use self::{
    edge::EdgeMinHeap,
    indexed::{INFINITE_PRIORITY, IndexedMinHeap},
};
