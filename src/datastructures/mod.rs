//! Working structures created fresh by the algorithms for every call.
pub mod disjoint_set;
pub mod priority_queue;

pub use disjoint_set::DisjointSet;
pub use priority_queue::MinQueue;
