//! Optimal set extraction.
//!
//! Turns a score vector into the set of alternatives whose score lies
//! within a tolerance of the maximum, and classifies that set by
//! cardinality.

mod optimal;

pub use optimal::{rank, select_optimal, OptimalSet, SetType};
