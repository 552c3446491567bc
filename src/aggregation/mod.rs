//! Position-wise aggregation of criteria.
//!
//! Combines several same-shaped fuzzy structures (relations or score
//! vectors) into one by applying a symmetric operator at every position.
//! Symmetry guarantees the result does not depend on the order in which
//! criteria are listed.
//!
//! # References
//!
//! - Zadeh (1965), "Fuzzy sets" (intersection/union as min/max)
//! - Orlovsky (1978), "Decision-making with a fuzzy preference relation"

mod operator;

pub use operator::Aggregation;
