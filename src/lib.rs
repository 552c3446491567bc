//! Fuzzy multi-criteria decision making.
//!
//! Selects the non-dominated alternatives of a decision problem in which
//! every criterion compares alternatives through a **fuzzy preference
//! relation**: an n×n matrix of degrees in [0, 1].
//!
//! - **Relations** ([`relation`]): validated square matrices, one per criterion.
//! - **Aggregation** ([`aggregation`]): symmetric position-wise operators
//!   (min, max, mean) over relations or score vectors.
//! - **Scoring** ([`scoring`]): Orlovsky non-dominance degrees, with
//!   pluggable strict preference rules.
//! - **Selection** ([`selection`]): alternatives within a tolerance of the
//!   best score, classified as unique or multiple.
//! - **Solver** ([`solver`]): the two evaluation orders, aggregate-then-score
//!   and score-then-aggregate, behind one entry point.
//!
//! # Example
//!
//! ```
//! use u_fmcdm::solve;
//!
//! // Borzęcka (2012), example 2
//! let r1 = vec![vec![1.0, 1.0, 1.0], vec![1.0, 1.0, 1.0], vec![0.88, 0.88, 1.0]];
//! let r2 = vec![vec![1.0, 0.88, 0.24], vec![1.0, 1.0, 0.88], vec![1.0, 1.0, 1.0]];
//! let r3 = vec![vec![1.0, 1.0, 1.0], vec![0.88, 1.0, 1.0], vec![0.88, 1.0, 1.0]];
//!
//! let decision = solve(&["a", "b", "c"], &[r1, r2, r3], 1, 0.0).unwrap();
//! assert_eq!(decision.optimal_set, vec!["b", "c"]);
//! assert_eq!(decision.set_type.to_string(), "multiple");
//! ```
//!
//! # Concurrency
//!
//! Everything is synchronous and free of shared state. Independent problems
//! can be solved concurrently by the caller, or with
//! `Solver::solve_many` under the `parallel` feature.

pub mod aggregation;
pub mod error;
pub mod relation;
pub mod scoring;
pub mod selection;
pub mod solver;

pub use error::{FmcdmError, Result};
pub use solver::{solve, Decision, Method, Solver, SolverConfig};
