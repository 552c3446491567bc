//! Multi-criteria solver over fuzzy preference relations.
//!
//! Two fixed pipelines share one skeleton (validation, scoring,
//! aggregation, selection) and differ only in composition order:
//!
//! - [`Method::AggregateThenScore`]: relations → aggregate → score → select
//! - [`Method::ScoreThenAggregate`]: relations → score each → aggregate → select
//!
//! # Key Types
//!
//! - [`SolverConfig`]: method, tolerance, aggregation operator, strict preference rule
//! - [`Solver`]: runs the pipelines
//! - [`Decision`]: optimal set, its classification, and the underlying scores
//!
//! # References
//!
//! - Orlovsky (1978), "Decision-making with a fuzzy preference relation"
//! - Borzęcka (2012), "Multi-criteria decision making using fuzzy
//!   preference relations"

mod config;
mod runner;

pub use config::{Method, SolverConfig};
pub use runner::{solve, Decision, Problem, Solver};
