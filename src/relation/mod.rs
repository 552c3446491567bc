//! Fuzzy preference relations.
//!
//! A fuzzy preference relation generalizes a crisp "better-than" relation
//! over a finite set of alternatives: instead of yes/no, each ordered pair
//! carries a degree in [0, 1].
//!
//! # References
//!
//! - Orlovsky (1978), "Decision-making with a fuzzy preference relation"
//! - Fodor & Roubens (1994), *Fuzzy Preference Modelling and Multicriteria
//!   Decision Support*

mod matrix;

pub use matrix::FuzzyRelation;
