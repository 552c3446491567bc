//! Non-dominance scoring.
//!
//! Given one fuzzy preference relation `R`, each alternative receives a
//! degree in [0, 1] expressing how free it is from being strictly
//! out-preferred by any rival. The strongest single competitor decides:
//!
//! ```text
//! ND(i) = 1 - max_{j != i} P(j, i)
//! ```
//!
//! where `P` is the strict preference extracted from `R` by a
//! [`StrictPreference`] rule.
//!
//! # References
//!
//! - Orlovsky (1978), "Decision-making with a fuzzy preference relation",
//!   Fuzzy Sets and Systems 1(3), 155-167
//! - Fodor & Roubens (1994), *Fuzzy Preference Modelling and Multicriteria
//!   Decision Support*
//! - Borzęcka (2012), "Multi-criteria decision making using fuzzy
//!   preference relations", Operations Research and Decisions 3, 5-21

mod non_dominance;

pub use non_dominance::{non_dominance, strict_preference_relation, StrictPreference};
