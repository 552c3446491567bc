//! Solve pipelines.

use super::config::{Method, SolverConfig};
use crate::error::{FmcdmError, Result};
use crate::relation::FuzzyRelation;
use crate::scoring::non_dominance;
use crate::selection::{rank, select_optimal, SetType};
use tracing::{debug, trace};

/// Outcome of a solve call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision<A> {
    /// Optimal alternatives, in the order they were supplied.
    pub optimal_set: Vec<A>,

    /// Positions of the optimal alternatives, ascending.
    pub optimal_indices: Vec<usize>,

    /// Cardinality class of the optimal set.
    pub set_type: SetType,

    /// Final non-dominance degree of every alternative.
    pub scores: Vec<f64>,

    /// Maximum of `scores`.
    pub best_score: f64,

    /// Method that produced this decision.
    pub method: Method,
}

impl<A> Decision<A> {
    /// Whether exactly one alternative is optimal.
    pub fn is_unique(&self) -> bool {
        self.set_type == SetType::Unique
    }

    /// Whether the alternative at `index` is in the optimal set.
    pub fn is_optimal(&self, index: usize) -> bool {
        self.optimal_indices.binary_search(&index).is_ok()
    }

    /// All alternative positions by descending score, ties in input order.
    pub fn ranking(&self) -> Vec<usize> {
        rank(&self.scores)
    }
}

/// A self-contained decision problem: labels plus one relation per criterion.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem<A> {
    /// Alternative labels, aligned with the relations' rows and columns.
    pub alternatives: Vec<A>,

    /// One fuzzy preference relation per criterion.
    pub relations: Vec<FuzzyRelation>,
}

impl<A> Problem<A> {
    pub fn new(alternatives: Vec<A>, relations: Vec<FuzzyRelation>) -> Self {
        Self {
            alternatives,
            relations,
        }
    }

    /// Solves this problem with the given configuration.
    pub fn solve(&self, config: &SolverConfig) -> Result<Decision<A>>
    where
        A: Clone,
    {
        Solver::solve(&self.alternatives, &self.relations, config)
    }
}

/// Executes the two evaluation pipelines.
///
/// Stateless: every call is a pure function of its arguments, so
/// concurrent callers never interfere.
///
/// # Examples
///
/// ```
/// use u_fmcdm::relation::FuzzyRelation;
/// use u_fmcdm::selection::SetType;
/// use u_fmcdm::solver::{Solver, SolverConfig};
///
/// let price = FuzzyRelation::from_rows(vec![
///     vec![1.0, 0.9],
///     vec![0.2, 1.0],
/// ]).unwrap();
/// let comfort = FuzzyRelation::from_rows(vec![
///     vec![1.0, 0.6],
///     vec![0.4, 1.0],
/// ]).unwrap();
///
/// let decision = Solver::solve(&["car", "bike"], &[price, comfort], &SolverConfig::default())
///     .unwrap();
///
/// assert_eq!(decision.optimal_set, vec!["car"]);
/// assert_eq!(decision.set_type, SetType::Unique);
/// ```
pub struct Solver;

impl Solver {
    /// Computes the optimal set of `alternatives` under `relations`.
    ///
    /// # Errors
    ///
    /// Checked in order, before any computation:
    ///
    /// - [`FmcdmError::InvalidConfig`] if `config` does not validate
    /// - [`FmcdmError::EmptyAlternativeSet`] if `alternatives` is empty
    /// - [`FmcdmError::NoCriteria`] if `relations` is empty
    /// - [`FmcdmError::ShapeMismatch`] if a relation's size differs from
    ///   the number of alternatives
    pub fn solve<A: Clone>(
        alternatives: &[A],
        relations: &[FuzzyRelation],
        config: &SolverConfig,
    ) -> Result<Decision<A>> {
        config.validate()?;
        if alternatives.is_empty() {
            return Err(FmcdmError::EmptyAlternativeSet);
        }
        check_shapes(alternatives.len(), relations)?;

        debug!(
            method = ?config.method,
            alternatives = alternatives.len(),
            criteria = relations.len(),
            "solving fuzzy decision problem"
        );

        let scores = evaluate(relations, config)?;
        trace!(?scores, "non-dominance scores");

        let selected = select_optimal(&scores, config.threshold, config.epsilon);
        debug!(
            optimal = selected.indices.len(),
            set_type = %selected.set_type,
            "optimal set selected"
        );

        Ok(Decision {
            optimal_set: selected
                .indices
                .iter()
                .map(|&i| alternatives[i].clone())
                .collect(),
            optimal_indices: selected.indices,
            set_type: selected.set_type,
            best_score: selected.best.unwrap_or(0.0),
            scores,
            method: config.method,
        })
    }

    /// Computes only the final score vector, without labels or selection.
    ///
    /// The alternative count is taken from the first relation.
    pub fn scores(relations: &[FuzzyRelation], config: &SolverConfig) -> Result<Vec<f64>> {
        config.validate()?;
        let n = relations.first().ok_or(FmcdmError::NoCriteria)?.size();
        check_shapes(n, relations)?;
        evaluate(relations, config)
    }

    /// Solves independent problems in parallel, one result per problem.
    #[cfg(feature = "parallel")]
    pub fn solve_many<A: Clone + Send + Sync>(
        problems: &[Problem<A>],
        config: &SolverConfig,
    ) -> Vec<Result<Decision<A>>> {
        use rayon::prelude::*;

        problems.par_iter().map(|p| p.solve(config)).collect()
    }
}

/// Solves a problem given as raw matrices and a numeric method code.
///
/// Each matrix is validated into a [`FuzzyRelation`]; aggregation and
/// strict preference take their defaults (`Min`, Orlovsky).
///
/// # Errors
///
/// [`FmcdmError::InvalidMethod`] for a code other than 1 or 2,
/// [`FmcdmError::InvalidRelation`] for a malformed matrix, and everything
/// [`Solver::solve`] reports.
///
/// # Examples
///
/// ```
/// use u_fmcdm::solve;
///
/// let r1 = vec![vec![1.0, 1.0], vec![0.5, 1.0]];
/// let r2 = vec![vec![1.0, 0.7], vec![0.7, 1.0]];
///
/// let decision = solve(&['x', 'y'], &[r1, r2], 2, 0.0).unwrap();
/// assert_eq!(decision.optimal_set, vec!['x']);
/// ```
pub fn solve<A: Clone>(
    alternatives: &[A],
    relations: &[Vec<Vec<f64>>],
    method: i64,
    threshold: f64,
) -> Result<Decision<A>> {
    let config = SolverConfig::default()
        .with_method(Method::from_code(method)?)
        .with_threshold(threshold);
    config.validate()?;
    if alternatives.is_empty() {
        return Err(FmcdmError::EmptyAlternativeSet);
    }

    let relations = relations
        .iter()
        .map(|rows| FuzzyRelation::from_rows(rows.clone()))
        .collect::<Result<Vec<_>>>()?;

    Solver::solve(alternatives, &relations, &config)
}

fn check_shapes(n: usize, relations: &[FuzzyRelation]) -> Result<()> {
    if relations.is_empty() {
        return Err(FmcdmError::NoCriteria);
    }
    for (k, r) in relations.iter().enumerate() {
        if r.size() != n {
            return Err(FmcdmError::ShapeMismatch {
                context: format!("criterion {k}"),
                expected: n,
                found: r.size(),
            });
        }
    }
    Ok(())
}

/// Shared pipeline skeleton; methods differ only in composition order.
fn evaluate(relations: &[FuzzyRelation], config: &SolverConfig) -> Result<Vec<f64>> {
    let rule = config.strict_preference;
    match config.method {
        Method::AggregateThenScore => {
            let combined = config.aggregation.aggregate_relations(relations)?;
            Ok(non_dominance(&combined, rule))
        }
        Method::ScoreThenAggregate => {
            let per_criterion: Vec<Vec<f64>> = relations
                .iter()
                .map(|r| non_dominance(r, rule))
                .collect();
            config.aggregation.aggregate_vectors(&per_criterion)
        }
    }
}
