//! Strict preference rules and the non-dominance degree.

use crate::relation::FuzzyRelation;

/// Rule deriving the strict preference of `j` over `i` from a relation.
///
/// Every rule is a t-norm applied to `R[j][i]` and the standard negation
/// `1 - R[i][j]`, so the result always lies in [0, 1].
///
/// # Examples
///
/// ```
/// use u_fmcdm::scoring::StrictPreference;
///
/// // j is preferred to i with degree 0.9, i to j with degree 0.4
/// let p = StrictPreference::Lukasiewicz.strict(0.9, 0.4);
/// assert!((p - 0.5).abs() < 1e-12);
///
/// // Reversed: no strict preference at all
/// assert_eq!(StrictPreference::Lukasiewicz.strict(0.4, 0.9), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrictPreference {
    /// Orlovsky's strict preference: `max(0, R[j][i] - R[i][j])`.
    ///
    /// Equals the Łukasiewicz t-norm of `R[j][i]` and `1 - R[i][j]`.
    #[default]
    Lukasiewicz,

    /// Minimum t-norm: `min(R[j][i], 1 - R[i][j])`.
    Minimum,

    /// Product t-norm: `R[j][i] * (1 - R[i][j])`.
    Product,
}

impl StrictPreference {
    /// Degree to which `j` is strictly preferred to `i`, given
    /// `forward = R[j][i]` and `backward = R[i][j]`.
    #[inline]
    pub fn strict(&self, forward: f64, backward: f64) -> f64 {
        match self {
            StrictPreference::Lukasiewicz => (forward - backward).max(0.0),
            StrictPreference::Minimum => forward.min(1.0 - backward),
            StrictPreference::Product => forward * (1.0 - backward),
        }
    }
}

/// Computes the non-dominance degree of every alternative.
///
/// `score[i] = 1 - max_{j != i} strict(R[j][i], R[i][j])`. The diagonal is
/// never consulted, and a single alternative scores 1.
///
/// # Complexity
///
/// O(n²)
///
/// # Examples
///
/// ```
/// use u_fmcdm::relation::FuzzyRelation;
/// use u_fmcdm::scoring::{non_dominance, StrictPreference};
///
/// let r = FuzzyRelation::from_rows(vec![
///     vec![1.0, 1.0],
///     vec![0.25, 1.0],
/// ]).unwrap();
///
/// let nd = non_dominance(&r, StrictPreference::Lukasiewicz);
/// assert_eq!(nd, vec![1.0, 0.25]);
/// ```
pub fn non_dominance(relation: &FuzzyRelation, rule: StrictPreference) -> Vec<f64> {
    let n = relation.size();
    (0..n)
        .map(|i| {
            let dominated = (0..n)
                .filter(|&j| j != i)
                .map(|j| rule.strict(relation.get(j, i), relation.get(i, j)))
                .fold(0.0, f64::max);
            1.0 - dominated
        })
        .collect()
}

/// Builds the full strict preference relation `P(i, j)`, zero on the
/// diagonal.
///
/// Useful for inspecting which rival drives an alternative's score.
pub fn strict_preference_relation(
    relation: &FuzzyRelation,
    rule: StrictPreference,
) -> FuzzyRelation {
    let n = relation.size();
    let mut degrees = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            if i != j {
                degrees[i * n + j] = rule.strict(relation.get(i, j), relation.get(j, i));
            }
        }
    }
    FuzzyRelation::from_flat_unchecked(n, degrees)
}
