//! Threshold-based selection of the best-scoring alternatives.

use std::cmp::Ordering;
use std::fmt;

/// Cardinality class of an optimal set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SetType {
    /// Exactly one optimal alternative.
    Unique,
    /// More than one: a tie, or a near-tie under the tolerance.
    Multiple,
    /// Nothing to select from.
    Empty,
}

impl SetType {
    /// Classifies a set by its number of elements.
    pub fn from_len(len: usize) -> Self {
        match len {
            0 => SetType::Empty,
            1 => SetType::Unique,
            _ => SetType::Multiple,
        }
    }

    /// Lowercase name: `"unique"`, `"multiple"` or `"empty"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SetType::Unique => "unique",
            SetType::Multiple => "multiple",
            SetType::Empty => "empty",
        }
    }
}

impl fmt::Display for SetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`select_optimal`].
#[derive(Debug, Clone, PartialEq)]
pub struct OptimalSet {
    /// Selected positions, ascending.
    pub indices: Vec<usize>,

    /// Maximum score, `None` for an empty score vector.
    pub best: Option<f64>,

    /// Cardinality class of `indices`.
    pub set_type: SetType,
}

/// Selects every position whose score is at least `best - threshold`.
///
/// `epsilon` widens the cut by a small amount so that scores equal up to
/// floating-point rounding are treated as ties. Pass 0 for an exact cut.
///
/// With `threshold = 0` the result is the set of maximizers (ties
/// included); it is never empty unless `scores` is.
///
/// # Examples
///
/// ```
/// use u_fmcdm::selection::{select_optimal, SetType};
///
/// let scores = [0.6, 1.0, 0.95];
///
/// let exact = select_optimal(&scores, 0.0, 0.0);
/// assert_eq!(exact.indices, vec![1]);
/// assert_eq!(exact.set_type, SetType::Unique);
///
/// let tolerant = select_optimal(&scores, 0.1, 0.0);
/// assert_eq!(tolerant.indices, vec![1, 2]);
/// assert_eq!(tolerant.set_type, SetType::Multiple);
/// ```
pub fn select_optimal(scores: &[f64], threshold: f64, epsilon: f64) -> OptimalSet {
    debug_assert!(threshold >= 0.0, "threshold must be non-negative");

    let best = scores.iter().copied().reduce(f64::max);
    let indices: Vec<usize> = match best {
        Some(best) => {
            let cut = best - threshold - epsilon;
            scores
                .iter()
                .enumerate()
                .filter(|&(_, &s)| s >= cut)
                .map(|(i, _)| i)
                .collect()
        }
        None => Vec::new(),
    };

    OptimalSet {
        set_type: SetType::from_len(indices.len()),
        indices,
        best,
    }
}

/// Orders positions by descending score; equal scores keep index order.
///
/// # Examples
///
/// ```
/// use u_fmcdm::selection::rank;
///
/// assert_eq!(rank(&[0.5, 0.9, 0.5, 1.0]), vec![3, 1, 0, 2]);
/// ```
pub fn rank(scores: &[f64]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..scores.len()).collect();
    indices.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(Ordering::Equal)
    });
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_type_from_len() {
        assert_eq!(SetType::from_len(0), SetType::Empty);
        assert_eq!(SetType::from_len(1), SetType::Unique);
        assert_eq!(SetType::from_len(4), SetType::Multiple);
    }

    #[test]
    fn test_set_type_display() {
        assert_eq!(SetType::Unique.to_string(), "unique");
        assert_eq!(SetType::Multiple.to_string(), "multiple");
        assert_eq!(SetType::Empty.to_string(), "empty");
    }

    #[test]
    fn test_exact_ties_included() {
        let sel = select_optimal(&[0.88, 1.0, 1.0], 0.0, 0.0);
        assert_eq!(sel.indices, vec![1, 2]);
        assert_eq!(sel.set_type, SetType::Multiple);
        assert_eq!(sel.best, Some(1.0));
    }

    #[test]
    fn test_single_score() {
        let sel = select_optimal(&[0.4], 0.0, 0.0);
        assert_eq!(sel.indices, vec![0]);
        assert_eq!(sel.set_type, SetType::Unique);
    }

    #[test]
    fn test_empty_scores() {
        let sel = select_optimal(&[], 0.5, 1e-9);
        assert!(sel.indices.is_empty());
        assert_eq!(sel.best, None);
        assert_eq!(sel.set_type, SetType::Empty);
    }

    #[test]
    fn test_threshold_widens() {
        let scores = [0.5, 0.7, 0.9, 1.0];
        assert_eq!(select_optimal(&scores, 0.0, 0.0).indices, vec![3]);
        assert_eq!(select_optimal(&scores, 0.15, 0.0).indices, vec![2, 3]);
        assert_eq!(select_optimal(&scores, 0.35, 0.0).indices, vec![1, 2, 3]);
        assert_eq!(select_optimal(&scores, 1.0, 0.0).indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_epsilon_absorbs_rounding() {
        // 0.1 + 0.2 != 0.3 in binary floating point
        let scores = [0.1 + 0.2, 0.3];
        assert_eq!(select_optimal(&scores, 0.0, 0.0).indices, vec![0]);
        assert_eq!(select_optimal(&scores, 0.0, 1e-9).indices, vec![0, 1]);
    }

    #[test]
    fn test_rank_stable_on_ties() {
        assert_eq!(rank(&[0.2, 0.2, 0.2]), vec![0, 1, 2]);
        assert_eq!(rank(&[0.1, 0.3, 0.2]), vec![1, 2, 0]);
        assert!(rank(&[]).is_empty());
    }
}
