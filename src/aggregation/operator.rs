//! Aggregation operators.

use crate::error::{FmcdmError, Result};
use crate::relation::FuzzyRelation;

/// Symmetric operator combining per-criterion degrees at one position.
///
/// The same operator serves both use sites of the solver: combining
/// relations (before scoring) and combining score vectors (after scoring).
///
/// # Examples
///
/// ```
/// use u_fmcdm::aggregation::Aggregation;
///
/// let scores = vec![vec![1.0, 0.4], vec![0.6, 0.8]];
///
/// let min = Aggregation::Min.aggregate_vectors(&scores).unwrap();
/// assert_eq!(min, vec![0.6, 0.4]);
///
/// let max = Aggregation::Max.aggregate_vectors(&scores).unwrap();
/// assert_eq!(max, vec![1.0, 0.8]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Aggregation {
    /// Fuzzy intersection: an alternative is only as good as its worst
    /// criterion. Classical choice for Orlovsky's multi-criteria model.
    #[default]
    Min,

    /// Fuzzy union: the best criterion decides.
    Max,

    /// Arithmetic mean: every criterion contributes equally.
    Mean,
}

impl Aggregation {
    /// Combines the degrees found at one position.
    ///
    /// An empty slice yields the operator's neutral element
    /// (1 for `Min`, 0 for `Max` and `Mean`).
    #[inline]
    pub fn combine(&self, values: &[f64]) -> f64 {
        match self {
            Aggregation::Min => values.iter().copied().fold(1.0, f64::min),
            Aggregation::Max => values.iter().copied().fold(0.0, f64::max),
            Aggregation::Mean => {
                if values.is_empty() {
                    0.0
                } else {
                    values.iter().sum::<f64>() / values.len() as f64
                }
            }
        }
    }

    /// Combines equally long score vectors position-wise.
    ///
    /// # Errors
    ///
    /// - [`FmcdmError::NoCriteria`] if `vectors` is empty
    /// - [`FmcdmError::ShapeMismatch`] if the vectors differ in length
    pub fn aggregate_vectors(&self, vectors: &[Vec<f64>]) -> Result<Vec<f64>> {
        let first = vectors.first().ok_or(FmcdmError::NoCriteria)?;
        let len = first.len();
        for (k, v) in vectors.iter().enumerate() {
            if v.len() != len {
                return Err(FmcdmError::ShapeMismatch {
                    context: format!("score vector {k}"),
                    expected: len,
                    found: v.len(),
                });
            }
        }

        let slices: Vec<&[f64]> = vectors.iter().map(|v| v.as_slice()).collect();
        Ok(self.combine_positions(&slices, len))
    }

    /// Combines equally sized relations position-wise.
    ///
    /// # Errors
    ///
    /// - [`FmcdmError::NoCriteria`] if `relations` is empty
    /// - [`FmcdmError::ShapeMismatch`] if the relations differ in size
    pub fn aggregate_relations(&self, relations: &[FuzzyRelation]) -> Result<FuzzyRelation> {
        let first = relations.first().ok_or(FmcdmError::NoCriteria)?;
        let size = first.size();
        for (k, r) in relations.iter().enumerate() {
            if r.size() != size {
                return Err(FmcdmError::ShapeMismatch {
                    context: format!("relation {k}"),
                    expected: size,
                    found: r.size(),
                });
            }
        }

        let slices: Vec<&[f64]> = relations.iter().map(|r| r.as_slice()).collect();
        let degrees = self.combine_positions(&slices, size * size);
        Ok(FuzzyRelation::from_flat_unchecked(size, degrees))
    }

    /// Shared position-wise loop. All slices have length `len`.
    fn combine_positions(&self, slices: &[&[f64]], len: usize) -> Vec<f64> {
        let mut column = Vec::with_capacity(slices.len());
        (0..len)
            .map(|pos| {
                column.clear();
                column.extend(slices.iter().map(|s| s[pos]));
                self.combine(&column)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(rows: Vec<Vec<f64>>) -> FuzzyRelation {
        FuzzyRelation::from_rows(rows).unwrap()
    }

    #[test]
    fn test_combine() {
        let values = [0.2, 0.9, 0.4];
        assert!((Aggregation::Min.combine(&values) - 0.2).abs() < 1e-12);
        assert!((Aggregation::Max.combine(&values) - 0.9).abs() < 1e-12);
        assert!((Aggregation::Mean.combine(&values) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_combine_empty_is_neutral() {
        assert_eq!(Aggregation::Min.combine(&[]), 1.0);
        assert_eq!(Aggregation::Max.combine(&[]), 0.0);
        assert_eq!(Aggregation::Mean.combine(&[]), 0.0);
    }

    #[test]
    fn test_default_is_min() {
        assert_eq!(Aggregation::default(), Aggregation::Min);
    }

    #[test]
    fn test_aggregate_relations_min() {
        let r1 = rel(vec![vec![1.0, 0.8], vec![0.1, 1.0]]);
        let r2 = rel(vec![vec![1.0, 0.3], vec![0.6, 1.0]]);

        let q = Aggregation::Min.aggregate_relations(&[r1, r2]).unwrap();
        assert_eq!(q.to_rows(), vec![vec![1.0, 0.3], vec![0.1, 1.0]]);
    }

    #[test]
    fn test_aggregate_relations_mean() {
        let r1 = rel(vec![vec![1.0, 1.0], vec![0.0, 1.0]]);
        let r2 = rel(vec![vec![1.0, 0.0], vec![1.0, 1.0]]);

        let q = Aggregation::Mean.aggregate_relations(&[r1, r2]).unwrap();
        assert_eq!(q.to_rows(), vec![vec![1.0, 0.5], vec![0.5, 1.0]]);
    }

    #[test]
    fn test_single_input_is_identity() {
        let r = rel(vec![vec![1.0, 0.25], vec![0.75, 1.0]]);
        for agg in [Aggregation::Min, Aggregation::Max, Aggregation::Mean] {
            let q = agg.aggregate_relations(std::slice::from_ref(&r)).unwrap();
            assert_eq!(q, r, "{agg:?} changed a single relation");
        }
    }

    #[test]
    fn test_order_independent() {
        let a = vec![0.3, 0.9, 0.5];
        let b = vec![0.7, 0.1, 0.5];
        let c = vec![0.2, 0.4, 1.0];

        for agg in [Aggregation::Min, Aggregation::Max] {
            let forward = agg
                .aggregate_vectors(&[a.clone(), b.clone(), c.clone()])
                .unwrap();
            let backward = agg
                .aggregate_vectors(&[c.clone(), b.clone(), a.clone()])
                .unwrap();
            assert_eq!(forward, backward);
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            Aggregation::Min.aggregate_vectors(&[]),
            Err(FmcdmError::NoCriteria)
        );
        assert_eq!(
            Aggregation::Min.aggregate_relations(&[]),
            Err(FmcdmError::NoCriteria)
        );
    }

    #[test]
    fn test_vector_length_mismatch() {
        let err = Aggregation::Mean
            .aggregate_vectors(&[vec![0.1, 0.2], vec![0.3]])
            .unwrap_err();
        assert_eq!(
            err,
            FmcdmError::ShapeMismatch {
                context: "score vector 1".into(),
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn test_relation_size_mismatch() {
        let r2 = FuzzyRelation::identity(2).unwrap();
        let r3 = FuzzyRelation::identity(3).unwrap();
        let err = Aggregation::Max.aggregate_relations(&[r2, r3]).unwrap_err();
        assert!(matches!(
            err,
            FmcdmError::ShapeMismatch {
                expected: 2,
                found: 3,
                ..
            }
        ));
    }
}
