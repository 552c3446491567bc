//! Validated square matrix of preference degrees.

use crate::error::{FmcdmError, Result};

/// A fuzzy preference relation over `n` alternatives.
///
/// Entry `(i, j)` is the degree in [0, 1] to which alternative `i` is
/// preferred to alternative `j`. Stored row-major.
///
/// Construction validates squareness and range; after that the relation
/// is immutable. Reflexivity (`R[i][i] = 1`) and reciprocity
/// (`R[i][j] + R[j][i] = 1`) are **not** required, see
/// [`is_reflexive`](Self::is_reflexive) and
/// [`is_reciprocal`](Self::is_reciprocal) for diagnostics.
///
/// # Examples
///
/// ```
/// use u_fmcdm::relation::FuzzyRelation;
///
/// let r = FuzzyRelation::from_rows(vec![
///     vec![1.0, 0.7],
///     vec![0.3, 1.0],
/// ]).unwrap();
///
/// assert_eq!(r.size(), 2);
/// assert!((r.get(0, 1) - 0.7).abs() < 1e-12);
/// assert!(!r.is_reciprocal(1e-9)); // diagonal is 1, not 0.5
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct FuzzyRelation {
    size: usize,
    degrees: Vec<f64>,
}

impl FuzzyRelation {
    /// Builds a relation from nested rows.
    ///
    /// # Errors
    ///
    /// [`FmcdmError::InvalidRelation`] if there are no rows, the matrix is
    /// not square, or any entry lies outside [0, 1] (NaN included).
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(invalid("relation has no rows".into()));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(invalid(format!(
                    "matrix is not square: row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
        }

        let degrees: Vec<f64> = rows.into_iter().flatten().collect();
        check_range(size, &degrees)?;
        Ok(Self { size, degrees })
    }

    /// Builds a relation from a row-major buffer of `size * size` degrees.
    ///
    /// # Errors
    ///
    /// [`FmcdmError::InvalidRelation`] if `size` is zero, the buffer length
    /// is not `size * size`, or any entry lies outside [0, 1].
    pub fn from_flat(size: usize, degrees: Vec<f64>) -> Result<Self> {
        if size == 0 {
            return Err(invalid("relation has no rows".into()));
        }
        if degrees.len() != size * size {
            return Err(invalid(format!(
                "expected {} entries for a {size}x{size} matrix, found {}",
                size * size,
                degrees.len()
            )));
        }
        check_range(size, &degrees)?;
        Ok(Self { size, degrees })
    }

    /// The crisp identity relation: 1 on the diagonal, 0 elsewhere.
    ///
    /// # Errors
    ///
    /// [`FmcdmError::InvalidRelation`] if `size` is zero.
    pub fn identity(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(invalid("relation has no rows".into()));
        }
        let mut degrees = vec![0.0; size * size];
        for i in 0..size {
            degrees[i * size + i] = 1.0;
        }
        Ok(Self { size, degrees })
    }

    /// Constructor for buffers whose entries are already known to be in range.
    pub(crate) fn from_flat_unchecked(size: usize, degrees: Vec<f64>) -> Self {
        debug_assert_eq!(degrees.len(), size * size);
        debug_assert!(degrees.iter().all(|v| (0.0..=1.0).contains(v)));
        Self { size, degrees }
    }

    /// Number of alternatives (side length).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Degree to which alternative `i` is preferred to alternative `j`.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.size && j < self.size, "index out of bounds");
        self.degrees[i * self.size + j]
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.degrees[i * self.size..(i + 1) * self.size]
    }

    /// Row-major view of all degrees.
    pub fn as_slice(&self) -> &[f64] {
        &self.degrees
    }

    /// Copies the relation back into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.degrees
            .chunks(self.size)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Whether every diagonal entry equals 1.
    pub fn is_reflexive(&self) -> bool {
        (0..self.size).all(|i| self.get(i, i) == 1.0)
    }

    /// Whether `R[i][j] + R[j][i] = 1` holds for every pair, within `eps`.
    ///
    /// The diagonal is included, so a reciprocal relation has 0.5 there.
    pub fn is_reciprocal(&self, eps: f64) -> bool {
        (0..self.size).all(|i| {
            (i..self.size).all(|j| (self.get(i, j) + self.get(j, i) - 1.0).abs() <= eps)
        })
    }
}

impl TryFrom<Vec<Vec<f64>>> for FuzzyRelation {
    type Error = FmcdmError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<FuzzyRelation> for Vec<Vec<f64>> {
    fn from(relation: FuzzyRelation) -> Self {
        relation.to_rows()
    }
}

fn check_range(size: usize, degrees: &[f64]) -> Result<()> {
    match degrees.iter().position(|v| !(0.0..=1.0).contains(v)) {
        Some(pos) => Err(invalid(format!(
            "entry ({}, {}) = {} is outside [0, 1]",
            pos / size,
            pos % size,
            degrees[pos]
        ))),
        None => Ok(()),
    }
}

fn invalid(reason: String) -> FmcdmError {
    FmcdmError::InvalidRelation { reason }
}
