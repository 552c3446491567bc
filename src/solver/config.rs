//! Solver configuration and method selection.

use crate::aggregation::Aggregation;
use crate::error::{FmcdmError, Result};
use crate::scoring::StrictPreference;

/// Order in which aggregation and non-dominance scoring are composed.
///
/// The two orders do not commute in general: the same input may yield
/// different optimal sets under each method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    /// Method 1: aggregate the criterion relations into one, then score it.
    #[default]
    AggregateThenScore,

    /// Method 2: score each criterion separately, then aggregate the scores.
    ScoreThenAggregate,
}

impl Method {
    /// Maps the numeric method code (1 or 2) to a variant.
    ///
    /// # Errors
    ///
    /// [`FmcdmError::InvalidMethod`] for any other code.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            1 => Ok(Method::AggregateThenScore),
            2 => Ok(Method::ScoreThenAggregate),
            other => Err(FmcdmError::InvalidMethod(other)),
        }
    }

    /// Numeric code of this method.
    pub fn code(&self) -> i64 {
        match self {
            Method::AggregateThenScore => 1,
            Method::ScoreThenAggregate => 2,
        }
    }
}

impl TryFrom<i64> for Method {
    type Error = FmcdmError;

    fn try_from(code: i64) -> Result<Self> {
        Self::from_code(code)
    }
}

/// Configuration for [`Solver`](super::Solver).
///
/// # Examples
///
/// ```
/// use u_fmcdm::aggregation::Aggregation;
/// use u_fmcdm::solver::{Method, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_method(Method::ScoreThenAggregate)
///     .with_aggregation(Aggregation::Mean)
///     .with_threshold(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SolverConfig {
    /// Evaluation order.
    pub method: Method,

    /// Allowed shortfall below the maximum score. Must be non-negative.
    pub threshold: f64,

    /// Operator used for both relation and score aggregation.
    pub aggregation: Aggregation,

    /// How strict preference is extracted from a relation.
    pub strict_preference: StrictPreference,

    /// Floating-point guard added to the threshold when selecting.
    ///
    /// Defaults to 0, so a zero threshold selects exact maximizers only.
    pub epsilon: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            method: Method::default(),
            threshold: 0.0,
            aggregation: Aggregation::default(),
            strict_preference: StrictPreference::default(),
            epsilon: 0.0,
        }
    }
}

impl SolverConfig {
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_aggregation(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = aggregation;
        self
    }

    pub fn with_strict_preference(mut self, rule: StrictPreference) -> Self {
        self.strict_preference = rule;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(FmcdmError::InvalidConfig(format!(
                "threshold must be a finite non-negative number, got {}",
                self.threshold
            )));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(FmcdmError::InvalidConfig(format!(
                "epsilon must be a finite non-negative number, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.method, Method::AggregateThenScore);
        assert_eq!(config.aggregation, Aggregation::Min);
        assert_eq!(config.strict_preference, StrictPreference::Lukasiewicz);
        assert_eq!(config.threshold, 0.0);
        assert_eq!(config.epsilon, 0.0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SolverConfig::default().validate().is_ok());
        assert!(SolverConfig::default()
            .with_threshold(0.3)
            .with_epsilon(0.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_bad_threshold() {
        for t in [-0.1, f64::NAN, f64::INFINITY] {
            let config = SolverConfig::default().with_threshold(t);
            assert!(
                matches!(config.validate(), Err(FmcdmError::InvalidConfig(_))),
                "threshold {t} accepted"
            );
        }
    }

    #[test]
    fn test_validate_bad_epsilon() {
        let config = SolverConfig::default().with_epsilon(-1e-9);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_method_codes() {
        assert_eq!(Method::from_code(1), Ok(Method::AggregateThenScore));
        assert_eq!(Method::from_code(2), Ok(Method::ScoreThenAggregate));
        assert_eq!(Method::from_code(0), Err(FmcdmError::InvalidMethod(0)));
        assert_eq!(Method::try_from(3), Err(FmcdmError::InvalidMethod(3)));
        assert_eq!(Method::ScoreThenAggregate.code(), 2);
    }
}
