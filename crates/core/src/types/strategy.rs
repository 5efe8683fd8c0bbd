//! Order submission strategy.

use core::fmt;

use serde::{Deserialize, Serialize};

/// How the checkout serializes the cart into order requests.
///
/// The two strategies have different failure semantics and are never blended
/// within a deployment:
///
/// - [`Aggregate`](Self::Aggregate) issues exactly one request carrying the
///   whole cart. The order service records all lines or none, so the client
///   sees a single success/failure outcome. This is the default.
/// - [`PerUnit`](Self::PerUnit) issues one request per individual unit of
///   quantity, all in flight concurrently. A batch where some units are
///   accepted and some rejected is reported as a failure, but the accepted
///   units stay recorded server-side; there is no rollback. Kept for stand
///   deployments whose order service only accepts single-item orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubmissionStrategy {
    /// One JSON request for the whole cart.
    #[default]
    Aggregate,
    /// One form-encoded request per unit of quantity.
    PerUnit,
}

impl SubmissionStrategy {
    /// Configuration string for this strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aggregate => "aggregate",
            Self::PerUnit => "per-unit",
        }
    }
}

impl fmt::Display for SubmissionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized strategy name.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown submission strategy: {0} (expected \"aggregate\" or \"per-unit\")")]
pub struct StrategyParseError(pub String);

impl std::str::FromStr for SubmissionStrategy {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aggregate" => Ok(Self::Aggregate),
            "per-unit" => Ok(Self::PerUnit),
            other => Err(StrategyParseError(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_aggregate() {
        assert_eq!(SubmissionStrategy::default(), SubmissionStrategy::Aggregate);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "aggregate".parse::<SubmissionStrategy>().unwrap(),
            SubmissionStrategy::Aggregate
        );
        assert_eq!(
            "per-unit".parse::<SubmissionStrategy>().unwrap(),
            SubmissionStrategy::PerUnit
        );
        assert!("per_unit".parse::<SubmissionStrategy>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for strategy in [SubmissionStrategy::Aggregate, SubmissionStrategy::PerUnit] {
            let parsed: SubmissionStrategy = strategy.to_string().parse().unwrap();
            assert_eq!(parsed, strategy);
        }
    }
}
