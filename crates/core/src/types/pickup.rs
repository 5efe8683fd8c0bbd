//! Pickup method type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// How the customer collects a finished order.
///
/// Serialized as the exact string the order service records, so wire values
/// match what the stand's kitchen display shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PickupMethod {
    /// Collect at the counter. The checkout dialog default.
    #[default]
    Pickup,
    /// Delivered to the table named in the order.
    Table,
}

impl PickupMethod {
    /// The wire and display string for this method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pickup => "Pickup",
            Self::Table => "Table",
        }
    }

    /// All methods, in the order the checkout dialog offers them.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Pickup, Self::Table]
    }
}

impl fmt::Display for PickupMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PickupMethod {
    type Err = UnknownPickupMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pickup" => Ok(Self::Pickup),
            "Table" => Ok(Self::Table),
            other => Err(UnknownPickupMethod(other.to_owned())),
        }
    }
}

/// Error returned when parsing an unrecognized pickup method.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown pickup method: {0}")]
pub struct UnknownPickupMethod(pub String);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_pickup() {
        assert_eq!(PickupMethod::default(), PickupMethod::Pickup);
    }

    #[test]
    fn test_wire_strings() {
        assert_eq!(PickupMethod::Pickup.as_str(), "Pickup");
        assert_eq!(PickupMethod::Table.as_str(), "Table");
    }

    #[test]
    fn test_from_str_roundtrip() {
        for method in PickupMethod::all() {
            let parsed: PickupMethod = method.as_str().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        assert!("Drone".parse::<PickupMethod>().is_err());
    }

    #[test]
    fn test_serde_uses_variant_name() {
        let json = serde_json::to_string(&PickupMethod::Pickup).unwrap();
        assert_eq!(json, "\"Pickup\"");
    }
}
