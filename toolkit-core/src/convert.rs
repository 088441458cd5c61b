use serde::Serialize;
use std::{convert::TryFrom, fmt};
use tracing::debug;

use crate::{arithmetic::format_number, error::ToolError};

/// Unit → metres.
const LENGTH_FACTORS: &[(&str, f64)] = &[
    ("m", 1.0),
    ("km", 1000.0),
    ("cm", 0.01),
    ("mm", 0.001),
    ("mile", 1609.34),
    ("yard", 0.9144),
    ("foot", 0.3048),
    ("inch", 0.0254),
];

/// Unit → kilograms.
const WEIGHT_FACTORS: &[(&str, f64)] = &[
    ("kg", 1.0),
    ("g", 0.001),
    ("mg", 0.000001),
    ("lb", 0.453592),
    ("oz", 0.0283495),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Length,
    Weight,
}

impl Quantity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quantity::Length => "length",
            Quantity::Weight => "weight",
        }
    }

    pub const fn all() -> &'static [Quantity] {
        &[Quantity::Length, Quantity::Weight]
    }

    fn factors(&self) -> &'static [(&'static str, f64)] {
        match self {
            Quantity::Length => LENGTH_FACTORS,
            Quantity::Weight => WEIGHT_FACTORS,
        }
    }

    /// Units known for this quantity, in table order.
    pub fn units(&self) -> impl Iterator<Item = &'static str> {
        self.factors().iter().map(|(unit, _)| *unit)
    }

    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.factors().iter().find(|(u, _)| *u == unit).map(|(_, f)| *f)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Quantity {
    type Error = ToolError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "length" => Ok(Quantity::Length),
            "weight" => Ok(Quantity::Weight),
            _ => Err(ToolError::UnknownQuantity(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Conversion {
    Converted { value: f64, unit: String },
    UnsupportedUnits { quantity: Quantity },
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Converted { value, unit } => {
                write!(f, "Result: {} {unit}", format_number(*value))
            }
            Conversion::UnsupportedUnits { quantity } => {
                write!(f, "Unsupported units for {quantity} conversion")
            }
        }
    }
}

/// Convert `value` with `value * factor(to) / factor(from)`.
///
/// Unit names are matched exactly. An unknown unit on either side is reported
/// as [`Conversion::UnsupportedUnits`] rather than an error.
pub fn convert(quantity: Quantity, value: f64, from_unit: &str, to_unit: &str) -> Conversion {
    let (Some(from), Some(to)) = (quantity.factor(from_unit), quantity.factor(to_unit)) else {
        debug!(%quantity, from_unit, to_unit, "unsupported units");
        return Conversion::UnsupportedUnits { quantity };
    };

    let result = value * to / from;
    debug!(%quantity, value, from_unit, to_unit, result, "converted");

    Conversion::Converted { value: result, unit: to_unit.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_as_str_roundtrip() {
        for q in Quantity::all() {
            assert_eq!(Quantity::try_from(q.as_str()), Ok(*q));
        }
        assert_eq!(
            Quantity::try_from("volume"),
            Err(ToolError::UnknownQuantity("volume".into()))
        );
    }

    #[test]
    fn same_unit_is_identity() {
        for q in Quantity::all() {
            for unit in q.units() {
                assert_eq!(
                    convert(*q, 12.5, unit, unit),
                    Conversion::Converted { value: 12.5, unit: unit.to_string() }
                );
            }
        }
    }

    #[test]
    fn applies_to_over_from_factor() {
        let Conversion::Converted { value, unit } = convert(Quantity::Length, 2.0, "m", "km") else {
            panic!("expected a conversion");
        };
        assert_eq!(unit, "km");
        assert!((value - 2000.0).abs() < 1e-9);

        let Conversion::Converted { value, .. } = convert(Quantity::Weight, 1.0, "lb", "kg") else {
            panic!("expected a conversion");
        };
        assert!((value - 1.0 / 0.453592).abs() < 1e-9);
    }

    #[test]
    fn unknown_units_are_reported() {
        let outcome = convert(Quantity::Weight, 1.0, "stone", "kg");
        assert_eq!(outcome, Conversion::UnsupportedUnits { quantity: Quantity::Weight });
        assert_eq!(outcome.to_string(), "Unsupported units for weight conversion");

        // Units from the other table do not leak across.
        assert!(matches!(
            convert(Quantity::Length, 1.0, "m", "kg"),
            Conversion::UnsupportedUnits { .. }
        ));
    }

    #[test]
    fn converted_display() {
        let outcome = convert(Quantity::Length, 3.0, "km", "km");
        assert_eq!(outcome.to_string(), "Result: 3.0 km");
    }
}
