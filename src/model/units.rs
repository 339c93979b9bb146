use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Units an ingredient amount can be measured in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitOfMeasure {
    Grams,
    Milliliters,
    Slices,
}

impl UnitOfMeasure {
    pub const ALL: [UnitOfMeasure; 3] = [
        UnitOfMeasure::Grams,
        UnitOfMeasure::Milliliters,
        UnitOfMeasure::Slices,
    ];

    /// Textual name used in recipe and fridge data files
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitOfMeasure::Grams => "grams",
            UnitOfMeasure::Milliliters => "ml",
            UnitOfMeasure::Slices => "slices",
        }
    }

    /// Whether `name` is a known unit. Matching is case-sensitive.
    pub fn has(name: &str) -> bool {
        Self::get(name).is_some()
    }

    /// Look up the unit with the given textual name
    pub fn get(name: &str) -> Option<Self> {
        match name {
            "grams" => Some(UnitOfMeasure::Grams),
            "ml" => Some(UnitOfMeasure::Milliliters),
            "slices" => Some(UnitOfMeasure::Slices),
            _ => None,
        }
    }
}

impl FromStr for UnitOfMeasure {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::get(s).ok_or_else(|| ValidationError::UnsupportedUnit(s.to_string()))
    }
}

impl fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_known_units() {
        assert!(UnitOfMeasure::has("grams"));
        assert!(UnitOfMeasure::has("ml"));
        assert!(UnitOfMeasure::has("slices"));
    }

    #[test]
    fn test_has_rejects_unknown_and_miscased_units() {
        assert!(!UnitOfMeasure::has("jiffy"));
        assert!(!UnitOfMeasure::has("Grams"));
        assert!(!UnitOfMeasure::has(""));
    }

    #[test]
    fn test_get_round_trips_names() {
        for unit in UnitOfMeasure::ALL {
            assert_eq!(UnitOfMeasure::get(unit.as_str()), Some(unit));
        }
    }

    #[test]
    fn test_parse_error_names_the_unit() {
        let err = "cups".parse::<UnitOfMeasure>().unwrap_err();
        assert_eq!(err.to_string(), "Units of measure cups is not supported.");
    }
}
