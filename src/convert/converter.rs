use crate::units::{UnitCategory, UnitTable};
use serde::Serialize;

/// Outcome of a single conversion
///
/// Unknown unit names are an expected outcome, not an error, so they are
/// modelled as variants rather than a `Result::Err`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionResult {
    Success {
        value: f64,
    },
    /// Exactly one of the two names is unknown
    NameNotFound {
        unit_name: String,
        valid_units: String,
    },
    /// Both names are unknown; source first, target second
    NamesNotFound {
        unit_name: String,
        other_unit_name: String,
        valid_units: String,
    },
}

impl ConversionResult {
    pub fn value(&self) -> Option<f64> {
        match self {
            ConversionResult::Success { value } => Some(*value),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Success { .. })
    }
}

/// Converts magnitudes between the units of one category
#[derive(Debug, Clone, Copy)]
pub struct Converter {
    category: UnitCategory,
    table: &'static UnitTable,
}

impl Converter {
    pub fn new(category: UnitCategory) -> Self {
        Self {
            category,
            table: category.table(),
        }
    }

    pub fn category(&self) -> UnitCategory {
        self.category
    }

    pub fn table(&self) -> &'static UnitTable {
        self.table
    }

    /// Convert `input` from `source` to `target`
    ///
    /// Names are used exactly as given. Every input maps to a result variant.
    pub fn convert(&self, source: &str, target: &str, input: f64) -> ConversionResult {
        match (self.table.lookup(source), self.table.lookup(target)) {
            // Same factor: hand the input back untouched, x * s / s can round
            (Some(s), Some(t)) if s == t => ConversionResult::Success { value: input },
            (Some(s), Some(t)) => ConversionResult::Success {
                value: input * s / t,
            },
            (None, Some(_)) => ConversionResult::NameNotFound {
                unit_name: source.to_string(),
                valid_units: self.table.valid_units(),
            },
            (Some(_), None) => ConversionResult::NameNotFound {
                unit_name: target.to_string(),
                valid_units: self.table.valid_units(),
            },
            (None, None) => ConversionResult::NamesNotFound {
                unit_name: source.to_string(),
                other_unit_name: target.to_string(),
                valid_units: self.table.valid_units(),
            },
        }
    }
}

/// Convert between length units (base unit meter)
pub fn convert_length(source: &str, target: &str, input: f64) -> ConversionResult {
    Converter::new(UnitCategory::Length).convert(source, target, input)
}
