use crate::convert::converter::ConversionResult;
use crate::units::UnitCategory;

/// Human-readable explanation for a miss, `None` on success
pub fn not_found_message(category: UnitCategory, result: &ConversionResult) -> Option<String> {
    match result {
        ConversionResult::Success { .. } => None,
        ConversionResult::NameNotFound {
            unit_name,
            valid_units,
        } => Some(format!(
            "{} unit '{}' not found. Try {}.",
            category.label(),
            unit_name,
            valid_units
        )),
        ConversionResult::NamesNotFound {
            unit_name,
            other_unit_name,
            valid_units,
        } => Some(format!(
            "{} units '{}' and '{}' not found. Try {}.",
            category.label(),
            unit_name,
            other_unit_name,
            valid_units
        )),
    }
}

/// Render a converted magnitude as a response body
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}
