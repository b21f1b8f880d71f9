use crate::units::UnitCategory;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `/{category}/{source}/{target}/{input}`, optional leading and trailing slash,
    /// query string ignored
    static ref CONVERSION_ROUTE: Regex =
        Regex::new(r"^/?([^/?]+)/([^/?]+)/([^/?]+)/([^/?]+)/?(?:\?.*)?$").unwrap();
}

/// A conversion request extracted from a request path
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub category: UnitCategory,
    pub source: String,
    pub target: String,
    pub input: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RouteError {
    /// Path does not have the conversion shape
    NoRoute(String),
    UnknownCategory(String),
    /// Input segment is not a finite number
    InvalidInput(String),
}

impl std::fmt::Display for RouteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteError::NoRoute(path) => write!(f, "No route matches '{}'", path),
            RouteError::UnknownCategory(segment) => {
                write!(f, "Unit category '{}' not found", segment)
            }
            RouteError::InvalidInput(segment) => {
                write!(f, "Input '{}' is not a finite number", segment)
            }
        }
    }
}

impl std::error::Error for RouteError {}

/// Parse a request path into a conversion request
///
/// Unit segments are passed through verbatim; the converter decides whether
/// they name real units.
pub fn parse_route(path: &str) -> Result<ConversionRequest, RouteError> {
    let captures = CONVERSION_ROUTE
        .captures(path)
        .ok_or_else(|| RouteError::NoRoute(path.to_string()))?;

    let category_segment = &captures[1];
    let category = UnitCategory::from_segment(category_segment)
        .ok_or_else(|| RouteError::UnknownCategory(category_segment.to_string()))?;

    let input_segment = &captures[4];
    let input = parse_input(input_segment)?;

    Ok(ConversionRequest {
        category,
        source: captures[2].to_string(),
        target: captures[3].to_string(),
        input,
    })
}

fn parse_input(segment: &str) -> Result<f64, RouteError> {
    match segment.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RouteError::InvalidInput(segment.to_string())),
    }
}
