use crate::convert::{format_value, not_found_message, ConversionResult, Converter};
use crate::http::route::{parse_route, RouteError};
use crate::units::UnitCategory;
use serde::Serialize;
use std::fmt;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;

/// Status and body handed back to whatever is hosting the function
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn ok(body: String) -> Self {
        Self {
            status: STATUS_OK,
            body,
        }
    }

    pub fn not_found(body: String) -> Self {
        Self {
            status: STATUS_NOT_FOUND,
            body,
        }
    }

    pub fn bad_request(body: String) -> Self {
        Self {
            status: STATUS_BAD_REQUEST,
            body,
        }
    }

    pub fn from_result(category: UnitCategory, result: &ConversionResult) -> Self {
        match result {
            ConversionResult::Success { value } => Response::ok(format_value(*value)),
            miss => Response::not_found(not_found_message(category, miss).unwrap_or_default()),
        }
    }

    pub fn from_route_error(error: &RouteError) -> Self {
        match error {
            RouteError::InvalidInput(_) => Response::bad_request(error.to_string()),
            RouteError::NoRoute(_) | RouteError::UnknownCategory(_) => {
                Response::not_found(error.to_string())
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.body)
    }
}

/// Serve `GET <path>`: route, convert, render
pub fn handle(path: &str) -> Response {
    let response = match parse_route(path) {
        Ok(request) => {
            let result = Converter::new(request.category).convert(
                &request.source,
                &request.target,
                request.input,
            );
            if !result.is_success() {
                log::debug!(
                    "{} conversion '{}' -> '{}' has unknown units",
                    request.category,
                    request.source,
                    request.target
                );
            }
            Response::from_result(request.category, &result)
        }
        Err(e) => Response::from_route_error(&e),
    };

    log::info!("GET {} -> {}", path, response.status);
    response
}
