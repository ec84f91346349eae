//! HTTP boundary shared by the Lambda entry points
//!
//! Turns query parameters or a JSON body into a status code and JSON body.
//! Parse failures become a 400 with an empty body and never reach the calculator.
//! Results that overflow to infinity or NaN are also answered with a 400.

use crate::calculator::AffordabilityCalculator;
use crate::error::Result;
use crate::input::{parse_query, Input};

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Framework-neutral response; the binaries map it onto their event types
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: Option<String>,
}

impl ApiResponse {
    fn bad_request() -> Self {
        Self {
            status_code: STATUS_BAD_REQUEST,
            body: None,
        }
    }
}

/// Answer a request carried in query string parameters
pub fn respond_to_query<'a, F>(calculator: &AffordabilityCalculator, lookup: F) -> ApiResponse
where
    F: Fn(&str) -> Option<&'a str>,
{
    respond(calculator, parse_query(lookup))
}

/// Answer a request carried as a JSON payload
pub fn respond_to_json(calculator: &AffordabilityCalculator, body: &str) -> ApiResponse {
    respond(calculator, Input::from_json(body))
}

fn respond(calculator: &AffordabilityCalculator, input: Result<Input>) -> ApiResponse {
    let input = match input {
        Ok(input) => input,
        Err(e) if e.is_client_error() => {
            log::warn!("Rejecting request: {}", e);
            return ApiResponse::bad_request();
        }
        Err(e) => {
            log::error!("Unexpected error parsing request: {}", e);
            return ApiResponse::bad_request();
        }
    };

    let result = calculator.compute(&input);
    if !result.is_finite() {
        log::warn!("Rejecting request, result overflowed: {:?}", result);
        return ApiResponse::bad_request();
    }

    match serde_json::to_string(&result) {
        Ok(body) => ApiResponse {
            status_code: STATUS_OK,
            body: Some(body),
        },
        Err(e) => {
            log::error!("Could not encode result for {:?}: {}", input, e);
            ApiResponse::bad_request()
        }
    }
}
