//! AWS Lambda handler for affordability requests over HTTP
//!
//! Accepts the four inputs as query string parameters (GET) or as a JSON body
//! (POST) and returns the result as JSON. Malformed input gets a 400 with an
//! empty body.
//!
//! Supports Lambda Function URLs and API Gateway HTTP integrations.

use affordability::{
    api::{respond_to_json, respond_to_query, ApiResponse, STATUS_BAD_REQUEST},
    AffordabilityCalculator, Assumptions,
};
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};

fn cors_builder(status: u16) -> lambda_http::http::response::Builder {
    Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn http_response(api: ApiResponse) -> Result<Response<Body>, Error> {
    let builder = cors_builder(api.status_code);
    let response = match api.body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::Text(body))?,
        None => builder.body(Body::Empty)?,
    };
    Ok(response)
}

/// Answer from the body when there is one, otherwise from the query string
fn respond(calculator: &AffordabilityCalculator, event: &Request) -> ApiResponse {
    let body_str = match event.body() {
        Body::Text(s) => s.as_str(),
        Body::Binary(b) => match std::str::from_utf8(b) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Rejecting request, body is not UTF-8: {}", e);
                return ApiResponse {
                    status_code: STATUS_BAD_REQUEST,
                    body: None,
                };
            }
        },
        Body::Empty => "",
    };

    if body_str.trim().is_empty() {
        let params = event.query_string_parameters();
        respond_to_query(calculator, |key| params.first(key))
    } else {
        respond_to_json(calculator, body_str)
    }
}

/// Lambda handler function
async fn handler(calculator: AffordabilityCalculator, event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors_builder(200).body(Body::Empty)?);
    }

    let response = respond(&calculator, &event);

    log::debug!("{} {} -> {}", event.method(), event.uri().path(), response.status_code);
    http_response(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let calculator = AffordabilityCalculator::new(Assumptions::from_env()?);
    run(service_fn(move |event: Request| handler(calculator, event))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn request(method: &str, body: Body) -> Request {
        lambda_http::http::Request::builder()
            .method(method)
            .uri("/affordability")
            .body(body)
            .unwrap()
    }

    fn with_query(req: Request, pairs: &[(&str, &str)]) -> Request {
        let params: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        req.with_query_string_parameters(params)
    }

    fn header<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
        response.headers().get(name).and_then(|v| v.to_str().ok())
    }

    fn body_json(response: &Response<Body>) -> serde_json::Value {
        match response.body() {
            Body::Text(s) => serde_json::from_str(s).unwrap(),
            other => panic!("Expected text body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_options_preflight_returns_cors() {
        let response = handler(AffordabilityCalculator::default(), request("OPTIONS", Body::Empty))
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(header(&response, "Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(header(&response, "Access-Control-Allow-Methods"), Some("GET, POST, OPTIONS"));
        assert!(matches!(response.body(), Body::Empty));
    }

    #[tokio::test]
    async fn test_query_request_success_sets_json_content_type() {
        let req = with_query(
            request("GET", Body::Empty),
            &[("ask_price", "500000"), ("income", "10000"), ("expense", "2000"), ("interest_rate", "5.0")],
        );

        let response = handler(AffordabilityCalculator::default(), req).await.unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(header(&response, "Content-Type"), Some("application/json"));
        assert_eq!(header(&response, "Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(body_json(&response)["input"]["ask_price"], 500000.0);
    }

    #[tokio::test]
    async fn test_body_takes_precedence_over_query() {
        let req = with_query(
            request(
                "POST",
                Body::Text(r#"{"ask_price":300000,"income":8000,"expense":5000,"interest_rate":6}"#.to_string()),
            ),
            &[("ask_price", "1"), ("income", "2"), ("expense", "3"), ("interest_rate", "4")],
        );

        let response = handler(AffordabilityCalculator::default(), req).await.unwrap();

        assert_eq!(response.status(), 200);
        let json = body_json(&response);
        assert_eq!(json["input"]["ask_price"], 300000.0);
        assert_eq!(json["input"]["interest_rate"], 6.0);
    }

    #[tokio::test]
    async fn test_bad_request_has_no_body_or_content_type() {
        let req = with_query(request("GET", Body::Empty), &[("ask_price", "500000")]);

        let response = handler(AffordabilityCalculator::default(), req).await.unwrap();

        assert_eq!(response.status(), 400);
        assert!(matches!(response.body(), Body::Empty));
        assert_eq!(header(&response, "Content-Type"), None);
        assert_eq!(header(&response, "Access-Control-Allow-Origin"), Some("*"));
    }

    #[tokio::test]
    async fn test_binary_body_must_be_utf8() {
        let mut bytes = br#"{"ask_price":300000,"income":8000,"expense":5000,"interest_rate":6}"#.to_vec();
        bytes.insert(1, 0xFF);

        let response = handler(AffordabilityCalculator::default(), request("POST", Body::Binary(bytes)))
            .await
            .unwrap();
        assert_eq!(response.status(), 400);

        let valid = br#"{"ask_price":300000,"income":8000,"expense":5000,"interest_rate":6}"#.to_vec();
        let response = handler(AffordabilityCalculator::default(), request("POST", Body::Binary(valid)))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }
}
