//! AWS Lambda handler for API Gateway proxy events
//!
//! Reads ask_price, income, expense and interest_rate from the query string and
//! answers with an API Gateway proxy response.

use affordability::{
    api::{respond_to_query, ApiResponse},
    AffordabilityCalculator, Assumptions,
};
use aws_lambda_events::apigw::{ApiGatewayProxyRequest, ApiGatewayProxyResponse};
use aws_lambda_events::encodings::Body;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};

fn proxy_response(response: ApiResponse) -> ApiGatewayProxyResponse {
    ApiGatewayProxyResponse {
        status_code: i64::from(response.status_code),
        body: response.body.map(Body::Text),
        ..Default::default()
    }
}

fn answer(calculator: &AffordabilityCalculator, request: &ApiGatewayProxyRequest) -> ApiGatewayProxyResponse {
    let params = &request.query_string_parameters;
    proxy_response(respond_to_query(calculator, |key| params.first(key)))
}

async fn handler(
    calculator: AffordabilityCalculator,
    event: LambdaEvent<ApiGatewayProxyRequest>,
) -> Result<ApiGatewayProxyResponse, Error> {
    Ok(answer(&calculator, &event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let calculator = AffordabilityCalculator::new(Assumptions::from_env()?);
    run(service_fn(move |event: LambdaEvent<ApiGatewayProxyRequest>| {
        handler(calculator, event)
    }))
    .await
}
