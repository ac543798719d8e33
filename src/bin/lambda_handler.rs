//! AWS Lambda handler for compound growth projections
//!
//! Accepts the calculator inputs as JSON via a Lambda Function URL and
//! returns the projection report. Amount and rate fields may be sent either
//! as numbers or as the text a user typed ("100.000.000 ₫", "7,2 %").
//!
//! Status codes: 200 report, 400 malformed request or unknown frequency,
//! 422 inputs not ready (with reasons).

use aws_lambda_events::event::lambda_function_urls::{LambdaFunctionUrlRequest, LambdaFunctionUrlResponse};
use compound_growth::params::{normalize_amount, normalize_rate, normalize_years, NotReadyReason};
use compound_growth::{check_readiness, project, CompoundFrequency, GateConfig, ProjectionReport, RawParameters, Readiness};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// A field sent either as a JSON number or as user-typed text
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FieldInput {
    Number(f64),
    Text(String),
}

impl FieldInput {
    fn normalize_with(&self, normalize: fn(&str) -> Option<f64>) -> Option<f64> {
        match self {
            FieldInput::Number(n) if n.is_finite() => Some(*n),
            FieldInput::Number(_) => None,
            FieldInput::Text(s) => normalize(s),
        }
    }
}

/// Input payload, field names as in the calculator form
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectionRequest {
    #[serde(default)]
    initial_investment: Option<FieldInput>,
    #[serde(default)]
    monthly_contribution: Option<FieldInput>,
    #[serde(default, alias = "interestRate")]
    annual_interest_rate: Option<FieldInput>,
    #[serde(default)]
    years: Option<FieldInput>,
    #[serde(default)]
    compound_frequency: Option<String>,
}

impl ProjectionRequest {
    fn to_raw(&self, config: &GateConfig) -> Result<RawParameters, compound_growth::GrowthError> {
        let compound_frequency = match &self.compound_frequency {
            Some(text) => text.parse::<CompoundFrequency>()?,
            None => config.default_frequency,
        };

        let field = |input: &Option<FieldInput>, normalize: fn(&str) -> Option<f64>| {
            input.as_ref().and_then(|i| i.normalize_with(normalize))
        };

        Ok(RawParameters {
            initial_investment: field(&self.initial_investment, normalize_amount),
            monthly_contribution: field(&self.monthly_contribution, normalize_amount),
            annual_interest_rate: field(&self.annual_interest_rate, normalize_rate),
            years: field(&self.years, normalize_years),
            compound_frequency,
        })
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasons: Option<&'a [NotReadyReason]>,
}

/// Status and JSON body, independent of the Lambda event types
#[derive(Debug)]
struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    fn json<T: Serialize>(status: u16, body: &T) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self { status, body },
            Err(e) => Self::error(500, &format!("Failed to serialize response: {}", e)),
        }
    }

    fn error(status: u16, message: &str) -> Self {
        let body = serde_json::json!({ "error": message }).to_string();
        Self { status, body }
    }
}

/// Core request handling: method, optional body, config in; response out
fn handle(method: &str, body: Option<&str>, config: &GateConfig) -> ApiResponse {
    if method.eq_ignore_ascii_case("OPTIONS") {
        return ApiResponse { status: 200, body: String::new() };
    }

    let body = body.filter(|b| !b.trim().is_empty()).unwrap_or("{}");
    let request: ProjectionRequest = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => return ApiResponse::error(400, &format!("Invalid JSON: {}", e)),
    };

    let raw = match request.to_raw(config) {
        Ok(raw) => raw,
        Err(e) => return ApiResponse::error(400, &e.to_string()),
    };

    match check_readiness(&raw, config) {
        Readiness::Ready(params) => {
            let start = std::time::Instant::now();
            let result = project(&params);
            info!("projected {} years in {:?}", params.years, start.elapsed());
            ApiResponse::json(200, &ProjectionReport::new(params, result))
        }
        Readiness::NotReady(reasons) => {
            warn!("rejecting request: {} problem(s)", reasons.len());
            ApiResponse::json(
                422,
                &ErrorBody {
                    error: "not ready to calculate",
                    reasons: Some(&reasons),
                },
            )
        }
    }
}

fn to_lambda_response(response: ApiResponse) -> Result<LambdaFunctionUrlResponse, Error> {
    let mut lambda_response = LambdaFunctionUrlResponse {
        status_code: response.status as i64,
        headers: Default::default(),
        body: if response.body.is_empty() { None } else { Some(response.body) },
        is_base64_encoded: false,
        cookies: Vec::new(),
    };

    let headers = &mut lambda_response.headers;
    headers.insert("content-type", "application/json".parse()?);
    headers.insert("access-control-allow-origin", "*".parse()?);
    headers.insert("access-control-allow-methods", "POST, OPTIONS".parse()?);
    headers.insert("access-control-allow-headers", "Content-Type".parse()?);

    Ok(lambda_response)
}

/// Lambda handler function
async fn handler(
    event: LambdaEvent<LambdaFunctionUrlRequest>,
    config: &GateConfig,
) -> Result<LambdaFunctionUrlResponse, Error> {
    let request = event.payload;
    let method = request.request_context.http.method.as_deref().unwrap_or("POST");

    let response = if request.is_base64_encoded {
        ApiResponse::error(400, "Base64-encoded bodies are not supported")
    } else {
        handle(method, request.body.as_deref(), config)
    };

    to_lambda_response(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let config = GateConfig::from_env();
    run(service_fn(move |event| {
        let config = config.clone();
        async move { handler(event, &config).await }
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_json(response: &ApiResponse) -> serde_json::Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[test]
    fn test_text_inputs_projected() {
        let body = r#"{
            "initialInvestment": "100.000.000 ₫",
            "monthlyContribution": "5.000.000 ₫",
            "interestRate": "7,2 %",
            "years": "20",
            "compoundFrequency": "monthly"
        }"#;
        let response = handle("POST", Some(body), &GateConfig::default());

        assert_eq!(response.status, 200);
        let json = body_json(&response);
        assert_eq!(json["yearlyBreakdown"].as_array().map(|a| a.len()), Some(20));
        assert_eq!(json["yearlyBreakdown"][0]["totalContributions"], 160_000_000.0);
    }

    #[test]
    fn test_numeric_inputs_skip_text_normalization() {
        let body = r#"{"initialInvestment": 100, "monthlyContribution": 0,
                       "annualInterestRate": 12, "years": 1, "compoundFrequency": "annually"}"#;
        let response = handle("POST", Some(body), &GateConfig::default());

        assert_eq!(response.status, 200);
        let fv = body_json(&response)["futureValue"].as_f64().unwrap();
        assert!((fv - 112.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_fields_return_reasons() {
        let response = handle("POST", None, &GateConfig::default());

        assert_eq!(response.status, 422);
        let json = body_json(&response);
        assert_eq!(json["reasons"].as_array().map(|a| a.len()), Some(4));
        assert_eq!(json["reasons"][0]["reason"], "missing");
        assert_eq!(json["reasons"][0]["field"], "initialInvestment");
    }

    #[test]
    fn test_unknown_frequency_rejected() {
        let body = r#"{"initialInvestment": 1, "monthlyContribution": 1,
                       "annualInterestRate": 1, "years": 1, "compoundFrequency": "weekly"}"#;
        let response = handle("POST", Some(body), &GateConfig::default());
        assert_eq!(response.status, 400);
        assert!(response.body.contains("weekly"));
    }

    #[test]
    fn test_invalid_json_and_preflight() {
        assert_eq!(handle("POST", Some("{not json"), &GateConfig::default()).status, 400);

        let preflight = handle("OPTIONS", None, &GateConfig::default());
        assert_eq!(preflight.status, 200);
        assert!(preflight.body.is_empty());
    }
}
