use crate::core::fun_fact::fun_fact;
use crate::core::input::NumericInput;
use crate::core::predicates::{digit_sum, is_armstrong, is_perfect, is_prime};
use crate::domain::model::{ApiRequest, ApiResponse, NumberProperties, Property};
use crate::utils::error::{Fault, Result};

pub const NUMBER_PARAM: &str = "number";

/// Computes every property of the `number` parameter's value.
pub fn evaluate(raw: &str) -> Result<NumberProperties> {
    let input = NumericInput::parse(raw)?;
    let n = input.integer;
    tracing::debug!("Parsed {:?} as {:?} (integer {})", input.raw, input.value, n);

    let mut properties = vec![if n % 2 != 0 {
        Property::Odd
    } else {
        Property::Even
    }];
    if is_armstrong(n) {
        properties.push(Property::Armstrong);
    }

    Ok(NumberProperties {
        number: input.value,
        is_prime: is_prime(n),
        is_perfect: is_perfect(n),
        properties,
        digit_sum: digit_sum(n),
        fun_fact: fun_fact(n),
    })
}

/// Handles one request. Every outcome, including failures, comes back as a
/// JSON response: 200, 400 or 500.
pub fn handle(request: &ApiRequest) -> ApiResponse {
    // 沒有參數時視為空字串，走 400
    let raw = request.param(NUMBER_PARAM).unwrap_or_default();

    let result = evaluate(raw)
        .and_then(|properties| serde_json::to_string(&properties).map_err(Fault::from));
    respond(raw, result)
}

pub fn handle_query(query: &str) -> ApiResponse {
    handle(&ApiRequest::from_query_string(query))
}

fn respond(raw: &str, result: Result<String>) -> ApiResponse {
    match result {
        Ok(body) => {
            tracing::info!("✅ {}={:?} -> 200", NUMBER_PARAM, raw);
            ApiResponse::json(200, body)
        }
        Err(Fault::Validation { input }) => {
            tracing::warn!("❌ Rejected {}={:?}", NUMBER_PARAM, input);
            let body = serde_json::json!({ "number": input, "error": true });
            ApiResponse::json(400, body.to_string())
        }
        Err(fault) => {
            tracing::error!("❌ Failed to handle {}={:?}: {}", NUMBER_PARAM, raw, fault);
            let body = serde_json::json!({ "error": fault.to_string() });
            ApiResponse::json(fault.status_code(), body.to_string())
        }
    }
}
