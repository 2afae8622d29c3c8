/**
 * Panic Button Handler
 *
 * `POST /api/ai/panic-button` needs no session and always answers 200.
 * The body is read as raw bytes rather than through the `Json` extractor:
 * a missing body, a wrong content type, invalid JSON or fields of the wrong
 * type are all treated as an empty report (moderate severity, no
 * description) instead of being rejected.
 */
use axum::{body::Bytes, extract::State, response::Json};
use serde_json::Value;

use crate::backend::crisis::orchestrator::CrisisResponder;
use crate::shared::{PanicRequest, PanicResponse};

/// Read whatever usable fields the body carries
pub fn parse_panic_body(body: &[u8]) -> PanicRequest {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            if !body.is_empty() {
                tracing::warn!("Unreadable panic button body, treating as empty report: {}", e);
            }
            return PanicRequest::default();
        }
    };

    let field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
    };

    PanicRequest {
        user_id: field("user_id"),
        trigger_description: field("trigger_description"),
        severity: field("severity"),
    }
}

/// Panic button handler
///
/// # Example Request
///
/// ```http
/// POST /api/ai/panic-button HTTP/1.1
/// Content-Type: application/json
///
/// {"severity": "severe", "trigger_description": "Loud bang outside"}
/// ```
pub async fn panic_button(
    State(responder): State<CrisisResponder>,
    body: Bytes,
) -> Json<PanicResponse> {
    let request = parse_panic_body(&body);
    Json(responder.respond(&request).await)
}
