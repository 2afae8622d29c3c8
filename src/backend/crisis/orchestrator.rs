/**
 * Crisis Response Orchestrator
 *
 * Builds the panic button reply in three layers:
 *
 * 1. The deterministic baseline for the reported severity.
 * 2. `ai_guidance` from the text-generation service, raced against a short
 *    timeout. A timeout, an error or an empty reply all yield
 *    `FALLBACK_GUIDANCE`.
 * 3. An outer guard that catches a panic anywhere in steps 1-2 and returns
 *    the last-resort payload instead.
 *
 * `respond` therefore always returns a well-formed `PanicResponse`, and it
 * returns within the configured timeout plus local processing time.
 */
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures_util::FutureExt;

use crate::backend::companion::client::{CompanionClient, CompanionError};
use crate::backend::companion::prompts::{crisis_system_prompt, crisis_user_message};
use crate::backend::crisis::responses::{baseline_response, last_resort_response, FALLBACK_GUIDANCE};
use crate::shared::{PanicRequest, PanicResponse, Severity};

/// Assembles panic button replies
#[derive(Debug, Clone)]
pub struct CrisisResponder {
    companion: CompanionClient,
    timeout: Duration,
}

impl CrisisResponder {
    pub fn new(companion: CompanionClient, timeout: Duration) -> Self {
        Self { companion, timeout }
    }

    /// Build the reply for a distress report. Never fails.
    pub async fn respond(&self, request: &PanicRequest) -> PanicResponse {
        guard(self.assemble(request)).await
    }

    async fn assemble(&self, request: &PanicRequest) -> PanicResponse {
        let severity = request.severity();
        tracing::info!("Panic button pressed ({} distress)", severity.as_str());

        let mut response = baseline_response(severity);
        response.ai_guidance = Some(self.guidance(severity, request.description()).await);
        response
    }

    async fn guidance(&self, severity: Severity, description: Option<&str>) -> String {
        let system_prompt = crisis_system_prompt(severity, description);
        let user_message = crisis_user_message(severity, description);

        let call = self.companion.complete(&system_prompt, &user_message);
        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(text)) => text,
            Ok(Err(CompanionError::NotConfigured)) => {
                tracing::debug!("No text-generation key configured, using fallback guidance");
                FALLBACK_GUIDANCE.to_string()
            }
            Ok(Err(e)) => {
                tracing::error!("AI error during panic response: {}", e);
                FALLBACK_GUIDANCE.to_string()
            }
            Err(_) => {
                tracing::warn!(
                    "AI response timed out after {:?} during panic response, using fallback",
                    self.timeout
                );
                FALLBACK_GUIDANCE.to_string()
            }
        }
    }
}

/// Run `assembly`, substituting the last-resort payload if it panics
pub async fn guard<F>(assembly: F) -> PanicResponse
where
    F: Future<Output = PanicResponse>,
{
    match AssertUnwindSafe(assembly).catch_unwind().await {
        Ok(response) => response,
        Err(_) => {
            tracing::error!("Panic response assembly failed, returning last-resort payload");
            last_resort_response()
        }
    }
}
