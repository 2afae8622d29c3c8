/**
 * AI Companion Handler
 *
 * `POST /api/ai/chat` sends the member's message to the text-generation
 * service under the companion system prompt (with the panic addendum when
 * `is_panic` is set), stores the exchange and returns the reply.
 *
 * Unlike the panic button this endpoint fails loudly: a timeout, an
 * upstream error or a missing key is a 500 with
 * "AI companion temporarily unavailable".
 */
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use sqlx::SqlitePool;

use crate::backend::companion::client::CompanionClient;
use crate::backend::companion::db::{save_exchange, CompanionExchange};
use crate::backend::companion::prompts::companion_system_prompt;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::config::ServerConfig;
use crate::shared::{CompanionReply, CompanionRequest};

const UNAVAILABLE: &str = "AI companion temporarily unavailable";

pub async fn chat_with_companion(
    State(pool): State<SqlitePool>,
    State(client): State<CompanionClient>,
    State(config): State<Arc<ServerConfig>>,
    auth: AuthUser,
    body: Result<Json<CompanionRequest>, JsonRejection>,
) -> Result<Json<CompanionReply>, BackendError> {
    let Json(request) = body?;
    request.validate()?;

    let system_prompt = companion_system_prompt(request.is_panic);
    let call = client.complete(&system_prompt, &request.message);

    let response = match tokio::time::timeout(config.companion_timeout, call).await {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            tracing::error!("AI chat error for {}: {}", auth.id(), e);
            return Err(BackendError::internal(UNAVAILABLE));
        }
        Err(_) => {
            tracing::error!(
                "AI chat for {} timed out after {:?}",
                auth.id(),
                config.companion_timeout
            );
            return Err(BackendError::internal(UNAVAILABLE));
        }
    };

    let exchange = CompanionExchange::new(auth.id(), &request.message, &response);
    save_exchange(&pool, &exchange).await?;

    Ok(Json(CompanionReply {
        response,
        is_panic_response: request.is_panic,
    }))
}
