//! Interaction handlers
//!
//! Button presses relayed from the chat platform.

use axum::{extract::State, Json};
use roster_service::dto::{InteractionRequest, InteractionResponse};
use roster_service::RosterAction;

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Decode a button token and dispatch it to the engine
///
/// POST /interactions
pub async fn handle_interaction(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<InteractionRequest>,
) -> ApiResult<Json<InteractionResponse>> {
    let action = RosterAction::from_token(&request.custom_id)?;
    let roster_message = action.target_message(request.message_id);

    let outcome = state
        .engine()
        .dispatch(
            request.channel_id,
            request.message_id,
            request.actor_id,
            action,
        )
        .await
        .map_err(|e| ApiError::rejected_action(e, roster_message))?;

    Ok(Json(outcome.into()))
}
