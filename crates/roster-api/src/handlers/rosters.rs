//! Roster handlers
//!
//! Endpoints for opening and viewing rosters.

use axum::{extract::State, Json};
use roster_service::dto::{OpenRosterRequest, OpenRosterResponse, RosterResponse};
use roster_service::roster_buttons;

use crate::extractors::{RosterLocationPath, SnowflakePath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Open a roster on a posted message
///
/// POST /rosters
pub async fn open_roster(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<OpenRosterRequest>,
) -> ApiResult<Created<Json<OpenRosterResponse>>> {
    let buttons = roster_buttons()?;

    let view = state
        .engine()
        .open(
            request.guild_id,
            request.channel_id,
            request.message_id,
            request.capacity,
            request.author_id,
        )
        .await?;

    Ok(Created(Json(OpenRosterResponse {
        roster: view.into(),
        buttons: buttons.into(),
    })))
}

/// Get the roster rendered on a message
///
/// GET /channels/{channel_id}/messages/{message_id}/roster
pub async fn get_roster(
    State(state): State<AppState>,
    SnowflakePath(path): SnowflakePath<RosterLocationPath>,
) -> ApiResult<Json<RosterResponse>> {
    let view = state
        .engine()
        .view(path.channel_id()?, path.message_id()?)
        .await?;
    Ok(Json(view.into()))
}
