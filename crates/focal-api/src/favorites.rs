use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;

use focal_types::api::Claims;

use crate::auth::AppState;
use crate::error::{ApiError, ApiResult};

/// Get-or-create/delete toggle guarded by the unique (user, photographer)
/// constraint.
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(photographer_id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<impl IntoResponse> {
    let photographer = state
        .db
        .get_photographer(&photographer_id.to_string())?
        .ok_or(ApiError::NotFound)?;

    let is_favorite = state.db.toggle_favorite(
        &Uuid::new_v4().to_string(),
        &claims.sub.to_string(),
        &photographer.id,
    )?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "is_favorite": is_favorite,
    })))
}
