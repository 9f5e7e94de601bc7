use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;

use focal_types::api::Claims;

use crate::auth::AppState;
use crate::error::{ApiError, ApiResult};

pub async fn toggle_photo_like(
    State(state): State<AppState>,
    Path(photo_id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<impl IntoResponse> {
    let caller = claims.sub.to_string();
    let photo = state
        .db
        .get_photo(&photo_id.to_string(), Some(&caller))?
        .ok_or(ApiError::NotFound)?;

    if photo.owner_user_id == caller {
        return Err(ApiError::Forbidden("You cannot like your own photos".into()));
    }

    let (is_liked, likes_count) =
        state
            .db
            .toggle_photo_like(&Uuid::new_v4().to_string(), &caller, &photo.id)?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "is_liked": is_liked,
        "likes_count": likes_count,
    })))
}
