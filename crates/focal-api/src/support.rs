use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;

use focal_types::api::{Claims, SupportCreateRequest, SupportReplyRequest, SupportTicketView};

use crate::auth::AppState;
use crate::error::{ApiError, ApiResult};
use crate::middleware::require_admin;
use crate::views;

pub async fn create_ticket(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<SupportCreateRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.message.trim().is_empty() {
        return Err(ApiError::Validation("Message is required".into()));
    }

    let id = Uuid::new_v4();
    state.db.insert_support_request(
        &id.to_string(),
        &claims.sub.to_string(),
        req.subject.as_deref().filter(|s| !s.trim().is_empty()),
        &req.message,
    )?;

    let row = state
        .db
        .get_support_request(&id.to_string())?
        .ok_or(ApiError::NotFound)?;
    Ok((StatusCode::CREATED, Json(views::support_view(&row))))
}

pub async fn my_tickets(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<Vec<SupportTicketView>>> {
    let rows = state
        .db
        .list_support_requests_by_user(&claims.sub.to_string())?;
    Ok(Json(rows.iter().map(views::support_view).collect()))
}

/// Admin inbox: only tickets nobody has replied to yet.
pub async fn inbox(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<Vec<SupportTicketView>>> {
    require_admin(&claims)?;
    let rows = state.db.list_new_support_requests()?;
    Ok(Json(rows.iter().map(views::support_view).collect()))
}

pub async fn reply(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<SupportReplyRequest>,
) -> ApiResult<impl IntoResponse> {
    require_admin(&claims)?;

    if req.response.trim().is_empty() {
        return Err(ApiError::Validation("Cannot send an empty response".into()));
    }

    let ticket = state
        .db
        .get_support_request(&id.to_string())?
        .ok_or(ApiError::NotFound)?;

    state.db.reply_support_request(&ticket.id, &req.response)?;

    let row = state
        .db
        .get_support_request(&ticket.id)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(views::support_view(&row)))
}

/// Admins can delete any ticket; the owner can remove their own once it
/// has been resolved.
pub async fn delete_ticket(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<impl IntoResponse> {
    let ticket = state
        .db
        .get_support_request(&id.to_string())?
        .ok_or(ApiError::NotFound)?;

    let owner = ticket.user_id == claims.sub.to_string();
    let allowed = claims.is_admin || (owner && ticket.status == "resolved");
    if !allowed {
        return Err(ApiError::Forbidden(
            "You cannot delete this support request".into(),
        ));
    }

    state.db.delete_support_request(&ticket.id)?;
    Ok(Json(serde_json::json!({ "status": "ok" })))
}
