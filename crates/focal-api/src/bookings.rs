use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;

use focal_db::models::BookingRow;
use focal_db::BookingSide;
use focal_types::api::{BookingCreateRequest, BookingStatusRequest, Claims};
use focal_types::models::BookingStatus;

use crate::auth::AppState;
use crate::error::{ApiError, ApiResult};
use crate::{validate, views};

/// Which side of the booking the caller is on, if any.
fn acting_side(booking: &BookingRow, caller: &str) -> Option<BookingSide> {
    if booking.client_id == caller {
        Some(BookingSide::Client)
    } else if booking.photographer_user_id == caller {
        Some(BookingSide::Photographer)
    } else {
        None
    }
}

pub async fn create_booking(
    State(state): State<AppState>,
    Path(photographer_id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<BookingCreateRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.message.trim().is_empty() {
        return Err(ApiError::Validation("Message is required".into()));
    }
    validate::check_required_phone(&req.contact_phone)?;

    let photographer = state
        .db
        .get_photographer(&photographer_id.to_string())?
        .ok_or(ApiError::NotFound)?;

    let booking_id = Uuid::new_v4();
    state.db.insert_booking(
        &booking_id.to_string(),
        &claims.sub.to_string(),
        &photographer.id,
        &req.message,
        &req.contact_phone,
    )?;

    let booking = state
        .db
        .get_booking(&booking_id.to_string())?
        .ok_or(ApiError::NotFound)?;

    Ok((StatusCode::CREATED, Json(views::booking_view(&booking))))
}

/// Photographer moves a booking addressed to them through the lifecycle.
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<BookingStatusRequest>,
) -> ApiResult<impl IntoResponse> {
    let booking = state
        .db
        .get_booking(&booking_id.to_string())?
        .ok_or(ApiError::NotFound)?;

    if booking.photographer_user_id != claims.sub.to_string() {
        return Err(ApiError::NotFound);
    }

    state
        .db
        .set_booking_status(&booking.id, req.status.as_str())?;

    let booking = state.db.get_booking(&booking.id)?.ok_or(ApiError::NotFound)?;
    Ok(Json(views::booking_view(&booking)))
}

/// Cancel/dismiss a booking.
///
/// Terminal bookings (completed/cancelled) are soft-deleted for the
/// calling side only; once both sides have dismissed one, the row is
/// removed for good. Active bookings transition to cancelled for either
/// party, so the other side keeps a record of what happened.
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(booking_id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<impl IntoResponse> {
    let booking = state
        .db
        .get_booking(&booking_id.to_string())?
        .ok_or(ApiError::NotFound)?;

    let caller = claims.sub.to_string();
    let side = acting_side(&booking, &caller).ok_or(ApiError::NotFound)?;

    let status: BookingStatus = booking
        .status
        .parse()
        .map_err(|_| anyhow::anyhow!("corrupt booking status '{}'", booking.status))?;

    if status.is_terminal() {
        let removed = state.db.soft_delete_booking(&booking.id, side)?;
        return Ok(Json(serde_json::json!({
            "status": "ok",
            "dismissed": true,
            "removed": removed,
        })));
    }

    state
        .db
        .set_booking_status(&booking.id, BookingStatus::Cancelled.as_str())?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "cancelled": true,
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(client_id: &str, photographer_user_id: &str) -> BookingRow {
        BookingRow {
            id: "b1".into(),
            client_id: client_id.into(),
            client_username: "alice".into(),
            photographer_id: "p1".into(),
            photographer_user_id: photographer_user_id.into(),
            photographer_username: "bob".into(),
            status: "new".into(),
            message: "Shoot".into(),
            contact_phone: "+7 (900) 000-00-00".into(),
            created_at: "2026-01-01 00:00:00".into(),
            updated_at: "2026-01-01 00:00:00".into(),
            deleted_by_client: false,
            deleted_by_photographer: false,
        }
    }

    #[test]
    fn either_party_can_act_on_their_booking() {
        let row = booking("u-client", "u-photographer");
        assert_eq!(acting_side(&row, "u-client"), Some(BookingSide::Client));
        assert_eq!(
            acting_side(&row, "u-photographer"),
            Some(BookingSide::Photographer)
        );
    }

    #[test]
    fn strangers_are_not_a_side() {
        let row = booking("u-client", "u-photographer");
        assert_eq!(acting_side(&row, "u-other"), None);
    }

    #[test]
    fn active_statuses_cancel_instead_of_dismissing() {
        // Active bookings go through the status transition; only terminal
        // ones take the per-side dismiss path.
        assert!(!"new".parse::<BookingStatus>().unwrap().is_terminal());
        assert!(!"in_progress".parse::<BookingStatus>().unwrap().is_terminal());
        assert!("completed".parse::<BookingStatus>().unwrap().is_terminal());
        assert!("cancelled".parse::<BookingStatus>().unwrap().is_terminal());
    }
}
