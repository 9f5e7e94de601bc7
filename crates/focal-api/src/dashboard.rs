use axum::{extract::State, Extension, Json};
use uuid::Uuid;

use focal_types::api::{BookingView, Claims, DashboardResponse};

use crate::auth::AppState;
use crate::error::{ApiError, ApiResult};
use crate::views;

fn split_completed(rows: Vec<focal_db::models::BookingRow>) -> (Vec<BookingView>, Vec<BookingView>) {
    let mut active = Vec::new();
    let mut completed = Vec::new();
    for row in &rows {
        if row.status == "completed" {
            completed.push(views::booking_view(row));
        } else {
            active.push(views::booking_view(row));
        }
    }
    (active, completed)
}

/// Everything the account page needs in one round trip: profile, portfolio,
/// both booking directions, favorites, support tickets and (for admins)
/// the open-ticket inbox.
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<Json<DashboardResponse>> {
    let user_id = claims.sub.to_string();
    let user = state.db.get_user_by_id(&user_id)?.ok_or(ApiError::NotFound)?;

    let photographer = state.db.get_photographer_by_user(&user_id)?;

    let client = if photographer.is_none() {
        if state.db.get_client_profile(&user_id)?.is_none() {
            state
                .db
                .create_client_profile(&Uuid::new_v4().to_string(), &user_id)?;
        }
        state.db.get_client_profile(&user_id)?
    } else {
        None
    };

    let (photos, received_active, received_completed) = match &photographer {
        Some(profile) => {
            let photos = state
                .db
                .list_photos_by_photographer(&profile.id, Some(&user_id))?;
            let (active, completed) =
                split_completed(state.db.list_received_bookings(&profile.id)?);
            (
                photos.iter().map(views::photo_view).collect(),
                active,
                completed,
            )
        }
        None => (Vec::new(), Vec::new(), Vec::new()),
    };

    let (sent_active, sent_completed) = split_completed(state.db.list_sent_bookings(&user_id)?);

    let favorites = state
        .db
        .list_favorites(&user_id)?
        .iter()
        .map(views::favorite_view)
        .collect();

    let support_tickets = state
        .db
        .list_support_requests_by_user(&user_id)?
        .iter()
        .map(views::support_view)
        .collect();

    let admin_inbox = if user.is_admin {
        Some(
            state
                .db
                .list_new_support_requests()?
                .iter()
                .map(views::support_view)
                .collect::<Vec<_>>(),
        )
    } else {
        None
    };
    let admin_new_count = admin_inbox.as_ref().map(|i| i.len()).unwrap_or(0);

    Ok(Json(DashboardResponse {
        user: views::user_view(&user),
        photographer: photographer.as_ref().map(views::photographer_view),
        client: client.as_ref().map(views::client_view),
        photos,
        sent_active,
        sent_completed,
        received_active,
        received_completed,
        favorites,
        support_tickets,
        admin_inbox,
        admin_new_count,
    }))
}
