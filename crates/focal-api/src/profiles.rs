use axum::{
    extract::{Multipart, State},
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;

use focal_types::api::{Claims, ClientProfileUpdate, PhotographerProfileUpdate, ProfileResponse};

use crate::auth::AppState;
use crate::error::{ApiError, ApiResult};
use crate::{image, validate, views};

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<impl IntoResponse> {
    let user_id = claims.sub.to_string();
    let user = state.db.get_user_by_id(&user_id)?.ok_or(ApiError::NotFound)?;

    if let Some(photographer) = state.db.get_photographer_by_user(&user_id)? {
        return Ok(Json(ProfileResponse {
            user: views::user_view(&user),
            photographer: Some(views::photographer_view(&photographer)),
            client: None,
        }));
    }

    // Clients registered before the profile table existed get one lazily,
    // same as the original dashboard's get-or-create.
    if state.db.get_client_profile(&user_id)?.is_none() {
        state
            .db
            .create_client_profile(&Uuid::new_v4().to_string(), &user_id)?;
    }
    let client = state
        .db
        .get_client_profile(&user_id)?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(ProfileResponse {
        user: views::user_view(&user),
        photographer: None,
        client: Some(views::client_view(&client)),
    }))
}

pub async fn update_photographer_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(update): Json<PhotographerProfileUpdate>,
) -> ApiResult<impl IntoResponse> {
    validate::check_optional_phone(update.phone_number.as_deref())?;

    let user_id = claims.sub.to_string();
    state
        .db
        .get_photographer_by_user(&user_id)?
        .ok_or(ApiError::NotFound)?;

    state.db.update_photographer_profile(&user_id, &update)?;

    let profile = state
        .db
        .get_photographer_by_user(&user_id)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(views::photographer_view(&profile)))
}

pub async fn update_client_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(update): Json<ClientProfileUpdate>,
) -> ApiResult<impl IntoResponse> {
    validate::check_optional_phone(update.phone_number.as_deref())?;

    let user_id = claims.sub.to_string();
    state
        .db
        .get_client_profile(&user_id)?
        .ok_or(ApiError::NotFound)?;

    state.db.update_client_profile(&user_id, &update)?;

    let profile = state
        .db
        .get_client_profile(&user_id)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(views::client_view(&profile)))
}

/// Multipart upload of a new profile image. The upload is compressed once
/// here; the stored file is never recompressed on later profile edits.
pub async fn upload_profile_image(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    mut multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    let mut upload: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::Validation("Malformed multipart body".into()))?
    {
        if field.name() == Some("image") {
            let bytes = field
                .bytes()
                .await
                .map_err(|_| ApiError::Validation("Failed to read image field".into()))?;
            upload = Some(bytes.to_vec());
        }
    }
    let bytes = upload.ok_or_else(|| ApiError::Validation("No image field in upload".into()))?;

    // CPU-heavy decode/encode off the async runtime
    let compressed = tokio::task::spawn_blocking(move || {
        image::compress(&bytes, image::PROFILE_IMAGE)
    })
    .await
    .map_err(|e| anyhow::anyhow!("spawn_blocking join error: {}", e))?
    .map_err(|_| ApiError::Validation("Uploaded file is not a valid image".into()))?;

    let relative = state.media.save("profiles", &compressed).await?;

    let user_id = claims.sub.to_string();
    let old = if state.db.get_photographer_by_user(&user_id)?.is_some() {
        state.db.set_photographer_image(&user_id, Some(&relative))?
    } else if state.db.get_client_profile(&user_id)?.is_some() {
        state.db.set_client_image(&user_id, Some(&relative))?
    } else {
        state.media.delete(&relative).await.ok();
        return Err(ApiError::NotFound);
    };

    if let Some(old) = old {
        if let Err(e) = state.media.delete(&old).await {
            tracing::warn!("failed to remove replaced profile image {}: {}", old, e);
        }
    }

    Ok(Json(serde_json::json!({ "status": "ok", "image": relative })))
}

pub async fn delete_profile_image(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<impl IntoResponse> {
    let user_id = claims.sub.to_string();

    let old = if state.db.get_photographer_by_user(&user_id)?.is_some() {
        state.db.set_photographer_image(&user_id, None)?
    } else if state.db.get_client_profile(&user_id)?.is_some() {
        state.db.set_client_image(&user_id, None)?
    } else {
        return Err(ApiError::NotFound);
    };

    if let Some(old) = old {
        state.media.delete(&old).await?;
    }

    Ok(Json(serde_json::json!({ "status": "ok" })))
}
