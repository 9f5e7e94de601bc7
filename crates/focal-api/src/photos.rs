use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;

use focal_types::api::{Claims, PhotoView};
use focal_types::models::Specialization;

use crate::auth::AppState;
use crate::error::{ApiError, ApiResult};
use crate::{image, views};

const FEATURED_LIMIT: u32 = 6;

/// Multipart portfolio upload: one `category` field plus any number of
/// `image` fields. Each image is compressed once and stored.
pub async fn upload_photos(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    mut multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    let photographer = state
        .db
        .get_photographer_by_user(&claims.sub.to_string())?
        .ok_or_else(|| ApiError::Forbidden("Only photographers can upload photos".into()))?;

    let mut category = Specialization::Wedding;
    let mut uploads: Vec<Vec<u8>> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::Validation("Malformed multipart body".into()))?
    {
        match field.name() {
            Some("category") => {
                let text = field
                    .text()
                    .await
                    .map_err(|_| ApiError::Validation("Failed to read category field".into()))?;
                category = text
                    .parse()
                    .map_err(|_| ApiError::Validation(format!("Unknown category '{}'", text)))?;
            }
            Some("image") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| ApiError::Validation("Failed to read image field".into()))?;
                uploads.push(bytes.to_vec());
            }
            _ => {}
        }
    }

    if uploads.is_empty() {
        return Err(ApiError::Validation("No images selected".into()));
    }

    let mut added = 0usize;
    for bytes in uploads {
        let compressed = tokio::task::spawn_blocking(move || image::compress(&bytes, image::PHOTO))
            .await
            .map_err(|e| anyhow::anyhow!("spawn_blocking join error: {}", e))?
            .map_err(|_| ApiError::Validation("Uploaded file is not a valid image".into()))?;

        let relative = state.media.save("photos", &compressed).await?;
        state.db.insert_photo(
            &Uuid::new_v4().to_string(),
            &photographer.id,
            &relative,
            category.as_str(),
        )?;
        added += 1;
    }

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "status": "ok", "added": added })),
    ))
}

pub async fn delete_photo(
    State(state): State<AppState>,
    Path(photo_id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<impl IntoResponse> {
    let photo = state
        .db
        .get_photo(&photo_id.to_string(), None)?
        .ok_or(ApiError::NotFound)?;

    if photo.owner_user_id != claims.sub.to_string() {
        return Err(ApiError::NotFound);
    }

    if let Some(image_path) = state.db.delete_photo(&photo.id)? {
        state.media.delete(&image_path).await?;
    }

    Ok(Json(serde_json::json!({ "status": "ok" })))
}

pub async fn gallery(
    State(state): State<AppState>,
    claims: Option<Extension<Claims>>,
) -> ApiResult<Json<Vec<PhotoView>>> {
    let viewer = claims.as_ref().map(|Extension(c)| c.sub.to_string());
    let rows = state.db.list_all_photos(viewer.as_deref())?;
    Ok(Json(rows.iter().map(views::photo_view).collect()))
}

/// Home-page strip: photos ranked by likes received in the last week,
/// falling back to a random sample when nothing was liked recently.
pub async fn featured_photos(
    State(state): State<AppState>,
    claims: Option<Extension<Claims>>,
) -> ApiResult<Json<Vec<PhotoView>>> {
    let viewer = claims.as_ref().map(|Extension(c)| c.sub.to_string());
    let since = (chrono::Utc::now() - chrono::Duration::days(7))
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();

    let mut rows = state
        .db
        .list_featured_photos(viewer.as_deref(), &since, FEATURED_LIMIT)?;
    if rows.is_empty() {
        rows = state.db.list_random_photos(viewer.as_deref(), FEATURED_LIMIT)?;
    }

    Ok(Json(rows.iter().map(views::photo_view).collect()))
}
