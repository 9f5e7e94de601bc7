use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use uuid::Uuid;

use focal_types::api::{Claims, NewsItem};

use crate::auth::AppState;
use crate::error::{ApiError, ApiResult};
use crate::middleware::require_admin;
use crate::{image, views};

pub async fn list_news(State(state): State<AppState>) -> ApiResult<Json<Vec<NewsItem>>> {
    let rows = state.db.list_news()?;
    Ok(Json(rows.iter().map(views::news_item).collect()))
}

pub async fn news_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<NewsItem>> {
    let row = state
        .db
        .get_news(&id.to_string())?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(views::news_item(&row)))
}

/// Admin-only: multipart with `title`, `content` and an optional `image`.
pub async fn create_news(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    mut multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    require_admin(&claims)?;

    let mut title = String::new();
    let mut content = String::new();
    let mut upload: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::Validation("Malformed multipart body".into()))?
    {
        match field.name() {
            Some("title") => {
                title = field
                    .text()
                    .await
                    .map_err(|_| ApiError::Validation("Failed to read title".into()))?;
            }
            Some("content") => {
                content = field
                    .text()
                    .await
                    .map_err(|_| ApiError::Validation("Failed to read content".into()))?;
            }
            Some("image") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|_| ApiError::Validation("Failed to read image field".into()))?;
                upload = Some(bytes.to_vec());
            }
            _ => {}
        }
    }

    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(ApiError::Validation("Title and content are required".into()));
    }

    let stored_image = match upload {
        Some(bytes) => {
            let compressed =
                tokio::task::spawn_blocking(move || image::compress(&bytes, image::NEWS_IMAGE))
                    .await
                    .map_err(|e| anyhow::anyhow!("spawn_blocking join error: {}", e))?
                    .map_err(|_| ApiError::Validation("Uploaded file is not a valid image".into()))?;
            Some(state.media.save("news", &compressed).await?)
        }
        None => None,
    };

    let id = Uuid::new_v4();
    state
        .db
        .insert_news(&id.to_string(), &title, &content, stored_image.as_deref())?;

    let row = state.db.get_news(&id.to_string())?.ok_or(ApiError::NotFound)?;
    Ok((StatusCode::CREATED, Json(views::news_item(&row))))
}
