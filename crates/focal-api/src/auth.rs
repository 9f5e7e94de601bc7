use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension, Json};
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use focal_db::Database;
use focal_types::api::{
    AuthResponse, ChangePasswordRequest, Claims, LoginRequest, RegisterRequest,
};

use crate::error::{ApiError, ApiResult};
use crate::media::MediaStore;
use crate::validate;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub media: MediaStore,
    pub jwt_secret: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<impl IntoResponse> {
    validate::check_username(&req.username)?;
    validate::check_new_password(&req.password, &req.confirm_password)?;

    if state.db.get_user_by_username(&req.username)?.is_some() {
        return Err(ApiError::Conflict("Username is already taken".into()));
    }

    let password_hash = hash_password(&req.password)?;
    let user_id = Uuid::new_v4();

    state
        .db
        .create_user(&user_id.to_string(), &req.username, &req.email, &password_hash)?;

    if req.is_photographer {
        state.db.create_photographer_profile(
            &Uuid::new_v4().to_string(),
            &user_id.to_string(),
            "Aspiring photographer",
            "Tell clients about yourself...",
        )?;
    } else {
        state
            .db
            .create_client_profile(&Uuid::new_v4().to_string(), &user_id.to_string())?;
    }

    let token = create_token(&state.jwt_secret, user_id, &req.username, false)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user_id,
            username: req.username,
            token,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .db
        .get_user_by_username(&req.username)?
        .ok_or(ApiError::Unauthorized)?;

    verify_password(&req.password, &user.password)?;

    let user_id: Uuid = user
        .id
        .parse()
        .map_err(|e| anyhow::anyhow!("corrupt user id: {}", e))?;

    let token = create_token(&state.jwt_secret, user_id, &user.username, user.is_admin)?;

    Ok(Json(AuthResponse {
        user_id,
        username: user.username,
        token,
    }))
}

pub async fn change_password(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<ChangePasswordRequest>,
) -> ApiResult<impl IntoResponse> {
    validate::check_new_password(&req.new_password, &req.confirm_password)?;

    let user = state
        .db
        .get_user_by_id(&claims.sub.to_string())?
        .ok_or(ApiError::NotFound)?;

    verify_password(&req.current_password, &user.password)?;

    let new_hash = hash_password(&req.new_password)?;
    state.db.update_password(&user.id, &new_hash)?;

    Ok(Json(serde_json::json!({ "status": "ok" })))
}

/// Delete the account; dependent rows go via cascades, stored media files
/// are removed best-effort afterwards.
pub async fn delete_account(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> ApiResult<impl IntoResponse> {
    let user_id = claims.sub.to_string();

    let mut files: Vec<String> = Vec::new();
    if let Some(profile) = state.db.get_photographer_by_user(&user_id)? {
        files.extend(profile.profile_image.clone());
        for photo in state.db.list_photos_by_photographer(&profile.id, None)? {
            files.push(photo.image);
        }
    }
    if let Some(client) = state.db.get_client_profile(&user_id)? {
        files.extend(client.profile_image);
    }

    state.db.delete_user(&user_id)?;

    for file in files {
        if let Err(e) = state.media.delete(&file).await {
            tracing::warn!("failed to remove media file {}: {}", file, e);
        }
    }

    Ok(Json(serde_json::json!({ "status": "ok" })))
}

fn hash_password(password: &str) -> ApiResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("password hashing failed: {}", e))?;
    Ok(hash.to_string())
}

fn verify_password(password: &str, stored_hash: &str) -> ApiResult<()> {
    let parsed =
        PasswordHash::new(stored_hash).map_err(|e| anyhow::anyhow!("corrupt password hash: {}", e))?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| ApiError::Unauthorized)?;
    Ok(())
}

fn create_token(secret: &str, user_id: Uuid, username: &str, is_admin: bool) -> anyhow::Result<String> {
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        is_admin,
        exp: (chrono::Utc::now() + chrono::Duration::days(30)).timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok(token)
}
