use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Extension, Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use uuid::Uuid;

use focal_types::api::{Claims, PhotographerDetail};

use crate::auth::AppState;
use crate::error::{ApiError, ApiResult};
use crate::views;

pub const SESSION_COOKIE: &str = "focal_session";

/// Photographers viewing their own page never count; anyone else,
/// authenticated or anonymous, does.
fn counts_as_view(viewer: Option<&str>, owner_user_id: &str) -> bool {
    viewer != Some(owner_user_id)
}

fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
}

/// Public profile page. Side effect: records a profile view, deduplicated
/// per authenticated user or per anonymous session cookie; the cookie is
/// minted here on first visit.
pub async fn photographer_detail(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    claims: Option<Extension<Claims>>,
    headers: HeaderMap,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<PhotographerDetail>)> {
    let mut photographer = state
        .db
        .get_photographer(&id.to_string())?
        .ok_or(ApiError::NotFound)?;

    let ip = client_ip(&headers);
    let mut jar = jar;

    let counted = match &claims {
        Some(Extension(claims)) => {
            if !counts_as_view(Some(&claims.sub.to_string()), &photographer.user_id) {
                false
            } else {
                state.db.record_profile_view(
                    &Uuid::new_v4().to_string(),
                    &photographer.id,
                    Some(&claims.sub.to_string()),
                    None,
                    ip.as_deref(),
                )?
            }
        }
        None => {
            let session = match jar.get(SESSION_COOKIE) {
                Some(cookie) => cookie.value().to_string(),
                None => {
                    let session = Uuid::new_v4().to_string();
                    jar = jar.add(
                        Cookie::build((SESSION_COOKIE, session.clone()))
                            .path("/")
                            .http_only(true),
                    );
                    session
                }
            };
            state.db.record_profile_view(
                &Uuid::new_v4().to_string(),
                &photographer.id,
                None,
                Some(&session),
                ip.as_deref(),
            )?
        }
    };
    if counted {
        photographer.views_count += 1;
    }

    let viewer = claims.as_ref().map(|Extension(c)| c.sub.to_string());
    let photos = state
        .db
        .list_photos_by_photographer(&photographer.id, viewer.as_deref())?;

    let categories = state
        .db
        .photo_categories(&photographer.id)?
        .iter()
        .map(|raw| views::parse_specialization(raw))
        .collect();

    let is_favorite = match &viewer {
        Some(user_id) => state.db.is_favorite(user_id, &photographer.id)?,
        None => false,
    };

    let detail = PhotographerDetail {
        bio: photographer.bio.clone(),
        phone_number: photographer.phone_number.clone(),
        social_vk: photographer.social_vk.clone(),
        social_telegram: photographer.social_telegram.clone(),
        website: photographer.website.clone(),
        photographer: views::specialist_summary(&photographer, is_favorite),
        photos: photos.iter().map(views::photo_view).collect(),
        categories,
        is_favorite,
    };

    Ok((jar, Json(detail)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owners_visit_is_not_a_view() {
        assert!(!counts_as_view(Some("u-owner"), "u-owner"));
    }

    #[test]
    fn other_visitors_count() {
        assert!(counts_as_view(Some("u-viewer"), "u-owner"));
        assert!(counts_as_view(None, "u-owner"));
    }
}
