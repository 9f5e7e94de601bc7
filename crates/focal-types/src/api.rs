use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{BookingStatus, Language, Specialization, SupportStatus};

// -- JWT Claims --

/// JWT claims shared by the REST middleware and the token mint in
/// focal-api. Canonical definition lives here in focal-types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub username: String,
    pub is_admin: bool,
    pub exp: usize,
}

// -- Auth & account --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub is_photographer: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user_id: Uuid,
    pub username: String,
    pub token: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

// -- Profiles --

#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhotographerView {
    pub id: Uuid,
    pub short_intro: String,
    pub bio: String,
    pub city: Option<String>,
    pub specialization: Specialization,
    pub price: i64,
    pub language: Language,
    pub profile_image: Option<String>,
    pub views_count: i64,
    pub phone_number: Option<String>,
    pub social_vk: Option<String>,
    pub social_telegram: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClientView {
    pub id: Uuid,
    pub phone_number: Option<String>,
    pub profile_image: Option<String>,
}

/// Caller's own profile: exactly one of `photographer`/`client` is set.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserView,
    pub photographer: Option<PhotographerView>,
    pub client: Option<ClientView>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhotographerProfileUpdate {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    pub short_intro: String,
    pub bio: String,
    #[serde(default)]
    pub city: Option<String>,
    pub specialization: Specialization,
    pub price: i64,
    pub language: Language,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub social_vk: Option<String>,
    #[serde(default)]
    pub social_telegram: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientProfileUpdate {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

// -- Directory --

#[derive(Debug, Clone, Serialize)]
pub struct SpecialistSummary {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub short_intro: String,
    pub city: Option<String>,
    pub specialization: Specialization,
    pub price: i64,
    pub language: Language,
    pub profile_image: Option<String>,
    pub views_count: i64,
    pub is_favorite: bool,
}

#[derive(Debug, Serialize)]
pub struct SpecialistPage {
    pub specialists: Vec<SpecialistSummary>,
    pub page: u32,
    pub total_pages: u32,
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct PhotographerDetail {
    pub photographer: SpecialistSummary,
    pub bio: String,
    pub phone_number: Option<String>,
    pub social_vk: Option<String>,
    pub social_telegram: Option<String>,
    pub website: Option<String>,
    pub photos: Vec<PhotoView>,
    /// Categories this photographer actually has photos in.
    pub categories: Vec<Specialization>,
    pub is_favorite: bool,
}

// -- Photos --

#[derive(Debug, Clone, Serialize)]
pub struct PhotoView {
    pub id: Uuid,
    pub photographer_id: Uuid,
    pub photographer_username: String,
    pub image: String,
    pub category: Specialization,
    pub uploaded_at: DateTime<Utc>,
    pub likes_count: i64,
    pub is_liked: bool,
    pub is_favorite: bool,
}

// -- Bookings --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookingCreateRequest {
    pub message: String,
    pub contact_phone: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookingStatusRequest {
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingView {
    pub id: Uuid,
    pub client_id: Uuid,
    pub client_username: String,
    pub photographer_id: Uuid,
    pub photographer_username: String,
    pub status: BookingStatus,
    pub message: String,
    pub contact_phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// -- Favorites --

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteView {
    pub photographer_id: Uuid,
    pub username: String,
    pub short_intro: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

// -- News --

#[derive(Debug, Clone, Serialize)]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

// -- Support --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SupportCreateRequest {
    #[serde(default)]
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SupportReplyRequest {
    pub response: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupportTicketView {
    pub id: Uuid,
    pub username: String,
    pub subject: String,
    pub message: String,
    pub status: SupportStatus,
    pub admin_response: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// -- Dashboard --

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: UserView,
    pub photographer: Option<PhotographerView>,
    pub client: Option<ClientView>,
    pub photos: Vec<PhotoView>,
    pub sent_active: Vec<BookingView>,
    pub sent_completed: Vec<BookingView>,
    pub received_active: Vec<BookingView>,
    pub received_completed: Vec<BookingView>,
    pub favorites: Vec<FavoriteView>,
    pub support_tickets: Vec<SupportTicketView>,
    /// Admin-only: open tickets awaiting a reply.
    pub admin_inbox: Option<Vec<SupportTicketView>>,
    pub admin_new_count: usize,
}
