/// Database row types — these map directly to SQLite rows.
/// Distinct from focal-types API models to keep the DB layer independent.

pub struct UserRow {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub is_admin: bool,
    pub created_at: String,
}

pub struct ClientProfileRow {
    pub id: String,
    pub user_id: String,
    pub phone_number: Option<String>,
    pub profile_image: Option<String>,
}

/// Photographer profile joined with its user row; every read path needs
/// the display name, so the JOIN happens once here.
pub struct PhotographerRow {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub short_intro: String,
    pub bio: String,
    pub city: Option<String>,
    pub specialization: String,
    pub price: i64,
    pub language: String,
    pub profile_image: Option<String>,
    pub views_count: i64,
    pub phone_number: Option<String>,
    pub social_vk: Option<String>,
    pub social_telegram: Option<String>,
    pub website: Option<String>,
}

pub struct PhotoRow {
    pub id: String,
    pub photographer_id: String,
    pub owner_user_id: String,
    pub photographer_username: String,
    pub image: String,
    pub category: String,
    pub uploaded_at: String,
    pub likes_count: i64,
    pub is_liked: bool,
    pub is_favorite: bool,
}

pub struct BookingRow {
    pub id: String,
    pub client_id: String,
    pub client_username: String,
    pub photographer_id: String,
    pub photographer_user_id: String,
    pub photographer_username: String,
    pub status: String,
    pub message: String,
    pub contact_phone: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_by_client: bool,
    pub deleted_by_photographer: bool,
}

pub struct FavoriteRow {
    pub photographer_id: String,
    pub username: String,
    pub short_intro: String,
    pub profile_image: Option<String>,
    pub created_at: String,
}

pub struct NewsRow {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image: Option<String>,
    pub created_at: String,
}

pub struct SupportRow {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub subject: String,
    pub message: String,
    pub status: String,
    pub admin_response: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}
