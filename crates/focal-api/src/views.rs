//! Row-to-response conversion shared by the handlers.

use chrono::{DateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use focal_db::models::{
    BookingRow, ClientProfileRow, FavoriteRow, NewsRow, PhotoRow, PhotographerRow, SupportRow,
    UserRow,
};
use focal_types::api::{
    BookingView, ClientView, FavoriteView, NewsItem, PhotoView, PhotographerView,
    SpecialistSummary, SupportTicketView, UserView,
};
use focal_types::models::{BookingStatus, Language, Specialization, SupportStatus};

pub fn parse_ts(raw: &str) -> DateTime<Utc> {
    raw.parse::<DateTime<Utc>>()
        .or_else(|_| {
            // SQLite stores timestamps as "YYYY-MM-DD HH:MM:SS" without
            // timezone. Parse as naive UTC and convert.
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            warn!("Corrupt timestamp '{}': {}", raw, e);
            DateTime::default()
        })
}

pub fn parse_id(raw: &str) -> Uuid {
    raw.parse().unwrap_or_else(|e| {
        warn!("Corrupt id '{}': {}", raw, e);
        Uuid::default()
    })
}

pub fn parse_specialization(raw: &str) -> Specialization {
    raw.parse().unwrap_or_else(|_| {
        warn!("Unknown specialization '{}'", raw);
        Specialization::Wedding
    })
}

fn parse_language(raw: &str) -> Language {
    raw.parse().unwrap_or_else(|_| {
        warn!("Unknown language '{}'", raw);
        Language::Ru
    })
}

fn parse_booking_status(raw: &str) -> BookingStatus {
    raw.parse().unwrap_or_else(|_| {
        warn!("Unknown booking status '{}'", raw);
        BookingStatus::New
    })
}

fn parse_support_status(raw: &str) -> SupportStatus {
    raw.parse().unwrap_or_else(|_| {
        warn!("Unknown support status '{}'", raw);
        SupportStatus::New
    })
}

pub fn user_view(row: &UserRow) -> UserView {
    UserView {
        id: parse_id(&row.id),
        username: row.username.clone(),
        email: row.email.clone(),
        first_name: row.first_name.clone(),
        last_name: row.last_name.clone(),
        is_admin: row.is_admin,
        created_at: parse_ts(&row.created_at),
    }
}

pub fn photographer_view(row: &PhotographerRow) -> PhotographerView {
    PhotographerView {
        id: parse_id(&row.id),
        short_intro: row.short_intro.clone(),
        bio: row.bio.clone(),
        city: row.city.clone(),
        specialization: parse_specialization(&row.specialization),
        price: row.price,
        language: parse_language(&row.language),
        profile_image: row.profile_image.clone(),
        views_count: row.views_count,
        phone_number: row.phone_number.clone(),
        social_vk: row.social_vk.clone(),
        social_telegram: row.social_telegram.clone(),
        website: row.website.clone(),
    }
}

pub fn client_view(row: &ClientProfileRow) -> ClientView {
    ClientView {
        id: parse_id(&row.id),
        phone_number: row.phone_number.clone(),
        profile_image: row.profile_image.clone(),
    }
}

pub fn specialist_summary(row: &PhotographerRow, is_favorite: bool) -> SpecialistSummary {
    SpecialistSummary {
        id: parse_id(&row.id),
        username: row.username.clone(),
        first_name: row.first_name.clone(),
        last_name: row.last_name.clone(),
        short_intro: row.short_intro.clone(),
        city: row.city.clone(),
        specialization: parse_specialization(&row.specialization),
        price: row.price,
        language: parse_language(&row.language),
        profile_image: row.profile_image.clone(),
        views_count: row.views_count,
        is_favorite,
    }
}

pub fn photo_view(row: &PhotoRow) -> PhotoView {
    PhotoView {
        id: parse_id(&row.id),
        photographer_id: parse_id(&row.photographer_id),
        photographer_username: row.photographer_username.clone(),
        image: row.image.clone(),
        category: parse_specialization(&row.category),
        uploaded_at: parse_ts(&row.uploaded_at),
        likes_count: row.likes_count,
        is_liked: row.is_liked,
        is_favorite: row.is_favorite,
    }
}

pub fn booking_view(row: &BookingRow) -> BookingView {
    BookingView {
        id: parse_id(&row.id),
        client_id: parse_id(&row.client_id),
        client_username: row.client_username.clone(),
        photographer_id: parse_id(&row.photographer_id),
        photographer_username: row.photographer_username.clone(),
        status: parse_booking_status(&row.status),
        message: row.message.clone(),
        contact_phone: row.contact_phone.clone(),
        created_at: parse_ts(&row.created_at),
        updated_at: parse_ts(&row.updated_at),
    }
}

pub fn favorite_view(row: &FavoriteRow) -> FavoriteView {
    FavoriteView {
        photographer_id: parse_id(&row.photographer_id),
        username: row.username.clone(),
        short_intro: row.short_intro.clone(),
        profile_image: row.profile_image.clone(),
        created_at: parse_ts(&row.created_at),
    }
}

pub fn news_item(row: &NewsRow) -> NewsItem {
    NewsItem {
        id: parse_id(&row.id),
        title: row.title.clone(),
        content: row.content.clone(),
        image: row.image.clone(),
        created_at: parse_ts(&row.created_at),
    }
}

pub fn support_view(row: &SupportRow) -> SupportTicketView {
    SupportTicketView {
        id: parse_id(&row.id),
        username: row.username.clone(),
        subject: row.subject.clone(),
        message: row.message.clone(),
        status: parse_support_status(&row.status),
        admin_response: row.admin_response.clone(),
        created_at: parse_ts(&row.created_at),
        updated_at: parse_ts(&row.updated_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sqlite_naive_timestamps() {
        let ts = parse_ts("2026-03-01 12:30:00");
        assert_eq!(ts.to_rfc3339(), "2026-03-01T12:30:00+00:00");
    }

    #[test]
    fn parses_rfc3339_timestamps() {
        assert_eq!(
            parse_ts("2026-03-01T12:30:00Z"),
            parse_ts("2026-03-01 12:30:00")
        );
    }
}
