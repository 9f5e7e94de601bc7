use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            id          TEXT PRIMARY KEY,
            username    TEXT NOT NULL UNIQUE,
            email       TEXT NOT NULL DEFAULT '',
            first_name  TEXT NOT NULL DEFAULT '',
            last_name   TEXT NOT NULL DEFAULT '',
            password    TEXT NOT NULL,
            is_admin    INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS client_profiles (
            id              TEXT PRIMARY KEY,
            user_id         TEXT NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
            phone_number    TEXT,
            profile_image   TEXT
        );

        CREATE TABLE IF NOT EXISTS photographer_profiles (
            id              TEXT PRIMARY KEY,
            user_id         TEXT NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
            short_intro     TEXT NOT NULL,
            bio             TEXT NOT NULL,
            city            TEXT,
            specialization  TEXT NOT NULL DEFAULT 'wedding',
            price           INTEGER NOT NULL DEFAULT 0,
            language        TEXT NOT NULL DEFAULT 'ru',
            profile_image   TEXT,
            views_count     INTEGER NOT NULL DEFAULT 0,
            phone_number    TEXT,
            social_vk       TEXT,
            social_telegram TEXT,
            website         TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_photographers_filters
            ON photographer_profiles(specialization, language, price);

        CREATE TABLE IF NOT EXISTS photos (
            id              TEXT PRIMARY KEY,
            photographer_id TEXT NOT NULL REFERENCES photographer_profiles(id) ON DELETE CASCADE,
            image           TEXT NOT NULL,
            category        TEXT NOT NULL DEFAULT 'wedding',
            uploaded_at     TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_photos_photographer
            ON photos(photographer_id, uploaded_at);

        CREATE TABLE IF NOT EXISTS booking_requests (
            id                      TEXT PRIMARY KEY,
            client_id               TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            photographer_id         TEXT NOT NULL REFERENCES photographer_profiles(id) ON DELETE CASCADE,
            status                  TEXT NOT NULL DEFAULT 'new',
            message                 TEXT NOT NULL,
            contact_phone           TEXT NOT NULL,
            created_at              TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at              TEXT NOT NULL DEFAULT (datetime('now')),
            deleted_by_client       INTEGER NOT NULL DEFAULT 0,
            deleted_by_photographer INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_bookings_client
            ON booking_requests(client_id, created_at);
        CREATE INDEX IF NOT EXISTS idx_bookings_photographer
            ON booking_requests(photographer_id, created_at);

        CREATE TABLE IF NOT EXISTS favorites (
            id              TEXT PRIMARY KEY,
            user_id         TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            photographer_id TEXT NOT NULL REFERENCES photographer_profiles(id) ON DELETE CASCADE,
            created_at      TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(user_id, photographer_id)
        );

        CREATE TABLE IF NOT EXISTS photo_likes (
            id          TEXT PRIMARY KEY,
            user_id     TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            photo_id    TEXT NOT NULL REFERENCES photos(id) ON DELETE CASCADE,
            created_at  TEXT NOT NULL DEFAULT (datetime('now')),
            UNIQUE(user_id, photo_id)
        );

        CREATE INDEX IF NOT EXISTS idx_photo_likes_photo
            ON photo_likes(photo_id, created_at);

        CREATE TABLE IF NOT EXISTS profile_views (
            id              TEXT PRIMARY KEY,
            photographer_id TEXT NOT NULL REFERENCES photographer_profiles(id) ON DELETE CASCADE,
            user_id         TEXT REFERENCES users(id) ON DELETE CASCADE,
            session_key     TEXT,
            ip_address      TEXT,
            created_at      TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- One view per authenticated user, one per anonymous session.
        CREATE UNIQUE INDEX IF NOT EXISTS idx_views_user
            ON profile_views(photographer_id, user_id) WHERE user_id IS NOT NULL;
        CREATE UNIQUE INDEX IF NOT EXISTS idx_views_session
            ON profile_views(photographer_id, session_key) WHERE session_key IS NOT NULL;

        CREATE TABLE IF NOT EXISTS news (
            id          TEXT PRIMARY KEY,
            title       TEXT NOT NULL,
            content     TEXT NOT NULL,
            image       TEXT,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS support_requests (
            id              TEXT PRIMARY KEY,
            user_id         TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            subject         TEXT NOT NULL DEFAULT 'Support question',
            message         TEXT NOT NULL,
            status          TEXT NOT NULL DEFAULT 'new',
            admin_response  TEXT,
            created_at      TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at      TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_support_user
            ON support_requests(user_id, created_at);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
