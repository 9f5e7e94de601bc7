use crate::models::FavoriteRow;
use crate::queries::OptionalExt;
use crate::Database;
use anyhow::Result;

impl Database {
    // -- Favorites --

    /// Toggle a favorite: removes if present, inserts if not.
    /// Returns true when the favorite now exists.
    pub fn toggle_favorite(&self, id: &str, user_id: &str, photographer_id: &str) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let existing: Option<String> = conn
                .query_row(
                    "SELECT id FROM favorites WHERE user_id = ?1 AND photographer_id = ?2",
                    (user_id, photographer_id),
                    |row| row.get(0),
                )
                .optional()?;

            if let Some(existing_id) = existing {
                conn.execute("DELETE FROM favorites WHERE id = ?1", [&existing_id])?;
                Ok(false)
            } else {
                conn.execute(
                    "INSERT INTO favorites (id, user_id, photographer_id) VALUES (?1, ?2, ?3)",
                    (id, user_id, photographer_id),
                )?;
                Ok(true)
            }
        })
    }

    pub fn is_favorite(&self, user_id: &str, photographer_id: &str) -> Result<bool> {
        self.with_conn(|conn| {
            let exists: bool = conn.query_row(
                "SELECT EXISTS(SELECT 1 FROM favorites WHERE user_id = ?1 AND photographer_id = ?2)",
                (user_id, photographer_id),
                |row| row.get(0),
            )?;
            Ok(exists)
        })
    }

    pub fn list_favorites(&self, user_id: &str) -> Result<Vec<FavoriteRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT f.photographer_id, u.username, p.short_intro, p.profile_image, f.created_at
                 FROM favorites f
                 JOIN photographer_profiles p ON f.photographer_id = p.id
                 JOIN users u ON p.user_id = u.id
                 WHERE f.user_id = ?1
                 ORDER BY f.created_at DESC",
            )?;
            let rows = stmt
                .query_map([user_id], |row| {
                    Ok(FavoriteRow {
                        photographer_id: row.get(0)?,
                        username: row.get(1)?,
                        short_intro: row.get(2)?,
                        profile_image: row.get(3)?,
                        created_at: row.get(4)?,
                    })
                })?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    // -- Photo likes --

    /// Toggle a like on a photo; same shape as favorites.
    /// Returns (is_liked, likes_count).
    pub fn toggle_photo_like(&self, id: &str, user_id: &str, photo_id: &str) -> Result<(bool, i64)> {
        self.with_conn_mut(|conn| {
            let existing: Option<String> = conn
                .query_row(
                    "SELECT id FROM photo_likes WHERE user_id = ?1 AND photo_id = ?2",
                    (user_id, photo_id),
                    |row| row.get(0),
                )
                .optional()?;

            let is_liked = if let Some(existing_id) = existing {
                conn.execute("DELETE FROM photo_likes WHERE id = ?1", [&existing_id])?;
                false
            } else {
                conn.execute(
                    "INSERT INTO photo_likes (id, user_id, photo_id) VALUES (?1, ?2, ?3)",
                    (id, user_id, photo_id),
                )?;
                true
            };

            let count: i64 = conn.query_row(
                "SELECT COUNT(*) FROM photo_likes WHERE photo_id = ?1",
                [photo_id],
                |row| row.get(0),
            )?;
            Ok((is_liked, count))
        })
    }

    // -- Profile views --

    /// Record a view by an authenticated user or an anonymous session.
    /// The unique indexes make repeat views no-ops; the counter is bumped
    /// only when the insert actually lands. Returns true when counted.
    pub fn record_profile_view(
        &self,
        id: &str,
        photographer_id: &str,
        user_id: Option<&str>,
        session_key: Option<&str>,
        ip_address: Option<&str>,
    ) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "INSERT OR IGNORE INTO profile_views (id, photographer_id, user_id, session_key, ip_address)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                rusqlite::params![id, photographer_id, user_id, session_key, ip_address],
            )?;
            let counted = tx.changes() > 0;
            if counted {
                tx.execute(
                    "UPDATE photographer_profiles SET views_count = views_count + 1 WHERE id = ?1",
                    [photographer_id],
                )?;
            }
            tx.commit()?;
            Ok(counted)
        })
    }
}
