use crate::models::PhotoRow;
use crate::queries::OptionalExt;
use crate::Database;
use anyhow::Result;

/// Photo listing columns. `?1` is always the viewer's user id (empty string
/// for anonymous callers) so `is_liked`/`is_favorite` come back in the same
/// query instead of N+1 lookups.
const PHOTO_COLUMNS: &str = "ph.id, ph.photographer_id, p.user_id, u.username, ph.image,
     ph.category, ph.uploaded_at,
     (SELECT COUNT(*) FROM photo_likes pl WHERE pl.photo_id = ph.id) AS likes_count,
     EXISTS(SELECT 1 FROM photo_likes pl WHERE pl.photo_id = ph.id AND pl.user_id = ?1) AS is_liked,
     EXISTS(SELECT 1 FROM favorites f
            WHERE f.photographer_id = ph.photographer_id AND f.user_id = ?1) AS is_favorite";

const PHOTO_JOINS: &str = "FROM photos ph
     JOIN photographer_profiles p ON ph.photographer_id = p.id
     JOIN users u ON p.user_id = u.id";

fn photo_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PhotoRow> {
    Ok(PhotoRow {
        id: row.get(0)?,
        photographer_id: row.get(1)?,
        owner_user_id: row.get(2)?,
        photographer_username: row.get(3)?,
        image: row.get(4)?,
        category: row.get(5)?,
        uploaded_at: row.get(6)?,
        likes_count: row.get(7)?,
        is_liked: row.get(8)?,
        is_favorite: row.get(9)?,
    })
}

impl Database {
    pub fn insert_photo(
        &self,
        id: &str,
        photographer_id: &str,
        image: &str,
        category: &str,
    ) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO photos (id, photographer_id, image, category) VALUES (?1, ?2, ?3, ?4)",
                (id, photographer_id, image, category),
            )?;
            Ok(())
        })
    }

    pub fn get_photo(&self, id: &str, viewer: Option<&str>) -> Result<Option<PhotoRow>> {
        self.with_conn(|conn| {
            let sql = format!("SELECT {} {} WHERE ph.id = ?2", PHOTO_COLUMNS, PHOTO_JOINS);
            let mut stmt = conn.prepare(&sql)?;
            let row = stmt
                .query_row(
                    rusqlite::params![viewer.unwrap_or(""), id],
                    photo_from_row,
                )
                .optional()?;
            Ok(row)
        })
    }

    /// Removes the photo row, returning its image path for file cleanup.
    pub fn delete_photo(&self, id: &str) -> Result<Option<String>> {
        self.with_conn_mut(|conn| {
            let image: Option<String> = conn
                .query_row("SELECT image FROM photos WHERE id = ?1", [id], |row| {
                    row.get(0)
                })
                .optional()?;
            conn.execute("DELETE FROM photos WHERE id = ?1", [id])?;
            Ok(image)
        })
    }

    pub fn list_photos_by_photographer(
        &self,
        photographer_id: &str,
        viewer: Option<&str>,
    ) -> Result<Vec<PhotoRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {} {} WHERE ph.photographer_id = ?2 ORDER BY ph.uploaded_at DESC",
                PHOTO_COLUMNS, PHOTO_JOINS
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(
                    rusqlite::params![viewer.unwrap_or(""), photographer_id],
                    photo_from_row,
                )?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn list_all_photos(&self, viewer: Option<&str>) -> Result<Vec<PhotoRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {} {} ORDER BY ph.uploaded_at DESC",
                PHOTO_COLUMNS, PHOTO_JOINS
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(rusqlite::params![viewer.unwrap_or("")], photo_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Photos ranked by likes received since `since` (SQLite datetime
    /// string); photos with no recent likes are excluded.
    pub fn list_featured_photos(
        &self,
        viewer: Option<&str>,
        since: &str,
        limit: u32,
    ) -> Result<Vec<PhotoRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT * FROM (
                     SELECT {},
                         (SELECT COUNT(*) FROM photo_likes pl
                          WHERE pl.photo_id = ph.id AND pl.created_at >= ?2) AS recent_likes
                     {}
                 ) WHERE recent_likes > 0
                 ORDER BY recent_likes DESC
                 LIMIT ?3",
                PHOTO_COLUMNS, PHOTO_JOINS
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(
                    rusqlite::params![viewer.unwrap_or(""), since, limit],
                    photo_from_row,
                )?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Fallback for the featured strip when nothing was liked recently.
    pub fn list_random_photos(&self, viewer: Option<&str>, limit: u32) -> Result<Vec<PhotoRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {} {} ORDER BY RANDOM() LIMIT ?2",
                PHOTO_COLUMNS, PHOTO_JOINS
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map(
                    rusqlite::params![viewer.unwrap_or(""), limit],
                    photo_from_row,
                )?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Distinct categories this photographer has photos in.
    pub fn photo_categories(&self, photographer_id: &str) -> Result<Vec<String>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT DISTINCT category FROM photos WHERE photographer_id = ?1 ORDER BY category",
            )?;
            let rows = stmt
                .query_map([photographer_id], |row| row.get(0))?
                .collect::<std::result::Result<Vec<String>, _>>()?;
            Ok(rows)
        })
    }
}
