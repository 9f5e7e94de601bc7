use crate::models::{ClientProfileRow, PhotographerRow};
use crate::queries::OptionalExt;
use crate::Database;
use anyhow::Result;
use focal_types::api::{ClientProfileUpdate, PhotographerProfileUpdate};
use rusqlite::Connection;

pub(crate) const PHOTOGRAPHER_COLUMNS: &str =
    "p.id, p.user_id, u.username, u.first_name, u.last_name, p.short_intro, p.bio, p.city,
     p.specialization, p.price, p.language, p.profile_image, p.views_count,
     p.phone_number, p.social_vk, p.social_telegram, p.website";

pub(crate) fn photographer_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PhotographerRow> {
    Ok(PhotographerRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        username: row.get(2)?,
        first_name: row.get(3)?,
        last_name: row.get(4)?,
        short_intro: row.get(5)?,
        bio: row.get(6)?,
        city: row.get(7)?,
        specialization: row.get(8)?,
        price: row.get(9)?,
        language: row.get(10)?,
        profile_image: row.get(11)?,
        views_count: row.get(12)?,
        phone_number: row.get(13)?,
        social_vk: row.get(14)?,
        social_telegram: row.get(15)?,
        website: row.get(16)?,
    })
}

impl Database {
    pub fn create_photographer_profile(
        &self,
        id: &str,
        user_id: &str,
        short_intro: &str,
        bio: &str,
    ) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO photographer_profiles (id, user_id, short_intro, bio)
                 VALUES (?1, ?2, ?3, ?4)",
                (id, user_id, short_intro, bio),
            )?;
            Ok(())
        })
    }

    pub fn create_client_profile(&self, id: &str, user_id: &str) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT OR IGNORE INTO client_profiles (id, user_id) VALUES (?1, ?2)",
                (id, user_id),
            )?;
            Ok(())
        })
    }

    pub fn get_photographer(&self, id: &str) -> Result<Option<PhotographerRow>> {
        self.with_conn(|conn| query_photographer(conn, "p.id", id))
    }

    pub fn get_photographer_by_user(&self, user_id: &str) -> Result<Option<PhotographerRow>> {
        self.with_conn(|conn| query_photographer(conn, "p.user_id", user_id))
    }

    pub fn get_client_profile(&self, user_id: &str) -> Result<Option<ClientProfileRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, user_id, phone_number, profile_image
                 FROM client_profiles WHERE user_id = ?1",
            )?;
            let row = stmt
                .query_row([user_id], |row| {
                    Ok(ClientProfileRow {
                        id: row.get(0)?,
                        user_id: row.get(1)?,
                        phone_number: row.get(2)?,
                        profile_image: row.get(3)?,
                    })
                })
                .optional()?;
            Ok(row)
        })
    }

    pub fn update_photographer_profile(
        &self,
        user_id: &str,
        update: &PhotographerProfileUpdate,
    ) -> Result<()> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "UPDATE photographer_profiles
                 SET short_intro = ?2, bio = ?3, city = ?4, specialization = ?5,
                     price = ?6, language = ?7, phone_number = ?8, social_vk = ?9,
                     social_telegram = ?10, website = ?11
                 WHERE user_id = ?1",
                rusqlite::params![
                    user_id,
                    update.short_intro,
                    update.bio,
                    update.city,
                    update.specialization.as_str(),
                    update.price,
                    update.language.as_str(),
                    update.phone_number,
                    update.social_vk,
                    update.social_telegram,
                    update.website,
                ],
            )?;
            tx.execute(
                "UPDATE users SET first_name = ?2, last_name = ?3, email = ?4 WHERE id = ?1",
                rusqlite::params![
                    user_id,
                    update.first_name.as_deref().unwrap_or(""),
                    update.last_name.as_deref().unwrap_or(""),
                    update.email,
                ],
            )?;
            tx.commit()?;
            Ok(())
        })
    }

    pub fn update_client_profile(&self, user_id: &str, update: &ClientProfileUpdate) -> Result<()> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            tx.execute(
                "UPDATE client_profiles SET phone_number = ?2 WHERE user_id = ?1",
                rusqlite::params![user_id, update.phone_number],
            )?;
            tx.execute(
                "UPDATE users SET first_name = ?2, last_name = ?3, email = ?4 WHERE id = ?1",
                rusqlite::params![
                    user_id,
                    update.first_name.as_deref().unwrap_or(""),
                    update.last_name.as_deref().unwrap_or(""),
                    update.email,
                ],
            )?;
            tx.commit()?;
            Ok(())
        })
    }

    /// Swap the photographer's profile image path, returning the previous
    /// one so the caller can remove the file from disk.
    pub fn set_photographer_image(
        &self,
        user_id: &str,
        image: Option<&str>,
    ) -> Result<Option<String>> {
        self.with_conn_mut(|conn| {
            let old: Option<Option<String>> = conn
                .query_row(
                    "SELECT profile_image FROM photographer_profiles WHERE user_id = ?1",
                    [user_id],
                    |row| row.get(0),
                )
                .optional()?;
            conn.execute(
                "UPDATE photographer_profiles SET profile_image = ?2 WHERE user_id = ?1",
                rusqlite::params![user_id, image],
            )?;
            Ok(old.flatten())
        })
    }

    pub fn set_client_image(&self, user_id: &str, image: Option<&str>) -> Result<Option<String>> {
        self.with_conn_mut(|conn| {
            let old: Option<Option<String>> = conn
                .query_row(
                    "SELECT profile_image FROM client_profiles WHERE user_id = ?1",
                    [user_id],
                    |row| row.get(0),
                )
                .optional()?;
            conn.execute(
                "UPDATE client_profiles SET profile_image = ?2 WHERE user_id = ?1",
                rusqlite::params![user_id, image],
            )?;
            Ok(old.flatten())
        })
    }
}

fn query_photographer(
    conn: &Connection,
    column: &str,
    value: &str,
) -> Result<Option<PhotographerRow>> {
    // column is a compile-time constant, never user input
    let sql = format!(
        "SELECT {} FROM photographer_profiles p
         JOIN users u ON p.user_id = u.id
         WHERE {} = ?1",
        PHOTOGRAPHER_COLUMNS, column
    );
    let mut stmt = conn.prepare(&sql)?;
    let row = stmt.query_row([value], photographer_from_row).optional()?;
    Ok(row)
}
