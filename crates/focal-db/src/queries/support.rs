use crate::models::SupportRow;
use crate::queries::OptionalExt;
use crate::Database;
use anyhow::Result;

const SUPPORT_COLUMNS: &str = "s.id, s.user_id, u.username, s.subject, s.message, s.status,
     s.admin_response, s.created_at, s.updated_at";

fn support_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<SupportRow> {
    Ok(SupportRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        username: row.get(2)?,
        subject: row.get(3)?,
        message: row.get(4)?,
        status: row.get(5)?,
        admin_response: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

impl Database {
    pub fn insert_support_request(
        &self,
        id: &str,
        user_id: &str,
        subject: Option<&str>,
        message: &str,
    ) -> Result<()> {
        self.with_conn_mut(|conn| {
            match subject {
                Some(subject) => conn.execute(
                    "INSERT INTO support_requests (id, user_id, subject, message)
                     VALUES (?1, ?2, ?3, ?4)",
                    (id, user_id, subject, message),
                )?,
                // Fall back to the column default
                None => conn.execute(
                    "INSERT INTO support_requests (id, user_id, message) VALUES (?1, ?2, ?3)",
                    (id, user_id, message),
                )?,
            };
            Ok(())
        })
    }

    pub fn get_support_request(&self, id: &str) -> Result<Option<SupportRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {} FROM support_requests s JOIN users u ON s.user_id = u.id
                 WHERE s.id = ?1",
                SUPPORT_COLUMNS
            );
            let mut stmt = conn.prepare(&sql)?;
            let row = stmt.query_row([id], support_from_row).optional()?;
            Ok(row)
        })
    }

    pub fn list_support_requests_by_user(&self, user_id: &str) -> Result<Vec<SupportRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {} FROM support_requests s JOIN users u ON s.user_id = u.id
                 WHERE s.user_id = ?1 ORDER BY s.created_at DESC",
                SUPPORT_COLUMNS
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map([user_id], support_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Admin inbox: only tickets still awaiting a first reply.
    pub fn list_new_support_requests(&self) -> Result<Vec<SupportRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {} FROM support_requests s JOIN users u ON s.user_id = u.id
                 WHERE s.status = 'new' ORDER BY s.created_at DESC",
                SUPPORT_COLUMNS
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map([], support_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Store the admin's response and mark the ticket resolved.
    pub fn reply_support_request(&self, id: &str, response: &str) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "UPDATE support_requests
                 SET admin_response = ?2, status = 'resolved', updated_at = datetime('now')
                 WHERE id = ?1",
                (id, response),
            )?;
            Ok(())
        })
    }

    pub fn delete_support_request(&self, id: &str) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute("DELETE FROM support_requests WHERE id = ?1", [id])?;
            Ok(())
        })
    }
}
