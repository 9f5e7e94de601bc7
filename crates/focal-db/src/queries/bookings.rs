use crate::models::BookingRow;
use crate::queries::OptionalExt;
use crate::Database;
use anyhow::Result;

/// Which side of a booking is acting. Soft-delete flags are tracked
/// independently per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingSide {
    Client,
    Photographer,
}

const BOOKING_COLUMNS: &str = "b.id, b.client_id, cu.username, b.photographer_id, pu.id, pu.username,
     b.status, b.message, b.contact_phone, b.created_at, b.updated_at,
     b.deleted_by_client, b.deleted_by_photographer";

const BOOKING_JOINS: &str = "FROM booking_requests b
     JOIN users cu ON b.client_id = cu.id
     JOIN photographer_profiles p ON b.photographer_id = p.id
     JOIN users pu ON p.user_id = pu.id";

fn booking_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<BookingRow> {
    Ok(BookingRow {
        id: row.get(0)?,
        client_id: row.get(1)?,
        client_username: row.get(2)?,
        photographer_id: row.get(3)?,
        photographer_user_id: row.get(4)?,
        photographer_username: row.get(5)?,
        status: row.get(6)?,
        message: row.get(7)?,
        contact_phone: row.get(8)?,
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
        deleted_by_client: row.get(11)?,
        deleted_by_photographer: row.get(12)?,
    })
}

impl Database {
    pub fn insert_booking(
        &self,
        id: &str,
        client_id: &str,
        photographer_id: &str,
        message: &str,
        contact_phone: &str,
    ) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO booking_requests (id, client_id, photographer_id, message, contact_phone)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                (id, client_id, photographer_id, message, contact_phone),
            )?;
            Ok(())
        })
    }

    pub fn get_booking(&self, id: &str) -> Result<Option<BookingRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {} {} WHERE b.id = ?1",
                BOOKING_COLUMNS, BOOKING_JOINS
            );
            let mut stmt = conn.prepare(&sql)?;
            let row = stmt.query_row([id], booking_from_row).optional()?;
            Ok(row)
        })
    }

    pub fn set_booking_status(&self, id: &str, status: &str) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "UPDATE booking_requests
                 SET status = ?2, updated_at = datetime('now')
                 WHERE id = ?1",
                (id, status),
            )?;
            Ok(())
        })
    }

    /// Set one side's soft-delete flag; once both sides have deleted, the
    /// row itself is removed. Returns true when the row is gone.
    pub fn soft_delete_booking(&self, id: &str, side: BookingSide) -> Result<bool> {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction()?;
            let column = match side {
                BookingSide::Client => "deleted_by_client",
                BookingSide::Photographer => "deleted_by_photographer",
            };
            tx.execute(
                &format!(
                    "UPDATE booking_requests SET {} = 1, updated_at = datetime('now') WHERE id = ?1",
                    column
                ),
                [id],
            )?;
            let both: bool = tx.query_row(
                "SELECT deleted_by_client AND deleted_by_photographer
                 FROM booking_requests WHERE id = ?1",
                [id],
                |row| row.get(0),
            )?;
            if both {
                tx.execute("DELETE FROM booking_requests WHERE id = ?1", [id])?;
            }
            tx.commit()?;
            Ok(both)
        })
    }

    /// Bookings the client sent, hiding rows they soft-deleted.
    pub fn list_sent_bookings(&self, client_id: &str) -> Result<Vec<BookingRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {} {} WHERE b.client_id = ?1 AND b.deleted_by_client = 0
                 ORDER BY b.created_at DESC",
                BOOKING_COLUMNS, BOOKING_JOINS
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map([client_id], booking_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Bookings the photographer received, hiding rows they soft-deleted.
    pub fn list_received_bookings(&self, photographer_id: &str) -> Result<Vec<BookingRow>> {
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT {} {} WHERE b.photographer_id = ?1 AND b.deleted_by_photographer = 0
                 ORDER BY b.created_at DESC",
                BOOKING_COLUMNS, BOOKING_JOINS
            );
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt
                .query_map([photographer_id], booking_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }
}
