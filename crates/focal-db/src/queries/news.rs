use crate::models::NewsRow;
use crate::queries::OptionalExt;
use crate::Database;
use anyhow::Result;

fn news_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<NewsRow> {
    Ok(NewsRow {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        image: row.get(3)?,
        created_at: row.get(4)?,
    })
}

impl Database {
    pub fn insert_news(
        &self,
        id: &str,
        title: &str,
        content: &str,
        image: Option<&str>,
    ) -> Result<()> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO news (id, title, content, image) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![id, title, content, image],
            )?;
            Ok(())
        })
    }

    pub fn list_news(&self) -> Result<Vec<NewsRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, content, image, created_at FROM news
                 ORDER BY created_at DESC",
            )?;
            let rows = stmt
                .query_map([], news_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn get_news(&self, id: &str) -> Result<Option<NewsRow>> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare("SELECT id, title, content, image, created_at FROM news WHERE id = ?1")?;
            let row = stmt.query_row([id], news_from_row).optional()?;
            Ok(row)
        })
    }
}
