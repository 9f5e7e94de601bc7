use crate::models::PhotographerRow;
use crate::queries::profiles::{photographer_from_row, PHOTOGRAPHER_COLUMNS};
use crate::Database;
use anyhow::Result;
use rusqlite::types::ToSql;

/// Directory filters; `None` fields do not constrain the result.
#[derive(Debug, Default, Clone)]
pub struct DirectoryFilter {
    pub specialization: Option<String>,
    pub language: Option<String>,
    pub city: Option<String>,
    pub price_min: Option<i64>,
    pub price_max: Option<i64>,
}

/// `%` and `_` in a city search are literal characters, not wildcards.
fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn build_where(filter: &DirectoryFilter) -> (String, Vec<Box<dyn ToSql>>) {
    let mut conditions: Vec<String> = Vec::new();
    let mut params: Vec<Box<dyn ToSql>> = Vec::new();

    if let Some(spec) = &filter.specialization {
        params.push(Box::new(spec.clone()));
        conditions.push(format!("p.specialization = ?{}", params.len()));
    }
    if let Some(lang) = &filter.language {
        params.push(Box::new(lang.clone()));
        conditions.push(format!("p.language = ?{}", params.len()));
    }
    if let Some(city) = &filter.city {
        params.push(Box::new(format!("%{}%", escape_like(city))));
        conditions.push(format!(
            "LOWER(p.city) LIKE LOWER(?{}) ESCAPE '\\'",
            params.len()
        ));
    }
    if let Some(min) = filter.price_min {
        params.push(Box::new(min));
        conditions.push(format!("p.price >= ?{}", params.len()));
    }
    if let Some(max) = filter.price_max {
        params.push(Box::new(max));
        conditions.push(format!("p.price <= ?{}", params.len()));
    }

    let clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };
    (clause, params)
}

impl Database {
    pub fn count_photographers(&self, filter: &DirectoryFilter) -> Result<u64> {
        let (clause, params) = build_where(filter);
        self.with_conn(|conn| {
            let sql = format!(
                "SELECT COUNT(*) FROM photographer_profiles p
                 JOIN users u ON p.user_id = u.id {}",
                clause
            );
            let refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();
            let count: i64 = conn.query_row(&sql, refs.as_slice(), |row| row.get(0))?;
            Ok(count as u64)
        })
    }

    pub fn list_photographers(
        &self,
        filter: &DirectoryFilter,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<PhotographerRow>> {
        let (clause, mut params) = build_where(filter);
        self.with_conn(|conn| {
            params.push(Box::new(limit as i64));
            let limit_pos = params.len();
            params.push(Box::new(offset as i64));
            let offset_pos = params.len();

            let sql = format!(
                "SELECT {} FROM photographer_profiles p
                 JOIN users u ON p.user_id = u.id
                 {}
                 ORDER BY p.views_count DESC, u.username ASC
                 LIMIT ?{} OFFSET ?{}",
                PHOTOGRAPHER_COLUMNS, clause, limit_pos, offset_pos
            );

            let mut stmt = conn.prepare(&sql)?;
            let refs: Vec<&dyn ToSql> = params.iter().map(|p| p.as_ref()).collect();
            let rows = stmt
                .query_map(refs.as_slice(), photographer_from_row)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }
}
