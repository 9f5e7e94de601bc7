use std::collections::HashSet;

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use focal_db::DirectoryFilter;
use focal_types::api::{Claims, SpecialistPage};

use crate::auth::AppState;
use crate::error::ApiResult;
use crate::views;

pub const PAGE_SIZE: u32 = 15;

/// All filters are optional; malformed prices and pages are ignored
/// rather than rejected, matching the tolerant query-string handling of
/// the directory page.
#[derive(Debug, Default, Deserialize)]
pub struct DirectoryQuery {
    pub specialization: Option<String>,
    pub language: Option<String>,
    pub city: Option<String>,
    pub price_min: Option<String>,
    pub price_max: Option<String>,
    pub page: Option<String>,
}

fn exact_filter(raw: Option<&str>) -> Option<String> {
    match raw {
        None | Some("") | Some("any") => None,
        Some(value) => Some(value.to_string()),
    }
}

pub fn build_filter(query: &DirectoryQuery) -> DirectoryFilter {
    DirectoryFilter {
        specialization: exact_filter(query.specialization.as_deref()),
        language: exact_filter(query.language.as_deref()),
        city: query.city.clone().filter(|c| !c.is_empty()),
        price_min: query.price_min.as_deref().and_then(|p| p.trim().parse().ok()),
        price_max: query.price_max.as_deref().and_then(|p| p.trim().parse().ok()),
    }
}

/// Clamp a raw page parameter: non-numeric falls back to the first page,
/// past-the-end falls back to the last.
pub fn clamp_page(raw: Option<&str>, total_pages: u32) -> u32 {
    let page = raw.and_then(|p| p.parse::<u32>().ok()).unwrap_or(1).max(1);
    page.min(total_pages)
}

pub async fn list_specialists(
    State(state): State<AppState>,
    claims: Option<Extension<Claims>>,
    Query(query): Query<DirectoryQuery>,
) -> ApiResult<Json<SpecialistPage>> {
    let filter = build_filter(&query);

    let total = state.db.count_photographers(&filter)?;
    let total_pages = ((total.max(1) + PAGE_SIZE as u64 - 1) / PAGE_SIZE as u64) as u32;
    let page = clamp_page(query.page.as_deref(), total_pages);
    let offset = (page - 1) * PAGE_SIZE;

    let rows = state.db.list_photographers(&filter, PAGE_SIZE, offset)?;

    let favorite_ids: HashSet<String> = match &claims {
        Some(Extension(claims)) => state
            .db
            .list_favorites(&claims.sub.to_string())?
            .into_iter()
            .map(|f| f.photographer_id)
            .collect(),
        None => HashSet::new(),
    };

    let specialists = rows
        .iter()
        .map(|row| views::specialist_summary(row, favorite_ids.contains(&row.id)))
        .collect();

    Ok(Json(SpecialistPage {
        specialists,
        page,
        total_pages,
        total,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_and_empty_filters_pass_everything() {
        let query = DirectoryQuery {
            specialization: Some("any".into()),
            language: Some("".into()),
            ..Default::default()
        };
        let filter = build_filter(&query);
        assert!(filter.specialization.is_none());
        assert!(filter.language.is_none());
    }

    #[test]
    fn malformed_prices_are_ignored() {
        let query = DirectoryQuery {
            price_min: Some("cheap".into()),
            price_max: Some("2000".into()),
            ..Default::default()
        };
        let filter = build_filter(&query);
        assert_eq!(filter.price_min, None);
        assert_eq!(filter.price_max, Some(2000));
    }

    #[test]
    fn page_clamps_to_range() {
        assert_eq!(clamp_page(None, 3), 1);
        assert_eq!(clamp_page(Some("nope"), 3), 1);
        assert_eq!(clamp_page(Some("0"), 3), 1);
        assert_eq!(clamp_page(Some("2"), 3), 2);
        assert_eq!(clamp_page(Some("99"), 3), 3);
    }
}
