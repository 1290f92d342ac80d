use serde::{Deserialize, Serialize};

use crate::movie::Movie;

/// One server-side page of the catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPage {
    #[serde(default)]
    pub movies: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

/// Case-insensitive title filter applied client-side to a fetched page.
pub fn filter_by_title(movies: &[Movie], term: &str) -> Vec<Movie> {
    let term = term.trim().to_lowercase();
    movies
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

/// Catalog pages are 1-based on the wire. Step back one page, never below 1.
pub fn prev_page(current: u32) -> u32 {
    current.saturating_sub(1).max(1)
}

/// Step forward one page, clamped to the last page. No wraparound.
pub fn next_page(current: u32, total_pages: u32) -> u32 {
    (current + 1).min(total_pages.max(1))
}
