use serde::{Deserialize, Serialize};

/// A catalog category (movies/series, music, gaming, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// CSS icon class shown next to the category (e.g. `fa-film`).
    #[serde(default)]
    pub icon: String,
    pub active: bool,
}

/// A streaming service offered in the catalog (Netflix, Spotify, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamingService {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub logo_url: String,
    pub description: String,
    #[serde(default)]
    pub website: String,
    pub active: bool,
}

impl StreamingService {
    /// Case-insensitive substring match over the service's visible text,
    /// the pure core of the catalog's live search filter.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

/// Filter a catalog by search term, keeping only active services whose text
/// contains the term. An empty term keeps every active service.
pub fn search_services<'a>(
    services: &'a [StreamingService],
    term: &str,
) -> Vec<&'a StreamingService> {
    services
        .iter()
        .filter(|s| s.active && s.matches(term))
        .collect()
}
