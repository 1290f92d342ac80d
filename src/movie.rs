use serde::{Deserialize, Serialize};

/// A movie as returned by the catalog and recommendation endpoints.
///
/// The server emits two near-identical shapes, one keyed `id` and one keyed
/// `_id`; the alias on the identifier field folds both into this single type.
/// Extra fields the server may send (awards, imdb ratings, lastupdated) are
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullplot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released: Option<String>,
    #[serde(rename = "type")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<i32>,
}

impl Movie {
    /// Short plot, falling back to the full plot when the short one is missing.
    pub fn plot_summary(&self) -> &str {
        self.plot
            .as_deref()
            .or(self.fullplot.as_deref())
            .unwrap_or("No plot available.")
    }

    /// Similarity score formatted as a percentage, e.g. "87.25%".
    pub fn similarity_percent(&self) -> Option<String> {
        self.similarity.map(|s| format!("{:.2}%", s * 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_id_key() {
        let movie: Movie = serde_json::from_str(
            r#"{"id": "573a1391f29313caabcd68d0", "title": "Metropolis", "year": 1927}"#,
        )
        .unwrap();
        assert_eq!(movie.id, "573a1391f29313caabcd68d0");
        assert_eq!(movie.title, "Metropolis");
        assert_eq!(movie.year, Some(1927));
    }

    #[test]
    fn test_deserialize_underscore_id_key() {
        let movie: Movie = serde_json::from_str(
            r#"{"_id": "573a1391f29313caabcd68d0", "title": "Metropolis"}"#,
        )
        .unwrap();
        assert_eq!(movie.id, "573a1391f29313caabcd68d0");
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let movie: Movie = serde_json::from_str(
            r#"{"id": "1", "title": "Heat", "awards": {"wins": 3}, "imdb": {"rating": 8.3}, "lastupdated": "2015"}"#,
        )
        .unwrap();
        assert_eq!(movie.title, "Heat");
    }

    #[test]
    fn test_plot_summary_fallbacks() {
        let mut movie: Movie =
            serde_json::from_str(r#"{"id": "1", "title": "Heat"}"#).unwrap();
        assert_eq!(movie.plot_summary(), "No plot available.");

        movie.fullplot = Some("Long version.".to_string());
        assert_eq!(movie.plot_summary(), "Long version.");

        movie.plot = Some("Short version.".to_string());
        assert_eq!(movie.plot_summary(), "Short version.");
    }

    #[test]
    fn test_similarity_percent() {
        let mut movie: Movie =
            serde_json::from_str(r#"{"id": "1", "title": "Heat"}"#).unwrap();
        assert_eq!(movie.similarity_percent(), None);

        movie.similarity = Some(0.8725);
        assert_eq!(movie.similarity_percent().as_deref(), Some("87.25%"));
    }
}
