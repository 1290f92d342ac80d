use chrono::{Datelike, NaiveDate};

/// Number of suggestions requested when the user gives no count.
pub const DEFAULT_COUNT: u32 = 10;

/// User-selected search mode with its field values, created per submission
/// and discarded after dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery {
    /// Suggestions similar to a known movie.
    ById { movie_id: String },
    /// Free-text keyword search.
    ByKeyword { keywords: String },
    /// Multi-field preference profile.
    ByPreference(Preferences),
}

/// Preference fields. String fields are comma-joined lists entered as-is by
/// the user; the year bounds are dates and only their year is sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Preferences {
    pub genres: Option<String>,
    pub cast: Option<String>,
    pub directors: Option<String>,
    pub writers: Option<String>,
    pub languages: Option<String>,
    pub countries: Option<String>,
    pub min_year: Option<NaiveDate>,
    pub max_year: Option<NaiveDate>,
}

impl Preferences {
    fn is_empty(&self) -> bool {
        non_empty(&self.genres).is_none()
            && non_empty(&self.cast).is_none()
            && non_empty(&self.directors).is_none()
            && non_empty(&self.writers).is_none()
            && non_empty(&self.languages).is_none()
            && non_empty(&self.countries).is_none()
            && self.min_year.is_none()
            && self.max_year.is_none()
    }
}

/// A validated endpoint plus ordered query parameters, ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    pub endpoint: String,
    pub params: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Normalize a user-entered result count. Anything non-numeric or below 1
/// coerces to 1, never to 0 or a negative.
pub fn clamp_count(input: &str) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(n) if n >= 1 => n.min(u32::MAX as i64) as u32,
        _ => 1,
    }
}

/// Map a search query into its endpoint and parameters. Pure: same input,
/// same output, no I/O.
pub fn build(query: &SearchQuery, count: u32) -> Result<QuerySpec, ValidationError> {
    let count = count.max(1);
    let mut params = vec![("num_rec".to_string(), count.to_string())];

    match query {
        SearchQuery::ById { movie_id } => {
            let movie_id = movie_id.trim();
            if movie_id.is_empty() {
                return Err(ValidationError::MissingField("movieId"));
            }
            Ok(QuerySpec {
                endpoint: format!("movies/recommend/{}", urlencoding::encode(movie_id)),
                params,
            })
        }
        SearchQuery::ByKeyword { keywords } => {
            let keywords = keywords.trim();
            if keywords.is_empty() {
                return Err(ValidationError::MissingField("keywords"));
            }
            params.push(("keywords".to_string(), keywords.to_string()));
            Ok(QuerySpec {
                endpoint: "movies/search".to_string(),
                params,
            })
        }
        SearchQuery::ByPreference(prefs) => {
            if prefs.is_empty() {
                return Err(ValidationError::MissingField("preferences"));
            }
            push_param(&mut params, "genres", &prefs.genres);
            push_param(&mut params, "cast", &prefs.cast);
            push_param(&mut params, "directors", &prefs.directors);
            push_param(&mut params, "writers", &prefs.writers);
            push_param(&mut params, "languages", &prefs.languages);
            push_param(&mut params, "countries", &prefs.countries);
            if let Some(date) = prefs.min_year {
                params.push(("min_year".to_string(), date.year().to_string()));
            }
            if let Some(date) = prefs.max_year {
                params.push(("max_year".to_string(), date.year().to_string()));
            }
            Ok(QuerySpec {
                endpoint: "movies/preference-recommendations".to_string(),
                params,
            })
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn push_param(params: &mut Vec<(String, String)>, key: &str, value: &Option<String>) {
    if let Some(value) = non_empty(value) {
        params.push((key.to_string(), value.to_string()));
    }
}
