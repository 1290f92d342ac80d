pub mod query;
pub mod state;

pub use query::{build, clamp_count, Preferences, QuerySpec, SearchQuery, ValidationError};
pub use state::ResultState;
