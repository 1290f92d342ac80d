pub mod catalog;
pub mod client;
pub mod config;
pub mod movie;
pub mod recommend;
pub mod render;
pub mod util;

use tracing::{info, warn};

use crate::client::MovieApi;
use crate::recommend::query::SearchQuery;
use crate::recommend::state::ResultState;
use crate::util::clipboard::ClipboardWriter;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Client error: {0}")]
    Client(#[from] client::ClientError),
    #[error("Invalid search input: {0}")]
    Validation(#[from] recommend::query::ValidationError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// What the user asked the CLI to do, already translated out of clap types.
#[derive(Debug, Clone)]
pub enum Command {
    /// Browse one page of the movie catalog.
    List {
        page: u32,
        limit: Option<u32>,
        filter: Option<String>,
    },
    /// Run the recommendation flow for one submitted query.
    Recommend {
        query: SearchQuery,
        count: u32,
        page: usize,
        copy_first_id: bool,
    },
}

pub async fn run(
    config_path: Option<&str>,
    base_url_flag: Option<&str>,
    command: Command,
) -> Result<(), AppError> {
    let config = config::Config::load(config_path)?;
    if let Some(path) = config_path {
        info!("Using config file: {}", path);
    }

    let base_url =
        config.resolve_base_url(base_url_flag, std::env::var(config::BASE_URL_ENV).ok());
    info!("Using recommendation server at {}", base_url);

    let api = client::ApiClient::new(&base_url)?;

    match command {
        Command::List {
            page,
            limit,
            filter,
        } => {
            let limit = limit.unwrap_or(config.catalog.limit);
            run_list(&api, page, limit, filter.as_deref()).await
        }
        Command::Recommend {
            query,
            count,
            page,
            copy_first_id,
        } => {
            let mut clipboard = util::clipboard::Osc52Clipboard::new(std::io::stdout());
            run_recommend(&api, &mut clipboard, query, count, page, copy_first_id).await
        }
    }
}

async fn run_list(
    api: &impl MovieApi,
    page: u32,
    limit: u32,
    filter: Option<&str>,
) -> Result<(), AppError> {
    match api.movies(page, limit).await {
        Ok(catalog_page) => {
            let shown = match filter {
                Some(term) => catalog::filter_by_title(&catalog_page.movies, term),
                None => catalog_page.movies.clone(),
            };

            println!("Total Results: {}", catalog_page.total_results);
            if shown.is_empty() {
                println!("No movies found for your search.");
            }
            for movie in &shown {
                println!("{}", render::movie_card(movie));
            }
            if catalog_page.total_pages > 1 {
                println!("Page {} / {}", page, catalog_page.total_pages);
            }
            Ok(())
        }
        Err(e) => {
            // Catalog failures are not fatal; the next invocation can retry.
            warn!("catalog listing failed: {}", e);
            println!("Failed to load movies. Please try again.");
            Ok(())
        }
    }
}

async fn run_recommend(
    api: &impl MovieApi,
    clipboard: &mut impl ClipboardWriter,
    query: SearchQuery,
    count: u32,
    page: usize,
    copy_first_id: bool,
) -> Result<(), AppError> {
    let spec = recommend::query::build(&query, count)?;

    let mut state = ResultState::default();
    state.begin();
    println!("{}", render::render_state(&state, 0));

    let outcome = api.recommendations(&spec).await;
    state.resolve(outcome);
    println!("{}", render::render_state(&state, page));

    if copy_first_id {
        if let ResultState::Success(movies) = &state {
            if let Some(first) = movies.first() {
                clipboard.write_text(&first.id)?;
                info!("Copied movie id {} to clipboard", first.id);
            }
        }
    }

    Ok(())
}
