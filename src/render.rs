use crate::movie::Movie;
use crate::recommend::state::ResultState;
use crate::util::page::{paginate, show_controls, RESULT_PAGE_SIZE};

/// Render the recommendation view for the current state.
pub fn render_state(state: &ResultState, page_index: usize) -> String {
    match state {
        ResultState::Idle => "Try to suggest movies based on your criteria!".to_string(),
        ResultState::Loading => "Looking for suggestions...".to_string(),
        ResultState::Error(message) => format!("error: {}", message),
        ResultState::Success(movies) => render_results(movies, page_index),
    }
}

/// One page of movie cards, with a page footer when there is more than one
/// page worth of results.
pub fn render_results(movies: &[Movie], page_index: usize) -> String {
    let page = paginate(movies, RESULT_PAGE_SIZE, page_index);

    let mut out = String::new();
    for movie in page.items {
        out.push_str(&movie_card(movie));
        out.push('\n');
    }
    if show_controls(movies.len(), RESULT_PAGE_SIZE) {
        out.push_str(&format!("Page {} / {}\n", page.page_index + 1, page.page_count));
    }
    out
}

pub fn movie_card(movie: &Movie) -> String {
    let mut card = String::new();

    match movie.year {
        Some(year) => card.push_str(&format!("{} ({})\n", movie.title, year)),
        None => card.push_str(&format!("{}\n", movie.title)),
    }
    if let Some(similarity) = movie.similarity_percent() {
        card.push_str(&format!("  Similarity: {}\n", similarity));
    }
    push_list(&mut card, "Genres", &movie.genres);
    push_list(&mut card, "Director", &movie.directors);
    push_list(&mut card, "Cast", &movie.cast);
    push_list(&mut card, "Countries", &movie.countries);
    card.push_str(&format!("  {}\n", movie.plot_summary()));
    card.push_str(&format!("  id: {}\n", movie.id));
    card
}

fn push_list(card: &mut String, label: &str, values: &Option<Vec<String>>) {
    if let Some(values) = values {
        if !values.is_empty() {
            card.push_str(&format!("  {}: {}\n", label, values.join(", ")));
        }
    }
}
