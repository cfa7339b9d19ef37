use crate::config::GenreConfig;
use crate::profile::names_overlap;

/// Overlap between the user's favorite genres and the game's genres.
///
/// Both slices must already be lowercased. A game genre counts as matching when it
/// overlaps any favorite by substring in either direction; genres present verbatim
/// in the favorites earn an extra bonus on top.
pub fn genre_score(user_genres: &[String], game_genres: &[String], config: &GenreConfig) -> f64 {
    if game_genres.is_empty() {
        return 0.0;
    }

    let total = game_genres.len() as f64;
    let matching = game_genres
        .iter()
        .filter(|genre| user_genres.iter().any(|fav| names_overlap(fav, genre)))
        .count();
    let exact = game_genres
        .iter()
        .filter(|genre| user_genres.contains(*genre))
        .count();

    let base = matching as f64 / total * 100.0;
    let bonus = exact as f64 / total * config.exact_match_bonus;

    (base + bonus).min(100.0)
}
