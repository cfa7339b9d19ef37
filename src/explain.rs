use crate::config::MatchConfig;
use crate::presentation::MatchTier;
use crate::profile::{names_overlap, GameProfile, UserProfile};
use crate::scoring::platform::first_compatible;

pub const MAX_REASONS: usize = 3;
const MAX_GENRES_IN_REASON: usize = 2;

/// Human-readable reasons behind a match, strongest signal first.
///
/// Returns nothing when either party is missing or the score is absent, zero or NaN.
/// Malformed genre or platform entries are skipped rather than failing the whole list.
pub fn match_reasons_with(
    config: &MatchConfig,
    user: Option<&UserProfile>,
    game: Option<&GameProfile>,
    match_score: Option<f64>,
) -> Vec<String> {
    let (user, game, score) = match (user, game, match_score) {
        (Some(user), Some(game), Some(score)) if score != 0.0 && !score.is_nan() => {
            (user, game, score)
        }
        _ => return Vec::new(),
    };

    let mut reasons = Vec::new();

    if let Some(reason) = genre_reason(user, game) {
        reasons.push(reason);
    }

    if game
        .ggdb_rating
        .is_some_and(|rating| rating >= config.rating.high_rating_threshold)
    {
        reasons.push("Highly rated by community".to_string());
    }

    if let Some(platform) = compatible_platform(user, game) {
        reasons.push(format!("Available on your {} platform", platform));
    }

    if let Some(reason) = MatchTier::from_score(score).reason() {
        reasons.push(reason.to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

fn genre_reason(user: &UserProfile, game: &GameProfile) -> Option<String> {
    let favorites: Vec<String> = user
        .favorite_genres
        .iter()
        .flatten()
        .filter_map(|entry| entry.display_name().ok())
        .map(str::to_lowercase)
        .collect();

    let matched: Vec<&str> = game
        .genres()
        .iter()
        .filter(|genre| {
            let genre = genre.to_lowercase();
            favorites.iter().any(|fav| names_overlap(fav, &genre))
        })
        .take(MAX_GENRES_IN_REASON)
        .map(String::as_str)
        .collect();

    if matched.is_empty() {
        return None;
    }
    Some(format!("Matches your {} preferences", matched.join(" & ")))
}

fn compatible_platform<'a>(user: &UserProfile, game: &'a GameProfile) -> Option<&'a str> {
    let owned: Vec<String> = user
        .platforms
        .as_ref()?
        .iter()
        .filter_map(|entry| entry.display_name().ok())
        .map(str::to_lowercase)
        .collect();
    let platforms = game.platforms.as_ref()?;
    let lowered: Vec<String> = platforms.iter().map(|p| p.to_lowercase()).collect();

    first_compatible(&owned, &lowered)
        .and_then(|index| platforms.get(index))
        .map(String::as_str)
}
