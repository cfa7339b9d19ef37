use crate::config::RatingConfig;
use crate::error::{finite, MatchError};

/// Proximity of the game's rating to the user's usual rating, with a flat bonus
/// for highly rated games.
pub fn rating_score(
    user_rating: f64,
    game_rating: f64,
    config: &RatingConfig,
) -> Result<f64, MatchError> {
    let user_rating = finite("user.stats.averageRating", user_rating)?;
    let game_rating = finite("game rating", game_rating)?;

    let diff = (user_rating - game_rating).abs();
    let mut score = (100.0 - diff * config.penalty_per_point).max(0.0);

    if game_rating >= config.high_rating_threshold {
        score += config.high_rating_bonus;
    }

    Ok(score.min(100.0))
}
