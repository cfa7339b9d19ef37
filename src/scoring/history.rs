use async_trait::async_trait;

use crate::config::HistoryConfig;
use crate::error::{finite, MatchError};
use crate::profile::{GameProfile, UserProfile};

/// Source of the user's play-history affinity for a game.
#[async_trait]
pub trait HistorySignal: Send + Sync {
    async fn history_score(
        &self,
        user: &UserProfile,
        game: &GameProfile,
    ) -> Result<f64, MatchError>;
}

/// Stands in for real activity data with the user's genre and rating preferences.
#[derive(Debug, Clone, Default)]
pub struct ProxyHistorySignal {
    config: HistoryConfig,
}

impl ProxyHistorySignal {
    pub fn new(config: HistoryConfig) -> Self {
        Self { config }
    }

    pub fn score(
        &self,
        user: Option<&UserProfile>,
        game: Option<&GameProfile>,
    ) -> Result<f64, MatchError> {
        let (user, game) = match (user, game) {
            (Some(user), Some(game)) => (user, game),
            _ => return Ok(self.config.neutral_score),
        };

        let mut score = self.config.neutral_score;

        if user.favorite_genres.is_some() && game.genres.is_some() {
            let favorites = user.genre_names()?;
            let genres = game.genre_names();
            let matching = genres
                .iter()
                .filter(|genre| favorites.iter().any(|fav| genre.contains(fav.as_str())))
                .count();
            let ratio = matching as f64 / genres.len().max(1) as f64;
            score = self.config.genre_base + ratio * self.config.genre_span;
        }

        if let (Some(user_rating), Some(game_rating)) = (user.average_rating(), game.ggdb_rating) {
            let user_rating = finite("user.stats.averageRating", user_rating)?;
            let game_rating = finite("game.ggdbRating", game_rating)?;
            let diff = (user_rating - game_rating).abs();
            if diff <= self.config.close_rating_diff {
                score += self.config.close_rating_bonus;
            } else if diff <= self.config.near_rating_diff {
                score += self.config.near_rating_bonus;
            }
        }

        Ok(score.clamp(0.0, 100.0))
    }
}

#[async_trait]
impl HistorySignal for ProxyHistorySignal {
    async fn history_score(
        &self,
        user: &UserProfile,
        game: &GameProfile,
    ) -> Result<f64, MatchError> {
        self.score(Some(user), Some(game))
    }
}
