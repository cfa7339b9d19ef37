use async_trait::async_trait;

use crate::config::CommunityConfig;
use crate::error::{finite, MatchError};
use crate::profile::GameProfile;

/// Source of the community reception signal for a game.
///
/// The engine awaits this before aggregation, so implementations may reach out
/// to a stats service. Errors are replaced by the neutral score by the caller.
#[async_trait]
pub trait CommunitySignal: Send + Sync {
    async fn community_score(&self, game: &GameProfile) -> Result<f64, MatchError>;
}

/// Derives the community signal from the game's own metadata: rating tier,
/// vote volume and curation flags.
#[derive(Debug, Clone)]
pub struct MetadataCommunitySignal {
    config: CommunityConfig,
}

impl Default for MetadataCommunitySignal {
    fn default() -> Self {
        Self::new(CommunityConfig::default())
    }
}

impl MetadataCommunitySignal {
    /// Tiers are kept highest threshold first.
    pub fn new(mut config: CommunityConfig) -> Self {
        config.tiers.sort_by(|a, b| b.min_rating.total_cmp(&a.min_rating));
        Self { config }
    }

    pub fn score(&self, game: &GameProfile) -> Result<f64, MatchError> {
        let rating = finite("game community rating", game.community_rating())?;
        let votes = finite("game.votes", game.votes.unwrap_or(0.0))?;

        let mut score = self.tier_score(rating);
        score += (votes / self.config.votes_per_point).min(self.config.max_popularity_bonus);

        if game.is_trending {
            score += self.config.trending_bonus;
        }
        if game.is_top_rated {
            score += self.config.top_rated_bonus;
        }
        if game.is_new {
            score += self.config.new_bonus;
        }

        Ok(score.clamp(0.0, 100.0))
    }

    fn tier_score(&self, rating: f64) -> f64 {
        self.config
            .tiers
            .iter()
            .find(|tier| rating >= tier.min_rating)
            .map(|tier| tier.score)
            .unwrap_or(self.config.base_score)
    }
}

#[async_trait]
impl CommunitySignal for MetadataCommunitySignal {
    async fn community_score(&self, game: &GameProfile) -> Result<f64, MatchError> {
        self.score(game)
    }
}
