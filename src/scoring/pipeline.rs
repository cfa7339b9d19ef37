use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::explain::match_reasons_with;
use crate::presentation::{match_color, match_description};
use crate::profile::{GameProfile, UserProfile};
use crate::scoring::weighted::{clamp_score, SubScores};
use crate::scoring::{
    genre_score, platform_score, rating_score, CommunitySignal, HistorySignal,
    MetadataCommunitySignal, ProxyHistorySignal,
};

/// Sub-scores and the combined result for one user/game pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    #[serde(flatten)]
    pub scores: SubScores,
    pub weighted: f64,
    pub score: u8,
}

/// Everything a consumer needs to display a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub score: Option<u8>,
    pub color: String,
    pub description: String,
    pub reasons: Vec<String>,
    pub breakdown: Option<MatchBreakdown>,
}

#[derive(Clone)]
pub struct MatchEngine {
    config: MatchConfig,
    community: Arc<dyn CommunitySignal>,
    history: Arc<dyn HistorySignal>,
}

impl fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl MatchEngine {
    pub fn new(config: MatchConfig) -> Self {
        let community = Arc::new(MetadataCommunitySignal::new(config.community.clone()));
        let history = Arc::new(ProxyHistorySignal::new(config.history.clone()));
        Self {
            config,
            community,
            history,
        }
    }

    pub fn with_community(mut self, community: Arc<dyn CommunitySignal>) -> Self {
        self.community = community;
        self
    }

    pub fn with_history(mut self, history: Arc<dyn HistorySignal>) -> Self {
        self.history = history;
        self
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Match percentage in `0..=100`, or `None` when either party is missing or
    /// scoring fails. Never panics and never surfaces an error.
    pub async fn calculate_match(
        &self,
        user: Option<&UserProfile>,
        game: Option<&GameProfile>,
    ) -> Option<u8> {
        self.try_breakdown(user, game).await.map(|breakdown| breakdown.score)
    }

    pub async fn breakdown(
        &self,
        user: &UserProfile,
        game: &GameProfile,
    ) -> Result<MatchBreakdown, MatchError> {
        let user_genres = user.genre_names()?;
        let game_genres = game.genre_names();
        let genre = genre_score(&user_genres, &game_genres, &self.config.genre);

        let user_rating = user
            .average_rating()
            .unwrap_or(self.config.rating.default_user_rating);
        let game_rating = game.effective_rating(self.config.rating.fallback_game_rating);
        let rating = rating_score(user_rating, game_rating, &self.config.rating)?;

        let user_platforms = user.platform_names().transpose()?;
        let game_platforms = game.platform_names();
        let platform = platform_score(
            user_platforms.as_deref(),
            game_platforms.as_deref(),
            &self.config.platform,
        );

        let (community, history) =
            tokio::join!(self.community_or_neutral(game), self.history_or_neutral(user, game));

        let scores = SubScores {
            genre,
            rating,
            platform,
            community,
            history,
        }
        .clamped();

        let weighted = self.config.weights.combine(&scores);
        if !weighted.is_finite() {
            return Err(MatchError::NonFiniteValue {
                field: "weighted score",
                value: weighted,
            });
        }
        let score = clamp_score(weighted.round()) as u8;

        debug!(
            genre = scores.genre,
            rating = scores.rating,
            platform = scores.platform,
            community = scores.community,
            history = scores.history,
            weighted,
            score,
            "computed match"
        );

        Ok(MatchBreakdown {
            scores,
            weighted,
            score,
        })
    }

    /// Score, presentation tokens and reasons for one pair.
    pub async fn report(
        &self,
        user: Option<&UserProfile>,
        game: Option<&GameProfile>,
    ) -> MatchReport {
        let breakdown = self.try_breakdown(user, game).await;
        let score = breakdown.as_ref().map(|breakdown| breakdown.score);
        let display_score = score.map(f64::from);

        MatchReport {
            score,
            color: match_color(display_score).to_string(),
            description: match_description(display_score).to_string(),
            reasons: match_reasons_with(&self.config, user, game, display_score),
            breakdown,
        }
    }

    async fn try_breakdown(
        &self,
        user: Option<&UserProfile>,
        game: Option<&GameProfile>,
    ) -> Option<MatchBreakdown> {
        let (user, game) = user.zip(game)?;
        match self.breakdown(user, game).await {
            Ok(breakdown) => Some(breakdown),
            Err(err) => {
                warn!(error = %err, "match calculation failed");
                None
            }
        }
    }

    async fn community_or_neutral(&self, game: &GameProfile) -> f64 {
        let neutral = self.config.community.neutral_score;
        match self.community.community_score(game).await {
            Ok(score) if !score.is_nan() => clamp_score(score),
            Ok(score) => {
                warn!(score, "community signal returned NaN; using neutral score");
                neutral
            }
            Err(err) => {
                warn!(error = %err, "community signal failed; using neutral score");
                neutral
            }
        }
    }

    async fn history_or_neutral(&self, user: &UserProfile, game: &GameProfile) -> f64 {
        let neutral = self.config.history.neutral_score;
        match self.history.history_score(user, game).await {
            Ok(score) if !score.is_nan() => clamp_score(score),
            Ok(score) => {
                warn!(score, "history signal returned NaN; using neutral score");
                neutral
            }
            Err(err) => {
                warn!(error = %err, "history signal failed; using neutral score");
                neutral
            }
        }
    }
}
