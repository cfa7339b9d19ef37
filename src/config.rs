use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::MatchError;
use crate::scoring::MatchWeights;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenreConfig {
    /// Points added per fully exact-matching game genre, scaled by genre share.
    pub exact_match_bonus: f64,
}

impl Default for GenreConfig {
    fn default() -> Self {
        Self {
            exact_match_bonus: 20.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    pub default_user_rating: f64,
    pub fallback_game_rating: f64,
    pub penalty_per_point: f64,
    pub high_rating_threshold: f64,
    pub high_rating_bonus: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            default_user_rating: 7.5,
            fallback_game_rating: 7.0,
            penalty_per_point: 15.0,
            high_rating_threshold: 8.5,
            high_rating_bonus: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    pub missing_data_score: f64,
    pub compatible_score: f64,
    pub incompatible_score: f64,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            missing_data_score: 50.0,
            compatible_score: 100.0,
            incompatible_score: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityTier {
    pub min_rating: f64,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityConfig {
    /// Checked highest threshold first.
    pub tiers: Vec<CommunityTier>,
    pub base_score: f64,
    pub votes_per_point: f64,
    pub max_popularity_bonus: f64,
    pub trending_bonus: f64,
    pub top_rated_bonus: f64,
    pub new_bonus: f64,
    pub neutral_score: f64,
}

impl Default for CommunityConfig {
    fn default() -> Self {
        let tiers = [(9.0, 95.0), (8.5, 85.0), (8.0, 75.0), (7.5, 65.0), (7.0, 55.0)]
            .into_iter()
            .map(|(min_rating, score)| CommunityTier { min_rating, score })
            .collect();
        Self {
            tiers,
            base_score: 50.0,
            votes_per_point: 100.0,
            max_popularity_bonus: 15.0,
            trending_bonus: 10.0,
            top_rated_bonus: 5.0,
            new_bonus: 3.0,
            neutral_score: 50.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub neutral_score: f64,
    pub genre_base: f64,
    pub genre_span: f64,
    pub close_rating_diff: f64,
    pub close_rating_bonus: f64,
    pub near_rating_diff: f64,
    pub near_rating_bonus: f64,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            neutral_score: 50.0,
            genre_base: 30.0,
            genre_span: 40.0,
            close_rating_diff: 1.0,
            close_rating_bonus: 15.0,
            near_rating_diff: 2.0,
            near_rating_bonus: 5.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub weights: MatchWeights,
    pub genre: GenreConfig,
    pub rating: RatingConfig,
    pub platform: PlatformConfig,
    pub community: CommunityConfig,
    pub history: HistoryConfig,
}

impl MatchConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), MatchError> {
        let config_path = path.or_else(default_config_path);
        let mut config = match config_path.as_ref() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(path).map_err(|err| {
                    MatchError::Config(format!("failed to read {}: {}", path.display(), err))
                })?;
                toml::from_str(&contents)
                    .map_err(|err| MatchError::Config(format!("failed to parse config: {}", err)))?
            }
            _ => MatchConfig::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), MatchError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|err| {
                    MatchError::Config(format!("failed to create config dir: {}", err))
                })?;
            }
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| MatchError::Config(format!("failed to serialize config: {}", err)))?;
        std::fs::write(path, payload)
            .map_err(|err| MatchError::Config(format!("failed to write config: {}", err)))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        self.weights.validate()
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("MATCH_DEFAULT_USER_RATING") {
            if let Ok(rating) = value.parse::<f64>() {
                self.rating.default_user_rating = rating;
            }
        }
        if let Ok(value) = env::var("MATCH_FALLBACK_GAME_RATING") {
            if let Ok(rating) = value.parse::<f64>() {
                self.rating.fallback_game_rating = rating;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("MATCH_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/match.toml")))
}
