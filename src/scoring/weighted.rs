use serde::{Deserialize, Serialize};

use crate::error::MatchError;

const WEIGHT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    pub genre: f64,
    pub rating: f64,
    pub platform: f64,
    pub community: f64,
    pub history: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            genre: 0.40,
            rating: 0.25,
            platform: 0.15,
            community: 0.10,
            history: 0.10,
        }
    }
}

impl MatchWeights {
    pub fn total(&self) -> f64 {
        self.genre + self.rating + self.platform + self.community + self.history
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        let total = self.total();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(MatchError::InvalidWeights { total });
        }
        Ok(())
    }

    pub fn combine(&self, scores: &SubScores) -> f64 {
        let mut score = 0.0;

        score += scores.genre * self.genre;
        score += scores.rating * self.rating;
        score += scores.platform * self.platform;
        score += scores.community * self.community;
        score += scores.history * self.history;

        score
    }
}

/// The five sub-scores of a match, each already clamped to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub genre: f64,
    pub rating: f64,
    pub platform: f64,
    pub community: f64,
    pub history: f64,
}

impl SubScores {
    pub fn clamped(self) -> Self {
        Self {
            genre: clamp_score(self.genre),
            rating: clamp_score(self.rating),
            platform: clamp_score(self.platform),
            community: clamp_score(self.community),
            history: clamp_score(self.history),
        }
    }
}

/// Clamp to `0..=100`. NaN passes through so the caller can reject it.
pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}
