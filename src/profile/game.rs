use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<String>>,
    /// Site rating on a 0-10 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ggdb_rating: Option<f64>,
    /// Critic score on a 0-100 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metacritic_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default)]
    pub is_trending: bool,
    #[serde(default)]
    pub is_top_rated: bool,
    #[serde(default)]
    pub is_new: bool,
}

impl GameProfile {
    pub fn genres(&self) -> &[String] {
        self.genres.as_deref().unwrap_or_default()
    }

    pub fn genre_names(&self) -> Vec<String> {
        self.genres().iter().map(|genre| genre.to_lowercase()).collect()
    }

    pub fn platform_names(&self) -> Option<Vec<String>> {
        self.platforms
            .as_ref()
            .map(|platforms| platforms.iter().map(|p| p.to_lowercase()).collect())
    }

    /// Rating used for preference proximity: site rating, then the critic score
    /// rescaled to 0-10, then `fallback`.
    pub fn effective_rating(&self, fallback: f64) -> f64 {
        self.ggdb_rating
            .or_else(|| self.metacritic_score.map(|score| score / 10.0))
            .unwrap_or(fallback)
    }

    /// Rating used for the community tier: site rating, then the raw `rating`
    /// field, then zero.
    pub fn community_rating(&self) -> f64 {
        self.ggdb_rating.or(self.rating).unwrap_or(0.0)
    }
}
