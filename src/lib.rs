pub mod config;
pub mod error;
pub mod explain;
pub mod presentation;
pub mod profile;
pub mod scoring;

pub use config::MatchConfig;
pub use error::MatchError;
pub use presentation::{match_color, match_description, MatchTier};
pub use profile::{GameProfile, GenreEntry, PlatformEntry, UserProfile, UserStats};
pub use scoring::{MatchBreakdown, MatchEngine, MatchReport, MatchWeights, SubScores};

/// Match percentage for a user/game pair using the default weight table.
///
/// `None` when either side is missing or the pair cannot be scored.
pub async fn calculate_match(user: Option<&UserProfile>, game: Option<&GameProfile>) -> Option<u8> {
    MatchEngine::default().calculate_match(user, game).await
}

/// Up to three reasons explaining `match_score`, using the default thresholds.
pub fn match_reasons(
    user: Option<&UserProfile>,
    game: Option<&GameProfile>,
    match_score: Option<f64>,
) -> Vec<String> {
    explain::match_reasons_with(&MatchConfig::default(), user, game, match_score)
}

pub fn format_score(score: Option<u8>) -> String {
    match score {
        Some(score) => format!("{}%", score),
        None => "--".to_string(),
    }
}
