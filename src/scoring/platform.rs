use crate::config::PlatformConfig;
use crate::profile::names_overlap;

/// Binary platform compatibility: any overlapping pair scores full marks.
/// Missing data on either side yields the neutral score.
pub fn platform_score(
    user_platforms: Option<&[String]>,
    game_platforms: Option<&[String]>,
    config: &PlatformConfig,
) -> f64 {
    match (user_platforms, game_platforms) {
        (Some(user), Some(game)) => {
            if first_compatible(user, game).is_some() {
                config.compatible_score
            } else {
                config.incompatible_score
            }
        }
        _ => config.missing_data_score,
    }
}

/// Index of the first game platform that overlaps any of the user's platforms.
pub fn first_compatible(user_platforms: &[String], game_platforms: &[String]) -> Option<usize> {
    game_platforms.iter().position(|platform| {
        user_platforms
            .iter()
            .any(|owned| names_overlap(owned, platform))
    })
}
