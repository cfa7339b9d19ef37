use game_match::{GameProfile, UserProfile};
use serde::Deserialize;

/// Body of `POST /api/match`. A missing or null `user` is an anonymous visitor.
#[derive(Debug, Deserialize)]
pub struct ApiMatchRequest {
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub game: Option<GameProfile>,
}

impl ApiMatchRequest {
    pub fn parts(&self) -> (Option<&UserProfile>, Option<&GameProfile>) {
        (self.user.as_ref(), self.game.as_ref())
    }
}
