pub mod game;
pub mod user;

pub use game::GameProfile;
pub use user::{GenreEntry, PlatformEntry, UserProfile, UserStats};

/// Bidirectional substring containment on already-lowercased names.
pub fn names_overlap(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
