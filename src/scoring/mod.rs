pub mod community;
pub mod genre;
pub mod history;
pub mod pipeline;
pub mod platform;
pub mod rating;
pub mod weighted;

pub use community::{CommunitySignal, MetadataCommunitySignal};
pub use genre::genre_score;
pub use history::{HistorySignal, ProxyHistorySignal};
pub use pipeline::{MatchBreakdown, MatchEngine, MatchReport};
pub use platform::platform_score;
pub use rating::rating_score;
pub use weighted::{MatchWeights, SubScores};
