use serde::{Deserialize, Serialize};

pub const NEUTRAL_COLOR: &str = "neutral";
pub const ANONYMOUS_DESCRIPTION: &str = "Login to see match";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchTier {
    Perfect,
    Excellent,
    Good,
    Fair,
    Low,
}

impl MatchTier {
    /// Any number maps to a tier; NaN and out-of-range values included.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            MatchTier::Perfect
        } else if score >= 80.0 {
            MatchTier::Excellent
        } else if score >= 70.0 {
            MatchTier::Good
        } else if score >= 60.0 {
            MatchTier::Fair
        } else {
            MatchTier::Low
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            MatchTier::Perfect => "emerald",
            MatchTier::Excellent => "green",
            MatchTier::Good => "yellow",
            MatchTier::Fair => "orange",
            MatchTier::Low => "red",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchTier::Perfect => "Perfect Match",
            MatchTier::Excellent => "Excellent Match",
            MatchTier::Good => "Good Match",
            MatchTier::Fair => "Fair Match",
            MatchTier::Low => "Low Match",
        }
    }

    /// Reason line shown for strong matches; fair and low tiers get none.
    pub fn reason(self) -> Option<&'static str> {
        match self {
            MatchTier::Perfect => Some("Perfect match for your taste!"),
            MatchTier::Excellent => Some("Highly recommended for you"),
            MatchTier::Good => Some("Good match based on your preferences"),
            MatchTier::Fair | MatchTier::Low => None,
        }
    }
}

pub fn match_color(score: Option<f64>) -> &'static str {
    score
        .map(|score| MatchTier::from_score(score).color())
        .unwrap_or(NEUTRAL_COLOR)
}

pub fn match_description(score: Option<f64>) -> &'static str {
    score
        .map(|score| MatchTier::from_score(score).label())
        .unwrap_or(ANONYMOUS_DESCRIPTION)
}
