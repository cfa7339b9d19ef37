use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// A favorite genre as stored on a user: either a bare name or a genre record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenreEntry {
    Name(String),
    Descriptor {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl GenreEntry {
    pub fn display_name(&self) -> Result<&str, MatchError> {
        match self {
            GenreEntry::Name(name) => Ok(name.as_str()),
            GenreEntry::Descriptor { key, name } => first_present(&[key, name]).ok_or(
                MatchError::MalformedDescriptor {
                    kind: "genre",
                    fields: "`key` or `name`",
                },
            ),
        }
    }
}

impl From<&str> for GenreEntry {
    fn from(value: &str) -> Self {
        GenreEntry::Name(value.to_string())
    }
}

/// A platform the user owns: either a bare name or a platform record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlatformEntry {
    Name(String),
    Descriptor {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        platform: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl PlatformEntry {
    pub fn display_name(&self) -> Result<&str, MatchError> {
        match self {
            PlatformEntry::Name(name) => Ok(name.as_str()),
            PlatformEntry::Descriptor { platform, name } => first_present(&[platform, name])
                .ok_or(MatchError::MalformedDescriptor {
                    kind: "platform",
                    fields: "`platform` or `name`",
                }),
        }
    }
}

impl From<&str> for PlatformEntry {
    fn from(value: &str) -> Self {
        PlatformEntry::Name(value.to_string())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_genres: Option<Vec<GenreEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<PlatformEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<UserStats>,
}

impl UserProfile {
    /// Lowercased favorite genre names; an absent list yields an empty one.
    pub fn genre_names(&self) -> Result<Vec<String>, MatchError> {
        self.favorite_genres
            .iter()
            .flatten()
            .map(|entry| entry.display_name().map(str::to_lowercase))
            .collect()
    }

    /// Lowercased platform names, or `None` when the user has no platform list.
    pub fn platform_names(&self) -> Option<Result<Vec<String>, MatchError>> {
        self.platforms.as_ref().map(|platforms| {
            platforms
                .iter()
                .map(|entry| entry.display_name().map(str::to_lowercase))
                .collect()
        })
    }

    pub fn average_rating(&self) -> Option<f64> {
        self.stats.as_ref().and_then(|stats| stats.average_rating)
    }
}

fn first_present<'a>(fields: &[&'a Option<String>]) -> Option<&'a str> {
    fields
        .iter()
        .copied()
        .filter_map(Option::as_deref)
        .find(|value| !value.is_empty())
}
