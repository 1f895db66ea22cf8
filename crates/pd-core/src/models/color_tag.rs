use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Color theme attached to a profile card.
///
/// The wire value (`bg-<color>-500`) is what the record store keeps in its
/// `color` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ColorTag {
    #[default]
    #[serde(rename = "bg-blue-500")]
    Blue,
    #[serde(rename = "bg-green-500")]
    Green,
    #[serde(rename = "bg-red-500")]
    Red,
    #[serde(rename = "bg-yellow-500")]
    Yellow,
    #[serde(rename = "bg-purple-500")]
    Purple,
    #[serde(rename = "bg-pink-500")]
    Pink,
    #[serde(rename = "bg-indigo-500")]
    Indigo,
    #[serde(rename = "bg-gray-500")]
    Gray,
}

impl ColorTag {
    pub const ALL: [ColorTag; 8] = [
        Self::Blue,
        Self::Green,
        Self::Red,
        Self::Yellow,
        Self::Purple,
        Self::Pink,
        Self::Indigo,
        Self::Gray,
    ];

    /// Convert to the stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-500",
            Self::Green => "bg-green-500",
            Self::Red => "bg-red-500",
            Self::Yellow => "bg-yellow-500",
            Self::Purple => "bg-purple-500",
            Self::Pink => "bg-pink-500",
            Self::Indigo => "bg-indigo-500",
            Self::Gray => "bg-gray-500",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Purple => "Purple",
            Self::Pink => "Pink",
            Self::Indigo => "Indigo",
            Self::Gray => "Gray",
        }
    }
}

impl FromStr for ColorTag {
    type Err = CoreError;

    /// Accepts either the stored value (`bg-red-500`) or the label (`red`),
    /// case-insensitively.
    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == wanted || tag.label().to_lowercase() == wanted)
            .ok_or_else(|| CoreError::InvalidColorTag {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for ColorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
