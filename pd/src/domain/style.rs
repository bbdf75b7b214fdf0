//! Tone and audience knobs for a generation

use serde::{Deserialize, Serialize};

/// Voice the drafts are written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Professional,
    Casual,
    Inspirational,
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Professional => write!(f, "professional"),
            Self::Casual => write!(f, "casual"),
            Self::Inspirational => write!(f, "inspirational"),
        }
    }
}

impl std::str::FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "professional" => Ok(Self::Professional),
            "casual" => Ok(Self::Casual),
            "inspirational" => Ok(Self::Inspirational),
            _ => Err(format!("Unknown tone: {}", s)),
        }
    }
}

/// Readership the drafts are aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    #[default]
    General,
    Tech,
    Business,
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::General => write!(f, "general"),
            Self::Tech => write!(f, "tech"),
            Self::Business => write!(f, "business"),
        }
    }
}

impl std::str::FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "general" => Ok(Self::General),
            "tech" => Ok(Self::Tech),
            "business" => Ok(Self::Business),
            _ => Err(format!("Unknown audience: {}", s)),
        }
    }
}
