//! Difficulty levels and their fixed tuning profiles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty levels for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Colour theme of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Green,
    Blue,
    Red,
}

/// Tuning parameters for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    /// Number of food items kept on the board.
    pub food_count: usize,
    /// Milliseconds between ticks.
    pub tick_interval_ms: u64,
    pub theme: Theme,
}

const EASY: DifficultyProfile = DifficultyProfile {
    food_count: 2,
    tick_interval_ms: 150,
    theme: Theme::Green,
};

const MEDIUM: DifficultyProfile = DifficultyProfile {
    food_count: 2,
    tick_interval_ms: 100,
    theme: Theme::Blue,
};

const HARD: DifficultyProfile = DifficultyProfile {
    food_count: 1,
    tick_interval_ms: 60,
    theme: Theme::Red,
};

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Out-of-range indices fall back to `Easy`.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Easy)
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Easy => 0,
            Self::Medium => 1,
            Self::Hard => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Lowercase key used in the high score file and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn profile(&self) -> &'static DifficultyProfile {
        match self {
            Self::Easy => &EASY,
            Self::Medium => &MEDIUM,
            Self::Hard => &HARD,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown difficulty '{}' (expected easy, medium or hard)", s))
    }
}
