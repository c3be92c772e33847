//! Best score per difficulty.

use super::persistence::ScoreStore;
use crate::game::Difficulty;
use serde::{Deserialize, Serialize};

/// Persisted form: one non-negative best score per difficulty key.
///
/// Missing keys load as 0, so a file written with fewer difficulties still
/// parses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighScores {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl HighScores {
    pub fn get(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn set(&mut self, difficulty: Difficulty, score: u32) {
        match difficulty {
            Difficulty::Easy => self.easy = score,
            Difficulty::Medium => self.medium = score,
            Difficulty::Hard => self.hard = score,
        }
    }
}

/// In-memory ledger of best scores.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighScoreLedger {
    scores: HighScores,
}

impl HighScoreLedger {
    pub fn new(scores: HighScores) -> Self {
        Self { scores }
    }

    /// Load from `store`, falling back to all zeros if the data is absent,
    /// unreadable or corrupt. The cause is logged, never returned.
    pub fn load_from<S: ScoreStore + ?Sized>(store: &S) -> Self {
        match store.load() {
            Ok(Some(scores)) => {
                tracing::debug!(?scores, "loaded high scores");
                Self::new(scores)
            }
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("could not load high scores, starting from zero: {}", e);
                Self::default()
            }
        }
    }

    pub fn get(&self, difficulty: Difficulty) -> u32 {
        self.scores.get(difficulty)
    }

    /// Store `score` if it beats the current best for `difficulty`.
    /// Returns whether the ledger changed.
    pub fn record_if_higher(&mut self, difficulty: Difficulty, score: u32) -> bool {
        if score <= self.scores.get(difficulty) {
            return false;
        }
        self.scores.set(difficulty, score);
        true
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::high_scores::persistence::InMemoryStore;
    use std::io;

    struct FailingStore;

    impl ScoreStore for FailingStore {
        fn load(&self) -> io::Result<Option<HighScores>> {
            Err(io::Error::new(io::ErrorKind::InvalidData, "corrupt"))
        }

        fn save(&mut self, _scores: &HighScores) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
        }
    }

    #[test]
    fn test_defaults_are_zero() {
        let ledger = HighScoreLedger::default();
        for d in Difficulty::ALL {
            assert_eq!(ledger.get(d), 0);
        }
    }

    #[test]
    fn test_record_if_higher() {
        let mut ledger = HighScoreLedger::new(HighScores {
            easy: 50,
            ..Default::default()
        });

        assert!(!ledger.record_if_higher(Difficulty::Easy, 30));
        assert_eq!(ledger.get(Difficulty::Easy), 50);

        assert!(!ledger.record_if_higher(Difficulty::Easy, 50));

        assert!(ledger.record_if_higher(Difficulty::Easy, 60));
        assert_eq!(ledger.get(Difficulty::Easy), 60);

        // Other difficulties untouched
        assert_eq!(ledger.get(Difficulty::Medium), 0);
        assert_eq!(ledger.get(Difficulty::Hard), 0);
    }

    #[test]
    fn test_zero_score_never_records() {
        let mut ledger = HighScoreLedger::default();
        assert!(!ledger.record_if_higher(Difficulty::Hard, 0));
    }

    #[test]
    fn test_load_from_store() {
        let store = InMemoryStore::with_scores(HighScores {
            easy: 10,
            medium: 20,
            hard: 30,
        });
        let ledger = HighScoreLedger::load_from(&store);
        assert_eq!(ledger.get(Difficulty::Easy), 10);
        assert_eq!(ledger.get(Difficulty::Medium), 20);
        assert_eq!(ledger.get(Difficulty::Hard), 30);
    }

    #[test]
    fn test_load_from_empty_store_is_default() {
        let ledger = HighScoreLedger::load_from(&InMemoryStore::new());
        assert_eq!(ledger, HighScoreLedger::default());
    }

    #[test]
    fn test_load_failure_falls_back_to_zero() {
        let ledger = HighScoreLedger::load_from(&FailingStore);
        assert_eq!(ledger, HighScoreLedger::default());
    }

    #[test]
    fn test_missing_keys_deserialize_as_zero() {
        let scores: HighScores = serde_json::from_str(r#"{"easy": 40}"#).unwrap();
        assert_eq!(
            scores,
            HighScores {
                easy: 40,
                medium: 0,
                hard: 0
            }
        );
    }

    #[test]
    fn test_negative_score_is_rejected() {
        assert!(serde_json::from_str::<HighScores>(r#"{"easy": -5}"#).is_err());
    }

    #[test]
    fn test_serialized_layout() {
        let json = serde_json::to_value(HighScores {
            easy: 1,
            medium: 2,
            hard: 3,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"easy": 1, "medium": 2, "hard": 3}));
    }
}
