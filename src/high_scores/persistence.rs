//! High score storage backends.

use super::types::HighScores;
use crate::constants::HIGH_SCORES_FILE;
use crate::utils::persistence::{load_json, save_json};
use std::io;
use std::path::{Path, PathBuf};

/// Where high scores are kept between runs.
pub trait ScoreStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> io::Result<Option<HighScores>>;
    fn save(&mut self, scores: &HighScores) -> io::Result<()>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn load(&self) -> io::Result<Option<HighScores>> {
        (**self).load()
    }

    fn save(&mut self, scores: &HighScores) -> io::Result<()> {
        (**self).save(scores)
    }
}

/// Scores in a single JSON file, `high_scores.json` in the data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<data_dir>/high_scores.json`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(HIGH_SCORES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> io::Result<Option<HighScores>> {
        load_json(&self.path)
    }

    fn save(&mut self, scores: &HighScores) -> io::Result<()> {
        save_json(&self.path, scores)?;
        tracing::debug!(path = %self.path.display(), "saved high scores");
        Ok(())
    }
}

/// Scores held in memory only. Backs `--no-save` runs; `save_count` lets
/// callers observe how often persistence was requested.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    scores: Option<HighScores>,
    save_count: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scores(scores: HighScores) -> Self {
        Self {
            scores: Some(scores),
            save_count: 0,
        }
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn saved(&self) -> Option<&HighScores> {
        self.scores.as_ref()
    }
}

impl ScoreStore for InMemoryStore {
    fn load(&self) -> io::Result<Option<HighScores>> {
        Ok(self.scores)
    }

    fn save(&mut self, scores: &HighScores) -> io::Result<()> {
        self.scores = Some(*scores);
        self.save_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_file_store_path() {
        let store = JsonFileStore::in_dir(Path::new("/tmp/gridsnake-test"));
        assert!(store.path().ends_with("high_scores.json"));
    }

    #[test]
    fn test_file_store_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::in_dir(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_file_store_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::in_dir(&dir.path().join("fresh"));
        let scores = HighScores {
            easy: 70,
            medium: 40,
            hard: 10,
        };

        store.save(&scores).unwrap();

        assert_eq!(store.load().unwrap(), Some(scores));
        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert!(on_disk.contains("\"easy\": 70"));
    }

    #[test]
    fn test_file_store_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::in_dir(dir.path());
        fs::write(store.path(), "easy=10").unwrap();

        let err = store.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = InMemoryStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.save(&HighScores::default()).unwrap();
        store
            .save(&HighScores {
                hard: 20,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(store.save_count(), 2);
        assert_eq!(store.saved().map(|s| s.hard), Some(20));
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn ScoreStore> = Box::new(InMemoryStore::new());
        store
            .save(&HighScores {
                medium: 30,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(store.load().unwrap().map(|s| s.medium), Some(30));
    }
}
