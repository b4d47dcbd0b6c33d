//! Test Deck Manager
//!
//! Provides isolated deck files for testing:
//! - Temporary directories that are automatically cleaned up
//! - Save/load helpers over the JSON deck format

use leitner_core::BucketAssignment;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Manager for test deck files
///
/// Each manager owns its own temporary directory, deleted on drop.
///
/// # Example
///
/// ```rust,ignore
/// let manager = TestDeckManager::new_temp();
/// manager.save(&deck);
/// let restored = manager.load();
/// ```
pub struct TestDeckManager {
    /// Temporary directory (kept alive to prevent premature deletion)
    _temp_dir: TempDir,
    /// Path to the deck file
    deck_path: PathBuf,
}

impl TestDeckManager {
    /// Create a manager pointing at `deck.json` in a fresh temp directory
    pub fn new_temp() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let deck_path = temp_dir.path().join("deck.json");

        Self {
            _temp_dir: temp_dir,
            deck_path,
        }
    }

    /// Get the deck path
    pub fn path(&self) -> &Path {
        &self.deck_path
    }

    /// Write the deck as JSON
    pub fn save(&self, assignment: &BucketAssignment) {
        let json = serde_json::to_string_pretty(assignment).expect("Failed to serialize deck");
        std::fs::write(&self.deck_path, json).expect("Failed to write deck");
    }

    /// Write raw text to the deck file
    pub fn write_raw(&self, content: &str) {
        std::fs::write(&self.deck_path, content).expect("Failed to write deck");
    }

    /// Read the deck back
    pub fn load(&self) -> Result<BucketAssignment, serde_json::Error> {
        let content = std::fs::read_to_string(&self.deck_path).expect("Failed to read deck");
        serde_json::from_str(&content)
    }
}
