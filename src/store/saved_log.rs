use std::{
    fs,
    path::{
        Path,
        PathBuf,
    },
};

use crate::{
    core::{
        models::SavedPrediction,
        OrbError,
    },
    persistence::get_data_file_path,
};

pub const SAVED_LOG_FILE: &str = "saved_predictions.json";
pub const SAVED_LOG_CAPACITY: usize = 100;

/// The bookmark log. Oldest entries sit at the front; appending to a full
/// log drops exactly one entry from the front.
///
/// Every mutating call re-reads the persisted file, applies the change to
/// that snapshot and writes the whole log back. If the write fails, the
/// in-memory view and the file may diverge until the next successful
/// operation; no compensation is attempted.
#[derive(Debug)]
pub struct SavedLog {
    entries: Vec<SavedPrediction>,
    file_path: PathBuf,
}

impl SavedLog {
    pub fn load() -> Result<Self, OrbError> {
        Self::load_from(get_data_file_path(SAVED_LOG_FILE))
    }

    /// Reads the log at `file_path`, starting empty when the file is
    /// absent. Tests point this at a temp directory.
    pub fn load_from(file_path: PathBuf) -> Result<Self, OrbError> {
        let entries = read_entries(&file_path)?;
        Ok(Self { entries, file_path })
    }

    /// An empty log at `file_path`, without touching the file.
    pub fn new(file_path: PathBuf) -> Self {
        Self { entries: Vec::new(), file_path }
    }

    pub fn entries(&self) -> &[SavedPrediction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn came_true_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.tag == 1).count()
    }

    /// Re-reads the persisted file, discarding any diverged in-memory view.
    pub fn reload(&mut self) -> Result<(), OrbError> {
        self.entries = read_entries(&self.file_path)?;
        Ok(())
    }

    /// Appends `entry` at the back, evicting one entry from the front when
    /// the log is already at capacity.
    pub fn append(&mut self, entry: SavedPrediction) -> Result<(), OrbError> {
        self.entries = read_entries(&self.file_path)?;

        if self.entries.len() >= SAVED_LOG_CAPACITY {
            self.entries.remove(0);
        }
        self.entries.push(entry);

        self.save()
    }

    /// Deletes the entry at `index`, leaving the relative order of the rest
    /// unchanged.
    pub fn remove(&mut self, index: usize) -> Result<(), OrbError> {
        self.entries = read_entries(&self.file_path)?;

        if index >= self.entries.len() {
            return Err(OrbError::IndexOutOfRange { index, len: self.entries.len() });
        }
        self.entries.remove(index);

        self.save()
    }

    /// Flips the "came true" tag of the entry at `index` between 0 and 1.
    pub fn toggle_tag(&mut self, index: usize) -> Result<(), OrbError> {
        self.entries = read_entries(&self.file_path)?;

        if index >= self.entries.len() {
            return Err(OrbError::IndexOutOfRange { index, len: self.entries.len() });
        }

        let entry = &mut self.entries[index];
        entry.tag = if entry.tag == 0 { 1 } else { 0 };

        self.save()
    }

    fn save(&self) -> Result<(), OrbError> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}

/// Reads the persisted log, dropping entries that no longer parse
/// (unreadable dates included).
fn read_entries(path: &Path) -> Result<Vec<SavedPrediction>, OrbError> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let raw: Vec<serde_json::Value> = serde_json::from_str(&content)?;

    let mut entries = Vec::with_capacity(raw.len());
    for value in raw {
        match serde_json::from_value::<SavedPrediction>(value) {
            Ok(entry) => entries.push(entry),
            Err(e) => eprintln!("Skipping unreadable saved prediction: {}", e),
        }
    }

    Ok(entries)
}
