//! Core domain: save snapshot and the key-value store behind it.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::collectible::{PartType, Rarity};
use crate::player::CostumeId;

/// Default location of the save file, relative to the working directory.
pub const SAVE_FILE_PATH: &str = "saves/taekwondo-robot-builder.json";

/// Error type for save file failures.
#[derive(Debug)]
pub struct SaveError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Save file {}: {}", self.file, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectedPart {
    pub part: PartType,
    pub rarity: Rarity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outfits {
    pub current: CostumeId,
    pub unlocked: Vec<CostumeId>,
}

impl Default for Outfits {
    fn default() -> Self {
        Self {
            current: CostumeId::Default,
            unlocked: vec![CostumeId::Default],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub sound_enabled: bool,
    pub music_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            music_enabled: true,
        }
    }
}

/// Everything that survives between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub current_level: u32,
    pub score: u64,
    pub robot_parts: Vec<CollectedPart>,
    pub outfits: Outfits,
    pub settings: Settings,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            current_level: 1,
            score: 0,
            robot_parts: Vec::new(),
            outfits: Outfits::default(),
            settings: Settings::default(),
        }
    }
}

/// Opaque persistence backend.
pub trait SaveStore {
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<SaveData>, SaveError>;
    fn save(&mut self, data: &SaveData) -> Result<(), SaveError>;
    fn exists(&self) -> bool;
    fn delete(&mut self) -> Result<(), SaveError>;
}

/// JSON file on disk.
#[derive(Resource, Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, message: String) -> SaveError {
        SaveError {
            file: self.path.display().to_string(),
            message,
        }
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(SAVE_FILE_PATH)
    }
}

impl SaveStore for JsonFileStore {
    fn load(&self) -> Result<Option<SaveData>, SaveError> {
        if !self.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)
            .map_err(|e| self.error(format!("IO error: {}", e)))?;
        let data = serde_json::from_str(&contents)
            .map_err(|e| self.error(format!("Parse error: {}", e)))?;
        Ok(Some(data))
    }

    fn save(&mut self, data: &SaveData) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| self.error(format!("IO error: {}", e)))?;
            }
        }
        let contents = serde_json::to_string_pretty(data)
            .map_err(|e| self.error(format!("Encode error: {}", e)))?;
        fs::write(&self.path, contents).map_err(|e| self.error(format!("IO error: {}", e)))
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn delete(&mut self) -> Result<(), SaveError> {
        if !self.exists() {
            return Ok(());
        }
        fs::remove_file(&self.path).map_err(|e| self.error(format!("IO error: {}", e)))
    }
}

/// In-memory store, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    pub json: Option<String>,
}

#[cfg(test)]
impl SaveStore for MemoryStore {
    fn load(&self) -> Result<Option<SaveData>, SaveError> {
        match &self.json {
            None => Ok(None),
            Some(json) => serde_json::from_str(json).map(Some).map_err(|e| SaveError {
                file: "memory".to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn save(&mut self, data: &SaveData) -> Result<(), SaveError> {
        let json = serde_json::to_string(data).map_err(|e| SaveError {
            file: "memory".to_string(),
            message: e.to_string(),
        })?;
        self.json = Some(json);
        Ok(())
    }

    fn exists(&self) -> bool {
        self.json.is_some()
    }

    fn delete(&mut self) -> Result<(), SaveError> {
        self.json = None;
        Ok(())
    }
}
