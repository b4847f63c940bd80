//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::*;

/// Directory holding the RON data files, relative to the working directory.
pub const DATA_DIR: &str = "assets/data";
pub const GAMEPLAY_FILE: &str = "gameplay.ron";
pub const LEVELS_FILE: &str = "levels.ron";

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

fn read_file(path: &Path) -> Result<String, ContentLoadError> {
    fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: path.display().to_string(),
        message: format!("IO error: {}", e),
    })
}

/// Parse gameplay tuning. `file` only labels errors.
pub fn parse_gameplay(contents: &str, file: &str) -> Result<GameplayFile, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Parse a DataFile<LevelDef> list. `file` only labels errors.
pub fn parse_levels(contents: &str, file: &str) -> Result<Vec<LevelDef>, ContentLoadError> {
    let data: DataFile<LevelDef> =
        ron_options()
            .from_str(contents)
            .map_err(|e| ContentLoadError {
                file: file.to_string(),
                message: format!("Parse error: {}", e),
            })?;
    Ok(data.items)
}

pub fn load_gameplay(path: &Path) -> Result<GameplayFile, ContentLoadError> {
    let contents = read_file(path)?;
    parse_gameplay(&contents, &path.display().to_string())
}

pub fn load_levels(path: &Path) -> Result<Vec<LevelDef>, ContentLoadError> {
    let contents = read_file(path)?;
    parse_levels(&contents, &path.display().to_string())
}
