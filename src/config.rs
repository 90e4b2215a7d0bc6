use crate::{
    error::{KanbanError, Result},
    storage,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, path::Path, path::PathBuf};

const DEFAULT_STORAGE_KEY: &str = "kanban-board";
const DEFAULT_WELCOME_CARD: &str = "Welcome to your Kanban board! Drag this card to another list.";

/// Lists and card a fresh board starts with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Titles of the initial lists, in column order
    pub lists: Vec<String>,
    /// Text of the card placed in the first list, if any
    pub welcome_card: Option<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            lists: vec![
                "To Do".to_string(),
                "In Progress".to_string(),
                "Done".to_string(),
            ],
            welcome_card: Some(DEFAULT_WELCOME_CARD.to_string()),
        }
    }
}

/// Engine configuration
///
/// Every field has a default, so an empty TOML document is a valid config:
///
/// ```toml
/// storage_key = "kanban-board"
/// data_dir = "."
///
/// [seed]
/// lists = ["To Do", "In Progress", "Done"]
/// welcome_card = "Welcome!"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Key the serialized board is stored under
    pub storage_key: String,
    /// Root directory used by file-backed storage
    pub data_dir: PathBuf,
    pub seed: SeedConfig,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: PathBuf::from("."),
            seed: SeedConfig::default(),
        }
    }
}

impl BoardConfig {
    /// Parses a config from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads a config file, falling back to defaults when it does not exist.
    ///
    /// Does not validate; call [`BoardConfig::validate`] afterwards.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Checks the storage key and seed are usable
    pub fn validate(&self) -> Result<()> {
        storage::validate_key(&self.storage_key)
            .map_err(|e| KanbanError::ConfigError(format!("storage_key: {}", e)))?;

        let mut seen = HashSet::new();
        for (index, title) in self.seed.lists.iter().enumerate() {
            if title.trim().is_empty() {
                return Err(KanbanError::ConfigError(
                    "seed.lists cannot contain blank titles".to_string(),
                ));
            }
            if !seen.insert(seed_list_id(index, title)) {
                return Err(KanbanError::ConfigError(format!(
                    "seed.lists contains duplicate title '{}'",
                    title.trim()
                )));
            }
        }

        if let Some(text) = &self.seed.welcome_card {
            if text.trim().is_empty() {
                return Err(KanbanError::ConfigError(
                    "seed.welcome_card cannot be blank".to_string(),
                ));
            }
            if self.seed.lists.is_empty() {
                return Err(KanbanError::ConfigError(
                    "seed.welcome_card needs at least one seed list".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Stable id for a seed list, so every fresh board compares equal
pub(crate) fn seed_list_id(index: usize, title: &str) -> String {
    let slug = slug(title);
    if slug.is_empty() {
        format!("list-{}", index + 1)
    } else {
        format!("list-{}", slug)
    }
}

/// Lowercase, dash-separated form of a title
fn slug(title: &str) -> String {
    title
        .trim()
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
