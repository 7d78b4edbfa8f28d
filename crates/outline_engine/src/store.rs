use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use outline_core::Settings;
use outline_logging::outline_info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::persist::{AtomicFileWriter, PersistError};

pub const SETTINGS_FILENAME: &str = ".outline_settings.ron";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] ron::Error),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Where user settings and the sidebar visibility flag live between sessions.
pub trait SettingsStore {
    fn load_settings(&self) -> Result<Settings, StoreError>;
    fn load_visibility(&self) -> Result<bool, StoreError>;
    fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError>;
    fn save_visibility(&mut self, visible: bool) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct PersistedSettings {
    settings: Settings,
    sidebar_visible: bool,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            sidebar_visible: true,
        }
    }
}

/// RON file in a state directory. A missing file reads as defaults.
#[derive(Debug, Clone)]
pub struct RonFileStore {
    writer: AtomicFileWriter,
}

impl RonFileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.writer.dir().join(SETTINGS_FILENAME)
    }

    fn read(&self) -> Result<PersistedSettings, StoreError> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(PersistedSettings::default());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(ron::from_str(&content)?)
    }

    fn write(&self, state: &PersistedSettings) -> Result<(), StoreError> {
        let content = ron::ser::to_string_pretty(state, ron::ser::PrettyConfig::new())?;
        let path = self.writer.write(SETTINGS_FILENAME, &content)?;
        outline_info!("Saved outline settings to {:?}", path);
        Ok(())
    }

    pub fn dir(&self) -> &Path {
        self.writer.dir()
    }
}

impl SettingsStore for RonFileStore {
    fn load_settings(&self) -> Result<Settings, StoreError> {
        Ok(self.read()?.settings)
    }

    fn load_visibility(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.sidebar_visible)
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        let mut state = self.read().unwrap_or_default();
        state.settings = *settings;
        self.write(&state)
    }

    fn save_visibility(&mut self, visible: bool) -> Result<(), StoreError> {
        let mut state = self.read().unwrap_or_default();
        state.sidebar_visible = visible;
        self.write(&state)
    }
}

/// Process-local store; nothing survives the session.
#[derive(Debug, Clone)]
pub struct MemorySettingsStore {
    settings: Settings,
    visible: bool,
}

impl MemorySettingsStore {
    pub fn new(settings: Settings, visible: bool) -> Self {
        Self { settings, visible }
    }
}

impl Default for MemorySettingsStore {
    fn default() -> Self {
        Self::new(Settings::default(), true)
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load_settings(&self) -> Result<Settings, StoreError> {
        Ok(self.settings)
    }

    fn load_visibility(&self) -> Result<bool, StoreError> {
        Ok(self.visible)
    }

    fn save_settings(&mut self, settings: &Settings) -> Result<(), StoreError> {
        self.settings = *settings;
        Ok(())
    }

    fn save_visibility(&mut self, visible: bool) -> Result<(), StoreError> {
        self.visible = visible;
        Ok(())
    }
}
