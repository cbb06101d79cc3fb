use anyhow::Context;
use resub_core::{Settings, SettingsStore};
use std::path::{Path, PathBuf};

/// Settings persisted as a TOML file
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform config location
    pub fn open_default() -> Self {
        Self::new(Self::default_path())
    }

    /// Get settings file path
    pub fn default_path() -> PathBuf {
        if let Some(dirs) = directories::ProjectDirs::from("com", "resub", "resub") {
            dirs.config_dir().join("settings.toml")
        } else if let Some(base) = directories::BaseDirs::new() {
            base.home_dir().join(".resub").join("settings.toml")
        } else {
            PathBuf::from(".resub").join("settings.toml")
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> anyhow::Result<Option<Settings>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some(settings))
    }

    fn save(&self, settings: &Settings) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(settings)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}
