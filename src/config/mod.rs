use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Application configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfigData {
    /// Directory scanned for decal images. Falls back to `<config dir>/decals`.
    #[serde(default)]
    pub decals_dir: Option<PathBuf>,
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
        }
    }
}

impl AppConfig {
    /// Directory the decal loader reads from and materializes bundled assets into.
    pub fn decals_dir(&self) -> PathBuf {
        self.data
            .decals_dir
            .clone()
            .unwrap_or_else(crate::paths::default_decals_dir)
    }
}

/// How the config file was obtained
#[derive(Debug, PartialEq)]
pub enum ConfigOrigin {
    /// Parsed from an existing file
    File,
    /// No file existed; defaults were used
    Missing,
    /// The file could not be read or parsed; defaults were used
    Reset(String),
}

/// Load configuration from `path`, falling back to defaults on any problem.
pub fn load_config_from(path: &Path) -> (AppConfigData, ConfigOrigin) {
    if !path.exists() {
        info!("No config file found at {:?}, using defaults", path);
        return (AppConfigData::default(), ConfigOrigin::Missing);
    }

    match std::fs::read_to_string(path) {
        Ok(json) => match serde_json::from_str(&json) {
            Ok(data) => {
                info!("Loaded config from {:?}", path);
                (data, ConfigOrigin::File)
            }
            Err(e) => {
                warn!("Failed to parse config file: {}", e);
                (
                    AppConfigData::default(),
                    ConfigOrigin::Reset(format!("Configuration file was corrupted: {}", e)),
                )
            }
        },
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            (
                AppConfigData::default(),
                ConfigOrigin::Reset(format!("Could not read configuration file: {}", e)),
            )
        }
    }
}

/// Save configuration to disk
pub fn save_config(data: &AppConfigData, path: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to save config: {}", e))?;
    Ok(())
}

/// Startup system to load config from disk into the existing resource.
///
/// A missing file is replaced with the defaults so the decal directory
/// setting is discoverable. A broken file is left alone.
fn load_config_system(mut config: ResMut<AppConfig>) {
    let (data, origin) = load_config_from(&config.config_path);

    match &origin {
        ConfigOrigin::File => {}
        ConfigOrigin::Missing => match save_config(&data, &config.config_path) {
            Ok(()) => info!("Wrote default config to {:?}", config.config_path),
            Err(e) => warn!("{}", e),
        },
        ConfigOrigin::Reset(reason) => warn!("{}, using defaults", reason),
    }

    config.data = data;
    info!("Decal directory: {:?}", config.decals_dir());
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_data_default() {
        let data = AppConfigData::default();
        assert!(data.decals_dir.is_none());
    }

    #[test]
    fn test_app_config_data_serialization() {
        let data = AppConfigData {
            decals_dir: Some(PathBuf::from("/path/to/decals")),
        };

        let json = serde_json::to_string(&data).unwrap();
        let parsed: AppConfigData = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, data);
    }

    #[test]
    fn test_decals_dir_falls_back_to_default() {
        let config = AppConfig::default();
        assert_eq!(config.decals_dir(), crate::paths::default_decals_dir());
    }

    #[test]
    fn test_decals_dir_uses_override() {
        let config = AppConfig {
            data: AppConfigData {
                decals_dir: Some(PathBuf::from("/custom/decals")),
            },
            config_path: PathBuf::from("config.json"),
        };
        assert_eq!(config.decals_dir(), PathBuf::from("/custom/decals"));
    }

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (data, origin) = load_config_from(&dir.path().join("config.json"));
        assert_eq!(data, AppConfigData::default());
        assert_eq!(origin, ConfigOrigin::Missing);
    }

    #[test]
    fn test_load_corrupt_config_resets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let (data, origin) = load_config_from(&path);
        assert_eq!(data, AppConfigData::default());
        match origin {
            ConfigOrigin::Reset(reason) => assert!(reason.contains("corrupted")),
            other => panic!("expected reset, got {:?}", other),
        }
        // Broken file is left for the user to inspect
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_save_then_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let data = AppConfigData {
            decals_dir: Some(dir.path().join("my_decals")),
        };

        save_config(&data, &path).unwrap();
        let (loaded, origin) = load_config_from(&path);
        assert_eq!(loaded, data);
        assert_eq!(origin, ConfigOrigin::File);
    }
}
