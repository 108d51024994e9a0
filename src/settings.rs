use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::args::PackageManager;

pub const SETTINGS_FILE_NAME: &str = ".react-create.toml";

/// External executables the pipeline spawns
#[derive(Deserialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct Tools {
    /// Package runner used to launch generators
    pub runner: String,
    pub npm: String,
    pub yarn: String,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            runner: "npx".into(),
            npm: "npm".into(),
            yarn: "yarn".into(),
        }
    }
}

impl Tools {
    pub fn package_manager(&self, pkg: PackageManager) -> &str {
        match pkg {
            PackageManager::Npm => &self.npm,
            PackageManager::Yarn => &self.yarn,
        }
    }
}

#[derive(Deserialize, Debug, PartialEq, Default, Clone)]
#[serde(default)]
pub struct Settings {
    pub tools: Tools,
}

impl TryFrom<String> for Settings {
    type Error = toml::de::Error;

    fn try_from(contents: String) -> Result<Self, Self::Error> {
        toml::from_str(&contents)
    }
}

impl Settings {
    /// A missing file yields the defaults
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let settings = match fs::read_to_string(path) {
            Ok(contents) => Self::try_from(contents)
                .with_context(|| format!("invalid settings file {}", path.display()))?,
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Self::default(),
                _ => anyhow::bail!(e),
            },
        };
        Ok(settings)
    }

    /// An explicit file must exist, otherwise `$HOME/.react-create.toml` is used when present
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Cannot find the settings file {}", path.display());
            }
            return Self::from_path(path);
        }
        match default_settings_path() {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }
}

fn default_settings_path() -> Option<PathBuf> {
    home::home_dir().map(|home| home.join(SETTINGS_FILE_NAME))
}
