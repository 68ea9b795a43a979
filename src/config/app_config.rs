use serde::Deserialize;
use std::path::Path;

use crate::core::errors::{DocError, Result};

/// Name of the settings file inside the context directory.
pub const SETTINGS_FILE: &str = "settings.yml";

/// Project settings read from `<context>/settings.yml`.
///
/// Every field is optional; missing ones take their zero value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocConfig {
    pub general: GeneralSection,
    /// Environment used when none is passed on the command line.
    pub default_environment: String,
    /// Extra override layers applied after the environment, e.g. `credentials`.
    pub additional_environments: Vec<String>,
    /// Restricts the primary environment when non-empty.
    pub environments: Vec<String>,
}

/// The `general:` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneralSection {
    pub username: String,
    pub project_name: String,
}

impl DocConfig {
    /// Load the settings from `<context>/settings.yml`.
    ///
    /// After parsing, validates every environment name so none of them
    /// can reach outside the context directory once turned into a file name.
    pub fn load(context: &Path) -> Result<Self> {
        let path = context.join(SETTINGS_FILE);
        let content =
            std::fs::read_to_string(&path).map_err(|source| DocError::SettingsUnreadable {
                path: path.clone(),
                source,
            })?;

        let config = Self::parse(&content).map_err(|detail| DocError::InvalidSettings {
            path: path.clone(),
            detail,
        })?;

        log::debug!("loaded settings for {}", config.fullname());
        Ok(config)
    }

    fn parse(content: &str) -> std::result::Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml_ng::from_str(content).map_err(|e| e.to_string())?;

        let named = std::iter::once(&config.default_environment)
            .filter(|name| !name.is_empty())
            .chain(&config.additional_environments)
            .chain(&config.environments);
        for name in named {
            crate::cli::context::validate_env_name(name).map_err(|e| e.to_string())?;
        }

        Ok(config)
    }

    /// `<username>/<project_name>`.
    pub fn fullname(&self) -> String {
        format!("{}/{}", self.general.username, self.general.project_name)
    }

    /// The `environments` list, or `None` when any valid name is accepted.
    pub fn allowed_environments(&self) -> Option<&[String]> {
        if self.environments.is_empty() {
            None
        } else {
            Some(&self.environments)
        }
    }
}
