use crate::log_debug;
use anyhow::{Result, anyhow};
use dirs::config_dir;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the Release Herald application.
///
/// Passed immutably into every pipeline component at construction; nothing
/// in the pipeline reads ambient environment state.
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    /// Organization ticket prefix, the `PDE` in `PDE-123`
    #[serde(default = "default_ticket_prefix")]
    pub ticket_prefix: String,
    /// Signature line appended to customer emails
    #[serde(default = "default_team_signature")]
    pub team_signature: String,
    /// Flag indicating if this config is from a project file
    #[serde(skip)]
    is_project_config: bool,
}

/// Project configuration filename
pub const PROJECT_CONFIG_FILENAME: &str = ".heraldconfig";

fn default_ticket_prefix() -> String {
    "PDE".to_string()
}

fn default_team_signature() -> String {
    "The Product Engineering Team".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ticket_prefix: default_ticket_prefix(),
            team_signature: default_team_signature(),
            is_project_config: false,
        }
    }
}

impl Config {
    /// Load the configuration, merging a project config over the personal one
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        let mut config = if config_path.exists() {
            let config_content = fs::read_to_string(&config_path)?;
            toml::from_str(&config_content)?
        } else {
            Self::default()
        };

        if let Ok(project_config) = Self::load_project_config() {
            config.merge_with_project_config(project_config);
        }

        log_debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Load project-specific configuration from the working directory
    pub fn load_project_config() -> Result<Self> {
        Self::load_from_path(&Self::get_project_config_path()?)
    }

    /// Load a configuration file from an explicit path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow!("Configuration file not found: {}", path.display()));
        }

        let config_str = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        let mut config: Self = toml::from_str(&config_str).map_err(|e| {
            anyhow!(
                "Invalid configuration file format: {}. Please check {} for syntax errors.",
                e,
                path.display()
            )
        })?;

        config.is_project_config = true;
        Ok(config)
    }

    /// Get the path to the project configuration file
    pub fn get_project_config_path() -> Result<PathBuf> {
        Ok(std::env::current_dir()?.join(PROJECT_CONFIG_FILENAME))
    }

    /// Merge this config with project-specific config, with project config
    /// taking precedence for every field it sets away from the default
    pub fn merge_with_project_config(&mut self, project_config: Self) {
        log_debug!("Merging with project configuration");

        if project_config.ticket_prefix != default_ticket_prefix() {
            self.ticket_prefix = project_config.ticket_prefix;
        }
        if project_config.team_signature != default_team_signature() {
            self.team_signature = project_config.team_signature;
        }
    }

    /// Save the configuration to the personal config file
    pub fn save(&self) -> Result<()> {
        // Don't save project configs to the personal config file
        if self.is_project_config {
            return Ok(());
        }

        let config_path = Self::get_config_path()?;
        let config_content = toml::to_string(self)?;
        fs::write(config_path, config_content)?;
        log_debug!("Configuration saved: {:?}", self);
        Ok(())
    }

    /// Save the configuration as a project-specific configuration file
    pub fn save_as_project_config(&self) -> Result<()> {
        self.save_project_config_to(&Self::get_project_config_path()?)
    }

    /// Write a project configuration file to an explicit path
    pub fn save_project_config_to(&self, path: &Path) -> Result<()> {
        let mut project_config = self.clone();
        project_config.is_project_config = true;

        let config_str = toml::to_string_pretty(&project_config)?;
        fs::write(path, config_str)?;
        Ok(())
    }

    /// Get the path to the personal configuration file
    fn get_config_path() -> Result<PathBuf> {
        let mut path =
            config_dir().ok_or_else(|| anyhow!("Unable to determine config directory"))?;
        path.push("release-herald");
        std::fs::create_dir_all(&path)?;
        path.push("config.toml");
        Ok(path)
    }

    /// Regex matching one full ticket token for the configured prefix
    pub fn ticket_token_regex(&self) -> Regex {
        Regex::new(&format!(r"^{}-\d+$", regex::escape(&self.ticket_prefix)))
            .expect("Should compile: ticket token pattern")
    }

    /// Regex scanning free text for inline ticket references
    pub fn ticket_scan_regex(&self) -> Regex {
        Regex::new(&format!(r"\b{}-\d+\b", regex::escape(&self.ticket_prefix)))
            .expect("Should compile: ticket scan pattern")
    }

    /// Set whether this config is a project config
    pub fn set_project_config(&mut self, is_project: bool) {
        self.is_project_config = is_project;
    }

    /// Check if this is a project config
    pub fn is_project_config(&self) -> bool {
        self.is_project_config
    }
}
