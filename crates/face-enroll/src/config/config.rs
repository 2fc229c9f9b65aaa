//! Configuration management for face-enroll.
//!
//! Loads and saves the TOML configuration file from the platform config
//! directory, validates it, and maps it onto the workflow's tunables.

use crate::{
    AppError, AppResult,
    config::{BehaviourConfig, CameraConfig, ServiceConfig, UploadConfig, project_dirs},
};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
    time::Duration,
};

use error_location::ErrorLocation;
use face_enroll_core::{SessionContext, VideoConstraints, WorkflowConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Main configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Enrollment service endpoint.
    #[serde(default)]
    pub service: ServiceConfig,
    /// Camera device settings.
    #[serde(default)]
    pub camera: CameraConfig,
    /// Upload limits.
    #[serde(default)]
    pub upload: UploadConfig,
    /// Workflow behaviour.
    #[serde(default)]
    pub behaviour: BehaviourConfig,
}

impl Config {
    /// Load configuration from the platform config directory, creating the
    /// default file if none exists.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, creating the default file there if
    /// none exists.
    #[track_caller]
    #[instrument]
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            info!(config_path = ?path, "No config found, creating default");
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to read config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to parse config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        config.validate()?;

        info!(config_path = ?path, "Configuration loaded");

        Ok(config)
    }

    /// Reject values the workflow cannot run with.
    #[track_caller]
    pub fn validate(&self) -> AppResult<()> {
        let problem = if self.service.base_url.trim().is_empty() {
            Some("service.base_url must not be empty".to_string())
        } else if self.service.request_timeout_secs == 0 {
            Some("service.request_timeout_secs must be greater than zero".to_string())
        } else if !(1..=100).contains(&self.camera.jpeg_quality) {
            Some(format!(
                "camera.jpeg_quality must be between 1 and 100, got {}",
                self.camera.jpeg_quality
            ))
        } else if self.camera.width == 0 || self.camera.height == 0 {
            Some("camera.width and camera.height must be greater than zero".to_string())
        } else if self.upload.max_bytes == 0 {
            Some("upload.max_bytes must be greater than zero".to_string())
        } else {
            None
        };

        match problem {
            Some(reason) => Err(AppError::ConfigError {
                reason,
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }

    /// Save configuration to `path` using atomic write pattern.
    ///
    /// Writes to a temporary file first, then renames to prevent corruption
    /// if the process crashes during the write.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Atomic write: write to temp file then rename
        let temp_path = path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to create temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| AppError::ConfigError {
                reason: format!("Failed to write temp config file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| AppError::ConfigError {
            reason: format!("Failed to sync temp config file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, path).map_err(|e| AppError::ConfigError {
            reason: format!("Failed to rename temp config to final: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(config_path = ?path, "Configuration saved (atomic write)");

        Ok(())
    }

    /// Workflow tunables derived from this configuration.
    pub fn workflow_config(&self) -> WorkflowConfig {
        WorkflowConfig {
            max_upload_bytes: self.upload.max_bytes,
            auto_close_delay: Duration::from_millis(self.behaviour.auto_close_ms),
            video: VideoConstraints {
                width: self.camera.width,
                height: self.camera.height,
                ..VideoConstraints::default()
            },
            jpeg_quality: self.camera.jpeg_quality,
        }
    }

    /// Timeout for each request to the enrollment service.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.service.request_timeout_secs)
    }

    /// Credential for the enrollment service.
    ///
    /// A non-blank `env_token` (from `FACE_ENROLL_TOKEN`) wins over the
    /// configured token.
    pub fn session_context(&self, env_token: Option<String>) -> SessionContext {
        let token = env_token
            .filter(|token| !token.trim().is_empty())
            .or_else(|| self.service.token.clone());

        match token {
            Some(token) => SessionContext::with_token(token),
            None => SessionContext::anonymous(),
        }
    }

    #[track_caller]
    fn config_path() -> AppResult<PathBuf> {
        let proj_dirs = project_dirs()?;
        let config_dir = proj_dirs.config_dir();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
            debug!(config_dir = ?config_dir, "Created config directory");
        }

        Ok(config_dir.join("config.toml"))
    }
}
