use crate::{AppError, config::Config};

use std::{fs, time::Duration};

use face_enroll_core::WorkflowConfig;
use tempfile::TempDir;

/// WHAT: A missing config file is created with defaults
/// WHY: First launch must work without manual setup
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_config_file_when_loading_then_default_written() {
    // Given: An empty directory
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    // When: Loading
    let config = Config::load_from(&path).unwrap();

    // Then: Defaults returned and persisted without temp leftovers
    assert_eq!(config, Config::default());
    assert!(path.exists());
    assert!(!path.with_extension("toml.tmp").exists());
    let reloaded = Config::load_from(&path).unwrap();
    assert_eq!(reloaded, config);
}

/// WHAT: Defaults match the workflow's built-in tunables
/// WHY: An untouched config must behave like the library defaults
#[test]
fn given_default_config_when_mapping_then_workflow_defaults() {
    // Given: Default config
    let config = Config::default();

    // When: Mapping
    let workflow = config.workflow_config();

    // Then: Same as the library defaults
    assert_eq!(workflow, WorkflowConfig::default());
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
}

/// WHAT: A partial file keeps defaults for absent keys
/// WHY: Users only write the settings they change
#[test]
#[allow(clippy::unwrap_used)]
fn given_partial_file_when_loading_then_missing_keys_defaulted() {
    // Given: Only the service URL and auto-close delay set
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[service]\nbase_url = \"https://enroll.example.com\"\n\n[behaviour]\nauto_close_ms = 500\n",
    )
    .unwrap();

    // When: Loading
    let config = Config::load_from(&path).unwrap();

    // Then: Overrides applied, rest defaulted
    assert_eq!(config.service.base_url, "https://enroll.example.com");
    assert_eq!(config.service.request_timeout_secs, 30);
    assert_eq!(config.camera.jpeg_quality, 95);
    assert_eq!(config.upload.max_bytes, 10 * 1024 * 1024);
    assert_eq!(
        config.workflow_config().auto_close_delay,
        Duration::from_millis(500)
    );
}

/// WHAT: Saved custom values load back unchanged
/// WHY: Atomic save must not lose settings
#[test]
#[allow(clippy::unwrap_used)]
fn given_custom_config_when_saving_then_loads_back() {
    // Given: A customised config
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let mut config = Config::default();
    config.camera.device_index = 2;
    config.camera.width = 640;
    config.camera.height = 480;
    config.service.token = Some("file-token".to_string());

    // When: Saving and reloading
    config.save_to(&path).unwrap();
    let reloaded = Config::load_from(&path).unwrap();

    // Then: Identical, and the video request follows the camera size
    assert_eq!(reloaded, config);
    let video = reloaded.workflow_config().video;
    assert_eq!((video.width, video.height), (640, 480));
}

/// WHAT: Out-of-range values are rejected at load
/// WHY: A quality of 0 or an empty URL would only fail later, mid-enrollment
#[test]
#[allow(clippy::unwrap_used)]
fn given_invalid_values_when_loading_then_config_error() {
    // Given: Several broken files
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    for contents in [
        "[service]\nbase_url = \"  \"\n",
        "[camera]\njpeg_quality = 0\n",
        "[camera]\njpeg_quality = 101\n",
        "[camera]\nwidth = 0\n",
        "[upload]\nmax_bytes = 0\n",
        "[service]\nrequest_timeout_secs = 0\n",
        "not = [valid",
    ] {
        fs::write(&path, contents).unwrap();

        // When / Then: Rejected
        assert!(
            matches!(Config::load_from(&path), Err(AppError::ConfigError { .. })),
            "accepted {:?}",
            contents
        );
    }
}

/// WHAT: The environment token wins over the file token
/// WHY: Deployments inject credentials without editing files
#[test]
fn given_env_and_file_tokens_when_building_session_then_env_wins() {
    // Given: A file token
    let mut config = Config::default();
    config.service.token = Some("file-token".to_string());

    // When / Then
    assert_eq!(
        config
            .session_context(Some("env-token".to_string()))
            .bearer_token(),
        Some("env-token")
    );
    assert_eq!(
        config.session_context(None).bearer_token(),
        Some("file-token")
    );
    assert_eq!(
        config
            .session_context(Some("  ".to_string()))
            .bearer_token(),
        Some("file-token")
    );
    assert_eq!(Config::default().session_context(None).bearer_token(), None);
}
