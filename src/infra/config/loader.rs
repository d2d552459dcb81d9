use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub fn load(path: Option<&Path>) -> Result<AppConfig, AppError> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let mut config = AppConfig::default();

    if !config_path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(&config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.clone(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path,
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_defaults_when_file_is_missing() {
        let config = load(Some(Path::new("./missing-config.toml"))).expect("config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn merges_file_values_over_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"[logging]
level = "debug"
directory = "/tmp/bridge-logs"

[profile]
display_name = "Mei"
"#,
        )
        .expect("must write test config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.logging.directory,
            Some(PathBuf::from("/tmp/bridge-logs"))
        );
        assert_eq!(config.profile.display_name, "Mei");
        assert_eq!(config.ui, crate::infra::config::UiConfig::default());
    }

    #[test]
    fn blank_display_name_keeps_default() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[profile]\ndisplay_name = \"  \"\n").expect("write config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(config.profile.display_name, "Arjun");
    }

    #[test]
    fn zero_tick_rate_is_clamped() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[ui]\ntick_rate_ms = 0\n").expect("write config");

        let config = load(Some(&config_path)).expect("config must load");

        assert_eq!(config.ui.tick_rate_ms, 1);
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[ui]\ntick_rate_ms = \"fast\"\n").expect("write config");

        let error = load(Some(&config_path)).expect_err("invalid config must fail");

        assert!(matches!(error, AppError::ConfigParse { .. }));
        assert!(error.to_string().contains("config.toml"));
    }
}
