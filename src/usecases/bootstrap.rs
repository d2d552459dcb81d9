use std::{path::Path, time::Duration};

use crate::{
    domain::shell_state::ShellState,
    infra::{
        self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError,
        storage_layout::StorageLayout,
    },
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        group_ids::ClockGroupIds,
        shell::DefaultShellOrchestrator,
    },
};

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

/// Loads configuration and installs file logging.
pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    context.storage.ensure_dirs()?;
    infra::logging::init(&context.config.logging, &context.storage.log_dir)?;

    tracing::info!(log_dir = %context.storage.log_dir.display(), "bootstrap complete");
    Ok(context)
}

pub fn compose_shell(context: &AppContext) -> ShellComposition {
    let state = ShellState::new(context.config.profile.display_name.clone());
    let tick = Duration::from_millis(context.config.ui.tick_rate_ms);

    ShellComposition {
        event_source: Box::new(CrosstermEventSource::new(tick)),
        orchestrator: Box::new(DefaultShellOrchestrator::new(
            state,
            ClockGroupIds::default(),
        )),
    }
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = FileConfigAdapter::new(config_path)
        .load()
        .map_err(AppError::Other)?;
    let storage = StorageLayout::resolve(&config.logging)?;

    Ok(AppContext::new(config, storage))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn builds_context_with_default_config_when_file_is_missing() {
        let context = build_context(Some(Path::new("./missing-config.toml")))
            .expect("context should build from defaults");

        assert_eq!(context.config, crate::infra::config::AppConfig::default());
    }

    #[test]
    fn context_uses_configured_log_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let logs = dir.path().join("logs");
        let config_path = dir.path().join("config.toml");
        fs::write(
            &config_path,
            format!("[logging]\ndirectory = {:?}\n", logs.display().to_string()),
        )
        .expect("write config");

        let context = build_context(Some(&config_path)).expect("context should build");

        assert_eq!(context.storage.log_dir, logs);
    }

    #[test]
    fn composed_shell_greets_configured_name() {
        let mut context = build_context(Some(Path::new("./missing-config.toml")))
            .expect("context should build from defaults");
        context.config.profile.display_name = "Mei".to_owned();

        let shell = compose_shell(&context);

        assert_eq!(shell.orchestrator.state().display_name(), "Mei");
        assert!(shell.orchestrator.state().is_running());
    }
}
