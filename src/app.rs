use anyhow::Result;
use chrono::{Local, Timelike};

use crate::{
    cli::{Cli, Command},
    domain, infra, ui,
    usecases::{self, bootstrap},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap::bootstrap(cli.config.as_deref())?;
            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            let mut shell = bootstrap::compose_shell(&context);
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
        Command::Cards => {
            let config = infra::config::load(cli.config.as_deref())?;
            for line in ui::plain_text_lines(&config.profile.display_name, Local::now().hour()) {
                println!("{line}");
            }
        }
    }

    Ok(())
}
