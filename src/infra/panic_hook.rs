use std::{io, panic};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};

/// Restores the terminal before the default hook prints the panic.
pub fn install_terminal_restore_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        tracing::error!(panic = %panic_info, "bridge panicked");
        previous(panic_info);
    }));
}
