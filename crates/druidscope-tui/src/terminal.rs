//! Terminal setup and restoration

use druidscope_core::prelude::*;
use ratatui::DefaultTerminal;

/// Switch to the alternate screen in raw mode.
///
/// A panic restores the terminal before its message is printed, so the
/// message is readable and the shell is usable afterwards.
pub fn enter() -> Result<DefaultTerminal> {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        ratatui::restore();
        previous(info);
    }));
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

pub fn leave() {
    ratatui::restore();
}
