//! Action handlers: UpdateAction dispatch
//!
//! Opening a documentation link is the only side effect the app performs.
//! The browser is spawned without waiting for it; a launch failure is
//! reported back into the loop as `Message::DocsOpenFailed`.

use std::process::{Command, Stdio};

use druidscope_core::prelude::*;
use tokio::sync::mpsc;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::OpenUrl { url, browser } => {
            tokio::spawn(async move {
                if let Err(e) = open_url_in_browser(&url, &browser) {
                    error!("{}", e);
                    let _ = msg_tx
                        .send(Message::DocsOpenFailed {
                            url,
                            error: e.to_string(),
                        })
                        .await;
                }
            });
        }
    }
}

/// Launch `url` in `browser`, or in the platform opener when `browser` is empty.
pub(crate) fn open_url_in_browser(url: &str, browser: &str) -> Result<()> {
    opener_command(url, browser)
        .and_then(|mut command| command.spawn())
        .map_err(|e| Error::browser(url, e.to_string()))?;
    Ok(())
}

/// Build the command that opens `url`. Nothing is spawned here.
///
/// `browser` is a command line such as `firefox --new-window`; the URL is
/// appended as the last argument. The child gets no stdio, since anything it
/// printed would land on top of the diagram.
fn opener_command(url: &str, browser: &str) -> std::io::Result<Command> {
    let parts: Vec<&str> = if !browser.trim().is_empty() {
        browser.split_whitespace().collect()
    } else if cfg!(target_os = "macos") {
        vec!["open"]
    } else if cfg!(target_os = "windows") {
        vec!["cmd", "/C", "start", ""]
    } else if cfg!(target_os = "linux") {
        vec!["xdg-open"]
    } else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    };

    let Some((program, args)) = parts.split_first() else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "empty browser command",
        ));
    };

    let mut command = Command::new(program);
    command
        .args(args)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    Ok(command)
}
