//! Blocking capabilities of the host page
//!
//! The dispatcher and the router never touch `web_sys` directly; they talk to
//! these traits so tests can answer dialogs deterministically.

use web_sys::window;

/// Native modal dialogs. Each call blocks the page until the user answers.
pub trait UserDialogs {
    fn confirm(&self, prompt: &str) -> bool;

    /// `None` when the user cancels the prompt.
    fn prompt_text(&self, prompt: &str) -> Option<String>;

    fn alert(&self, message: &str);
}

/// Full-page navigation of the current document.
pub trait PageLocation {
    fn reload(&self);

    fn assign(&self, path: &str);
}

/// Host backed by the browser window
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

impl UserDialogs for BrowserHost {
    fn confirm(&self, prompt: &str) -> bool {
        let Some(window) = window() else {
            return false;
        };
        match window.confirm_with_message(prompt) {
            Ok(answer) => answer,
            Err(e) => {
                log::warn!("confirm dialog failed: {:?}", e);
                false
            }
        }
    }

    fn prompt_text(&self, prompt: &str) -> Option<String> {
        match window()?.prompt_with_message(prompt) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("prompt dialog failed: {:?}", e);
                None
            }
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert dialog failed: {:?}", e);
            }
        }
    }
}

impl PageLocation for BrowserHost {
    fn reload(&self) {
        if let Some(window) = window() {
            let _ = window.location().reload();
        }
    }

    fn assign(&self, path: &str) {
        if let Some(window) = window() {
            if let Err(e) = window.location().set_href(path) {
                log::error!("Failed to navigate to {}: {:?}", path, e);
            }
        }
    }
}
