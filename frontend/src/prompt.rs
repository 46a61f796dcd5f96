use tasklist_shared::{Confirm, Prompt};

/// `window.confirm` / `window.alert`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrompt;

impl Confirm for BrowserPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        window.confirm_with_message(message).unwrap_or(false)
    }
}

impl Prompt for BrowserPrompt {
    fn alert(&mut self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                log::warn!("alert failed: {e:?}");
            }
        }
    }
}
