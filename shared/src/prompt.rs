//! Blocking user prompts, abstracted so the store and controller never touch
//! a display.

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this task?";
pub const PURGE_CONFIRMATION: &str = "Are you sure? This cannot be undone.";
pub const EMPTY_TEXT_ALERT: &str = "Please enter a task!";

/// A yes/no question that blocks until answered.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Confirmation plus a blocking notification.
pub trait Prompt: Confirm {
    fn alert(&mut self, message: &str);
}

/// Answers yes to everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

impl Prompt for AlwaysConfirm {
    fn alert(&mut self, message: &str) {
        log::info!("alert: {message}");
    }
}

/// Answers no to everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        false
    }
}

impl Prompt for NeverConfirm {
    fn alert(&mut self, message: &str) {
        log::info!("alert: {message}");
    }
}

impl<T: Confirm + ?Sized> Confirm for &mut T {
    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

impl<T: Prompt + ?Sized> Prompt for &mut T {
    fn alert(&mut self, message: &str) {
        (**self).alert(message)
    }
}
