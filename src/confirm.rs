//! Confirmation Prompt
//!
//! Blocking yes/no question to the user, injected so tests can answer it.

/// Something that can ask the user to confirm an action
pub trait Confirm {
    /// Blocks until answered; `true` means go ahead
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm()` in the browser
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        let Some(window) = web_sys::window() else {
            log::warn!("[Confirm] no window, treating as declined");
            return false;
        };
        match window.confirm_with_message(message) {
            Ok(answer) => answer,
            Err(err) => {
                log::warn!("[Confirm] prompt failed: {:?}", err);
                false
            }
        }
    }
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
