pub const CONTACT_EMAIL: &str = "at41rv@gmail.com";
pub const COPY_CONFIRMATION_MS: u32 = 2_000;
const COPIED_LABEL: &str = "Copied!";

/// "Copied" feedback with at most one pending revert.
///
/// `T` is the revert timer handle. Handles are expected to cancel themselves
/// on drop (as `gloo_timers::callback::Timeout` does), so storing a new one
/// cancels the previous revert.
#[derive(Debug)]
pub struct CopyConfirmation<T> {
    copied: bool,
    revert: Option<T>,
}

impl<T> Default for CopyConfirmation<T> {
    fn default() -> Self {
        Self {
            copied: false,
            revert: None,
        }
    }
}

impl<T> CopyConfirmation<T> {
    pub fn activate(&mut self, revert: T) {
        self.copied = true;
        self.revert = Some(revert);
    }

    /// Called by the revert timer itself. The fired handle stays in place
    /// until the next activation or [`Self::clear`].
    pub fn expire(&mut self) {
        self.copied = false;
    }

    pub fn clear(&mut self) {
        self.copied = false;
        self.revert = None;
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }
}

pub fn confirmation_label(copied: bool) -> &'static str {
    if copied {
        COPIED_LABEL
    } else {
        CONTACT_EMAIL
    }
}
