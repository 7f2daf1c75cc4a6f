//! Modal lifecycle: target entity, in-flight submit and last error.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct ModalState<T> {
    pub target: Option<T>,
    pub submitting: bool,
    pub error: Option<String>,
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        Self { target: None, submitting: false, error: None }
    }
}

impl<T> ModalState<T> {
    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    /// Open for `target`, discarding state left from a previous opening.
    pub fn open(&mut self, target: T) {
        self.target = Some(target);
        self.submitting = false;
        self.error = None;
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Mark the submit in flight; `false` when closed or already submitting.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting || self.target.is_none() {
            return false;
        }
        self.submitting = true;
        self.error = None;
        true
    }

    /// Close on success; stay open with the message on failure.
    pub fn finish_submit(&mut self, result: &Result<(), ApiError>) {
        match result {
            Ok(()) => self.close(),
            Err(e) => {
                self.submitting = false;
                self.error = Some(e.to_string());
            }
        }
    }
}
