//! Toast notifications and the `Notifier` capability handed to pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never reach for a global toast function. They receive a `Notifier`
//! from context (the toast signal in the browser, a recorder in tests), so
//! there is exactly one notification path.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::error::ApiError;

/// Toasts kept on screen at once; older ones are dropped.
const MAX_VISIBLE: usize = 5;
#[cfg(feature = "csr")]
const DISMISS_AFTER_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    pub fn css(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Info => "toast--info",
            Self::Warning => "toast--warning",
            Self::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, kind, message: message.into() });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// User-visible feedback sink.
///
/// The required method is `toast` rather than `notify`: `leptos::prelude`
/// already puts a `notify` on every signal.
pub trait Notifier {
    fn toast(&self, kind: ToastKind, message: &str);

    fn success(&self, message: &str) {
        self.toast(ToastKind::Success, message);
    }

    fn info(&self, message: &str) {
        self.toast(ToastKind::Info, message);
    }

    fn error(&self, message: &str) {
        self.toast(ToastKind::Error, message);
    }

    /// Log and surface an API failure with a short context prefix.
    fn api_error(&self, context: &str, err: &ApiError) {
        leptos::logging::warn!("{context}: {err:?}");
        let kind = if matches!(err, ApiError::Validation(_)) { ToastKind::Warning } else { ToastKind::Error };
        self.toast(kind, &format!("{context}: {err}"));
    }
}

impl Notifier for RwSignal<ToastState> {
    fn toast(&self, kind: ToastKind, message: &str) {
        let mut id = 0;
        self.update(|s| id = s.push(kind, message));

        #[cfg(feature = "csr")]
        {
            let toasts = *self;
            gloo_timers::callback::Timeout::new(DISMISS_AFTER_MS, move || {
                toasts.update(|s| s.dismiss(id));
            })
            .forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }
}
