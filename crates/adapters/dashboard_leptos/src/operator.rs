//! Browser [`Operator`]: native dialogs, toasts and page reload.

use greenhouse_app::ports::{Notice, Operator};

use crate::components::{ToastKind, ToastProvider};

pub struct BrowserOperator {
    toasts: ToastProvider,
}

impl BrowserOperator {
    pub fn new(toasts: ToastProvider) -> Self {
        Self { toasts }
    }
}

impl Operator for BrowserOperator {
    fn confirm(&self, question: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(question).ok())
            .unwrap_or(false)
    }

    fn prompt(&self, question: &str) -> Option<String> {
        web_sys::window()
            .and_then(|window| window.prompt_with_message(question).ok())
            .flatten()
    }

    fn notify(&self, notice: Notice) {
        let kind = if notice.is_error() {
            ToastKind::Error
        } else {
            ToastKind::Info
        };
        self.toasts.push(kind, notice.to_string());
    }

    fn reload(&self) {
        let reloaded = web_sys::window().map(|window| window.location().reload());
        if !matches!(reloaded, Some(Ok(()))) {
            tracing::warn!("page reload failed");
        }
    }
}
