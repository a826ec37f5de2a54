//! Browser dialogs.

use shop_commerce::notify::Notifier;

/// Shows failures with `window.alert`. Outside the browser it only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&self, message: &str) {
        tracing::warn!(message, "alerting user");
        #[cfg(target_arch = "wasm32")]
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}

/// Ask a yes/no question with `window.confirm`. Outside the browser the
/// answer is always yes.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(message, "confirm outside browser");
        true
    }
}
