//! `window.confirm` / `window.alert` / `window.prompt` dialog adapter.

use platform_host::DialogService;

#[derive(Debug, Clone, Copy, Default)]
/// Dialog service backed by the blocking browser dialogs.
///
/// Off `wasm32`, confirmations decline and prompts cancel.
pub struct WebDialogService;

impl DialogService for WebDialogService {
    fn confirm(&self, message: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(message).ok())
                .unwrap_or(false)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = message;
            false
        }
    }

    fn notify(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = message;
        }
    }

    fn prompt(&self, message: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|w| w.prompt_with_message(message).ok())
                .flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = message;
            None
        }
    }
}
