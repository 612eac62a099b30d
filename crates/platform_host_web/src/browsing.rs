//! Preview-window and object-URL adapters.

use platform_host::{ContentHandleService, ViewerWindowService};

#[derive(Debug, Clone, Copy, Default)]
/// Opens a blank window with `window.open` and writes the preview document into it.
pub struct WebViewerWindowService;

impl ViewerWindowService for WebViewerWindowService {
    fn open_document(&self, html: &str, features: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::{JsCast, JsValue};

            let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
            let opened = window
                .open_with_url_and_target_and_features("", "_blank", features)
                .map_err(|e| format!("window.open failed: {e:?}"))?
                .ok_or_else(|| "preview window was blocked".to_string())?;
            let document = opened
                .document()
                .ok_or_else(|| "preview window has no document".to_string())?;
            let write = js_sys::Reflect::get(&document, &JsValue::from_str("write"))
                .map_err(|e| format!("document.write unavailable: {e:?}"))?
                .dyn_into::<js_sys::Function>()
                .map_err(|_| "document.write is not callable".to_string())?;
            write
                .call1(&document, &JsValue::from_str(html))
                .map_err(|e| format!("document.write failed: {e:?}"))?;
            document
                .close()
                .map_err(|e| format!("document.close failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (html, features);
            Err("preview windows are only available when compiled for wasm32".to_string())
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Releases object URLs with `URL.revokeObjectURL`.
pub struct WebContentHandleService;

impl ContentHandleService for WebContentHandleService {
    fn revoke(&self, handle: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if handle.starts_with("blob:") {
                let _ = web_sys::Url::revoke_object_url(handle);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = handle;
        }
    }
}
