//! `web_sys::File` upload sources.

use platform_host::UploadSource;

#[derive(Debug, Clone)]
/// Upload source wrapping one picked browser file.
pub struct WebUploadSource {
    file: web_sys::File,
}

impl WebUploadSource {
    /// Wraps a picked file.
    pub fn new(file: web_sys::File) -> Self {
        Self { file }
    }
}

/// Collects the files currently selected in a file input, in selection order.
pub fn files_from_input(input: &web_sys::HtmlInputElement) -> Vec<WebUploadSource> {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(files) = input.files() else {
            return Vec::new();
        };
        (0..files.length())
            .filter_map(|index| files.get(index))
            .map(WebUploadSource::new)
            .collect()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = input;
        Vec::new()
    }
}

/// Clears a file input so picking the same files again fires `change`.
pub fn reset_file_input(input: &web_sys::HtmlInputElement) {
    #[cfg(target_arch = "wasm32")]
    input.set_value("");

    #[cfg(not(target_arch = "wasm32"))]
    let _ = input;
}

impl UploadSource for WebUploadSource {
    fn name(&self) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            self.file.name()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            String::new()
        }
    }

    fn relative_path(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Reflect::get(&self.file, &wasm_bindgen::JsValue::from_str("webkitRelativePath"))
                .ok()
                .and_then(|value| value.as_string())
                .filter(|path| !path.is_empty())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn mime_type(&self) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            self.file.type_()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            String::new()
        }
    }

    fn size(&self) -> u64 {
        #[cfg(target_arch = "wasm32")]
        {
            self.file.size().max(0.0) as u64
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            0
        }
    }

    fn create_content_handle(&self) -> Result<String, String> {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::Url::create_object_url_with_blob(&self.file)
                .map_err(|e| format!("URL.createObjectURL failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err("object URLs are only available when compiled for wasm32".to_string())
        }
    }
}
