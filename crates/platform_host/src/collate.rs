//! Locale-aware string ordering.

use std::cmp::Ordering;

#[cfg(target_arch = "wasm32")]
thread_local! {
    static COLLATOR_COMPARE: js_sys::Function =
        js_sys::Intl::Collator::new(&js_sys::Array::new(), &js_sys::Object::new()).compare();
}

/// Compares two display strings the way the host's locale would order them.
///
/// In the browser this calls the bound `compare` of one `Intl.Collator` built per thread.
/// Elsewhere it orders by case-folded text first and falls back to ordinal order so the result
/// stays total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsValue;

        COLLATOR_COMPARE.with(|compare| {
            compare
                .call2(&JsValue::NULL, &JsValue::from_str(a), &JsValue::from_str(b))
                .ok()
                .and_then(|result| result.as_f64())
                .and_then(|result| result.partial_cmp(&0.0))
                .unwrap_or_else(|| a.cmp(b))
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    }
}
