use platform_host::{
    ContentHandleService, DialogService, FrameFuture, FrameScheduler, ImmediateFrameScheduler,
    KeyValueStore, MemoryContentHandleService, MemoryKeyValueStore, MemoryViewerWindowService,
    ScriptedDialogService, ViewerWindowService,
};

use crate::{
    AnimationFrameScheduler, WebContentHandleService, WebDialogService, WebKeyValueStore,
    WebViewerWindowService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `platform_host_web` adapters.
pub enum HostStrategy {
    /// Browser-backed adapters.
    Browser,
    /// In-memory adapters for native builds and tests.
    Headless,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Headless => "headless",
    }
}

/// Adapter enum that erases the concrete key-value backend behind [`KeyValueStore`].
#[derive(Debug, Clone)]
pub enum KeyValueStoreAdapter {
    /// `localStorage`.
    Browser(WebKeyValueStore),
    /// Process-local map.
    Headless(MemoryKeyValueStore),
}

impl KeyValueStore for KeyValueStoreAdapter {
    fn load_raw(&self, key: &str) -> Result<Option<String>, String> {
        match self {
            Self::Browser(store) => store.load_raw(key),
            Self::Headless(store) => store.load_raw(key),
        }
    }

    fn save_raw(&self, key: &str, raw_json: &str) -> Result<(), String> {
        match self {
            Self::Browser(store) => store.save_raw(key, raw_json),
            Self::Headless(store) => store.save_raw(key, raw_json),
        }
    }
}

/// Adapter enum that erases the concrete dialog backend behind [`DialogService`].
#[derive(Debug, Clone)]
pub enum DialogServiceAdapter {
    /// Blocking browser dialogs.
    Browser(WebDialogService),
    /// Scripted answers; confirms everything and cancels prompts.
    Headless(ScriptedDialogService),
}

impl DialogService for DialogServiceAdapter {
    fn confirm(&self, message: &str) -> bool {
        match self {
            Self::Browser(dialogs) => dialogs.confirm(message),
            Self::Headless(dialogs) => dialogs.confirm(message),
        }
    }

    fn notify(&self, message: &str) {
        match self {
            Self::Browser(dialogs) => dialogs.notify(message),
            Self::Headless(dialogs) => dialogs.notify(message),
        }
    }

    fn prompt(&self, message: &str) -> Option<String> {
        match self {
            Self::Browser(dialogs) => dialogs.prompt(message),
            Self::Headless(dialogs) => dialogs.prompt(message),
        }
    }
}

/// Adapter enum that erases the concrete frame source behind [`FrameScheduler`].
#[derive(Debug, Clone)]
pub enum FrameSchedulerAdapter {
    /// `requestAnimationFrame`.
    Browser(AnimationFrameScheduler),
    /// Resolves immediately.
    Headless(ImmediateFrameScheduler),
}

impl FrameScheduler for FrameSchedulerAdapter {
    fn next_frame<'a>(&'a self) -> FrameFuture<'a> {
        match self {
            Self::Browser(frames) => frames.next_frame(),
            Self::Headless(frames) => frames.next_frame(),
        }
    }
}

/// Adapter enum that erases the concrete preview-window backend behind [`ViewerWindowService`].
#[derive(Debug, Clone)]
pub enum ViewerWindowServiceAdapter {
    /// `window.open` plus `document.write`.
    Browser(WebViewerWindowService),
    /// Records documents.
    Headless(MemoryViewerWindowService),
}

impl ViewerWindowService for ViewerWindowServiceAdapter {
    fn open_document(&self, html: &str, features: &str) -> Result<(), String> {
        match self {
            Self::Browser(viewer) => viewer.open_document(html, features),
            Self::Headless(viewer) => viewer.open_document(html, features),
        }
    }
}

/// Adapter enum that erases the concrete object-URL backend behind [`ContentHandleService`].
#[derive(Debug, Clone)]
pub enum ContentHandleServiceAdapter {
    /// `URL.revokeObjectURL`.
    Browser(WebContentHandleService),
    /// Records revoked handles.
    Headless(MemoryContentHandleService),
}

impl ContentHandleService for ContentHandleServiceAdapter {
    fn revoke(&self, handle: &str) {
        match self {
            Self::Browser(content) => content.revoke(handle),
            Self::Headless(content) => content.revoke(handle),
        }
    }
}

/// Builds the key-value adapter for the compile-time selected host strategy.
pub fn key_value_store() -> KeyValueStoreAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => KeyValueStoreAdapter::Browser(WebKeyValueStore),
        HostStrategy::Headless => KeyValueStoreAdapter::Headless(MemoryKeyValueStore::default()),
    }
}

/// Builds the dialog adapter for the compile-time selected host strategy.
pub fn dialog_service() -> DialogServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => DialogServiceAdapter::Browser(WebDialogService),
        HostStrategy::Headless => DialogServiceAdapter::Headless(ScriptedDialogService::default()),
    }
}

/// Builds the frame-scheduler adapter for the compile-time selected host strategy.
pub fn frame_scheduler() -> FrameSchedulerAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => FrameSchedulerAdapter::Browser(AnimationFrameScheduler),
        HostStrategy::Headless => {
            FrameSchedulerAdapter::Headless(ImmediateFrameScheduler::default())
        }
    }
}

/// Builds the preview-window adapter for the compile-time selected host strategy.
pub fn viewer_window_service() -> ViewerWindowServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ViewerWindowServiceAdapter::Browser(WebViewerWindowService),
        HostStrategy::Headless => {
            ViewerWindowServiceAdapter::Headless(MemoryViewerWindowService::default())
        }
    }
}

/// Builds the object-URL adapter for the compile-time selected host strategy.
pub fn content_handle_service() -> ContentHandleServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ContentHandleServiceAdapter::Browser(WebContentHandleService),
        HostStrategy::Headless => {
            ContentHandleServiceAdapter::Headless(MemoryContentHandleService::default())
        }
    }
}
