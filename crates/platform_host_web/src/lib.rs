//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate wires the file manager to `localStorage`, the blocking browser dialogs,
//! `requestAnimationFrame`, preview windows, object URLs, and picked `File` objects. Non-wasm
//! builds compile every adapter to an inert shim and select in-memory adapters instead.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod browsing;
pub mod dialogs;
pub mod frame;
pub mod storage;
pub mod upload;

pub use adapters::{
    content_handle_service, dialog_service, frame_scheduler, host_strategy_name, key_value_store,
    selected_host_strategy, viewer_window_service, ContentHandleServiceAdapter,
    DialogServiceAdapter, FrameSchedulerAdapter, HostStrategy, KeyValueStoreAdapter,
    ViewerWindowServiceAdapter,
};
pub use browsing::{WebContentHandleService, WebViewerWindowService};
pub use dialogs::WebDialogService;
pub use frame::AnimationFrameScheduler;
pub use storage::local_storage::WebKeyValueStore;
pub use upload::{files_from_input, reset_file_input, WebUploadSource};
