//! Typed host-domain contracts shared by the file manager runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the key/value storage,
//! dialog, frame-scheduling, preview-window, content-handle, and upload-source contracts along
//! with in-memory adapters for tests, while concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod browsing;
pub mod collate;
pub mod dialogs;
pub mod frame;
pub mod storage;
pub mod time;
pub mod upload;

pub use browsing::{
    ContentHandleService, MemoryContentHandleService, MemoryViewerWindowService,
    NoopContentHandleService, NoopViewerWindowService, OpenedDocument, ViewerWindowService,
};
pub use collate::locale_compare;
pub use dialogs::{DialogService, NoopDialogService, ScriptedDialogService};
pub use frame::{FrameFuture, FrameScheduler, ImmediateFrameScheduler};
pub use storage::{
    load_json_with, save_json_with, KeyValueStore, MemoryKeyValueStore, NoopKeyValueStore,
};
pub use time::{
    iso_timestamp_from_unix_ms, next_monotonic_timestamp_ms, random_id_suffix, unix_time_ms_now,
};
pub use upload::{MemoryUploadSource, UploadSource};
