//! Host-agnostic core of the browser file manager: record model, list pipeline, reducer, batch
//! uploader, view projection, and preview documents.

pub mod config;
pub mod controller;
pub mod format;
pub mod model;
pub mod pipeline;
pub mod reducer;
pub mod selection;
pub mod store;
pub mod uploader;
pub mod view;
pub mod viewer;

pub use config::{ConfigError, FileManagerConfig};
pub use controller::{FileManager, FileManagerHost};
pub use format::{format_file_size, format_upload_date};
pub use model::{FileKind, FileRecord, ListPrefs, ListQuery, SortOrder, TypeFilter};
pub use pipeline::{compute_view, PageWindow};
pub use reducer::{
    confirmation_prompt, normalize_suffix, reduce_file_manager, FileManagerAction,
    FileManagerEffect, FileManagerState, ReducerError,
};
pub use selection::Selection;
pub use store::{MetadataStore, StoreError};
pub use uploader::{
    run_batch_upload, BatchUpload, HostRecordFactory, RecordFactory, UploadOutcome, UploadPhase,
    UploadProgress, UploadStep,
};
pub use view::{page_links, ListView, PageLink, PaginationView, RowView};
pub use viewer::{build_viewer_document, ViewerDocument};
