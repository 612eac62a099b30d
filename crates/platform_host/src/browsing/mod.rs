//! Browsing-context contracts: preview windows and revocable content handles.

mod content;
mod viewer_window;

pub use content::{ContentHandleService, MemoryContentHandleService, NoopContentHandleService};
pub use viewer_window::{
    MemoryViewerWindowService, NoopViewerWindowService, OpenedDocument, ViewerWindowService,
};
