//! Preview-window host-service contracts.

use std::{cell::RefCell, rc::Rc};

/// Host service that opens a new browsing context and writes a complete document into it.
pub trait ViewerWindowService {
    /// Opens a window using `features` (for example `width=800,height=600`) and writes `html`.
    ///
    /// # Errors
    ///
    /// Returns an error when the host blocks the window or the document cannot be written.
    fn open_document(&self, html: &str, features: &str) -> Result<(), String>;
}

impl<V: ViewerWindowService + ?Sized> ViewerWindowService for Rc<V> {
    fn open_document(&self, html: &str, features: &str) -> Result<(), String> {
        (**self).open_document(html, features)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Viewer service for unsupported targets.
pub struct NoopViewerWindowService;

impl ViewerWindowService for NoopViewerWindowService {
    fn open_document(&self, _html: &str, _features: &str) -> Result<(), String> {
        Err("preview windows are unavailable on this host".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A document captured by [`MemoryViewerWindowService`].
pub struct OpenedDocument {
    /// Full HTML text written into the window.
    pub html: String,
    /// Window feature string passed by the caller.
    pub features: String,
}

#[derive(Debug, Clone, Default)]
/// Viewer service that records opened documents instead of showing them.
pub struct MemoryViewerWindowService {
    opened: Rc<RefCell<Vec<OpenedDocument>>>,
}

impl MemoryViewerWindowService {
    /// Documents opened so far, in order.
    pub fn opened(&self) -> Vec<OpenedDocument> {
        self.opened.borrow().clone()
    }
}

impl ViewerWindowService for MemoryViewerWindowService {
    fn open_document(&self, html: &str, features: &str) -> Result<(), String> {
        self.opened.borrow_mut().push(OpenedDocument {
            html: html.to_string(),
            features: features.to_string(),
        });
        Ok(())
    }
}
