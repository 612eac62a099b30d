//! Revocable content-handle contracts.

use std::{cell::RefCell, rc::Rc};

/// Host service releasing in-memory content handles (object URLs) that are no longer listed.
pub trait ContentHandleService {
    /// Releases `handle`. Unknown or already released handles are ignored.
    fn revoke(&self, handle: &str);
}

impl<C: ContentHandleService + ?Sized> ContentHandleService for Rc<C> {
    fn revoke(&self, handle: &str) {
        (**self).revoke(handle)
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Content-handle service that never releases anything.
pub struct NoopContentHandleService;

impl ContentHandleService for NoopContentHandleService {
    fn revoke(&self, _handle: &str) {}
}

#[derive(Debug, Clone, Default)]
/// Content-handle service recording every revoked handle.
pub struct MemoryContentHandleService {
    revoked: Rc<RefCell<Vec<String>>>,
}

impl MemoryContentHandleService {
    /// Handles revoked so far, in order.
    pub fn revoked(&self) -> Vec<String> {
        self.revoked.borrow().clone()
    }
}

impl ContentHandleService for MemoryContentHandleService {
    fn revoke(&self, handle: &str) {
        self.revoked.borrow_mut().push(handle.to_string());
    }
}
