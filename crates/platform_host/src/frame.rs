//! Render-frame scheduling contracts used as cooperative yield points.

use std::{cell::Cell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`FrameScheduler`].
pub type FrameFuture<'a> = Pin<Box<dyn Future<Output = ()> + 'a>>;

/// Host service that resolves once the host is ready to run more work, normally on the next
/// animation frame.
pub trait FrameScheduler {
    /// Returns a future resolving on the next frame.
    fn next_frame<'a>(&'a self) -> FrameFuture<'a>;
}

impl<F: FrameScheduler + ?Sized> FrameScheduler for Rc<F> {
    fn next_frame<'a>(&'a self) -> FrameFuture<'a> {
        (**self).next_frame()
    }
}

#[derive(Debug, Clone, Default)]
/// Scheduler that resolves immediately and counts how many frames were requested.
pub struct ImmediateFrameScheduler {
    frames: Rc<Cell<usize>>,
}

impl ImmediateFrameScheduler {
    /// Frames requested so far, across all clones.
    pub fn frames_requested(&self) -> usize {
        self.frames.get()
    }
}

impl FrameScheduler for ImmediateFrameScheduler {
    fn next_frame<'a>(&'a self) -> FrameFuture<'a> {
        self.frames.set(self.frames.get() + 1);
        Box::pin(std::future::ready(()))
    }
}
