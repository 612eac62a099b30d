//! `requestAnimationFrame` frame scheduler.

use platform_host::{FrameFuture, FrameScheduler};

#[derive(Debug, Clone, Copy, Default)]
/// Frame scheduler resolving on the next `requestAnimationFrame` callback.
///
/// Resolves immediately when no window is available or off `wasm32`.
pub struct AnimationFrameScheduler;

impl FrameScheduler for AnimationFrameScheduler {
    fn next_frame<'a>(&'a self) -> FrameFuture<'a> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            wait_for_animation_frame().await;
        })
    }
}

#[cfg(target_arch = "wasm32")]
async fn wait_for_animation_frame() {
    use futures::channel::oneshot;
    use wasm_bindgen::{closure::Closure, JsCast};

    let Some(window) = web_sys::window() else {
        return;
    };
    let (tx, rx) = oneshot::channel::<()>();
    let on_frame = Closure::<dyn FnMut(f64)>::once(move |_timestamp: f64| {
        let _ = tx.send(());
    });
    if window
        .request_animation_frame(on_frame.as_ref().unchecked_ref())
        .is_err()
    {
        return;
    }
    let _ = rx.await;
    drop(on_frame);
}
