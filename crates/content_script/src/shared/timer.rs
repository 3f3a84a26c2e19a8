use gloo_timers::future::TimeoutFuture;

/// Schedules the delayed visual reset of a copy button.
///
/// Scheduled callbacks are fire-and-forget and cannot be cancelled.
pub trait ResetTimer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
}

/// Browser timer backed by `setTimeout`
pub struct GlooTimer;

impl ResetTimer for GlooTimer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            callback();
        });
    }
}
