use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;

/// Deferred work on the single UI thread.
pub trait Timer: Clone + 'static {
    /// Resolves once `millis` have passed.
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()>;

    /// Runs `task` to completion without the caller awaiting it.
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

/// `setTimeout`-backed timer for the browser event loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, millis: u32) -> LocalBoxFuture<'static, ()> {
        TimeoutFuture::new(millis).boxed_local()
    }

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
