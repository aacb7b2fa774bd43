use crate::input::KeyEvent;

use super::ctx::{FrameCtx, InitCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called once the window and GPU exist, before the first frame.
    ///
    /// An error aborts the run; `Runtime::run` returns it.
    fn init(&mut self, ctx: &InitCtx<'_, '_>) -> anyhow::Result<()>;

    /// Called for every key transition, including repeats and releases.
    fn on_key(&mut self, event: KeyEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
