//! The click behaviour behind every copy button.

use crate::selection::SelectionController;
use crate::shared::clipboard::ClipboardSink;
use crate::shared::dom::ContentError;
use crate::shared::timer::ResetTimer;
use contracts::shared::config::IconConfig;
use std::rc::Rc;

/// Produces an item's clipboard text at click time
pub type ContentFn = Rc<dyn Fn() -> Result<String, ContentError>>;

/// What a copy button currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyIndicator {
    Idle,
    Completed,
}

/// Page-wide services handed to every copy action
#[derive(Clone)]
pub struct CopyContext {
    pub controller: Rc<SelectionController>,
    pub writer: Rc<dyn ClipboardSink>,
    pub timer: Rc<dyn ResetTimer>,
    pub reset_delay_ms: u32,
    pub icons: IconConfig,
}

#[derive(Clone)]
pub struct CopyAction {
    content: ContentFn,
    /// `None` for standalone actions that never join a multi-selection
    controller: Option<Rc<SelectionController>>,
    writer: Rc<dyn ClipboardSink>,
    timer: Rc<dyn ResetTimer>,
    reset_delay_ms: u32,
}

impl CopyAction {
    /// Action that joins the multi-selection while a modifier is held
    pub fn new<F>(ctx: &CopyContext, content: F) -> Self
    where
        F: Fn() -> Result<String, ContentError> + 'static,
    {
        Self {
            controller: Some(Rc::clone(&ctx.controller)),
            ..Self::standalone(ctx, content)
        }
    }

    /// Action that always writes immediately
    pub fn standalone<F>(ctx: &CopyContext, content: F) -> Self
    where
        F: Fn() -> Result<String, ContentError> + 'static,
    {
        Self {
            content: Rc::new(content),
            controller: None,
            writer: Rc::clone(&ctx.writer),
            timer: Rc::clone(&ctx.timer),
            reset_delay_ms: ctx.reset_delay_ms,
        }
    }

    /// Handle a click. `indicator` receives the button's visual state changes.
    ///
    /// While a selection is open the text is contributed and the reset waits for
    /// the selection to end; otherwise the text is written now and the reset timer
    /// starts right away. Nothing is rolled back when the write later fails.
    pub fn trigger<I>(&self, indicator: I)
    where
        I: Fn(CopyIndicator) + 'static,
    {
        let content = match (self.content)() {
            Ok(content) => content,
            Err(err) => {
                log::warn!("Nothing copied: {}", err);
                return;
            }
        };

        indicator(CopyIndicator::Completed);

        let timer = Rc::clone(&self.timer);
        let delay_ms = self.reset_delay_ms;
        let reset = move || {
            timer.schedule(delay_ms, Box::new(move || indicator(CopyIndicator::Idle)));
        };

        match &self.controller {
            Some(controller) if controller.is_collecting() => {
                controller.contribute(content);
                controller.register_completion(reset);
            }
            _ => {
                self.writer.write(content);
                reset();
            }
        }
    }
}
