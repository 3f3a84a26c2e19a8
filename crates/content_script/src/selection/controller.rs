use crate::shared::clipboard::ClipboardSink;
use contracts::enums::modifier_key::ModifierKey;
use std::cell::RefCell;
use std::rc::Rc;

/// Deferred action of a copy button, run once when the selection ends
pub type Completion = Box<dyn FnOnce()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Idle,
    Collecting,
}

struct SelectionState {
    mode: SelectionMode,
    pending_completions: Vec<Completion>,
    collected_items: Vec<String>,
}

impl SelectionState {
    fn new() -> Self {
        Self {
            mode: SelectionMode::Idle,
            pending_completions: Vec::new(),
            collected_items: Vec::new(),
        }
    }
}

/// Owns the multi-selection mode and the aggregated clipboard write.
///
/// One instance per page, shared by `Rc` between the key observer and every copy
/// action. It only ever stores strings and callbacks, never page elements.
///
/// No `RefCell` borrow is held while completions or the clipboard sink run, so
/// both may call back into the controller.
pub struct SelectionController {
    state: RefCell<SelectionState>,
    sink: Rc<dyn ClipboardSink>,
    separator: String,
}

impl SelectionController {
    pub fn new(sink: Rc<dyn ClipboardSink>) -> Self {
        Self {
            state: RefCell::new(SelectionState::new()),
            sink,
            separator: "\n".to_string(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn mode(&self) -> SelectionMode {
        self.state.borrow().mode
    }

    pub fn is_collecting(&self) -> bool {
        self.mode() == SelectionMode::Collecting
    }

    /// Queue `callback` until the selection ends. Ignored while idle.
    pub fn register_completion(&self, callback: impl FnOnce() + 'static) {
        let mut state = self.state.borrow_mut();
        if state.mode == SelectionMode::Collecting {
            state.pending_completions.push(Box::new(callback));
        }
    }

    /// Add one item's text to the pending write. Ignored while idle.
    pub fn contribute(&self, content: String) {
        let mut state = self.state.borrow_mut();
        if state.mode == SelectionMode::Collecting {
            state.collected_items.push(content);
        }
    }

    /// Start a fresh selection.
    ///
    /// Called while already collecting, the current selection is abandoned:
    /// its items are dropped and its completions run so no button stays stuck
    /// in the copied state.
    pub fn enter_collecting(&self) {
        let abandoned = {
            let mut state = self.state.borrow_mut();
            state.mode = SelectionMode::Collecting;
            state.collected_items.clear();
            std::mem::take(&mut state.pending_completions)
        };

        log::debug!("Multi-selection started");
        for completion in abandoned {
            completion();
        }
    }

    /// End the selection: run completions in registration order, then write the
    /// collected items as one entry. Does nothing while idle.
    pub fn exit_collecting(&self) {
        let (completions, items) = {
            let mut state = self.state.borrow_mut();
            if state.mode == SelectionMode::Idle {
                return;
            }
            state.mode = SelectionMode::Idle;
            (
                std::mem::take(&mut state.pending_completions),
                std::mem::take(&mut state.collected_items),
            )
        };

        for completion in completions {
            completion();
        }

        if items.is_empty() {
            log::debug!("Multi-selection ended with nothing collected");
            return;
        }

        log::info!("Copying {} selected items", items.len());
        self.sink.write(items.join(&self.separator));
    }

    /// A tracked modifier went down. Only the idle edge starts a selection, so
    /// key repeat or a second modifier keeps what was already collected.
    pub fn modifier_key_down(&self, key: ModifierKey) {
        if self.is_collecting() {
            return;
        }
        log::trace!("{} pressed", key);
        self.enter_collecting();
    }

    /// A tracked modifier went up. Any of them ends the selection, whichever was
    /// pressed first.
    pub fn modifier_key_up(&self, key: ModifierKey) {
        if !self.is_collecting() {
            return;
        }
        log::trace!("{} released", key);
        self.exit_collecting();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct RecordingSink {
        writes: RefCell<Vec<String>>,
    }

    impl ClipboardSink for RecordingSink {
        fn write(&self, content: String) {
            self.writes.borrow_mut().push(content);
        }
    }

    fn controller() -> (SelectionController, Rc<RecordingSink>) {
        let sink = Rc::new(RecordingSink::default());
        (SelectionController::new(sink.clone()), sink)
    }

    #[test]
    fn test_starts_idle() {
        let (controller, _) = controller();
        assert_eq!(controller.mode(), SelectionMode::Idle);
        assert!(!controller.is_collecting());
    }

    #[test]
    fn test_mode_follows_key_transitions() {
        let (controller, _) = controller();

        controller.modifier_key_down(ModifierKey::ControlLeft);
        assert!(controller.is_collecting());
        controller.modifier_key_down(ModifierKey::ControlLeft);
        assert!(controller.is_collecting());
        controller.modifier_key_up(ModifierKey::ControlLeft);
        assert!(!controller.is_collecting());
        controller.modifier_key_up(ModifierKey::ControlLeft);
        assert!(!controller.is_collecting());
        controller.modifier_key_down(ModifierKey::MetaRight);
        assert!(controller.is_collecting());
    }

    #[test]
    fn test_release_of_other_modifier_ends_selection() {
        let (controller, sink) = controller();

        controller.modifier_key_down(ModifierKey::ControlLeft);
        controller.contribute("a".to_string());
        controller.modifier_key_up(ModifierKey::MetaLeft);

        assert!(!controller.is_collecting());
        assert_eq!(*sink.writes.borrow(), vec!["a".to_string()]);
    }

    #[test]
    fn test_aggregates_in_contribution_order() {
        let (controller, sink) = controller();

        controller.modifier_key_down(ModifierKey::ControlLeft);
        controller.contribute("a".to_string());
        controller.contribute("b".to_string());
        controller.contribute("c".to_string());
        controller.modifier_key_up(ModifierKey::ControlLeft);

        assert_eq!(*sink.writes.borrow(), vec!["a\nb\nc".to_string()]);
    }

    #[test]
    fn test_custom_separator() {
        let sink = Rc::new(RecordingSink::default());
        let controller = SelectionController::new(sink.clone()).with_separator("\n\n");

        controller.enter_collecting();
        controller.contribute("a".to_string());
        controller.contribute("b".to_string());
        controller.exit_collecting();

        assert_eq!(*sink.writes.borrow(), vec!["a\n\nb".to_string()]);
    }

    #[test]
    fn test_idle_calls_do_nothing() {
        let (controller, sink) = controller();
        let fired = Rc::new(Cell::new(false));

        let flag = fired.clone();
        controller.register_completion(move || flag.set(true));
        controller.contribute("ignored".to_string());
        controller.exit_collecting();

        // A later selection must not see the idle-time calls either
        controller.enter_collecting();
        controller.exit_collecting();

        assert!(!fired.get());
        assert!(sink.writes.borrow().is_empty());
    }

    #[test]
    fn test_empty_selection_writes_nothing() {
        let (controller, sink) = controller();

        controller.enter_collecting();
        controller.exit_collecting();

        assert!(sink.writes.borrow().is_empty());
    }

    #[test]
    fn test_new_selection_does_not_carry_over() {
        let (controller, sink) = controller();

        controller.enter_collecting();
        controller.contribute("old".to_string());
        controller.exit_collecting();

        controller.enter_collecting();
        controller.contribute("new".to_string());
        controller.exit_collecting();

        assert_eq!(
            *sink.writes.borrow(),
            vec!["old".to_string(), "new".to_string()]
        );
    }

    #[test]
    fn test_completions_run_once_in_order() {
        let (controller, _) = controller();
        let calls = Rc::new(RefCell::new(Vec::new()));

        controller.enter_collecting();
        for id in 1..=3 {
            let calls = calls.clone();
            controller.register_completion(move || calls.borrow_mut().push(id));
        }
        controller.exit_collecting();
        controller.exit_collecting();
        controller.enter_collecting();
        controller.exit_collecting();

        assert_eq!(*calls.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_completions_run_before_write() {
        let sink = Rc::new(RecordingSink::default());
        let controller = SelectionController::new(sink.clone());
        let writes_seen = Rc::new(Cell::new(usize::MAX));

        controller.enter_collecting();
        controller.contribute("a".to_string());
        let seen = writes_seen.clone();
        let observed = sink.clone();
        controller.register_completion(move || seen.set(observed.writes.borrow().len()));
        controller.exit_collecting();

        assert_eq!(writes_seen.get(), 0);
        assert_eq!(sink.writes.borrow().len(), 1);
    }

    #[test]
    fn test_completion_may_reenter_controller() {
        let (controller, sink) = controller();
        let controller = Rc::new(controller);
        let observed_mode = Rc::new(Cell::new(SelectionMode::Collecting));

        controller.enter_collecting();
        controller.contribute("a".to_string());
        let inner = controller.clone();
        let mode = observed_mode.clone();
        controller.register_completion(move || {
            mode.set(inner.mode());
            inner.contribute("late".to_string());
        });
        controller.exit_collecting();

        assert_eq!(observed_mode.get(), SelectionMode::Idle);
        assert_eq!(*sink.writes.borrow(), vec!["a".to_string()]);
    }

    #[test]
    fn test_repeated_key_down_keeps_collection() {
        let (controller, sink) = controller();

        controller.modifier_key_down(ModifierKey::ControlLeft);
        controller.contribute("a".to_string());
        controller.modifier_key_down(ModifierKey::ControlRight);
        controller.contribute("b".to_string());
        controller.modifier_key_up(ModifierKey::ControlRight);

        assert_eq!(*sink.writes.borrow(), vec!["a\nb".to_string()]);
    }

    #[test]
    fn test_explicit_restart_drops_items_and_releases_buttons() {
        let (controller, sink) = controller();
        let released = Rc::new(Cell::new(0));

        controller.enter_collecting();
        controller.contribute("stale".to_string());
        let counter = released.clone();
        controller.register_completion(move || counter.set(counter.get() + 1));

        controller.enter_collecting();
        assert_eq!(released.get(), 1);
        assert!(controller.is_collecting());

        controller.contribute("fresh".to_string());
        controller.exit_collecting();

        assert_eq!(released.get(), 1);
        assert_eq!(*sink.writes.borrow(), vec!["fresh".to_string()]);
    }
}
