use std::cell::RefCell;

use triangle_core::Lang;
use web_sys::{Document, Window};

/// Page state shared by the event handlers.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub lang: Lang,
}

thread_local! {
    pub static STATE: RefCell<Option<State>> = const { RefCell::new(None) };
}

/// Run `f` against the page state. Returns `None` before start-up has
/// installed it.
pub fn with_state<R>(f: impl FnOnce(&mut State) -> R) -> Option<R> {
    STATE.with(|st| st.borrow_mut().as_mut().map(f))
}
