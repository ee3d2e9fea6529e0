use gpui::*;
use gpui_component::input::{Input, InputEvent, InputState};
use gpui_component::{Icon, IconName};
use rust_i18n::t;
use std::rc::Rc;
use tracing::debug;

/// Callback fired with the submitted query text.
pub type SearchHandler = Rc<dyn Fn(&SharedString, &mut Window, &mut App)>;

/// Holds the input state behind the toolbar search box and fans submitted
/// queries out to the installed handlers.
pub struct SearchState {
    input: Entity<InputState>,
    handlers: Vec<SearchHandler>,
}

impl SearchState {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        Self::with_placeholder(t!("toolbar.search.placeholder").to_string(), window, cx)
    }

    pub fn with_placeholder(
        placeholder: impl Into<SharedString>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let placeholder = placeholder.into();
        let input = cx.new(|cx| InputState::new(window, cx).placeholder(placeholder));

        cx.subscribe_in(&input, window, |this, _state, event, window, cx| {
            if let InputEvent::PressEnter { .. } = event {
                let query = this.input.read(cx).value().clone();
                this.submit(&query, window, cx);
            }
        })
        .detach();

        Self {
            input,
            handlers: Vec::new(),
        }
    }

    pub fn input(&self) -> &Entity<InputState> {
        &self.input
    }

    /// Current query text.
    pub fn query(&self, cx: &App) -> SharedString {
        self.input.read(cx).value().clone()
    }

    pub(crate) fn set_handlers(&mut self, handlers: Vec<SearchHandler>) {
        self.handlers = handlers;
    }

    fn submit(&self, query: &SharedString, window: &mut Window, cx: &mut App) {
        debug!(
            query = query.as_ref(),
            handlers = self.handlers.len(),
            "search submitted"
        );
        for handler in &self.handlers {
            handler(query, window, cx);
        }
    }
}

/// Search slot input, one variant per supported configuration shape.
#[derive(Default)]
pub enum SearchSlot {
    /// No search box.
    #[default]
    Hidden,
    /// Toolbar-owned input box.
    Input(SearchInput),
    /// Caller-supplied element, rendered verbatim. The caller owns its
    /// behavior; toolbar-level submit handlers are not attached to it.
    Element(AnyElement),
}

/// Options for the toolbar-owned search box.
pub struct SearchInput {
    state: Entity<SearchState>,
    on_search: Option<SearchHandler>,
}

impl SearchInput {
    pub fn new(state: &Entity<SearchState>) -> Self {
        Self {
            state: state.clone(),
            on_search: None,
        }
    }

    /// Submit callback owned by this input. Runs after any toolbar-level
    /// handler, with the same query text.
    pub fn on_search(
        mut self,
        handler: impl Fn(&SharedString, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_search = Some(Rc::new(handler));
        self
    }
}

impl From<SearchInput> for SearchSlot {
    fn from(input: SearchInput) -> Self {
        Self::Input(input)
    }
}

impl SearchSlot {
    pub(crate) fn is_present(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Produce the renderable search box, if any. Toolbar-level and
    /// input-level submit handlers are installed in that order.
    pub(crate) fn resolve(
        self,
        toolbar_handler: Option<SearchHandler>,
        cx: &mut App,
    ) -> Option<AnyElement> {
        match self {
            Self::Hidden => None,
            Self::Element(element) => Some(element),
            Self::Input(input) => {
                let handlers = merged(toolbar_handler, input.on_search);
                input
                    .state
                    .update(cx, |state, _cx| state.set_handlers(handlers));

                let input_state = input.state.read(cx).input.clone();
                Some(
                    div()
                        .w(px(220.0))
                        .child(
                            Input::new(&input_state)
                                .prefix(Icon::new(IconName::Search))
                                .cleanable(true),
                        )
                        .into_any_element(),
                )
            }
        }
    }
}

/// Handlers that should fire on submit, in invocation order.
fn merged<T>(first: Option<T>, second: Option<T>) -> Vec<T> {
    let mut handlers = Vec::with_capacity(2);
    handlers.extend(first);
    handlers.extend(second);
    handlers
}

#[cfg(test)]
mod tests;
