use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::ActiveTheme;
use gpui_component::StyledExt;
use std::rc::Rc;
use tracing::debug;

/// Callback fired with the key of the tab the user activated.
pub type TabHandler = Rc<dyn Fn(&SharedString, &mut Window, &mut App)>;

/// One tab in the secondary toolbar line.
pub struct TabItem {
    key: Option<SharedString>,
    label: SharedString,
    disabled: bool,
}

impl TabItem {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            key: None,
            label: label.into(),
            disabled: false,
        }
    }

    /// Stable identity across renders. Without it the positional index is
    /// used, which reassigns identity when items are reordered.
    pub fn key(mut self, key: impl Into<SharedString>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub(crate) fn resolved_key(&self, ix: usize) -> SharedString {
        self.key
            .clone()
            .unwrap_or_else(|| SharedString::from(ix.to_string()))
    }
}

#[derive(Default)]
pub struct TabsConfig {
    active: Option<SharedString>,
    on_change: Option<TabHandler>,
    items: Vec<TabItem>,
}

impl TabsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(mut self, key: impl Into<SharedString>) -> Self {
        self.active = Some(key.into());
        self
    }

    pub fn on_change(
        mut self,
        handler: impl Fn(&SharedString, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn item(mut self, item: TabItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = TabItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Tab strip for the secondary line, with optional trailing content kept
/// on the same row.
#[derive(IntoElement)]
pub(crate) struct TabStrip {
    tabs: TabsConfig,
    trailing: Option<AnyElement>,
}

impl TabStrip {
    pub(crate) fn new(tabs: TabsConfig, trailing: Option<AnyElement>) -> Self {
        Self { tabs, trailing }
    }
}

impl RenderOnce for TabStrip {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let TabsConfig {
            active,
            on_change,
            items,
        } = self.tabs;

        // First tab is active when the caller does not pin one.
        let active = active.or_else(|| items.first().map(|item| item.resolved_key(0)));

        let foreground = cx.theme().colors.foreground;
        let muted = cx.theme().colors.muted_foreground;
        let border = cx.theme().colors.border;

        let tabs_row = div().flex().items_center().gap_1().children(
            items.into_iter().enumerate().map(|(ix, item)| {
                let key = item.resolved_key(ix);
                let selected = active.as_ref() == Some(&key);
                let on_change = on_change.clone();
                div()
                    .id(("toolbar-tab", ix))
                    .px_3()
                    .py_1()
                    .text_sm()
                    .border_b_2()
                    .border_color(if selected {
                        foreground
                    } else {
                        transparent_black()
                    })
                    .text_color(if selected { foreground } else { muted })
                    .when(selected, |tab| tab.font_semibold())
                    .when(!item.disabled, |tab| {
                        tab.cursor_pointer().on_click(move |_event, window, cx| {
                            debug!(tab = key.as_ref(), "tab selected");
                            if let Some(on_change) = &on_change {
                                on_change(&key, window, cx);
                            }
                        })
                    })
                    .child(item.label)
            }),
        );

        let mut strip = div()
            .flex()
            .items_center()
            .justify_between()
            .gap_2()
            .w_full()
            .px_4()
            .border_b_1()
            .border_color(border)
            .child(tabs_row);

        if let Some(trailing) = self.trailing {
            strip = strip.child(div().flex().items_center().gap_2().child(trailing));
        }

        strip
    }
}

#[cfg(test)]
mod tests;
