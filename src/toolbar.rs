use gpui::*;
use gpui_component::{ActiveTheme, Icon, IconName, StyledExt};
use std::rc::Rc;
use tracing::trace;

use crate::breakpoint::Breakpoint;
use crate::menu::MenuConfig;
use crate::plan::{LeftRegion, Plan, SecondaryLine, Shape};
use crate::search::{SearchHandler, SearchSlot};
use crate::settings::SettingItem;
use crate::tabs::{TabStrip, TabsConfig};

/// Hover tooltip body shared by the title block and setting slots.
pub(crate) struct Tip(pub(crate) SharedString);

impl Render for Tip {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .px_2()
            .py_1()
            .rounded_md()
            .bg(cx.theme().colors.popover)
            .border_1()
            .border_color(cx.theme().colors.border)
            .text_xs()
            .text_color(cx.theme().colors.foreground)
            .child(self.0.clone())
    }
}

/// Toolbar row rendered above a table or list view. Every input is
/// optional; regions only materialize around content that was actually
/// supplied, so an unconfigured toolbar renders nothing observable.
#[derive(Default, IntoElement)]
pub struct Toolbar {
    title: Option<SharedString>,
    subtitle: Option<SharedString>,
    tooltip: Option<SharedString>,
    menu: Option<MenuConfig>,
    search: SearchSlot,
    on_search: Option<SearchHandler>,
    filter: Option<AnyElement>,
    actions: Vec<AnyElement>,
    settings: Vec<SettingItem>,
    multiple_line: bool,
    tabs: Option<TabsConfig>,
    breakpoint: Option<Breakpoint>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Hover hint shown as an info glyph next to the title label.
    pub fn tooltip(mut self, tooltip: impl Into<SharedString>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn menu(mut self, menu: MenuConfig) -> Self {
        self.menu = Some(menu);
        self
    }

    pub fn search(mut self, search: impl Into<SearchSlot>) -> Self {
        self.search = search.into();
        self
    }

    /// Caller-built search element, rendered verbatim. `on_search` does not
    /// attach to it; the caller owns its behavior.
    pub fn search_element(mut self, element: impl IntoElement) -> Self {
        self.search = SearchSlot::Element(element.into_any_element());
        self
    }

    /// Toolbar-level submit callback, fired before any callback configured
    /// on the search input itself.
    pub fn on_search(
        mut self,
        handler: impl Fn(&SharedString, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_search = Some(Rc::new(handler));
        self
    }

    /// Filter area content. Lives in the right region in single-line mode
    /// and relocates to the secondary line in multi-line mode.
    pub fn filter(mut self, filter: impl IntoElement) -> Self {
        self.filter = Some(filter.into_any_element());
        self
    }

    pub fn action(mut self, action: impl IntoElement) -> Self {
        self.actions.push(action.into_any_element());
        self
    }

    pub fn actions(mut self, actions: impl IntoIterator<Item = AnyElement>) -> Self {
        self.actions.extend(actions);
        self
    }

    pub fn setting(mut self, setting: impl Into<SettingItem>) -> Self {
        self.settings.push(setting.into());
        self
    }

    pub fn setting_element(mut self, element: impl IntoElement) -> Self {
        self.settings
            .push(SettingItem::Element(element.into_any_element()));
        self
    }

    pub fn settings(mut self, settings: impl IntoIterator<Item = SettingItem>) -> Self {
        self.settings.extend(settings);
        self
    }

    /// Give the toolbar a second line for tabs and the filter area.
    pub fn multiple_line(mut self, multiple_line: bool) -> Self {
        self.multiple_line = multiple_line;
        self
    }

    pub fn tabs(mut self, tabs: TabsConfig) -> Self {
        self.tabs = Some(tabs);
        self
    }

    /// Override the viewport classification; otherwise it is queried from
    /// the window once per render.
    pub fn breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = Some(breakpoint);
        self
    }

    fn shape(&self) -> Shape {
        Shape {
            menu: self.menu.is_some(),
            title: self.title.is_some(),
            subtitle: self.subtitle.is_some(),
            tooltip: self.tooltip.is_some(),
            search: self.search.is_present(),
            filter: self.filter.is_some(),
            actions: self.actions.len(),
            settings: self.settings.len(),
            multiple_line: self.multiple_line,
            tabs: self.tabs.as_ref().map(TabsConfig::len).unwrap_or(0),
        }
    }
}

fn title_block(
    title: Option<SharedString>,
    subtitle: Option<SharedString>,
    tooltip: Option<SharedString>,
    cx: &mut App,
) -> AnyElement {
    let foreground = cx.theme().colors.foreground;
    let muted = cx.theme().colors.muted_foreground;

    let mut block = div().flex().items_center().gap_2();
    if let Some(title) = title {
        block = block.child(
            div()
                .text_base()
                .font_semibold()
                .text_color(foreground)
                .child(title),
        );
    }
    if let Some(subtitle) = subtitle {
        block = block.child(div().text_sm().text_color(muted).child(subtitle));
    }
    if let Some(tooltip) = tooltip {
        block = block.child(
            div()
                .id("toolbar-title-tip")
                .text_color(muted)
                .tooltip(move |_window, cx| cx.new(|_| Tip(tooltip.clone())).into())
                .child(Icon::new(IconName::Info)),
        );
    }
    block.into_any_element()
}

impl RenderOnce for Toolbar {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let breakpoint = self
            .breakpoint
            .unwrap_or_else(|| Breakpoint::of(window));
        let narrow = breakpoint.is_narrow();

        let plan = Plan::compute(&self.shape());
        trace!(plan = ?plan, narrow, "composed toolbar");

        let Toolbar {
            title,
            subtitle,
            tooltip,
            menu,
            search,
            on_search,
            filter,
            actions,
            settings,
            tabs,
            ..
        } = self;

        // Resolved once; the plan moves it into exactly one region.
        let mut search_element = search.resolve(on_search, cx);
        let mut filter = filter;

        let left = match plan.left {
            None => None,
            Some(LeftRegion::Placeholder) => Some(div().into_any_element()),
            Some(LeftRegion::Title) => Some(title_block(title, subtitle, tooltip, cx)),
            Some(LeftRegion::Row {
                title: with_title,
                menu: with_menu,
                search: with_search,
            }) => {
                let mut row = div().flex().items_center().gap_3();
                if with_title {
                    row = row.child(title_block(title, subtitle, tooltip, cx));
                }
                if with_menu && let Some(menu) = menu {
                    row = row.child(menu.into_element());
                }
                if with_search && let Some(element) = search_element.take() {
                    row = row.child(element);
                }
                Some(row.into_any_element())
            }
        };

        let right = match plan.right {
            None => None,
            Some(region) => {
                let mut stack = if narrow {
                    div().flex().flex_col().items_end().gap_2().w_full()
                } else {
                    div().flex().items_center().gap_2()
                };
                if region.filter && let Some(filter) = filter.take() {
                    stack = stack.child(filter);
                }
                if region.search && let Some(element) = search_element.take() {
                    stack = stack.child(element);
                }
                if region.actions {
                    stack = stack.child(
                        div().flex().items_center().gap_2().children(
                            actions
                                .into_iter()
                                .enumerate()
                                .map(|(ix, action)| div().id(("toolbar-action", ix)).child(action)),
                        ),
                    );
                }
                if region.settings {
                    let resolved: Vec<AnyElement> = settings
                        .into_iter()
                        .enumerate()
                        .filter_map(|(ix, item)| item.resolve(ix, cx))
                        .map(|element| {
                            div()
                                .flex()
                                .items_center()
                                .px_1()
                                .child(element)
                                .into_any_element()
                        })
                        .collect();
                    stack = stack.child(div().flex().items_center().gap_1().children(resolved));
                }
                Some(stack.into_any_element())
            }
        };

        let header = (left.is_some() || right.is_some()).then(|| {
            let mut row = if narrow {
                div().flex().flex_col().gap_2()
            } else {
                div().flex().items_center().justify_between().gap_4()
            };
            row = row.w_full().px_4().py_2();
            if let Some(left) = left {
                row = row.child(left);
            }
            if let Some(right) = right {
                row = row.child(right);
            }
            row
        });

        let secondary = plan.secondary.map(|line| match line {
            SecondaryLine::Tabs {
                filter: with_filter,
            } => {
                let trailing = if with_filter { filter } else { None };
                TabStrip::new(tabs.unwrap_or_default(), trailing).into_any_element()
            }
            SecondaryLine::Filter => div()
                .flex()
                .items_center()
                .px_4()
                .py_2()
                .children(filter)
                .into_any_element(),
        });

        let mut root = div().w_full().flex().flex_col();
        if header.is_some() || secondary.is_some() {
            root = root
                .bg(cx.theme().colors.secondary)
                .border_b_1()
                .border_color(cx.theme().colors.border);
        }
        if let Some(header) = header {
            root = root.child(header);
        }
        if let Some(secondary) = secondary {
            root = root.child(secondary);
        }
        root
    }
}
