use gridbar::gpui::*;
use gridbar::gpui_component::button::{Button, ButtonVariants};
use gridbar::gpui_component::input::InputEvent;
use gridbar::gpui_component::table::{
    Column, ColumnSort, Table, TableDelegate, TableEvent, TableState,
};
use gridbar::gpui_component::{ActiveTheme, Icon, IconName, StyledExt};
use gridbar::{
    MenuConfig, MenuItem, SearchInput, SearchState, SettingAction, TabItem, TabsConfig, Toolbar,
};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Disabled,
}

impl Status {
    fn label(self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Disabled => "Disabled",
        }
    }
}

#[derive(Clone)]
pub struct Member {
    pub name: SharedString,
    pub email: SharedString,
    pub role: SharedString,
    pub status: Status,
}

pub fn sample_members(count: usize) -> Vec<Member> {
    const NAMES: [&str; 8] = [
        "Ada Park",
        "Bram Osei",
        "Carol Jensen",
        "Deniz Aydin",
        "Elliot Shaw",
        "Freja Holm",
        "Gus Ferreira",
        "Hana Sato",
    ];
    const ROLES: [&str; 4] = ["Admin", "Editor", "Viewer", "Billing"];

    (0..count)
        .map(|i| {
            let name = NAMES[i % NAMES.len()];
            let slug = name.to_lowercase().replace(' ', ".");
            Member {
                name: name.into(),
                email: SharedString::from(format!("{slug}.{i}@example.com")),
                role: ROLES[i % ROLES.len()].into(),
                status: if i % 5 == 3 {
                    Status::Disabled
                } else {
                    Status::Active
                },
            }
        })
        .collect()
}

pub struct MemberTableDelegate {
    pub members: Vec<Member>,
    columns: Vec<Column>,
}

impl MemberTableDelegate {
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            members,
            columns: vec![
                Column::new("name", "Name").width(160.).sortable(),
                Column::new("email", "Email").width(220.),
                Column::new("role", "Role").width(120.).sortable(),
                Column::new("status", "Status").width(100.),
            ],
        }
    }
}

impl TableDelegate for MemberTableDelegate {
    fn columns_count(&self, _cx: &App) -> usize {
        self.columns.len()
    }

    fn rows_count(&self, _cx: &App) -> usize {
        self.members.len()
    }

    fn column(&self, col_ix: usize, _cx: &App) -> &Column {
        &self.columns[col_ix]
    }

    fn render_td(
        &mut self,
        row_ix: usize,
        col_ix: usize,
        _window: &mut Window,
        _cx: &mut Context<TableState<Self>>,
    ) -> impl IntoElement {
        let member = &self.members[row_ix];
        let col = &self.columns[col_ix];

        let content = match col.key.as_ref() {
            "name" => member.name.to_string(),
            "email" => member.email.to_string(),
            "role" => member.role.to_string(),
            "status" => member.status.label().to_string(),
            _ => String::new(),
        };

        div().child(content)
    }

    fn render_tr(
        &mut self,
        row_ix: usize,
        _window: &mut Window,
        _cx: &mut Context<TableState<Self>>,
    ) -> Stateful<Div> {
        div().id(row_ix)
    }

    fn perform_sort(
        &mut self,
        col_ix: usize,
        sort: ColumnSort,
        _window: &mut Window,
        _cx: &mut Context<TableState<Self>>,
    ) {
        let col = &self.columns[col_ix];

        match col.key.as_ref() {
            "name" => match sort {
                ColumnSort::Ascending => self.members.sort_by(|a, b| a.name.cmp(&b.name)),
                ColumnSort::Descending => self.members.sort_by(|a, b| b.name.cmp(&a.name)),
                ColumnSort::Default => {}
            },
            "role" => match sort {
                ColumnSort::Ascending => self.members.sort_by(|a, b| a.role.cmp(&b.role)),
                ColumnSort::Descending => self.members.sort_by(|a, b| b.role.cmp(&a.role)),
                ColumnSort::Default => {}
            },
            _ => {}
        }
    }

    fn visible_rows_changed(
        &mut self,
        _visible_range: std::ops::Range<usize>,
        _window: &mut Window,
        _cx: &mut Context<TableState<Self>>,
    ) {
    }
}

/// Full toolbar configuration wired to a live table: title block with
/// tooltip, search in the right slot, actions, a settings descriptor, and
/// a tabbed secondary line carrying the filter hint.
pub struct DirectoryView {
    seed: Vec<Member>,
    members: Vec<Member>,
    search: Entity<SearchState>,
    table: Entity<TableState<MemberTableDelegate>>,
    active_tab: SharedString,
}

impl DirectoryView {
    pub fn new(members: Vec<Member>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let search = cx.new(|cx| SearchState::new(window, cx));
        let input = search.read(cx).input().clone();

        cx.subscribe_in(&input, window, |_view, _state, event, _window, cx| {
            if matches!(event, InputEvent::Change) {
                cx.notify();
            }
        })
        .detach();

        let table =
            cx.new(|cx| TableState::new(MemberTableDelegate::new(members.clone()), window, cx));

        cx.subscribe_in(&table, window, |_view, _table, event, _window, _cx| {
            if let TableEvent::SelectRow(row_ix) = event {
                info!(row = *row_ix, "member row selected");
            }
        })
        .detach();

        Self {
            seed: members.clone(),
            members,
            search,
            table,
            active_tab: "all".into(),
        }
    }

    fn add_member(&mut self) {
        let n = self.members.len() + 1;
        self.members.push(Member {
            name: SharedString::from(format!("New Member {n}")),
            email: SharedString::from(format!("new.member.{n}@example.com")),
            role: "Viewer".into(),
            status: Status::Active,
        });
    }

    fn reset(&mut self) {
        self.members = self.seed.clone();
    }

    fn visible_members(&self, cx: &App) -> Vec<Member> {
        let query = self.search.read(cx).query(cx).to_lowercase();
        self.members
            .iter()
            .filter(|member| match self.active_tab.as_ref() {
                "active" => member.status == Status::Active,
                "disabled" => member.status == Status::Disabled,
                _ => true,
            })
            .filter(|member| {
                query.is_empty()
                    || member.name.to_lowercase().contains(&query)
                    || member.email.to_lowercase().contains(&query)
            })
            .cloned()
            .collect()
    }
}

impl Render for DirectoryView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let visible = self.visible_members(cx);
        let shown = visible.len();
        let total = self.members.len();

        self.table.update(cx, |table, _cx| {
            table.delegate_mut().members = visible;
        });

        let add_view = cx.entity();
        let reset_view = add_view.clone();
        let tab_view = add_view.clone();

        let filter_hint = div()
            .text_xs()
            .text_color(cx.theme().colors.muted_foreground)
            .child(format!("{shown} of {total} members"));

        let toolbar = Toolbar::new()
            .title("Members")
            .subtitle(format!("{total} total"))
            .tooltip("Search and tabs filter the table below")
            .search(
                SearchInput::new(&self.search).on_search(|query, _window, _cx| {
                    info!(query = query.as_ref(), "input search callback");
                }),
            )
            .on_search(|query, _window, _cx| {
                info!(query = query.as_ref(), "toolbar search callback");
            })
            .action(
                Button::new("add_member")
                    .icon(Icon::new(IconName::Plus))
                    .label("Add member")
                    .on_click(move |_event, _window, cx| {
                        add_view.update(cx, |this, cx| {
                            this.add_member();
                            cx.notify();
                        });
                    }),
            )
            .setting(
                SettingAction::new()
                    .icon(Icon::new(IconName::Info))
                    .tooltip("Reset the demo data")
                    .key("reset")
                    .on_click(move |key, _window, cx| {
                        info!(key = ?key, "setting activated");
                        reset_view.update(cx, |this, cx| {
                            this.reset();
                            cx.notify();
                        });
                    }),
            )
            .multiple_line(true)
            .filter(filter_hint)
            .tabs(
                TabsConfig::new()
                    .active(self.active_tab.clone())
                    .on_change(move |key, _window, cx| {
                        let key = key.clone();
                        tab_view.update(cx, |this, cx| {
                            this.active_tab = key;
                            cx.notify();
                        });
                    })
                    .item(TabItem::new("All").key("all"))
                    .item(TabItem::new("Active").key("active"))
                    .item(TabItem::new("Disabled").key("disabled")),
            );

        div()
            .flex()
            .flex_col()
            .size_full()
            .child(toolbar)
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .child(Table::new(&self.table)),
            )
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Page {
    Directory,
    SavedViews,
    QuickFind,
}

impl Page {
    fn label(&self) -> &'static str {
        match self {
            Page::Directory => "Directory",
            Page::SavedViews => "Saved views",
            Page::QuickFind => "Quick find",
        }
    }

    fn all() -> Vec<Page> {
        vec![Page::Directory, Page::SavedViews, Page::QuickFind]
    }
}

pub struct StoryView {
    active_page: Page,
    directory: Entity<DirectoryView>,
    views_search: Entity<SearchState>,
    quick_search: Entity<SearchState>,
    active_view: SharedString,
}

impl StoryView {
    pub fn new(members: Vec<Member>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let directory = cx.new(|cx| DirectoryView::new(members, window, cx));
        let views_search = cx.new(|cx| SearchState::new(window, cx));
        let quick_search =
            cx.new(|cx| SearchState::with_placeholder("Jump to anything...", window, cx));

        Self {
            active_page: Page::Directory,
            directory,
            views_search,
            quick_search,
            active_view: "all".into(),
        }
    }

    fn render_sidebar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let hover_bg = cx.theme().colors.secondary_hover;
        let active_bg = cx.theme().colors.secondary_active;

        div()
            .flex()
            .flex_col()
            .w(px(200.0))
            .h_full()
            .bg(cx.theme().colors.secondary)
            .text_color(cx.theme().colors.foreground)
            .border_r_1()
            .border_color(cx.theme().colors.border)
            .child(div().p_4().text_lg().font_bold().child("Gridbar Story"))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .p_2()
                    .children(Page::all().into_iter().map(|page| {
                        let is_active = self.active_page == page;
                        div()
                            .id(page.label())
                            .px_3()
                            .py_1()
                            .rounded_md()
                            .cursor_pointer()
                            .hover(move |s| s.bg(hover_bg))
                            .bg(if is_active { active_bg } else { transparent_black() })
                            .child(page.label())
                            .on_click(cx.listener(move |this, _, _window, cx| {
                                this.active_page = page;
                                cx.notify();
                            }))
                    })),
            )
    }

    /// Menu in the left slot forces the search box into the right region.
    fn render_saved_views(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let view = cx.entity();
        let muted = cx.theme().colors.muted_foreground;

        let toolbar = Toolbar::new()
            .menu(
                MenuConfig::new()
                    .active(self.active_view.clone())
                    .on_select(move |key, _window, cx| {
                        let key = key.clone();
                        view.update(cx, |this, cx| {
                            this.active_view = key;
                            cx.notify();
                        });
                    })
                    .item(MenuItem::new("all", "All members"))
                    .item(MenuItem::new("admins", "Admins"))
                    .item(MenuItem::new("recent", "Recently added")),
            )
            .search(SearchInput::new(&self.views_search))
            .action(
                Button::new("export")
                    .label("Export")
                    .on_click(|_event, _window, _cx| {
                        info!("export requested");
                    }),
            );

        div()
            .flex()
            .flex_col()
            .size_full()
            .child(toolbar)
            .child(
                div()
                    .p_4()
                    .text_sm()
                    .text_color(muted)
                    .child(format!("Current view: {}", self.active_view)),
            )
    }

    /// With no title or menu configured, the search box takes the left slot.
    fn render_quick_find(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let muted = cx.theme().colors.muted_foreground;

        let toolbar = Toolbar::new().search(SearchInput::new(&self.quick_search).on_search(
            |query, _window, _cx| {
                info!(query = query.as_ref(), "quick find submitted");
            },
        ));

        div()
            .flex()
            .flex_col()
            .size_full()
            .child(toolbar)
            .child(
                div()
                    .p_4()
                    .text_sm()
                    .text_color(muted)
                    .child("Submitted queries are logged by the input's own callback."),
            )
    }
}

impl Render for StoryView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let content = match self.active_page {
            Page::Directory => div()
                .size_full()
                .child(self.directory.clone())
                .into_any_element(),
            Page::SavedViews => self.render_saved_views(cx).into_any_element(),
            Page::QuickFind => self.render_quick_find(cx).into_any_element(),
        };

        div()
            .flex()
            .size_full()
            .bg(cx.theme().colors.background)
            .text_color(cx.theme().colors.foreground)
            .child(self.render_sidebar(cx))
            .child(div().flex_1().overflow_hidden().child(content))
    }
}
