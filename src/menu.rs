use gpui::*;
use gpui_component::button::{Button, ButtonVariants};
use gpui_component::menu::{DropdownMenu, PopupMenu, PopupMenuItem};
use std::rc::Rc;
use tracing::debug;

/// Callback fired with the key of the selected menu entry.
pub type MenuHandler = Rc<dyn Fn(&SharedString, &mut Window, &mut App)>;

pub struct MenuItem {
    key: SharedString,
    label: SharedString,
}

impl MenuItem {
    pub fn new(key: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Dropdown occupying the left slot in place of a plain title.
#[derive(Default)]
pub struct MenuConfig {
    items: Vec<MenuItem>,
    active: Option<SharedString>,
    on_select: Option<MenuHandler>,
}

impl MenuConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, item: MenuItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = MenuItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn active(mut self, key: impl Into<SharedString>) -> Self {
        self.active = Some(key.into());
        self
    }

    pub fn on_select(
        mut self,
        handler: impl Fn(&SharedString, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_select = Some(Rc::new(handler));
        self
    }

    pub(crate) fn into_element(self) -> AnyElement {
        let MenuConfig {
            items,
            active,
            on_select,
        } = self;

        // Button label mirrors the active entry, falling back to the first.
        let label = items
            .iter()
            .find(|item| Some(&item.key) == active.as_ref())
            .or_else(|| items.first())
            .map(|item| item.label.clone())
            .unwrap_or_default();

        let entries: Vec<(SharedString, SharedString)> = items
            .into_iter()
            .map(|item| (item.key, item.label))
            .collect();

        Button::new("toolbar_menu_button")
            .label(label)
            .ghost()
            .compact()
            .dropdown_menu_with_anchor(Corner::TopLeft, move |menu: PopupMenu, _window, _cx| {
                let mut menu = menu;
                for (key, label) in entries.clone() {
                    let checked = active.as_ref() == Some(&key);
                    let on_select = on_select.clone();
                    menu = menu.item(PopupMenuItem::new(label).checked(checked).on_click(
                        move |_event, window, cx| {
                            debug!(item = key.as_ref(), "menu entry selected");
                            if let Some(on_select) = &on_select {
                                on_select(&key, window, cx);
                            }
                        },
                    ));
                }
                menu
            })
            .into_any_element()
    }
}
