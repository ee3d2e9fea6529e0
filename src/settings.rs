use crate::toolbar::Tip;
use gpui::*;
use gpui_component::{ActiveTheme, Icon};
use std::rc::Rc;
use tracing::debug;

/// Callback fired with the descriptor key when a setting slot is clicked.
pub type SettingHandler = Rc<dyn Fn(Option<&SharedString>, &mut Window, &mut App)>;

/// One entry in the settings list: a prebuilt element passed through
/// unchanged, or a descriptor the toolbar turns into an icon slot.
pub enum SettingItem {
    Element(AnyElement),
    Action(SettingAction),
}

/// Descriptor for an icon-shaped setting. Absent fields mean the feature
/// was not requested; a descriptor without an icon renders nothing.
#[derive(Default)]
pub struct SettingAction {
    icon: Option<Icon>,
    tooltip: Option<SharedString>,
    key: Option<SharedString>,
    on_click: Option<SettingHandler>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SettingKind {
    Bare,
    Tooltipped,
}

impl SettingAction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<SharedString>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn key(mut self, key: impl Into<SharedString>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn on_click(
        mut self,
        handler: impl Fn(Option<&SharedString>, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub(crate) fn kind(&self) -> Option<SettingKind> {
        self.icon.as_ref()?;
        Some(match self.tooltip {
            Some(_) => SettingKind::Tooltipped,
            None => SettingKind::Bare,
        })
    }

    fn resolve(self, ix: usize, cx: &mut App) -> Option<AnyElement> {
        let kind = self.kind()?;
        let SettingAction {
            icon,
            tooltip,
            key,
            on_click,
        } = self;
        let icon = icon?;

        Some(match kind {
            SettingKind::Bare => icon.into_any_element(),
            SettingKind::Tooltipped => {
                let tooltip = tooltip.unwrap_or_default();
                let hover_bg = cx.theme().colors.secondary_hover;
                div()
                    .id(("toolbar-setting", ix))
                    .p_1()
                    .rounded_md()
                    .cursor_pointer()
                    .hover(move |style| style.bg(hover_bg))
                    .tooltip(move |_window, cx| cx.new(|_| Tip(tooltip.clone())).into())
                    .on_mouse_down(MouseButton::Left, move |_event, window, cx| {
                        debug!(key = ?key, "setting clicked");
                        if let Some(handler) = &on_click {
                            handler(key.as_ref(), window, cx);
                        }
                    })
                    .child(icon)
                    .into_any_element()
            }
        })
    }
}

impl From<SettingAction> for SettingItem {
    fn from(action: SettingAction) -> Self {
        Self::Action(action)
    }
}

impl SettingItem {
    /// Render one settings entry. Malformed descriptors degrade to nothing
    /// rather than failing the toolbar.
    pub(crate) fn resolve(self, ix: usize, cx: &mut App) -> Option<AnyElement> {
        match self {
            Self::Element(element) => Some(element),
            Self::Action(action) => action.resolve(ix, cx),
        }
    }
}

#[cfg(test)]
mod tests;
