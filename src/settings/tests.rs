use super::*;
use gpui_component::IconName;

#[::core::prelude::v1::test]
fn descriptor_without_icon_renders_nothing() {
    assert_eq!(SettingAction::new().tooltip("Refresh").kind(), None);
    assert_eq!(SettingAction::new().key("refresh").kind(), None);
}

#[::core::prelude::v1::test]
fn icon_alone_stays_unwrapped() {
    let action = SettingAction::new().icon(Icon::new(IconName::Settings));
    assert_eq!(action.kind(), Some(SettingKind::Bare));
}

#[::core::prelude::v1::test]
fn icon_with_tooltip_gets_wrapped() {
    let action = SettingAction::new()
        .icon(Icon::new(IconName::Settings))
        .tooltip("Settings");
    assert_eq!(action.kind(), Some(SettingKind::Tooltipped));
}
