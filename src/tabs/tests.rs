use super::*;

#[::core::prelude::v1::test]
fn explicit_keys_are_kept() {
    let item = TabItem::new("Active").key("active");
    assert_eq!(item.resolved_key(3), SharedString::from("active"));
}

#[::core::prelude::v1::test]
fn missing_keys_fall_back_to_position() {
    // Positional identity: reordering items reassigns keys silently.
    let items = vec![TabItem::new("A"), TabItem::new("B")];
    let keys: Vec<_> = items
        .iter()
        .enumerate()
        .map(|(ix, item)| item.resolved_key(ix))
        .collect();
    assert_eq!(keys, vec![SharedString::from("0"), SharedString::from("1")]);
}

#[::core::prelude::v1::test]
fn item_counts_reflect_configuration() {
    assert!(TabsConfig::new().is_empty());
    let config = TabsConfig::new()
        .item(TabItem::new("All").key("all"))
        .item(TabItem::new("Archived").key("archived").disabled(true));
    assert_eq!(config.len(), 2);
}
