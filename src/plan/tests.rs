use super::*;

fn shape() -> Shape {
    Shape::default()
}

#[::core::prelude::v1::test]
fn all_absent_renders_nothing() {
    let plan = Plan::compute(&shape());
    assert!(plan.left.is_none());
    assert!(plan.right.is_none());
    assert!(plan.secondary.is_none());
    assert!(!plan.has_header());
}

#[::core::prelude::v1::test]
fn search_moves_right_when_title_present() {
    let plan = Plan::compute(&Shape {
        title: true,
        search: true,
        ..shape()
    });
    assert_eq!(plan.left, Some(LeftRegion::Title));
    let right = plan.right.expect("right region");
    assert!(right.search);
}

#[::core::prelude::v1::test]
fn search_falls_back_to_left_without_title_or_menu() {
    let plan = Plan::compute(&Shape {
        search: true,
        ..shape()
    });
    assert_eq!(
        plan.left,
        Some(LeftRegion::Row {
            title: false,
            menu: false,
            search: true,
        })
    );
    assert!(plan.right.is_none());
}

#[::core::prelude::v1::test]
fn search_lands_exactly_once() {
    for title in [false, true] {
        for menu in [false, true] {
            for actions in [0, 2] {
                let plan = Plan::compute(&Shape {
                    title,
                    menu,
                    search: true,
                    actions,
                    ..shape()
                });
                let left = matches!(plan.left, Some(LeftRegion::Row { search: true, .. }));
                let right = plan.right.is_some_and(|region| region.search);
                assert!(
                    left != right,
                    "search must land in one region (title={title}, menu={menu})"
                );
            }
        }
    }
}

#[::core::prelude::v1::test]
fn menu_claims_the_left_slot() {
    let plan = Plan::compute(&Shape {
        menu: true,
        title: true,
        ..shape()
    });
    assert_eq!(
        plan.left,
        Some(LeftRegion::Row {
            title: false,
            menu: true,
            search: false,
        })
    );
}

#[::core::prelude::v1::test]
fn placeholder_keeps_alignment_when_only_right_content() {
    let plan = Plan::compute(&Shape {
        actions: 1,
        ..shape()
    });
    assert_eq!(plan.left, Some(LeftRegion::Placeholder));
    assert!(plan.right.is_some());
}

#[::core::prelude::v1::test]
fn filter_joins_tabs_in_multi_line_mode() {
    let plan = Plan::compute(&Shape {
        multiple_line: true,
        tabs: 2,
        filter: true,
        ..shape()
    });
    assert!(!plan.has_header());
    assert_eq!(plan.secondary, Some(SecondaryLine::Tabs { filter: true }));
}

#[::core::prelude::v1::test]
fn filter_stands_alone_in_secondary_line_without_tabs() {
    let plan = Plan::compute(&Shape {
        multiple_line: true,
        filter: true,
        ..shape()
    });
    assert_eq!(plan.secondary, Some(SecondaryLine::Filter));
    assert!(plan.right.is_none());
}

#[::core::prelude::v1::test]
fn filter_stays_in_right_region_in_single_line_mode() {
    let plan = Plan::compute(&Shape {
        filter: true,
        ..shape()
    });
    assert!(plan.secondary.is_none());
    assert!(plan.right.is_some_and(|region| region.filter));
}

#[::core::prelude::v1::test]
fn multi_line_mode_removes_filter_from_right_region() {
    let plan = Plan::compute(&Shape {
        title: true,
        actions: 1,
        filter: true,
        multiple_line: true,
        ..shape()
    });
    let right = plan.right.expect("right region");
    assert!(!right.filter);
    assert_eq!(plan.secondary, Some(SecondaryLine::Filter));
}

#[::core::prelude::v1::test]
fn title_actions_settings_compose_two_regions() {
    let plan = Plan::compute(&Shape {
        title: true,
        actions: 1,
        settings: 1,
        ..shape()
    });
    assert_eq!(plan.left, Some(LeftRegion::Title));
    let right = plan.right.expect("right region");
    assert!(right.actions && right.settings);
    assert!(!right.filter && !right.search);
    assert!(plan.secondary.is_none());
}

#[::core::prelude::v1::test]
fn subtitle_or_tooltip_counts_as_title_presence() {
    for s in [
        Shape {
            subtitle: true,
            ..shape()
        },
        Shape {
            tooltip: true,
            ..shape()
        },
    ] {
        let presence = Presence::evaluate(&s);
        assert!(presence.title && presence.left);
    }
}

#[::core::prelude::v1::test]
fn multi_line_without_tabs_or_filter_has_no_secondary_line() {
    let plan = Plan::compute(&Shape {
        multiple_line: true,
        title: true,
        ..shape()
    });
    assert!(plan.secondary.is_none());
}

#[::core::prelude::v1::test]
fn empty_tab_list_is_treated_as_no_tabs() {
    let plan = Plan::compute(&Shape {
        multiple_line: true,
        tabs: 0,
        filter: true,
        ..shape()
    });
    assert_eq!(plan.secondary, Some(SecondaryLine::Filter));
}

#[::core::prelude::v1::test]
fn placement_is_hidden_without_search() {
    assert_eq!(
        SearchPlacement::resolve(false, true),
        SearchPlacement::Hidden
    );
    assert_eq!(
        SearchPlacement::resolve(false, false),
        SearchPlacement::Hidden
    );
}
