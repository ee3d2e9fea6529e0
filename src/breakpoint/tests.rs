use super::*;

#[::core::prelude::v1::test]
fn narrow_below_threshold() {
    assert_eq!(Breakpoint::from_width(0.0), Breakpoint::Narrow);
    assert_eq!(Breakpoint::from_width(480.0), Breakpoint::Narrow);
    assert!(Breakpoint::from_width(NARROW_MAX_WIDTH - 1.0).is_narrow());
}

#[::core::prelude::v1::test]
fn wide_from_threshold_up() {
    assert_eq!(Breakpoint::from_width(NARROW_MAX_WIDTH), Breakpoint::Wide);
    assert_eq!(Breakpoint::from_width(1280.0), Breakpoint::Wide);
}
