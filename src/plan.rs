//! Layout decisions for the toolbar, kept apart from element construction
//! so the region rules stay inspectable and testable without a window.

/// Which optional inputs were supplied, reduced to the facts the layout
/// rules care about.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Shape {
    pub menu: bool,
    pub title: bool,
    pub subtitle: bool,
    pub tooltip: bool,
    pub search: bool,
    pub filter: bool,
    pub actions: usize,
    pub settings: usize,
    pub multiple_line: bool,
    pub tabs: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Presence {
    pub title: bool,
    pub left: bool,
    pub right: bool,
}

impl Presence {
    pub(crate) fn evaluate(shape: &Shape) -> Self {
        let title = shape.menu || shape.title || shape.subtitle || shape.tooltip;
        let left = title || shape.search;
        let right = (title && shape.search)
            || (!shape.multiple_line && shape.filter)
            || shape.actions > 0
            || shape.settings > 0;
        Self { title, left, right }
    }
}

/// Single decision for where the search box lands. Both region plans read
/// this, so the box can never be emitted twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchPlacement {
    Left,
    Right,
    Hidden,
}

impl SearchPlacement {
    pub(crate) fn resolve(search: bool, has_title: bool) -> Self {
        if !search {
            Self::Hidden
        } else if has_title {
            Self::Right
        } else {
            Self::Left
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LeftRegion {
    /// Empty slot that keeps the right region from sliding left.
    Placeholder,
    /// Title block alone, no stack wrapper around a single child.
    Title,
    /// Multi-slot row: title (unless the menu claims the slot), menu, and
    /// search as the fallback occupant when there is no title to show.
    Row { title: bool, menu: bool, search: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RightRegion {
    pub filter: bool,
    pub search: bool,
    pub actions: bool,
    pub settings: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SecondaryLine {
    Tabs { filter: bool },
    Filter,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Plan {
    pub left: Option<LeftRegion>,
    pub right: Option<RightRegion>,
    pub secondary: Option<SecondaryLine>,
}

impl Plan {
    pub(crate) fn compute(shape: &Shape) -> Self {
        let presence = Presence::evaluate(shape);
        let placement = SearchPlacement::resolve(shape.search, presence.title);

        // First match wins.
        let left = if !presence.left {
            presence.right.then_some(LeftRegion::Placeholder)
        } else if !shape.menu && (presence.title || placement != SearchPlacement::Left) {
            Some(LeftRegion::Title)
        } else {
            Some(LeftRegion::Row {
                title: presence.title && !shape.menu,
                menu: shape.menu,
                search: placement == SearchPlacement::Left,
            })
        };

        let right = presence.right.then_some(RightRegion {
            filter: !shape.multiple_line && shape.filter,
            search: placement == SearchPlacement::Right,
            actions: shape.actions > 0,
            settings: shape.settings > 0,
        });

        // In multi-line mode the filter relocates next to the tabs.
        let secondary = if !shape.multiple_line {
            None
        } else if shape.tabs > 0 {
            Some(SecondaryLine::Tabs {
                filter: shape.filter,
            })
        } else if shape.filter {
            Some(SecondaryLine::Filter)
        } else {
            None
        };

        Plan {
            left,
            right,
            secondary,
        }
    }

    pub(crate) fn has_header(&self) -> bool {
        self.left.is_some() || self.right.is_some()
    }
}

#[cfg(test)]
mod tests;
