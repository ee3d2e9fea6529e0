use gpui::Window;

/// Width below which the toolbar stacks its regions vertically.
pub const NARROW_MAX_WIDTH: f32 = 640.0;

/// Viewport class used to switch toolbar layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Narrow,
    Wide,
}

impl Breakpoint {
    /// Classify the current window viewport.
    pub fn of(window: &Window) -> Self {
        let width: f32 = window.viewport_size().width.into();
        Self::from_width(width)
    }

    pub fn from_width(width: f32) -> Self {
        if width < NARROW_MAX_WIDTH {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        matches!(self, Self::Narrow)
    }
}

#[cfg(test)]
mod tests;
