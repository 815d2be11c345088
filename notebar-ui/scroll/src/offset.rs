use crate::units::{Density, Dp, Px};

/// What an observer did with a scroll delta it saw first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollConsumption {
    /// Nothing was kept; the scrollable receives the full delta.
    Ignored,
}

/// Scroll-linked offset shared by the bottom bar and the floating button.
///
/// Holds a single value in `[-extent, 0]`. Negative deltas (content moving
/// up) push it toward `-extent`, positive deltas pull it back to `0`. Both
/// bounds saturate.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeOffset {
    offset: f32,
    extent: f32,
}

impl ChromeOffset {
    /// Create an offset whose range is `hide_distance` at `density`.
    pub fn new(hide_distance: Dp, density: Density) -> Self {
        Self::with_extent(density.round_to_px(hide_distance))
    }

    /// Create an offset with an explicit range in pixels.
    ///
    /// Negative or non-finite extents collapse to zero, which pins the
    /// chrome in place.
    pub fn with_extent(extent: Px) -> Self {
        let extent = if extent.0.is_finite() {
            extent.0.max(0.0)
        } else {
            0.0
        };

        Self {
            offset: 0.0,
            extent,
        }
    }

    /// Observe a vertical delta before the scrollable applies it.
    ///
    /// The delta is never claimed, so the scrollable's own position is
    /// untouched.
    pub fn on_scroll_delta(&mut self, delta_y: f32) -> ScrollConsumption {
        if !delta_y.is_finite() {
            log::debug!("ignoring non-finite scroll delta {delta_y}");
            return ScrollConsumption::Ignored;
        }

        self.offset = (self.offset + delta_y).clamp(-self.extent, 0.0);
        ScrollConsumption::Ignored
    }

    pub fn current_offset(&self) -> f32 {
        self.offset
    }

    /// Vertical translation for every chrome element, in whole pixels.
    ///
    /// Positive values move the chrome down, out of view.
    pub fn translation_y(&self) -> f32 {
        let translation = -self.offset.round();
        // Avoid handing out -0.0 at rest.
        if translation == 0.0 { 0.0 } else { translation }
    }

    /// Return whether the chrome is fully out of view.
    pub fn is_hidden(&self) -> bool {
        self.extent > 0.0 && self.offset <= -self.extent
    }
}
