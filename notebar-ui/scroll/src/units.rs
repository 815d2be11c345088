/// A density-independent length.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Dp(pub f32);

/// A length in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Px(pub f32);

/// Number of device pixels per [`Dp`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(f32);

impl Density {
    /// One pixel per dp. iced layout coordinates are already logical, so
    /// this is the density the app runs with unless configured otherwise.
    pub const LOGICAL: Self = Self(1.0);

    /// Build a density from a scale factor.
    ///
    /// Returns `None` for zero, negative or non-finite factors.
    pub fn new(scale: f32) -> Option<Self> {
        (scale.is_finite() && scale > 0.0).then_some(Self(scale))
    }

    /// Convert `dp` to pixels without rounding.
    pub fn to_px(self, dp: Dp) -> Px {
        Px(dp.0 * self.0)
    }

    /// Convert `dp` to a whole number of pixels.
    pub fn round_to_px(self, dp: Dp) -> Px {
        Px((dp.0 * self.0).round())
    }

    /// Convert pixels back to dp.
    pub fn to_dp(self, px: Px) -> Dp {
        Dp(px.0 / self.0)
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::LOGICAL
    }
}
