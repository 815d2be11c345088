use notebar_ui_scroll::{ChromeOffset, Density, Dp, Px};

/// Bottom chrome placement state.
#[derive(Debug)]
pub(super) struct ChromeState {
    offset: ChromeOffset,
    density: Density,
    bar_height: Dp,
}

impl ChromeState {
    pub(super) fn new(bar_height: Dp, hide_distance: Dp, density: Density) -> Self {
        Self {
            offset: ChromeOffset::new(hide_distance, density),
            density,
            bar_height,
        }
    }

    /// Feed a pre-scroll delta given in layout units.
    pub(super) fn observe_pre_scroll(&mut self, delta_y: f32) {
        let delta = self.density.to_px(Dp(delta_y));
        let _ = self.offset.on_scroll_delta(delta.0);
    }

    /// Translation shared by the bar and the action button, in layout
    /// units.
    pub(super) fn translation_y(&self) -> f32 {
        self.density.to_dp(Px(self.offset.translation_y())).0
    }

    #[cfg(test)]
    pub(super) fn offset_px(&self) -> f32 {
        self.offset.current_offset()
    }

    pub(super) fn is_hidden(&self) -> bool {
        self.offset.is_hidden()
    }

    pub(super) fn bar_height(&self) -> f32 {
        self.bar_height.0
    }
}
