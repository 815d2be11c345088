//! Scroll-linked chrome for [`iced`].
//!
//! This crate is split into two layers:
//! - model helpers ([`ChromeOffset`], [`Density`], [`Dp`], [`Px`]) that are
//!   UI-agnostic;
//! - widgets ([`PreScroll`], [`Translate`]) that feed the model from pointer
//!   events and apply its output to layout.
//!
//! The recommended flow for a bottom bar that hides while the content
//! scrolls:
//! 1. keep one [`ChromeOffset`] in your app state;
//! 2. wrap the scrollable in [`pre_scroll`] and feed every reported delta
//!    to [`ChromeOffset::on_scroll_delta`];
//! 3. wrap every piece of chrome in [`translate`] with
//!    [`ChromeOffset::translation_y`].
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::widget::{column, container, scrollable, text};
//! use iced::{Element, Length};
//! use notebar_ui_scroll::{ChromeOffset, Density, Dp, pre_scroll, translate};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     Scrolled(f32),
//! }
//!
//! struct State {
//!     chrome: ChromeOffset,
//! }
//!
//! impl State {
//!     fn new() -> Self {
//!         Self {
//!             chrome: ChromeOffset::new(Dp(56.0), Density::LOGICAL),
//!         }
//!     }
//!
//!     fn update(&mut self, message: Message) {
//!         match message {
//!             Message::Scrolled(delta_y) => {
//!                 let _ = self.chrome.on_scroll_delta(delta_y);
//!             },
//!         }
//!     }
//!
//!     fn view(&self) -> Element<'_, Message> {
//!         let rows = (0..50).map(|i| text(i.to_string()).into());
//!         let list: Element<'_, Message> =
//!             scrollable(column(rows)).height(Length::Fill).into();
//!         let bar = container(text("bar")).height(Length::Fixed(56.0));
//!
//!         column![
//!             pre_scroll(list, Message::Scrolled),
//!             translate(bar, self.chrome.translation_y()),
//!         ]
//!         .into()
//!     }
//! }
//! ```

mod offset;
mod pre_scroll;
mod translate;
mod units;

pub use offset::{ChromeOffset, ScrollConsumption};
pub use pre_scroll::{
    LINE_HEIGHT_PX, PreScroll, PreScrollState, pre_scroll, wheel_delta_y,
};
pub use translate::{Translate, translate};
pub use units::{Density, Dp, Px};
