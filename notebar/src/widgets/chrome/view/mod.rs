pub(crate) mod action_button;
pub(crate) mod bottom_bar;
