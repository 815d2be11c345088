pub(crate) mod note_card;
pub(crate) mod note_list;
pub(crate) mod title_bar;
