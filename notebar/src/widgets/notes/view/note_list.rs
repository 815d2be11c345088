use iced::widget::{column, scrollable};
use iced::{Element, Length, Padding};

use super::super::model::NotesViewModel;
use super::note_card::{self, NoteCardProps};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

const LIST_TOP_PADDING: f32 = 5.0;

/// Props for rendering the scrollable note list.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NoteListProps<'a> {
    pub(crate) vm: NotesViewModel<'a>,
    pub(crate) fonts: &'a FontsConfig,
    pub(crate) theme: ThemeProps<'a>,
    /// Space kept below the last card so it can clear the bottom bar.
    pub(crate) bottom_inset: f32,
}

/// Render the vertically scrollable list of note cards.
pub(crate) fn view<'a, Message: 'a>(
    props: NoteListProps<'a>,
) -> Element<'a, Message> {
    let cards = props.vm.cards.iter().map(|card| {
        note_card::view(NoteCardProps {
            card,
            fonts: props.fonts,
            theme: props.theme,
        })
    });

    let list = column(cards).width(Length::Fill).padding(Padding {
        top: LIST_TOP_PADDING,
        right: 0.0,
        bottom: props.bottom_inset.max(0.0),
        left: 0.0,
    });

    scrollable(list)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
