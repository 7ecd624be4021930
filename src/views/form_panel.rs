use crate::message::Message;
use crate::model::{FieldKind, FormField, FormKind, FormState};
use iced::widget::{button, column, pick_list, row, text, text_input, Column};
use iced::{Alignment, Element, Length};

pub fn form_panel<'a>(
    form: &'a FormState,
    kind: FormKind,
    submit_label: &'a str,
    on_submit: Message,
) -> Column<'a, Message> {
    let fields = form
        .fields()
        .iter()
        .enumerate()
        .fold(column![].spacing(10), |column, (index, field)| {
            column.push(
                row![
                    text(field.label).width(Length::FillPortion(2)),
                    field_input(field, kind, index),
                ]
                .spacing(12)
                .align_y(Alignment::Center),
            )
        });

    column![fields, button(submit_label).on_press(on_submit)].spacing(16)
}

fn field_input(field: &FormField, kind: FormKind, index: usize) -> Element<'_, Message> {
    match &field.kind {
        FieldKind::Choice(options) => {
            let selected = options.iter().find(|option| **option == field.value).cloned();
            pick_list(options.as_slice(), selected, move |value| {
                Message::FieldChanged(kind, index, value)
            })
            .placeholder("Select...")
            .width(Length::FillPortion(3))
            .into()
        }
        FieldKind::Number | FieldKind::Text => text_input(field.label, &field.value)
            .on_input(move |value| Message::FieldChanged(kind, index, value))
            .width(Length::FillPortion(3))
            .into(),
    }
}
