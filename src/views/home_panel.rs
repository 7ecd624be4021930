use crate::message::Message;
use crate::model::PanelName;
use iced::widget::text::Wrapping;
use iced::widget::{button, column, text};
use iced::{Alignment, Element};

const FEATURES: [(PanelName, &str); 3] = [
    (
        PanelName::Yield,
        "Estimate harvest from field size, weather and soil nutrients.",
    ),
    (
        PanelName::Disease,
        "Identify leaf diseases from a photo and get treatment options.",
    ),
    (
        PanelName::Recommendations,
        "Cultivation tips for your crop, season and location.",
    ),
];

pub fn home_panel() -> Element<'static, Message> {
    FEATURES
        .into_iter()
        .fold(
            column![text("Smart farming assistant").size(24)].spacing(16),
            |column, (panel, blurb)| {
                column.push(
                    column![
                        button(text(panel.label())).on_press(Message::SelectPanel(panel)),
                        text(blurb).wrapping(Wrapping::Word),
                    ]
                    .spacing(6),
                )
            },
        )
        .align_x(Alignment::Start)
        .into()
}
