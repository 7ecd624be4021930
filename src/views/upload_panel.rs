use crate::message::Message;
use crate::model::{DropZone, ImageAttachment};
use iced::widget::{button, column, container, text, Image};
use iced::{Alignment, Background, Element, Length, Theme};

const PREVIEW_HEIGHT: f32 = 280.0;

pub fn upload_panel(attachment: &ImageAttachment, drop_zone: DropZone) -> Element<'_, Message> {
    match attachment.pending() {
        Some(image) => column![
            Image::new(image.preview().clone())
                .width(Length::Fill)
                .height(Length::Fixed(PREVIEW_HEIGHT)),
            text(format!("{} ({})", image.file_name(), image.media_type())).size(14),
            button("Choose Another Image").on_press(Message::PickImage),
            button("Analyze Image").on_press(Message::AnalyzeImage),
        ]
        .spacing(12)
        .align_x(Alignment::Center)
        .into(),
        None => {
            let prompt = column![
                text("Drop a leaf image here").size(18),
                text("or").size(14),
                button("Browse Images").on_press(Message::PickImage),
            ]
            .spacing(10)
            .align_x(Alignment::Center);

            container(prompt)
                .padding(32)
                .width(Length::Fill)
                .height(Length::Fixed(PREVIEW_HEIGHT))
                .align_x(Alignment::Center)
                .align_y(Alignment::Center)
                .style(move |theme| drop_zone_style(theme, drop_zone))
                .into()
        }
    }
}

fn drop_zone_style(theme: &Theme, drop_zone: DropZone) -> container::Style {
    let palette = theme.extended_palette();
    let (background, border_alpha) = match drop_zone {
        DropZone::Hovering => (palette.primary.weak.color.scale_alpha(0.3), 1.0),
        DropZone::Idle => (palette.background.weak.color.scale_alpha(0.2), 0.5),
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: iced::border::Border {
            color: palette.primary.base.color.scale_alpha(border_alpha),
            width: 2.0,
            radius: iced::border::Radius::new(12.0),
        },
        ..Default::default()
    }
}
