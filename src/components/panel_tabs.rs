use crate::message::Message;
use crate::model::{NavigationController, PanelName};
use iced::widget::text::Wrapping;
use iced::widget::{button, container, row, text, Container};
use iced::{Alignment, Background, Color, Length, Shadow, Theme};

pub fn panel_tabs(navigation: &NavigationController) -> Container<'static, Message> {
    let panels = navigation.panels();
    let last = panels.len().saturating_sub(1);

    let tabs = panels
        .iter()
        .enumerate()
        .fold(row![].spacing(0), |tabs, (index, panel)| {
            let position = match index {
                0 if last == 0 => SegmentPosition::Only,
                0 => SegmentPosition::First,
                i if i == last => SegmentPosition::Last,
                _ => SegmentPosition::Middle,
            };
            tabs.push(
                panel_tab(panel.name, panel.active, position).width(Length::FillPortion(1)),
            )
        });

    container(tabs)
        .padding(3)
        .width(Length::Fill)
        .style(segmented_container_style)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentPosition {
    Only,
    First,
    Middle,
    Last,
}

fn panel_tab(
    panel: PanelName,
    is_active: bool,
    position: SegmentPosition,
) -> iced::widget::Button<'static, Message> {
    let content = container(text(panel.label()).size(14).wrapping(Wrapping::None))
        .width(Length::Fill)
        .height(Length::Fixed(32.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding([6, 16]);

    button(content)
        .padding(0)
        .on_press(Message::SelectPanel(panel))
        .style(move |theme, status| segmented_button_style(theme, status, is_active, position))
}

fn segmented_container_style(theme: &Theme) -> iced::widget::container::Style {
    let palette = theme.extended_palette();

    iced::widget::container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: iced::border::Border {
            color: palette.background.strong.color.scale_alpha(0.6),
            width: 1.0,
            radius: iced::border::Radius::new(999.0),
        },
        ..Default::default()
    }
}

fn segmented_button_style(
    theme: &Theme,
    status: iced::widget::button::Status,
    is_active: bool,
    position: SegmentPosition,
) -> iced::widget::button::Style {
    let palette = theme.extended_palette();

    let background_color = match (status, is_active) {
        (iced::widget::button::Status::Hovered, true) => palette.primary.base.color,
        (iced::widget::button::Status::Hovered, false) => {
            palette.background.base.color.scale_alpha(0.8)
        }
        (iced::widget::button::Status::Pressed, true) => {
            palette.primary.base.color.scale_alpha(0.9)
        }
        (iced::widget::button::Status::Pressed, false) => {
            palette.background.base.color.scale_alpha(0.9)
        }
        (_, true) => palette.primary.strong.color,
        (_, false) => palette.background.strong.color.scale_alpha(0.4),
    };

    let text_color = if is_active {
        palette.primary.strong.text
    } else {
        palette.background.base.text
    };

    const ROUND: f32 = 999.0;
    const SQUARE: f32 = 10.0;
    let (outer_left, outer_right) = match position {
        SegmentPosition::Only => (ROUND, ROUND),
        SegmentPosition::First => (ROUND, SQUARE),
        SegmentPosition::Middle => (SQUARE, SQUARE),
        SegmentPosition::Last => (SQUARE, ROUND),
    };

    iced::widget::button::Style {
        background: Some(Background::Color(background_color)),
        text_color,
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: iced::border::Radius {
                top_left: outer_left,
                top_right: outer_right,
                bottom_right: outer_right,
                bottom_left: outer_left,
            },
        },
        shadow: Shadow::default(),
    }
}
