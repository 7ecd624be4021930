use crate::message::Message;
use crate::render::{ResultLine, ResultSection, ResultView};
use iced::widget::text::Wrapping;
use iced::widget::{column, container, progress_bar, row, text, Column, Space};
use iced::{Element, Length};

pub fn result_panel(view: &ResultView) -> Element<'_, Message> {
    view.sections
        .iter()
        .fold(column![].spacing(16), |column, section| {
            column.push(
                container(section_block(section))
                    .padding(12)
                    .width(Length::Fill)
                    .style(container::rounded_box),
            )
        })
        .into()
}

fn section_block(section: &ResultSection) -> Column<'_, Message> {
    let mut block = column![text(&section.title).size(18)].spacing(6);

    for line in &section.lines {
        block = block.push(result_line(line));
    }

    if let Some(ratio) = section.gauge {
        block = block.push(progress_bar(0.0..=1.0, ratio).height(Length::Fixed(10.0)));
    }

    block
}

fn result_line(line: &ResultLine) -> Element<'_, Message> {
    match line {
        ResultLine::Headline(value) => text(value).size(28).into(),
        ResultLine::Subheading(value) => text(value).size(16).into(),
        ResultLine::Field { label, value } => row![
            text(format!("{label}:")).width(Length::Shrink),
            text(value).wrapping(Wrapping::Word),
        ]
        .spacing(8)
        .into(),
        ResultLine::Bullet(value) => row![
            Space::with_width(Length::Fixed(8.0)),
            text("→"),
            text(value).wrapping(Wrapping::Word),
        ]
        .spacing(8)
        .into(),
        ResultLine::Caution(value) => text(format!("⚠ {value}"))
            .wrapping(Wrapping::Word)
            .style(text::danger)
            .into(),
    }
}
