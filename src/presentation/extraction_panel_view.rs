use iced::widget::{button, column, container, image, row, scrollable, text, Text};
use iced::{Alignment, Element, Length};

use crate::core::models::ExtractionPanelState;
use crate::global_constants::{
    UI_COPY_TEXT_BUTTON, UI_EXTRACTED_TEXT_LABEL, UI_NO_FILE_SELECTED, UI_PICK_IMAGE_BUTTON,
    UI_PICK_IMAGE_LABEL, UI_TITLE,
};
use crate::presentation::app_theme;

const PANEL_MAX_WIDTH: f32 = 672.0;
const RESULT_BOX_HEIGHT: f32 = 150.0;

#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionPanelViewMessage {
    PickImage,
    ExtractText,
    CopyExtractedText,
}

/// Arabic needs full shaping for joined glyphs.
fn shaped_text(content: &str) -> Text<'_> {
    text(content).shaping(text::Shaping::Advanced)
}

fn render_image_intake(state: &ExtractionPanelState) -> Element<'_, ExtractionPanelViewMessage> {
    let file_name = state
        .selected_image()
        .map(|image| image.file_name.as_str())
        .unwrap_or(UI_NO_FILE_SELECTED);

    let pick_button = button(shaped_text(UI_PICK_IMAGE_BUTTON).size(14))
        .padding([8, 16])
        .style(app_theme::secondary_button_style)
        .on_press(ExtractionPanelViewMessage::PickImage);

    column![
        shaped_text(UI_PICK_IMAGE_LABEL).size(14),
        row![shaped_text(file_name).size(14), pick_button]
            .spacing(12)
            .align_y(Alignment::Center),
    ]
    .spacing(8)
    .align_x(Alignment::End)
    .width(Length::Fill)
    .into()
}

fn render_extract_button(state: &ExtractionPanelState) -> Element<'_, ExtractionPanelViewMessage> {
    let label = container(shaped_text(state.extract_button_label()).size(18)).center_x(Length::Fill);

    button(label)
        .width(Length::Fill)
        .padding([12, 24])
        .style(app_theme::purple_button_style)
        .on_press_maybe(
            state
                .is_extract_enabled()
                .then_some(ExtractionPanelViewMessage::ExtractText),
        )
        .into()
}

fn render_result(state: &ExtractionPanelState) -> Element<'_, ExtractionPanelViewMessage> {
    let result_box = container(
        scrollable(shaped_text(state.extracted_text()).size(16).width(Length::Fill))
            .height(Length::Fixed(RESULT_BOX_HEIGHT)),
    )
    .padding(12)
    .width(Length::Fill)
    .style(app_theme::result_box_style);

    let copy_button = button(shaped_text(UI_COPY_TEXT_BUTTON).size(14))
        .padding([8, 16])
        .style(app_theme::secondary_button_style)
        .on_press(ExtractionPanelViewMessage::CopyExtractedText);

    column![
        shaped_text(UI_EXTRACTED_TEXT_LABEL).size(14),
        result_box,
        copy_button
    ]
    .spacing(8)
    .align_x(Alignment::End)
    .width(Length::Fill)
    .into()
}

pub fn render_extraction_panel(
    state: &ExtractionPanelState,
) -> Element<'_, ExtractionPanelViewMessage> {
    let title = container(
        shaped_text(UI_TITLE)
            .size(36)
            .style(app_theme::title_text_style),
    )
    .center_x(Length::Fill);

    let mut card_content = column![render_image_intake(state)]
        .spacing(16)
        .width(Length::Fill);

    if let Some(preview) = state.image_preview() {
        card_content = card_content.push(image(preview.image_handle.clone()).width(Length::Fill));
    }

    card_content = card_content.push(render_extract_button(state));

    if state.is_error_visible() {
        card_content = card_content.push(
            container(
                shaped_text(state.error_message())
                    .size(15)
                    .style(app_theme::error_text_style),
            )
            .center_x(Length::Fill),
        );
    }

    if state.is_result_visible() {
        card_content = card_content.push(render_result(state));
    }

    let card = container(card_content)
        .padding(24)
        .width(Length::Fill)
        .style(app_theme::card_container_style);

    let panel = column![title, card].spacing(32).max_width(PANEL_MAX_WIDTH);

    container(scrollable(container(panel).center_x(Length::Fill).padding(16)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
