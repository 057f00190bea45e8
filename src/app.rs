use std::sync::Arc;

use iced::{Element, Subscription, Task, Theme};

use crate::adapters::{OcrSpaceConfig, OcrSpaceOcrService};
use crate::core::orchestrators::extraction_panel::{ExtractionPanel, PanelMessage};
use crate::global_constants::{LOG_TAG_APP, OCR_API_KEY_ENV_VAR};
use crate::ports::RfdImagePicker;
use crate::presentation::app_theme;
use crate::user_settings::{ThemeMode, UserSettings};

pub struct ExtractorApp {
    panel: ExtractionPanel,
    theme_mode: ThemeMode,
}

impl ExtractorApp {
    pub fn build() -> (Self, Task<PanelMessage>) {
        log::info!("{} Initializing application", LOG_TAG_APP);

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("{} Failed to load settings: {:#}, using defaults", LOG_TAG_APP, e);
            UserSettings::default()
        });

        let config = OcrSpaceConfig::resolve(&settings, std::env::var(OCR_API_KEY_ENV_VAR).ok());

        let panel = ExtractionPanel::build(
            Arc::new(OcrSpaceOcrService::build(config)),
            Arc::new(RfdImagePicker::initialize()),
        );

        (
            Self {
                panel,
                theme_mode: settings.theme_mode,
            },
            Task::none(),
        )
    }

    pub fn handle_update(&mut self, message: PanelMessage) -> Task<PanelMessage> {
        self.panel.update(message)
    }

    pub fn render_view(&self) -> Element<'_, PanelMessage> {
        self.panel.render_view()
    }

    pub fn theme(&self) -> Theme {
        app_theme::get_theme(&self.theme_mode)
    }

    pub fn handle_subscription(&self) -> Subscription<PanelMessage> {
        iced::event::listen_with(|event, _status, _id| match event {
            iced::Event::Window(iced::window::Event::FileDropped(path)) => {
                log::info!("{} File dropped onto window: {:?}", LOG_TAG_APP, path);
                Some(PanelMessage::FileDropped(path))
            }
            _ => None,
        })
    }
}
