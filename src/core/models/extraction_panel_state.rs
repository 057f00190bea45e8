use crate::core::models::{ExtractionError, ImagePreview, SelectedImage};
use crate::global_constants::{LOG_TAG_PANEL, UI_EXTRACT_BUTTON, UI_EXTRACT_BUTTON_LOADING};

pub type ExtractionOutcome = Result<String, ExtractionError>;

/// Ties an in-flight extraction to the selection it was started for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionTicket {
    selection_generation: u64,
}

/// UI state of the extraction panel.
///
/// `extracted_text` and `error_message` use the empty string for "nothing to show".
/// Every picked or dropped file bumps `intake_generation`, and every applied selection
/// bumps `selection_generation`; loads and completions carrying an older generation are
/// dropped.
#[derive(Debug, Default)]
pub struct ExtractionPanelState {
    selected_image: Option<SelectedImage>,
    image_preview: Option<ImagePreview>,
    extracted_text: String,
    error_message: String,
    is_loading: bool,
    intake_generation: u64,
    selection_generation: u64,
}

impl ExtractionPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves the intake slot for a file the user just picked or dropped. Only the
    /// load started with the latest intake may become the selection.
    pub fn begin_intake(&mut self) -> u64 {
        self.intake_generation += 1;
        log::debug!("{} intake {} started", LOG_TAG_PANEL, self.intake_generation);
        self.intake_generation
    }

    pub fn is_current_intake(&self, intake: u64) -> bool {
        intake == self.intake_generation
    }

    /// Replaces the selection and returns the generation the preview must be derived for.
    /// The current preview stays in place until [`Self::apply_preview`] resolves.
    pub fn select_image(&mut self, selected_image: SelectedImage) -> u64 {
        self.selection_generation += 1;
        log::info!(
            "{} selected {:?} (generation {})",
            LOG_TAG_PANEL,
            selected_image,
            self.selection_generation
        );
        self.selected_image = Some(selected_image);
        self.selection_generation
    }

    pub fn apply_preview(&mut self, generation: u64, image_preview: ImagePreview) -> bool {
        if generation != self.selection_generation {
            log::debug!(
                "{} discarding preview for generation {} (current {})",
                LOG_TAG_PANEL,
                generation,
                self.selection_generation
            );
            return false;
        }

        self.image_preview = Some(image_preview);
        true
    }

    /// Enters the loading phase. Returns `None` without touching any state when there
    /// is nothing selected or a request is already in flight.
    pub fn begin_extraction(&mut self) -> Option<(ExtractionTicket, SelectedImage)> {
        if self.is_loading {
            log::warn!("{} extraction already in flight, ignoring", LOG_TAG_PANEL);
            return None;
        }

        let Some(selected_image) = self.selected_image.clone() else {
            log::warn!("{} extraction requested without a selected image", LOG_TAG_PANEL);
            return None;
        };

        self.is_loading = true;
        self.error_message.clear();

        let ticket = ExtractionTicket {
            selection_generation: self.selection_generation,
        };
        log::info!("{} extraction started with {:?}", LOG_TAG_PANEL, ticket);

        Some((ticket, selected_image))
    }

    /// Applies the outcome of the extraction started with `ticket` and leaves the
    /// loading phase. Returns whether the outcome reached the visible state.
    pub fn complete_extraction(
        &mut self,
        ticket: ExtractionTicket,
        outcome: ExtractionOutcome,
    ) -> bool {
        if !self.is_loading {
            log::warn!(
                "{} completion for {:?} arrived while idle, ignoring",
                LOG_TAG_PANEL,
                ticket
            );
            return false;
        }

        let is_current = ticket.selection_generation == self.selection_generation;

        if !is_current {
            log::warn!(
                "{} discarding extraction result for abandoned selection {:?}",
                LOG_TAG_PANEL,
                ticket
            );
        } else {
            match outcome {
                Ok(text) => {
                    log::info!(
                        "{} extraction succeeded with {} characters",
                        LOG_TAG_PANEL,
                        text.chars().count()
                    );
                    self.extracted_text = text;
                }
                Err(error) => {
                    log::error!("{} extraction failed: {}", LOG_TAG_PANEL, error);
                    self.error_message = error.user_message();
                }
            }
        }

        self.is_loading = false;
        is_current
    }

    pub fn selected_image(&self) -> Option<&SelectedImage> {
        self.selected_image.as_ref()
    }

    pub fn image_preview(&self) -> Option<&ImagePreview> {
        self.image_preview.as_ref()
    }

    pub fn extracted_text(&self) -> &str {
        &self.extracted_text
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_preview_visible(&self) -> bool {
        self.image_preview.is_some()
    }

    pub fn is_extract_enabled(&self) -> bool {
        !self.is_loading && self.selected_image.is_some()
    }

    pub fn extract_button_label(&self) -> &'static str {
        if self.is_loading {
            UI_EXTRACT_BUTTON_LOADING
        } else {
            UI_EXTRACT_BUTTON
        }
    }

    pub fn is_error_visible(&self) -> bool {
        !self.error_message.is_empty()
    }

    pub fn is_result_visible(&self) -> bool {
        !self.extracted_text.is_empty()
    }
}
