use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use iced::{Element, Task};

use crate::core::interfaces::adapters::OcrService;
use crate::core::interfaces::ports::ImagePicker;
use crate::core::models::{
    ExtractionOutcome, ExtractionPanelState, ExtractionTicket, ImagePreview, SelectedImage,
};
use crate::global_constants::{LOG_TAG_INTAKE, LOG_TAG_PANEL};
use crate::presentation::{render_extraction_panel, ExtractionPanelViewMessage};

#[derive(Debug, Clone)]
pub enum PanelMessage {
    View(ExtractionPanelViewMessage),
    ImagePicked(Option<PathBuf>),
    FileDropped(PathBuf),
    ImageLoaded(u64, Result<SelectedImage, String>),
    PreviewReady(u64, ImagePreview),
    ExtractionFinished(ExtractionTicket, ExtractionOutcome),
}

pub struct ExtractionPanel {
    ocr_service: Arc<dyn OcrService>,
    image_picker: Arc<dyn ImagePicker>,
    state: ExtractionPanelState,
}

impl ExtractionPanel {
    pub fn build(ocr_service: Arc<dyn OcrService>, image_picker: Arc<dyn ImagePicker>) -> Self {
        Self {
            ocr_service,
            image_picker,
            state: ExtractionPanelState::new(),
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &ExtractionPanelState {
        &self.state
    }

    pub fn update(&mut self, message: PanelMessage) -> Task<PanelMessage> {
        log::debug!("{} Received message: {:?}", LOG_TAG_PANEL, message);

        match message {
            PanelMessage::View(ExtractionPanelViewMessage::PickImage) => {
                self.handle_pick_image()
            }
            PanelMessage::View(ExtractionPanelViewMessage::ExtractText) => {
                self.handle_extract_text()
            }
            PanelMessage::View(ExtractionPanelViewMessage::CopyExtractedText) => {
                self.handle_copy_extracted_text()
            }
            PanelMessage::ImagePicked(Some(path)) | PanelMessage::FileDropped(path) => {
                self.handle_load_image(path)
            }
            PanelMessage::ImagePicked(None) => Task::none(),
            PanelMessage::ImageLoaded(intake, result) => self.handle_image_loaded(intake, result),
            PanelMessage::PreviewReady(generation, preview) => {
                self.state.apply_preview(generation, preview);
                Task::none()
            }
            PanelMessage::ExtractionFinished(ticket, outcome) => {
                self.state.complete_extraction(ticket, outcome);
                Task::none()
            }
        }
    }

    pub fn render_view(&self) -> Element<'_, PanelMessage> {
        render_extraction_panel(&self.state).map(PanelMessage::View)
    }

    fn handle_pick_image(&mut self) -> Task<PanelMessage> {
        let image_picker = self.image_picker.clone();

        Task::perform(
            async move { image_picker.pick_image().await },
            PanelMessage::ImagePicked,
        )
    }

    fn handle_load_image(&mut self, path: PathBuf) -> Task<PanelMessage> {
        let intake = self.state.begin_intake();

        Task::perform(
            async move {
                SelectedImage::load_from_path(&path)
                    .await
                    .map_err(|e| format!("{:#}", e))
            },
            move |result| PanelMessage::ImageLoaded(intake, result),
        )
    }

    fn handle_image_loaded(
        &mut self,
        intake: u64,
        result: Result<SelectedImage, String>,
    ) -> Task<PanelMessage> {
        if !self.state.is_current_intake(intake) {
            log::debug!(
                "{} discarding load for superseded intake {}",
                LOG_TAG_INTAKE,
                intake
            );
            return Task::none();
        }

        match result {
            Ok(selected_image) => {
                let generation = self.state.select_image(selected_image.clone());

                Task::perform(
                    async move { ImagePreview::derive_from(&selected_image) },
                    move |preview| PanelMessage::PreviewReady(generation, preview),
                )
            }
            Err(error) => {
                log::error!("{} could not load image: {}", LOG_TAG_INTAKE, error);
                Task::none()
            }
        }
    }

    fn handle_extract_text(&mut self) -> Task<PanelMessage> {
        match self.start_extraction() {
            Some(extraction) => Task::future(extraction),
            None => Task::none(),
        }
    }

    /// Enters the loading phase and returns the request round trip for the current
    /// selection, resolving to the matching [`PanelMessage::ExtractionFinished`].
    fn start_extraction(
        &mut self,
    ) -> Option<impl Future<Output = PanelMessage> + Send + 'static> {
        let (ticket, selected_image) = self.state.begin_extraction()?;
        let ocr_service = self.ocr_service.clone();

        Some(async move {
            let outcome = ocr_service.extract_text_from_image(&selected_image).await;
            PanelMessage::ExtractionFinished(ticket, outcome)
        })
    }

    fn handle_copy_extracted_text(&mut self) -> Task<PanelMessage> {
        if !self.state.is_result_visible() {
            return Task::none();
        }

        log::info!("{} Copying extracted text to clipboard", LOG_TAG_PANEL);
        iced::clipboard::write(self.state.extracted_text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ExtractionError;
    use crate::global_constants::EXTRACTION_FAILED_MESSAGE;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockOcrService {
        requested_files: Arc<Mutex<Vec<String>>>,
        outcome: ExtractionOutcome,
    }

    impl MockOcrService {
        fn new(outcome: ExtractionOutcome) -> Self {
            Self {
                requested_files: Arc::new(Mutex::new(Vec::new())),
                outcome,
            }
        }

        fn get_request_count(&self) -> usize {
            self.requested_files.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl OcrService for MockOcrService {
        async fn extract_text_from_image(
            &self,
            image: &SelectedImage,
        ) -> Result<String, ExtractionError> {
            self.requested_files
                .lock()
                .unwrap()
                .push(image.file_name.clone());
            self.outcome.clone()
        }
    }

    struct MockImagePicker;

    #[async_trait]
    impl ImagePicker for MockImagePicker {
        async fn pick_image(&self) -> Option<PathBuf> {
            None
        }
    }

    fn create_panel(ocr_service: Arc<MockOcrService>) -> ExtractionPanel {
        ExtractionPanel::build(ocr_service, Arc::new(MockImagePicker))
    }

    fn create_test_image(name: &str) -> SelectedImage {
        SelectedImage::build_from_bytes(name, vec![0x89, b'P', b'N', b'G', 0, 1])
    }

    fn select(panel: &mut ExtractionPanel, name: &str) {
        let intake = panel.state.begin_intake();
        let _ = panel.update(PanelMessage::ImageLoaded(intake, Ok(create_test_image(name))));
    }

    fn finish(panel: &mut ExtractionPanel, ticket: ExtractionTicket, outcome: ExtractionOutcome) {
        let _ = panel.update(PanelMessage::ExtractionFinished(ticket, outcome));
    }

    fn press_extract(panel: &mut ExtractionPanel) {
        let _ = panel.update(PanelMessage::View(ExtractionPanelViewMessage::ExtractText));
    }

    #[test]
    fn test_extract_without_selection_stays_idle() {
        let service = Arc::new(MockOcrService::new(Ok("unused".to_string())));
        let mut panel = create_panel(service.clone());

        press_extract(&mut panel);

        assert!(!panel.state().is_loading());
        assert_eq!(panel.state().error_message(), "");
        assert_eq!(service.get_request_count(), 0);
    }

    #[test]
    fn test_image_loaded_selects_image() {
        let mut panel = create_panel(Arc::new(MockOcrService::new(Ok(String::new()))));

        select(&mut panel, "invoice.png");

        assert_eq!(
            panel.state().selected_image().unwrap().file_name,
            "invoice.png"
        );
        assert!(panel.state().is_extract_enabled());
    }

    #[test]
    fn test_failed_image_load_keeps_previous_selection() {
        let mut panel = create_panel(Arc::new(MockOcrService::new(Ok(String::new()))));
        select(&mut panel, "first.png");

        let intake = panel.state.begin_intake();
        let _ = panel.update(PanelMessage::ImageLoaded(
            intake,
            Err("permission denied".to_string()),
        ));

        assert_eq!(panel.state().selected_image().unwrap().file_name, "first.png");
        assert_eq!(panel.state().error_message(), "");
    }

    #[test]
    fn test_older_drop_finishing_last_does_not_replace_newer_drop() {
        let mut panel = create_panel(Arc::new(MockOcrService::new(Ok(String::new()))));
        let _ = panel.update(PanelMessage::FileDropped(PathBuf::from("a_first.png")));
        let first_intake = 1;
        let _ = panel.update(PanelMessage::FileDropped(PathBuf::from("b_second.png")));
        let second_intake = 2;

        let _ = panel.update(PanelMessage::ImageLoaded(
            second_intake,
            Ok(create_test_image("b_second.png")),
        ));
        let _ = panel.update(PanelMessage::ImageLoaded(
            first_intake,
            Ok(create_test_image("a_first.png")),
        ));

        assert_eq!(
            panel.state().selected_image().unwrap().file_name,
            "b_second.png"
        );
    }

    #[test]
    fn test_failed_load_of_superseded_drop_is_ignored() {
        let mut panel = create_panel(Arc::new(MockOcrService::new(Ok(String::new()))));
        let _ = panel.update(PanelMessage::FileDropped(PathBuf::from("a_first.png")));
        let _ = panel.update(PanelMessage::FileDropped(PathBuf::from("b_second.png")));

        let _ = panel.update(PanelMessage::ImageLoaded(2, Ok(create_test_image("b_second.png"))));
        let _ = panel.update(PanelMessage::ImageLoaded(1, Err("gone".to_string())));

        assert_eq!(
            panel.state().selected_image().unwrap().file_name,
            "b_second.png"
        );
    }

    #[test]
    fn test_preview_ready_for_current_selection_is_shown() {
        let mut panel = create_panel(Arc::new(MockOcrService::new(Ok(String::new()))));
        select(&mut panel, "first.png");
        let preview = ImagePreview::derive_from(panel.state().selected_image().unwrap());

        let _ = panel.update(PanelMessage::PreviewReady(1, preview));

        assert!(panel.state().is_preview_visible());
    }

    #[test]
    fn test_extract_with_selection_enters_loading() {
        let mut panel = create_panel(Arc::new(MockOcrService::new(Ok(String::new()))));
        select(&mut panel, "page.png");

        press_extract(&mut panel);

        assert!(panel.state().is_loading());
        assert!(!panel.state().is_extract_enabled());
    }

    #[test]
    fn test_extraction_finished_with_text_updates_state() {
        let mut panel = create_panel(Arc::new(MockOcrService::new(Ok(String::new()))));
        select(&mut panel, "page.png");
        let (ticket, _) = panel.state.begin_extraction().unwrap();

        finish(&mut panel, ticket, Ok("hello".to_string()));

        assert_eq!(panel.state().extracted_text(), "hello");
        assert_eq!(panel.state().error_message(), "");
        assert!(!panel.state().is_loading());
    }

    #[test]
    fn test_extraction_finished_with_network_error_shows_fallback() {
        let mut panel = create_panel(Arc::new(MockOcrService::new(Ok(String::new()))));
        select(&mut panel, "page.png");
        let (ticket, _) = panel.state.begin_extraction().unwrap();

        finish(
            &mut panel,
            ticket,
            Err(ExtractionError::Network("connection refused".to_string())),
        );

        assert_eq!(panel.state().error_message(), EXTRACTION_FAILED_MESSAGE);
        assert!(!panel.state().is_loading());
    }

    #[test]
    fn test_extraction_for_replaced_image_does_not_overwrite_state() {
        let mut panel = create_panel(Arc::new(MockOcrService::new(Ok(String::new()))));
        select(&mut panel, "old.png");
        let (ticket, _) = panel.state.begin_extraction().unwrap();
        select(&mut panel, "new.png");

        finish(&mut panel, ticket, Ok("text of old image".to_string()));

        assert_eq!(panel.state().extracted_text(), "");
        assert!(!panel.state().is_loading());
        assert!(panel.state().is_extract_enabled());
    }

    #[test]
    fn test_copy_without_result_is_noop() {
        let mut panel = create_panel(Arc::new(MockOcrService::new(Ok(String::new()))));

        let _ = panel.update(PanelMessage::View(
            ExtractionPanelViewMessage::CopyExtractedText,
        ));

        assert!(!panel.state().is_result_visible());
    }

    #[tokio::test]
    async fn test_extract_sends_one_request_for_current_selection() {
        let service = Arc::new(MockOcrService::new(Ok("مرحبا".to_string())));
        let mut panel = create_panel(service.clone());
        select(&mut panel, "first.png");
        select(&mut panel, "scan.png");

        let extraction = panel.start_extraction().unwrap();
        assert!(panel.state().is_loading());
        assert!(panel.start_extraction().is_none());

        let message = extraction.await;
        assert!(matches!(message, PanelMessage::ExtractionFinished(_, Ok(_))));
        let _ = panel.update(message);

        assert_eq!(service.get_request_count(), 1);
        assert_eq!(
            service.requested_files.lock().unwrap().as_slice(),
            &["scan.png".to_string()]
        );
        assert_eq!(panel.state().extracted_text(), "مرحبا");
        assert_eq!(panel.state().error_message(), "");
        assert!(!panel.state().is_loading());
    }

    #[tokio::test]
    async fn test_extract_with_api_error_shows_service_message() {
        let service = Arc::new(MockOcrService::new(Err(ExtractionError::Api(
            "bad image".to_string(),
        ))));
        let mut panel = create_panel(service.clone());
        select(&mut panel, "scan.png");

        let message = panel.start_extraction().unwrap().await;
        let _ = panel.update(message);

        assert_eq!(service.get_request_count(), 1);
        assert_eq!(
            service.requested_files.lock().unwrap().as_slice(),
            &["scan.png".to_string()]
        );
        assert_eq!(panel.state().error_message(), "bad image");
        assert!(!panel.state().is_loading());
    }
}
