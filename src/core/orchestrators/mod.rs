pub mod extraction_panel;
