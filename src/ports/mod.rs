mod rfd_image_picker;

pub use rfd_image_picker::RfdImagePicker;
