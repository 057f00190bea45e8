#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;
mod user_settings;

use iced::Size;

fn main() -> iced::Result {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_TITLE);

    iced::application(
        app::ExtractorApp::build,
        app::ExtractorApp::handle_update,
        app::ExtractorApp::render_view,
    )
    .title(global_constants::APPLICATION_TITLE)
    .theme(app::ExtractorApp::theme)
    .subscription(app::ExtractorApp::handle_subscription)
    .window_size(Size::new(
        global_constants::MAIN_WINDOW_WIDTH,
        global_constants::MAIN_WINDOW_HEIGHT,
    ))
    .run()
}
