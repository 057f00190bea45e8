use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::user_settings::ThemeMode;

const PURPLE_500: Color = Color::from_rgb(0.659, 0.333, 0.969);
const PURPLE_600: Color = Color::from_rgb(0.576, 0.2, 0.918);
const PURPLE_700: Color = Color::from_rgb(0.494, 0.133, 0.808);
const CARD_RADIUS: f32 = 8.0;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.953, 0.91, 1.0),
                text: Color::from_rgb(0.216, 0.255, 0.318),
                primary: PURPLE_500,
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.863, 0.149, 0.149),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.07, 0.05, 0.12),
                text: Color::from_rgb(0.95, 0.95, 0.97),
                primary: PURPLE_500,
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
    }
}

pub fn purple_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, snap) = match status {
        button::Status::Active => (PURPLE_500, false),
        button::Status::Hovered => (PURPLE_600, false),
        button::Status::Pressed => (PURPLE_700, true),
        button::Status::Disabled => (Color { a: 0.5, ..PURPLE_500 }, false),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            color: background,
            width: 1.0,
            radius: CARD_RADIUS.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color::from_rgb(0.93, 0.93, 0.95),
        button::Status::Pressed => Color::from_rgb(0.85, 0.85, 0.88),
        button::Status::Active | button::Status::Disabled => Color::WHITE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::from_rgb(0.216, 0.255, 0.318),
        border: Border {
            color: Color::from_rgb(0.82, 0.84, 0.86),
            width: 1.0,
            radius: CARD_RADIUS.into(),
        },
        shadow: Shadow::default(),
        snap: matches!(status, button::Status::Pressed),
    }
}

pub fn card_container_style(theme: &Theme) -> container::Style {
    let is_dark = theme.palette().background.r < 0.5;
    let background = if is_dark {
        Color::from_rgb(0.13, 0.11, 0.2)
    } else {
        Color::WHITE
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: CARD_RADIUS.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 6.0,
        },
        ..container::Style::default()
    }
}

pub fn result_box_style(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: Color::from_rgb(0.82, 0.84, 0.86),
            width: 1.0,
            radius: CARD_RADIUS.into(),
        },
        ..container::Style::default()
    }
}

pub fn error_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.palette().danger),
    }
}

pub fn title_text_style(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(PURPLE_600),
    }
}
