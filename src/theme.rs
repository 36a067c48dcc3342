pub use colored::{Color, Colorize};

use crate::config::ThemeName;

#[derive(Debug, Clone, Default)]
pub struct ColorScheme {
    pub foreground: Option<Color>,
    pub bold: bool,
    pub underline: bool,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: ColorScheme,
    pub section: ColorScheme,
    pub body: ColorScheme,
    pub notice: ColorScheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: ColorScheme {
                foreground: Some(Color::Blue),
                bold: true,
                underline: true,
            },
            section: ColorScheme {
                foreground: Some(Color::Cyan),
                bold: true,
                underline: false,
            },
            body: ColorScheme {
                foreground: None,
                bold: false,
                underline: false,
            },
            notice: ColorScheme {
                foreground: Some(Color::Yellow),
                bold: false,
                underline: false,
            },
        }
    }
}

impl Theme {
    pub fn from_name(name: &ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
            ThemeName::Monochrome => Self::monochrome(),
        }
    }

    pub fn dark() -> Self {
        Self::default()
    }

    pub fn light() -> Self {
        Self {
            title: ColorScheme {
                foreground: Some(Color::BrightBlue),
                bold: true,
                ..Default::default()
            },
            section: ColorScheme {
                foreground: Some(Color::BrightCyan),
                bold: true,
                ..Default::default()
            },
            body: ColorScheme::default(),
            notice: ColorScheme {
                foreground: Some(Color::BrightYellow),
                ..Default::default()
            },
        }
    }

    pub fn monochrome() -> Self {
        Self {
            title: ColorScheme {
                foreground: None,
                bold: true,
                underline: true,
            },
            section: ColorScheme {
                foreground: None,
                bold: true,
                underline: false,
            },
            body: ColorScheme::default(),
            notice: ColorScheme::default(),
        }
    }
}

impl ColorScheme {
    pub fn apply(&self, text: &str) -> colored::ColoredString {
        let mut colored_text: colored::ColoredString = text.into();

        if let Some(fg) = self.foreground {
            colored_text = colored_text.color(fg);
        }
        if self.bold {
            colored_text = colored_text.bold();
        }
        if self.underline {
            colored_text = colored_text.underline();
        }

        colored_text
    }
}
