//! Colour palettes for the timeline.

use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,
    pub from_year: Color,
    pub to_year: Color,
    pub event_year: Color,

    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default).
    pub fn dark() -> Self {
        Self {
            base: Color::Rgb(27, 32, 48),    // #1b2030
            surface: Color::Rgb(40, 47, 68), // #282f44

            text: Color::Rgb(226, 231, 242),    // #e2e7f2
            subtext: Color::Rgb(168, 178, 204), // #a8b2cc
            muted: Color::Rgb(100, 112, 140),   // #64708c

            primary: Color::Rgb(239, 93, 168),    // #ef5da8
            from_year: Color::Rgb(128, 130, 255), // #8082ff
            to_year: Color::Rgb(239, 93, 168),    // #ef5da8
            event_year: Color::Rgb(96, 150, 245), // #6096f5

            border: Color::Rgb(66, 86, 122), // #42567a
        }
    }

    /// Light theme: slate text with blue and pink accents.
    pub fn light() -> Self {
        Self {
            base: Color::Rgb(244, 245, 249),    // #f4f5f9
            surface: Color::Rgb(231, 234, 242), // #e7eaf2

            text: Color::Rgb(66, 86, 122),      // #42567a
            subtext: Color::Rgb(92, 108, 140),  // #5c6c8c
            muted: Color::Rgb(160, 170, 190),   // #a0aabe

            primary: Color::Rgb(239, 93, 168),   // #ef5da8
            from_year: Color::Rgb(93, 95, 239),  // #5d5fef
            to_year: Color::Rgb(239, 93, 168),   // #ef5da8
            event_year: Color::Rgb(56, 119, 238), // #3877ee

            border: Color::Rgb(200, 206, 219), // #c8cedb
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(20, 20, 20),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Yellow,
            from_year: Color::Cyan,
            to_year: Color::Magenta,
            event_year: Color::LightBlue,

            border: Color::White,
        }
    }

    /// Look a theme up by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high-contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }

    /// `color` drawn at `opacity` over the theme background.
    pub fn faded(&self, color: Color, opacity: f64) -> Color {
        fade(color, self.base, opacity)
    }
}

/// Blend `fg` over `bg`. Named colours cannot be mixed, so they switch at
/// half opacity.
pub fn fade(fg: Color, bg: Color, opacity: f64) -> Color {
    let t = opacity.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            Color::Rgb(mix(br, fr, t), mix(bg_, fg_, t), mix(bb, fb, t))
        }
        _ if t >= 0.5 => fg,
        _ => bg,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn mix(from: u8, to: u8, t: f64) -> u8 {
    let value = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
    value.round().clamp(0.0, 255.0) as u8
}
