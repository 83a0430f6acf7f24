use ratatui::style::{Color, Modifier, Style};

/// Indigo-on-dark palette, loosely after the Tailwind colors the site used.
pub struct Theme;

impl Theme {
    pub const BG_SURFACE: Color = Color::Rgb(24, 24, 37);
    pub const ACCENT_INDIGO: Color = Color::Rgb(129, 140, 248);
    pub const ACCENT_PURPLE: Color = Color::Rgb(192, 132, 252);
    pub const ACCENT_AMBER: Color = Color::Rgb(251, 191, 36);
    pub const TEXT_PRIMARY: Color = Color::Rgb(229, 231, 235);
    pub const TEXT_SECONDARY: Color = Color::Rgb(156, 163, 175);
    pub const TEXT_MUTED: Color = Color::Rgb(90, 96, 112);
    pub const BORDER_DIM: Color = Color::Rgb(55, 65, 81);
    pub const SUCCESS: Color = Color::Rgb(74, 222, 128);
    pub const ERROR: Color = Color::Rgb(248, 113, 113);

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_INDIGO)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn heading() -> Style {
        Style::default()
            .fg(Self::ACCENT_INDIGO)
            .add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn text_dim() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn badge() -> Style {
        Style::default().fg(Self::ACCENT_INDIGO).bg(Self::BG_SURFACE)
    }

    pub fn bar_fill() -> Style {
        Style::default().fg(Self::ACCENT_INDIGO)
    }

    pub fn bar_track() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY).bg(Color::Rgb(40, 42, 54))
    }

    pub fn hint_key() -> Style {
        Style::default()
            .fg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint_text() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR)
    }

    /// Stepwise brightness ramp for entrance fades.
    pub fn fade_text(progress: f32) -> Style {
        let color = if progress < 0.34 {
            Self::TEXT_MUTED
        } else if progress < 0.67 {
            Self::TEXT_SECONDARY
        } else {
            Self::TEXT_PRIMARY
        };
        Style::default().fg(color)
    }
}
