use ratatui::style::{Color, Modifier, Style};

use crate::core::persona::PersonaMode;

#[derive(Debug, Clone)]
pub struct Theme {
    // Header
    pub title_style: Style,
    pub status_style: Style,
    pub border_style: Style,

    // Chat message styles
    pub user_prefix_style: Style,
    pub user_text_style: Style,
    pub assistant_prefix_style: Style,
    pub assistant_text_style: Style,
    pub timestamp_style: Style,
    pub pending_style: Style,

    // Quick actions
    pub quick_key_style: Style,
    pub quick_text_style: Style,

    // Input area
    pub input_text_style: Style,
    pub placeholder_style: Style,
    pub hint_style: Style,
}

impl Theme {
    pub fn professional() -> Self {
        Self::with_accent(Color::Cyan)
    }

    pub fn personal() -> Self {
        Self::with_accent(Color::LightMagenta)
    }

    pub fn for_mode(mode: PersonaMode) -> Self {
        match mode {
            PersonaMode::Professional => Self::professional(),
            PersonaMode::Personal => Self::personal(),
        }
    }

    fn with_accent(accent: Color) -> Self {
        Theme {
            title_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            status_style: Style::default().fg(Color::Green),
            border_style: Style::default().fg(accent),

            user_prefix_style: Style::default()
                .fg(accent)
                .add_modifier(Modifier::BOLD),
            user_text_style: Style::default().fg(accent),
            assistant_prefix_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            assistant_text_style: Style::default().fg(Color::Reset),
            timestamp_style: Style::default().fg(Color::DarkGray),
            pending_style: Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::SLOW_BLINK),

            quick_key_style: Style::default().fg(accent).add_modifier(Modifier::BOLD),
            quick_text_style: Style::default().fg(Color::Gray),

            input_text_style: Style::default().fg(Color::Reset),
            placeholder_style: Style::default().fg(Color::DarkGray),
            hint_style: Style::default().fg(Color::DarkGray),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_use_distinct_accents() {
        let professional = Theme::for_mode(PersonaMode::Professional);
        let personal = Theme::for_mode(PersonaMode::Personal);
        assert_eq!(professional.title_style.fg, Some(Color::Cyan));
        assert_eq!(personal.title_style.fg, Some(Color::LightMagenta));
    }
}
