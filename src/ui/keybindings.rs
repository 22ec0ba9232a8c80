use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hint text for the current mode
pub fn hints(mode: UiMode) -> &'static str {
    match mode {
        UiMode::Editing => {
            " Tab complete / field   ↑/↓ past tasks / minutes   Enter start   F2 history   Esc quit"
        }
        UiMode::Running => " s/Enter stop   h history   q quit",
        UiMode::History => " ↑/↓ scroll   PgUp/PgDn page   h/Esc back   q quit",
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, mode: UiMode, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hints(mode))).style(hint_style());
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_per_mode() {
        assert!(hints(UiMode::Editing).contains("Enter start"));
        assert!(hints(UiMode::Running).contains("stop"));
        assert!(hints(UiMode::History).contains("scroll"));
    }
}
