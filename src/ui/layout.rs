use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the big-digit countdown pane, borders included
pub const COUNTDOWN_HEIGHT: u16 = 9;

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub form_area: Option<Rect>,
    pub countdown_area: Rect,
    pub history_area: Option<Rect>,
    pub status_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Form (hidden in history view)
/// - Countdown
/// - History list (history view only)
/// - Status line (1 row)
pub fn create_layout(area: Rect, show_history: bool) -> MainLayout {
    if show_history {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                // Keybindings bar
                Constraint::Length(COUNTDOWN_HEIGHT), // Countdown
                Constraint::Min(0),                   // History
                Constraint::Length(1),                // Status
            ])
            .split(area);

        MainLayout {
            keybindings_area: chunks[0],
            form_area: None,
            countdown_area: chunks[1],
            history_area: Some(chunks[2]),
            status_area: chunks[3],
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Keybindings bar
                Constraint::Length(5), // Form
                Constraint::Min(COUNTDOWN_HEIGHT),
                Constraint::Length(1), // Status
            ])
            .split(area);

        MainLayout {
            keybindings_area: chunks[0],
            form_area: Some(chunks[1]),
            countdown_area: chunks[2],
            history_area: None,
            status_area: chunks[3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area, false);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.form_area.map(|r| r.height), Some(5));
        assert!(layout.countdown_area.height >= COUNTDOWN_HEIGHT);
        assert!(layout.history_area.is_none());
    }

    #[test]
    fn test_create_history_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area, true);

        assert!(layout.form_area.is_none());
        assert_eq!(layout.countdown_area.height, COUNTDOWN_HEIGHT);
        let history = layout.history_area.unwrap();
        assert_eq!(history.height, 40 - 1 - COUNTDOWN_HEIGHT - 1);
    }
}
