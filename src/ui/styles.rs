use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Countdown digits
pub fn digits_style() -> Style {
    Style::default()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD)
}

/// Countdown digits when no cycle is running
pub fn digits_idle_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// In-progress status badge style
pub fn running_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Interrupted status badge style
pub fn interrupted_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Finished status badge style
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Focused form field
pub fn field_focus_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Form field that cannot be edited
pub fn field_disabled_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Error message style
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}

/// Informational message style
pub fn info_style() -> Style {
    Style::default().fg(Color::Cyan)
}
