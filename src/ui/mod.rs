pub mod countdown_pane;
pub mod form_pane;
pub mod history_pane;
pub mod keybindings;
pub mod layout;
pub mod styles;

use crate::app::{AppState, StatusMessage};
use crate::cycles::Clock;
use crate::domain::UiMode;
use countdown_pane::render_countdown_pane;
use form_pane::render_form_pane;
use history_pane::render_history_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};
use styles::{error_style, info_style};

/// Main render function - draws the entire UI
pub fn render<C: Clock>(f: &mut Frame, app: &AppState<C>) {
    let size = f.size();
    let layout = create_layout(size, app.ui_mode == UiMode::History);

    render_keybindings(f, app.ui_mode, layout.keybindings_area);

    if let Some(form_area) = layout.form_area {
        render_form_pane(f, app, form_area);
    }

    render_countdown_pane(f, app, layout.countdown_area);

    if let Some(history_area) = layout.history_area {
        render_history_pane(f, app, history_area);
    }

    render_status(f, app, layout.status_area);
}

/// Render the one-line status message
fn render_status<C: Clock>(f: &mut Frame, app: &AppState<C>, area: Rect) {
    let span = match &app.status {
        Some(StatusMessage::Error(msg)) => Span::styled(format!(" {}", msg), error_style()),
        Some(StatusMessage::Info(msg)) => Span::styled(format!(" {}", msg), info_style()),
        None => Span::raw(""),
    };
    f.render_widget(Paragraph::new(span), area);
}
