use crate::app::AppState;
use crate::cycles::Clock;
use crate::domain::FormField;
use crate::ui::styles::{
    border_style, default_style, field_disabled_style, field_focus_style, hint_style, title_style,
};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Style for a form field given focus and lock state
fn field_style(enabled: bool, focused: bool) -> Style {
    if !enabled {
        field_disabled_style()
    } else if focused {
        field_focus_style()
    } else {
        default_style()
    }
}

/// Render the new-cycle form: "I'll work on [task] for [minutes] minutes."
pub fn render_form_pane<C: Clock>(f: &mut Frame, app: &AppState<C>, area: Rect) {
    let form = &app.form;
    let enabled = app.is_form_enabled();
    let task_focused = enabled && form.field == FormField::Task;
    let minutes_focused = enabled && form.field == FormField::Minutes;

    let task_text = if form.task.is_empty() && !task_focused {
        "name your task".to_string()
    } else {
        form.task.clone()
    };

    let cursor = |focused: bool| {
        if focused {
            Span::styled("█", field_focus_style())
        } else {
            Span::raw("")
        }
    };

    let mut lines = vec![Line::from(vec![
        Span::raw("I'll work on "),
        Span::styled(task_text, field_style(enabled, task_focused)),
        cursor(task_focused),
        Span::raw(" for "),
        Span::styled(format!("{:02}", form.minutes), field_style(enabled, minutes_focused)),
        cursor(minutes_focused),
        Span::raw(" minutes."),
    ])];

    // Past tasks, as completion hints
    let suggestions = app.view().task_suggestions;
    if enabled && !suggestions.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("Past tasks: {}", suggestions.join(", ")),
            hint_style(),
        )));
    }

    let title = if enabled { " New Cycle " } else { " New Cycle (locked) " };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}
