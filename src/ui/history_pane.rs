use crate::app::AppState;
use crate::cycles::Clock;
use crate::domain::{format_started_ago, Cycle, CycleStatus};
use crate::ui::styles::{
    border_style, default_style, done_style, hint_style, interrupted_style, running_style,
    title_style,
};
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

fn status_style(status: CycleStatus) -> Style {
    match status {
        CycleStatus::InProgress => running_style(),
        CycleStatus::Interrupted => interrupted_style(),
        CycleStatus::Finished => done_style(),
    }
}

/// Create a line for one cycle
fn create_history_line(cycle: &Cycle, now: DateTime<Local>) -> Line<'static> {
    let status = cycle.status();
    Line::from(vec![
        Span::styled(format!("● {:<12}", status.label()), status_style(status)),
        Span::styled(cycle.task.clone(), default_style()),
        Span::raw("  "),
        Span::styled(format!("{} min", cycle.minutes_amount), hint_style()),
        Span::raw("  "),
        Span::styled(format_started_ago(cycle.start_date, now), hint_style()),
    ])
}

/// Render the cycle history, newest first
pub fn render_history_pane<C: Clock>(f: &mut Frame, app: &AppState<C>, area: Rect) {
    let now = app.store.now();
    let history = app.store.history();

    let items: Vec<ListItem> = history
        .iter()
        .rev()
        .skip(app.history_scroll_offset)
        .map(|cycle| ListItem::new(create_history_line(cycle, now)))
        .collect();

    let count = history.len();
    let title = if app.history_scroll_offset > 0 {
        format!(" History ({}) [scrolled +{}] ", count, app.history_scroll_offset)
    } else {
        format!(" History ({}) ", count)
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}
