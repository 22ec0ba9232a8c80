use crate::app::AppState;
use crate::cycles::Clock;
use crate::ui::styles::{border_style, digits_idle_style, digits_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const GLYPH_HEIGHT: usize = 5;

/// 5-row block glyph for a countdown character
fn glyph(c: char) -> [&'static str; GLYPH_HEIGHT] {
    match c {
        '0' => ["█████", "█   █", "█   █", "█   █", "█████"],
        '1' => ["    █", "    █", "    █", "    █", "    █"],
        '2' => ["█████", "    █", "█████", "█    ", "█████"],
        '3' => ["█████", "    █", "█████", "    █", "█████"],
        '4' => ["█   █", "█   █", "█████", "    █", "    █"],
        '5' => ["█████", "█    ", "█████", "    █", "█████"],
        '6' => ["█████", "█    ", "█████", "█   █", "█████"],
        '7' => ["█████", "    █", "    █", "    █", "    █"],
        '8' => ["█████", "█   █", "█████", "█   █", "█████"],
        '9' => ["█████", "█   █", "█████", "    █", "█████"],
        ':' => ["   ", " █ ", "   ", " █ ", "   "],
        _ => ["     "; GLYPH_HEIGHT],
    }
}

/// Render "MM:SS" as rows of block glyphs
pub fn big_text(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| {
            text.chars()
                .map(|c| glyph(c)[row])
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect()
}

/// Render the countdown pane
pub fn render_countdown_pane<C: Clock>(f: &mut Frame, app: &AppState<C>, area: Rect) {
    let view = app.view();
    let text = format!("{}:{}", view.minutes, view.seconds);
    let style = if view.has_active_cycle {
        digits_style()
    } else {
        digits_idle_style()
    };

    let title = match app.store.active_cycle() {
        Some(cycle) => format!(" {} ", cycle.task),
        None => " Countdown ".to_string(),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    // Center vertically
    let padding = (inner.height as usize).saturating_sub(GLYPH_HEIGHT) / 2;
    for _ in 0..padding {
        lines.push(Line::raw(""));
    }
    for row in big_text(&text) {
        lines.push(Line::from(Span::styled(row, style)));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, inner);
}
