use crate::app::AppState;
use crate::cycles::Clock;
use crate::domain::{FormField, UiMode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key<C: Clock>(app: &mut AppState<C>, key: KeyEvent) -> bool {
    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }
    if key.code == KeyCode::F(2) {
        app.toggle_history();
        return false;
    }

    match app.ui_mode {
        UiMode::Editing => handle_editing_mode(app, key),
        UiMode::Running => handle_running_mode(app, key),
        UiMode::History => handle_history_mode(app, key),
    }
}

/// Handle keys while filling in the new-cycle form
fn handle_editing_mode<C: Clock>(app: &mut AppState<C>, key: KeyEvent) -> bool {
    match key.code {
        // Start the cycle
        KeyCode::Enter => app.submit_form(),

        // Complete the task from history, otherwise switch fields
        KeyCode::Tab => {
            if !app.complete_task() {
                app.form_toggle_field();
            }
        }
        KeyCode::BackTab => app.form_toggle_field(),

        KeyCode::Backspace => app.form_backspace(),

        // Up/Down browse past tasks, or step the minutes
        KeyCode::Up => match app.form.field {
            FormField::Task => app.cycle_suggestion(false),
            FormField::Minutes => app.increase_minutes(),
        },
        KeyCode::Down => match app.form.field {
            FormField::Task => app.cycle_suggestion(true),
            FormField::Minutes => app.decrease_minutes(),
        },
        KeyCode::Char('+') if app.form.field == FormField::Minutes => app.increase_minutes(),
        KeyCode::Char('-') if app.form.field == FormField::Minutes => app.decrease_minutes(),

        KeyCode::Char(c) => app.form_add_char(c),

        KeyCode::Esc => return true,

        _ => {}
    }
    false
}

/// Handle keys while a cycle counts down
fn handle_running_mode<C: Clock>(app: &mut AppState<C>, key: KeyEvent) -> bool {
    match key.code {
        // Interrupt
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S') => {
            app.interrupt()
        }

        KeyCode::Char('h') | KeyCode::Char('H') => app.toggle_history(),

        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,

        _ => {}
    }
    false
}

/// Handle keys in the history view
fn handle_history_mode<C: Clock>(app: &mut AppState<C>, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up => app.scroll_history_up(),
        KeyCode::Down => app.scroll_history_down(),
        KeyCode::PageUp => {
            for _ in 0..5 {
                app.scroll_history_up();
            }
        }
        KeyCode::PageDown => {
            for _ in 0..5 {
                app.scroll_history_down();
            }
        }

        KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Esc => app.toggle_history(),

        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        _ => {}
    }
    false
}
