use crate::config::Config;
use crate::countdown::{CountdownDriver, TickOutcome};
use crate::cycles::{Clock, CycleStore, SystemClock};
use crate::domain::{complete_task, CountdownView, CycleError, FormField, UiMode, MAX_MINUTES, MIN_MINUTES};
use crate::notifications;
use crate::ticker::ui_refresh_duration;
use std::time::{Duration, Instant};
use tracing::warn;

/// Input form state for a new cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCycleForm {
    pub task: String,
    pub minutes: u32,
    pub field: FormField,
    /// Position in the suggestion list while browsing it
    pub suggestion_index: Option<usize>,
}

impl NewCycleForm {
    pub fn new(default_minutes: u32) -> Self {
        Self {
            task: String::new(),
            minutes: default_minutes,
            field: FormField::Task,
            suggestion_index: None,
        }
    }
}

/// Feedback line shown under the countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// Main application state
pub struct AppState<C: Clock = SystemClock> {
    pub store: CycleStore<C>,
    pub driver: CountdownDriver,
    pub form: NewCycleForm,
    pub ui_mode: UiMode,
    pub status: Option<StatusMessage>,
    pub history_scroll_offset: usize,
    pub default_minutes: u32,
    pub minutes_step: u32,
    pub update_title: bool,
    pub notify: bool,
}

impl AppState<SystemClock> {
    pub fn new(config: &Config) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> AppState<C> {
    pub fn with_clock(config: &Config, clock: C) -> Self {
        Self {
            store: CycleStore::with_clock(clock),
            driver: CountdownDriver::new(config.tick_period()),
            form: NewCycleForm::new(config.default_minutes),
            ui_mode: UiMode::Editing,
            status: None,
            history_scroll_offset: 0,
            default_minutes: config.default_minutes,
            minutes_step: config.minutes_step,
            update_title: config.update_title,
            notify: config.notify,
        }
    }

    /// The form is locked while a cycle counts down
    pub fn is_form_enabled(&self) -> bool {
        !self.store.has_active_cycle()
    }

    /// Start is offered only once a task has been typed
    pub fn can_submit(&self) -> bool {
        self.is_form_enabled() && !self.form.task.trim().is_empty()
    }

    /// Toggle between the task and minutes fields
    pub fn form_toggle_field(&mut self) {
        if self.is_form_enabled() {
            self.form.field = self.form.field.next();
        }
    }

    /// Add character to the focused field
    pub fn form_add_char(&mut self, c: char) {
        if !self.is_form_enabled() {
            return;
        }
        match self.form.field {
            FormField::Task => {
                self.form.task.push(c);
                self.form.suggestion_index = None;
            }
            FormField::Minutes => {
                if let Some(digit) = c.to_digit(10) {
                    let typed = self.form.minutes.saturating_mul(10).saturating_add(digit);
                    // Start over once the value can no longer grow into range
                    self.form.minutes = if typed > MAX_MINUTES { digit } else { typed };
                }
            }
        }
    }

    /// Backspace in the focused field
    pub fn form_backspace(&mut self) {
        if !self.is_form_enabled() {
            return;
        }
        match self.form.field {
            FormField::Task => {
                self.form.task.pop();
                self.form.suggestion_index = None;
            }
            FormField::Minutes => self.form.minutes /= 10,
        }
    }

    /// Step minutes up, snapping into range
    pub fn increase_minutes(&mut self) {
        if self.is_form_enabled() {
            let next = self.form.minutes.saturating_add(self.minutes_step);
            self.form.minutes = next.clamp(MIN_MINUTES, MAX_MINUTES);
        }
    }

    /// Step minutes down, snapping into range
    pub fn decrease_minutes(&mut self) {
        if self.is_form_enabled() {
            let next = self.form.minutes.saturating_sub(self.minutes_step);
            self.form.minutes = next.clamp(MIN_MINUTES, MAX_MINUTES);
        }
    }

    /// Complete the typed task from history. Returns false when nothing matched.
    pub fn complete_task(&mut self) -> bool {
        if !self.is_form_enabled() || self.form.field != FormField::Task {
            return false;
        }
        let suggestions = self.store.task_suggestions();
        let Some(completion) = complete_task(&self.form.task, &suggestions) else {
            return false;
        };
        self.form.suggestion_index = suggestions.iter().position(|s| s == completion);
        self.form.task = completion.to_string();
        true
    }

    /// Fill the task field with the next (or previous) task from history
    pub fn cycle_suggestion(&mut self, forward: bool) {
        if !self.is_form_enabled() {
            return;
        }
        let suggestions = self.store.task_suggestions();
        if suggestions.is_empty() {
            return;
        }
        let len = suggestions.len();
        let index = match (self.form.suggestion_index, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.form.task = suggestions[index].clone();
        self.form.suggestion_index = Some(index);
    }

    /// Submit the form and start a cycle
    pub fn submit_form(&mut self) {
        if !self.is_form_enabled() {
            self.status = Some(StatusMessage::Error(
                "Stop the current cycle before starting a new one".to_string(),
            ));
            return;
        }

        match self.store.create_cycle(&self.form.task, self.form.minutes) {
            Ok(_) => {
                self.form = NewCycleForm::new(self.default_minutes);
                self.ui_mode = UiMode::Running;
                self.status = None;
                self.driver.sync(&self.store, Instant::now());
            }
            Err(CycleError::Validation(e)) => {
                self.status = Some(StatusMessage::Error(e.to_string()));
            }
            Err(e) => {
                warn!(error = %e, "Cycle not started");
                self.status = Some(StatusMessage::Error(e.to_string()));
            }
        }
    }

    /// Stop the running cycle early
    pub fn interrupt(&mut self) {
        if let Some(id) = self.store.interrupt_active_cycle() {
            let task = self
                .store
                .history()
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.task.clone())
                .unwrap_or_default();
            self.status = Some(StatusMessage::Info(format!("Interrupted: {}", task)));
            self.driver.sync(&self.store, Instant::now());
        }
        if self.ui_mode == UiMode::Running {
            self.ui_mode = UiMode::Editing;
        }
    }

    /// Advance the countdown
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let outcome = self.driver.poll(&mut self.store, now);

        if let TickOutcome::Finished(id) = outcome {
            if let Some(cycle) = self.store.history().iter().find(|c| c.id == id) {
                self.status = Some(StatusMessage::Info(format!("Finished: {}", cycle.task)));
                if self.notify {
                    notifications::notify_cycle_finished(&cycle.task, cycle.minutes_amount);
                }
            }
        }

        if self.ui_mode == UiMode::Running && !self.store.has_active_cycle() {
            self.ui_mode = UiMode::Editing;
        }

        outcome
    }

    /// How long the event loop may block on input
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        let refresh = ui_refresh_duration();
        match self.driver.time_until_next_tick(now) {
            Some(until_tick) => until_tick.min(refresh),
            None => refresh,
        }
    }

    /// Everything the display needs for one frame
    pub fn view(&self) -> CountdownView {
        let display = self.driver.display(&self.store);
        CountdownView {
            minutes: display.minutes,
            seconds: display.seconds,
            has_active_cycle: self.store.has_active_cycle(),
            task_suggestions: self.store.task_suggestions(),
        }
    }

    /// Terminal title while a cycle runs
    pub fn window_title(&self) -> Option<String> {
        if !self.update_title || !self.store.has_active_cycle() {
            return None;
        }
        Some(self.driver.display(&self.store).text())
    }

    pub fn toggle_history(&mut self) {
        self.ui_mode = match self.ui_mode {
            UiMode::History if self.store.has_active_cycle() => UiMode::Running,
            UiMode::History => UiMode::Editing,
            _ => UiMode::History,
        };
        self.history_scroll_offset = 0;
    }

    pub fn scroll_history_up(&mut self) {
        self.history_scroll_offset = self.history_scroll_offset.saturating_sub(1);
    }

    pub fn scroll_history_down(&mut self) {
        let max_offset = self.store.history().len().saturating_sub(1);
        if self.history_scroll_offset < max_offset {
            self.history_scroll_offset += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cycles::ManualClock;
    use crate::domain::CycleStatus;
    use pretty_assertions::assert_eq;

    fn create_test_app() -> (AppState<ManualClock>, ManualClock) {
        let clock = ManualClock::at_nine();
        let mut config = Config::default();
        config.notify = false;
        (AppState::with_clock(&config, clock.clone()), clock)
    }

    fn type_task(app: &mut AppState<ManualClock>, task: &str) {
        for c in task.chars() {
            app.form_add_char(c);
        }
    }

    #[test]
    fn test_app_state_new() {
        let (app, _) = create_test_app();
        assert_eq!(app.ui_mode, UiMode::Editing);
        assert_eq!(app.form, NewCycleForm::new(25));
        assert!(app.is_form_enabled());
        assert!(!app.can_submit());
        assert!(app.status.is_none());
    }

    #[test]
    fn test_submit_starts_cycle_and_resets_form() {
        let (mut app, _) = create_test_app();
        type_task(&mut app, "Write docs");
        assert!(app.can_submit());

        app.submit_form();

        assert_eq!(app.ui_mode, UiMode::Running);
        assert_eq!(app.store.history().len(), 1);
        assert_eq!(app.form.task, "");
        assert!(app.driver.is_running());
        assert!(!app.is_form_enabled());
        assert_eq!(
            app.view(),
            CountdownView {
                minutes: "25".to_string(),
                seconds: "00".to_string(),
                has_active_cycle: true,
                task_suggestions: vec!["Write docs".to_string()],
            }
        );
    }

    #[test]
    fn test_submit_empty_task_shows_error() {
        let (mut app, _) = create_test_app();
        app.submit_form();

        assert_eq!(
            app.status,
            Some(StatusMessage::Error("Enter a task name".to_string()))
        );
        assert!(app.store.history().is_empty());
    }

    #[test]
    fn test_submit_while_running_is_refused() {
        let (mut app, _) = create_test_app();
        type_task(&mut app, "Docs");
        app.submit_form();

        app.form.task = "Other".to_string();
        app.submit_form();

        assert_eq!(app.store.history().len(), 1);
        assert!(matches!(app.status, Some(StatusMessage::Error(_))));
    }

    #[test]
    fn test_form_is_locked_while_running() {
        let (mut app, _) = create_test_app();
        type_task(&mut app, "Docs");
        app.submit_form();

        app.form_add_char('x');
        app.increase_minutes();
        app.form_toggle_field();

        assert_eq!(app.form, NewCycleForm::new(25));
    }

    #[test]
    fn test_minutes_stepping_is_clamped() {
        let (mut app, _) = create_test_app();
        app.form.minutes = 55;
        app.increase_minutes();
        app.increase_minutes();
        assert_eq!(app.form.minutes, 60);

        app.form.minutes = 10;
        app.decrease_minutes();
        app.decrease_minutes();
        assert_eq!(app.form.minutes, 5);
    }

    #[test]
    fn test_typing_minutes() {
        let (mut app, _) = create_test_app();
        app.form_toggle_field();
        app.form_backspace();
        app.form_backspace();
        assert_eq!(app.form.minutes, 0);

        app.form_add_char('4');
        app.form_add_char('5');
        assert_eq!(app.form.minutes, 45);

        app.form_add_char('x');
        assert_eq!(app.form.minutes, 45);

        // 457 cannot be valid, start over with the new digit
        app.form_add_char('7');
        assert_eq!(app.form.minutes, 7);
    }

    #[test]
    fn test_out_of_range_minutes_rejected_on_submit() {
        let (mut app, _) = create_test_app();
        type_task(&mut app, "Docs");
        app.form.minutes = 3;

        app.submit_form();

        assert!(app.store.history().is_empty());
        assert_eq!(
            app.status,
            Some(StatusMessage::Error(
                "A cycle must last between 5 and 60 minutes (got 3)".to_string()
            ))
        );
    }

    #[test]
    fn test_interrupt() {
        let (mut app, clock) = create_test_app();
        type_task(&mut app, "Docs");
        app.submit_form();
        clock.advance_secs(30);

        app.interrupt();

        assert_eq!(app.ui_mode, UiMode::Editing);
        assert!(!app.driver.is_running());
        assert_eq!(app.store.history()[0].status(), CycleStatus::Interrupted);
        assert_eq!(app.status, Some(StatusMessage::Info("Interrupted: Docs".to_string())));
        assert_eq!(app.window_title(), None);

        // Second interrupt changes nothing
        let snapshot = app.store.history().to_vec();
        app.interrupt();
        assert_eq!(app.store.history(), snapshot.as_slice());
    }

    #[test]
    fn test_tick_finishes_cycle() {
        let (mut app, clock) = create_test_app();
        type_task(&mut app, "Docs");
        app.form.minutes = 5;
        app.submit_form();
        let start = Instant::now();

        clock.advance_secs(299);
        app.tick(start + Duration::from_secs(299));
        assert_eq!(app.window_title(), Some("00:01".to_string()));

        clock.advance_secs(1);
        let outcome = app.tick(start + Duration::from_secs(300));

        assert!(matches!(outcome, TickOutcome::Finished(_)));
        assert_eq!(app.ui_mode, UiMode::Editing);
        assert_eq!(app.status, Some(StatusMessage::Info("Finished: Docs".to_string())));
        assert_eq!(app.view().minutes, "00");
        assert_eq!(app.view().seconds, "00");
        assert!(!app.view().has_active_cycle);
    }

    #[test]
    fn test_window_title_disabled() {
        let (mut app, _) = create_test_app();
        app.update_title = false;
        type_task(&mut app, "Docs");
        app.submit_form();
        assert_eq!(app.window_title(), None);
    }

    #[test]
    fn test_cycle_suggestion() {
        let (mut app, _) = create_test_app();
        for task in ["Docs", "Review"] {
            type_task(&mut app, task);
            app.submit_form();
            app.interrupt();
        }

        app.cycle_suggestion(true);
        assert_eq!(app.form.task, "Docs");
        app.cycle_suggestion(true);
        assert_eq!(app.form.task, "Review");
        app.cycle_suggestion(true);
        assert_eq!(app.form.task, "Docs");
        app.cycle_suggestion(false);
        assert_eq!(app.form.task, "Review");
    }

    #[test]
    fn test_complete_task_from_prefix() {
        let (mut app, _) = create_test_app();
        for task in ["Docs", "Review"] {
            type_task(&mut app, task);
            app.submit_form();
            app.interrupt();
        }

        type_task(&mut app, "Re");
        assert!(app.complete_task());
        assert_eq!(app.form.task, "Review");
        assert_eq!(app.form.field, FormField::Task);

        // Already complete: nothing left to add
        assert!(!app.complete_task());
        // Browsing continues from the completed entry
        app.cycle_suggestion(true);
        assert_eq!(app.form.task, "Docs");
    }

    #[test]
    fn test_next_wakeup() {
        let (mut app, _) = create_test_app();
        let now = Instant::now();
        assert_eq!(app.next_wakeup(now), ui_refresh_duration());

        type_task(&mut app, "Docs");
        app.submit_form();
        app.tick(now);
        assert!(app.next_wakeup(now) <= ui_refresh_duration());
    }

    #[test]
    fn test_toggle_history() {
        let (mut app, _) = create_test_app();
        app.toggle_history();
        assert_eq!(app.ui_mode, UiMode::History);
        app.toggle_history();
        assert_eq!(app.ui_mode, UiMode::Editing);

        type_task(&mut app, "Docs");
        app.submit_form();
        app.toggle_history();
        app.toggle_history();
        assert_eq!(app.ui_mode, UiMode::Running);
    }

    #[test]
    fn test_history_scroll_bounds() {
        let (mut app, _) = create_test_app();
        app.scroll_history_down();
        assert_eq!(app.history_scroll_offset, 0);

        for task in ["A", "B", "C"] {
            type_task(&mut app, task);
            app.submit_form();
            app.interrupt();
        }
        for _ in 0..5 {
            app.scroll_history_down();
        }
        assert_eq!(app.history_scroll_offset, 2);
        app.scroll_history_up();
        assert_eq!(app.history_scroll_offset, 1);
    }
}
