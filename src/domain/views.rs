use super::cycle::Cycle;
use chrono::{DateTime, Local};

/// Zero-padded countdown digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownDisplay {
    pub minutes: String,
    pub seconds: String,
}

impl CountdownDisplay {
    /// Derive the display from the planned total and the seconds already passed.
    /// Elapsed past the total shows "00:00", never a negative time.
    pub fn from_seconds(total_seconds: u64, elapsed_seconds: u64) -> Self {
        let remaining = total_seconds - elapsed_seconds.min(total_seconds);
        Self {
            minutes: format!("{:02}", remaining / 60),
            seconds: format!("{:02}", remaining % 60),
        }
    }

    pub fn zero() -> Self {
        Self::from_seconds(0, 0)
    }

    /// "MM:SS"
    pub fn text(&self) -> String {
        format!("{}:{}", self.minutes, self.seconds)
    }
}

/// Everything the display needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownView {
    pub minutes: String,
    pub seconds: String,
    pub has_active_cycle: bool,
    pub task_suggestions: Vec<String>,
}

/// Distinct task names in first-seen order
pub fn task_suggestions(cycles: &[Cycle]) -> Vec<String> {
    let mut seen = Vec::new();
    for cycle in cycles {
        if !seen.contains(&cycle.task) {
            seen.push(cycle.task.clone());
        }
    }
    seen
}

/// First suggestion that extends `prefix`, ignoring case
pub fn complete_task<'a>(prefix: &str, suggestions: &'a [String]) -> Option<&'a str> {
    let prefix = prefix.trim_start().to_lowercase();
    if prefix.is_empty() {
        return None;
    }
    suggestions
        .iter()
        .find(|s| {
            let lower = s.to_lowercase();
            lower.starts_with(&prefix) && lower != prefix
        })
        .map(String::as_str)
}

/// Format how long ago a cycle started ("just now", "12 minutes ago", "about 2 hours ago")
pub fn format_started_ago(start: DateTime<Local>, now: DateTime<Local>) -> String {
    let minutes = (now - start).num_minutes().max(0);
    match minutes {
        0 => "just now".to_string(),
        1 => "1 minute ago".to_string(),
        2..=44 => format!("{} minutes ago", minutes),
        45..=89 => "about 1 hour ago".to_string(),
        90..=1439 => format!("about {} hours ago", (minutes + 30) / 60),
        _ => {
            let days = (minutes + 720) / 1440;
            if days == 1 {
                "1 day ago".to_string()
            } else {
                format!("{} days ago", days)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewCycle;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_complete_task() {
        let suggestions = vec!["Docs".to_string(), "Review".to_string(), "Refactor".to_string()];

        assert_eq!(complete_task("Re", &suggestions), Some("Review"));
        assert_eq!(complete_task("ref", &suggestions), Some("Refactor"));
        assert_eq!(complete_task("Review", &suggestions), None);
        assert_eq!(complete_task("Zz", &suggestions), None);
        assert_eq!(complete_task("", &suggestions), None);
    }

    #[test]
    fn test_countdown_display_full() {
        let display = CountdownDisplay::from_seconds(25 * 60, 0);
        assert_eq!(display.text(), "25:00");
    }

    #[test]
    fn test_countdown_display_partial() {
        assert_eq!(CountdownDisplay::from_seconds(300, 299).text(), "00:01");
        assert_eq!(CountdownDisplay::from_seconds(300, 61).text(), "03:59");
        assert_eq!(CountdownDisplay::from_seconds(3600, 0).text(), "60:00");
    }

    #[test]
    fn test_countdown_display_never_negative() {
        assert_eq!(CountdownDisplay::from_seconds(300, 300).text(), "00:00");
        assert_eq!(CountdownDisplay::from_seconds(300, 301).text(), "00:00");
        assert_eq!(CountdownDisplay::zero().text(), "00:00");
    }

    #[test]
    fn test_task_suggestions_distinct_in_order() {
        let start = Local.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        let cycles: Vec<Cycle> = ["Docs", "Review", "Docs", "Email"]
            .iter()
            .map(|task| Cycle::new(NewCycle::validate(task, 25).unwrap(), start))
            .collect();

        assert_eq!(task_suggestions(&cycles), vec!["Docs", "Review", "Email"]);
        assert!(task_suggestions(&[]).is_empty());
    }

    #[test]
    fn test_format_started_ago() {
        let now = Local.with_ymd_and_hms(2024, 3, 2, 12, 0, 0).unwrap();
        assert_eq!(format_started_ago(now, now), "just now");
        assert_eq!(format_started_ago(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(format_started_ago(now - Duration::minutes(12), now), "12 minutes ago");
        assert_eq!(format_started_ago(now - Duration::minutes(50), now), "about 1 hour ago");
        assert_eq!(format_started_ago(now - Duration::minutes(150), now), "about 3 hours ago");
        assert_eq!(format_started_ago(now - Duration::hours(30), now), "1 day ago");
        assert_eq!(format_started_ago(now + Duration::minutes(5), now), "just now");
    }
}
