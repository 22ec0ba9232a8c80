/// Desktop notifications
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::{Command, Stdio};

/// Build the notification body for a finished cycle
pub fn finished_message(task: &str, minutes: u32) -> String {
    format!("{} ({} min) is done", task, minutes)
}

/// Quote text for an AppleScript string literal
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn escape_applescript(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Send a notification when a cycle runs its full duration
pub fn notify_cycle_finished(task: &str, minutes: u32) {
    let message = finished_message(task, minutes);

    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "{}" with title "Ignite Timer - Cycle Finished""#,
            escape_applescript(&message)
        );

        // Fire and forget so the event loop keeps ticking
        let spawned = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        if let Err(e) = spawned {
            tracing::debug!(error = %e, "Notification failed");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        tracing::debug!(%message, "Notifications unsupported on this platform");
    }
}
