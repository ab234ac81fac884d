//! Desktop notification haptics adapter using notify-rust

use tracing::warn;

use crate::application::ports::{Haptics, HapticsError};

/// Haptics that pops a desktop notification per pulse
pub struct NotifyHaptics {
    app_name: String,
    summary: String,
}

impl NotifyHaptics {
    pub fn new() -> Self {
        Self {
            app_name: "Alarm Clock".to_string(),
            summary: "Wake up!".to_string(),
        }
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Self::new()
        }
    }
}

impl Default for NotifyHaptics {
    fn default() -> Self {
        Self::new()
    }
}

impl Haptics for NotifyHaptics {
    fn pulse(&self) -> Result<(), HapticsError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| HapticsError::PulseFailed(e.to_string()))?;

        let app_name = self.app_name.clone();
        let summary = self.summary.clone();

        // notify-rust can block on D-Bus, so show it off the timer thread
        runtime.spawn_blocking(move || {
            let shown = notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&summary)
                .body("Alarm is ringing")
                .icon("alarm-clock")
                .show();
            if let Err(e) = shown {
                warn!(error = %e, "Desktop notification failed");
            }
        });

        Ok(())
    }
}
