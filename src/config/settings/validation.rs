// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::time::Duration;

use crate::error::{CourseError, Result};

use super::Settings;

impl Settings {
    /// Reject values the event loop cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.ui.tick_rate_ms == 0 {
            return Err(CourseError::Config(
                "ui.tick_rate_ms must be greater than zero".to_string(),
            ));
        }
        if !self.ui.resize_step.is_finite() || self.ui.resize_step <= 0.0 {
            return Err(CourseError::Config(format!(
                "ui.resize_step must be a positive number, got {}",
                self.ui.resize_step
            )));
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.assistant.reply_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let mut settings = Settings::default();
        settings.ui.tick_rate_ms = 0;
        assert!(matches!(settings.validate(), Err(CourseError::Config(_))));
    }

    #[test]
    fn test_bad_resize_step_rejected() {
        let mut settings = Settings::default();
        settings.ui.resize_step = -1.0;
        assert!(settings.validate().is_err());
        settings.ui.resize_step = f64::NAN;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_durations() {
        let settings = Settings::default();
        assert_eq!(settings.tick_rate(), Duration::from_millis(50));
        assert_eq!(settings.reply_delay(), Duration::from_secs(1));
    }
}
