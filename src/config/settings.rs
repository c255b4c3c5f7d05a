// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for coursecraft
//!
//! Handles loading and saving settings from ~/.coursecraft/settings.json

use serde::{Deserialize, Serialize};

use crate::stage::Stage;

mod io;
mod validation;

/// Main settings structure, stored in ~/.coursecraft/settings.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// Simulated assistant behaviour
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Terminal UI behaviour
    #[serde(default)]
    pub ui: UiConfig,
}

/// Simulated assistant settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantConfig {
    /// Delay before the demo reply arrives, in milliseconds
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Text of the demo reply
    #[serde(default = "default_demo_reply")]
    pub demo_reply: String,
}

/// Terminal UI settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// Event loop tick, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Capture the mouse so the divider can be dragged
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Percentage points moved per keyboard resize
    #[serde(default = "default_resize_step")]
    pub resize_step: f64,

    /// Stage opened when none is given on the command line
    #[serde(default)]
    pub default_stage: Stage,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            demo_reply: default_demo_reply(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: true,
            resize_step: default_resize_step(),
            default_stage: Stage::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_reply_delay_ms() -> u64 {
    1000
}

fn default_demo_reply() -> String {
    "I understand you'd like to plan a course. This is a demo response. In a real \
     implementation, this would connect to an AI service to generate course outlines \
     based on your input."
        .to_string()
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_resize_step() -> f64 {
    5.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.assistant.reply_delay_ms, 1000);
        assert!(settings.assistant.demo_reply.contains("demo response"));
        assert_eq!(settings.ui.tick_rate_ms, 50);
        assert!(settings.ui.mouse);
        assert_eq!(settings.ui.resize_step, 5.0);
        assert_eq!(settings.ui.default_stage, Stage::Outline);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{ "ui": { "mouse": false } }"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert!(!settings.ui.mouse);
        assert_eq!(settings.ui.tick_rate_ms, 50);
        assert_eq!(settings.assistant, AssistantConfig::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_stage_round_trips_through_json() {
        let mut settings = Settings::default();
        settings.ui.default_stage = Stage::WebDesign;
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("web-design"));
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ui.default_stage, Stage::WebDesign);
    }
}
