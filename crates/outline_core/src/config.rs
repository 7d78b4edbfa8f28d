use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::text::TextLimits;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("root margin needs 1 to 4 components, got {0}")]
    MarginArity(usize),
    #[error("invalid root margin component {0:?}: expected px or %")]
    MarginComponent(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Timings and paint of the transient highlight applied after navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub background: String,
    pub transition: String,
    /// Delay before the background reverts.
    pub fade_after_ms: u64,
    /// Delay before transition and border radius revert.
    pub restore_after_ms: u64,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            background: "rgba(0, 108, 255, 0.12)".to_string(),
            transition: "background 0.3s ease".to_string(),
            fade_after_ms: 1_500,
            restore_after_ms: 1_800,
        }
    }
}

/// Every tunable constant of the outline engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineConfig {
    pub preview_max_len: usize,
    pub title_max_len: usize,
    pub debounce_ms: u64,
    pub intersection_threshold: f64,
    /// CSS-style margin applied to the viewport before intersection tests.
    pub root_margin: String,
    pub scroll_behavior: ScrollBehavior,
    /// How long viewport tracking stays suppressed after a click navigation.
    pub navigation_grace_ms: u64,
    /// Delay of the extra re-scroll for layouts that keep reflowing.
    pub rescroll_delay_ms: u64,
    pub highlight: HighlightConfig,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            preview_max_len: 100,
            title_max_len: 50,
            debounce_ms: 300,
            intersection_threshold: 0.0,
            root_margin: "-45% 0px -45% 0px".to_string(),
            scroll_behavior: ScrollBehavior::Smooth,
            navigation_grace_ms: 500,
            rescroll_delay_ms: 150,
            highlight: HighlightConfig::default(),
        }
    }
}

impl OutlineConfig {
    pub fn limits(&self) -> TextLimits {
        TextLimits {
            title_max_len: self.title_max_len,
            preview_max_len: self.preview_max_len,
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn navigation_grace(&self) -> Duration {
        Duration::from_millis(self.navigation_grace_ms)
    }

    pub fn rescroll_delay(&self) -> Duration {
        Duration::from_millis(self.rescroll_delay_ms)
    }

    pub fn highlight_fade(&self) -> Duration {
        Duration::from_millis(self.highlight.fade_after_ms)
    }

    pub fn highlight_restore(&self) -> Duration {
        Duration::from_millis(self.highlight.restore_after_ms)
    }

    pub fn parsed_root_margin(&self) -> Result<RootMargin, ConfigError> {
        RootMargin::parse(&self.root_margin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginLength {
    Px(f64),
    Percent(f64),
}

impl MarginLength {
    /// Resolve against the viewport extent on the same axis.
    pub fn resolve(self, extent: f64) -> f64 {
        match self {
            MarginLength::Px(px) => px,
            MarginLength::Percent(pct) => extent * pct / 100.0,
        }
    }

    fn parse(token: &str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::MarginComponent(token.to_string());
        if let Some(number) = token.strip_suffix('%') {
            return number.parse().map(MarginLength::Percent).map_err(|_| invalid());
        }
        if let Some(number) = token.strip_suffix("px") {
            return number.parse().map(MarginLength::Px).map_err(|_| invalid());
        }
        match token.parse::<f64>() {
            Ok(zero) if zero == 0.0 => Ok(MarginLength::Px(0.0)),
            _ => Err(invalid()),
        }
    }
}

/// Viewport margins in CSS shorthand order: top, right, bottom, left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootMargin {
    pub top: MarginLength,
    pub right: MarginLength,
    pub bottom: MarginLength,
    pub left: MarginLength,
}

impl Default for RootMargin {
    fn default() -> Self {
        let zero = MarginLength::Px(0.0);
        Self {
            top: zero,
            right: zero,
            bottom: zero,
            left: zero,
        }
    }
}

impl RootMargin {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let parts = raw
            .split_whitespace()
            .map(MarginLength::parse)
            .collect::<Result<Vec<_>, _>>()?;
        let [top, right, bottom, left] = match parts.as_slice() {
            [all] => [*all; 4],
            [vertical, horizontal] => [*vertical, *horizontal, *vertical, *horizontal],
            [top, horizontal, bottom] => [*top, *horizontal, *bottom, *horizontal],
            [top, right, bottom, left] => [*top, *right, *bottom, *left],
            other => return Err(ConfigError::MarginArity(other.len())),
        };
        Ok(Self {
            top,
            right,
            bottom,
            left,
        })
    }
}
