use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarPosition {
    Left,
    #[default]
    Right,
}

/// User-facing settings supplied by the settings provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub enabled: bool,
    pub show_preview: bool,
    pub sidebar_position: SidebarPosition,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            show_preview: true,
            sidebar_position: SidebarPosition::Right,
        }
    }
}

/// A partial settings update; absent keys leave the current value alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsPatch {
    pub enabled: Option<bool>,
    pub show_preview: Option<bool>,
    pub sidebar_position: Option<SidebarPosition>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        self.enabled.is_none() && self.show_preview.is_none() && self.sidebar_position.is_none()
    }
}

impl Settings {
    pub fn merged(mut self, patch: &SettingsPatch) -> Self {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(show_preview) = patch.show_preview {
            self.show_preview = show_preview;
        }
        if let Some(position) = patch.sidebar_position {
            self.sidebar_position = position;
        }
        self
    }
}
