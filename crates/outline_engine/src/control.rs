use outline_core::SettingsPatch;
use serde::{Deserialize, Serialize};

/// Inbound command from the toolbar popup or the background worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum ControlRequest {
    ToggleSidebar,
    UpdateSettings { settings: SettingsPatch },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlResponse {
    pub success: bool,
}

impl ControlResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
