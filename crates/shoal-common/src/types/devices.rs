use serde::{Deserialize, Serialize};

/// User-selected media devices, identified by their (stable) labels.
///
/// Applied to a surface only when it is created; changing any field requires
/// recreating every live surface.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DevicePreferences {
    pub mic_id: Option<String>,
    pub cam_id: Option<String>,
    pub speaker_id: Option<String>,
}

impl DevicePreferences {
    pub fn is_unrestricted(&self) -> bool {
        self.mic_id.is_none() && self.cam_id.is_none() && self.speaker_id.is_none()
    }
}
