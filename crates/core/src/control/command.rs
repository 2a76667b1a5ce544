use crate::transform::mode::PrivacyMode;

/// An operator command decoded from one key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlCommand {
    SetMode(PrivacyMode),
    /// `[`: shrink the active mode's magnitude parameter.
    DecreaseStrength,
    /// `]`: grow the active mode's magnitude parameter.
    IncreaseStrength,
    /// `u`: prompt for a new mask image path and reload the asset.
    ReloadMask,
    Quit,
}

impl ControlCommand {
    /// Total mapping over the key alphabet; any unrecognized key is `None`.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '1' => Some(ControlCommand::SetMode(PrivacyMode::Blur)),
            '2' => Some(ControlCommand::SetMode(PrivacyMode::Pixelate)),
            '3' => Some(ControlCommand::SetMode(PrivacyMode::Mask)),
            '[' => Some(ControlCommand::DecreaseStrength),
            ']' => Some(ControlCommand::IncreaseStrength),
            'u' => Some(ControlCommand::ReloadMask),
            'q' => Some(ControlCommand::Quit),
            _ => None,
        }
    }
}
