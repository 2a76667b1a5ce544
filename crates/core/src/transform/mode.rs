use std::fmt;

/// The active privacy transform. Dispatch happens on the variant, never on
/// strings; adding a transform means adding a variant and its ROI function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrivacyMode {
    Blur,
    Pixelate,
    Mask,
}

impl PrivacyMode {
    /// Parse the CLI spelling of a mode.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "blur" => Some(PrivacyMode::Blur),
            "pixel" => Some(PrivacyMode::Pixelate),
            "mask" => Some(PrivacyMode::Mask),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PrivacyMode::Blur => "blur",
            PrivacyMode::Pixelate => "pixel",
            PrivacyMode::Mask => "mask",
        }
    }
}

impl fmt::Display for PrivacyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
