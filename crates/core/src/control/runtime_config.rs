use std::path::PathBuf;

use crate::masking::mask_asset::MaskAsset;
use crate::shared::constants::{DEFAULT_BLUR_KERNEL, DEFAULT_PIXEL_BLOCK};
use crate::transform::mode::PrivacyMode;

/// The live-tunable pipeline configuration.
///
/// Created once at startup and mutated only by the interactive controller,
/// strictly between ticks. The transform engine and overlay renderer read
/// it by reference during a tick, so no locking is needed.
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub mode: PrivacyMode,
    /// Gaussian kernel size; clamped to >= 1 and forced odd at use.
    pub blur_kernel: i32,
    /// Pixelation block size; clamped to >= 1 at use.
    pub pixel_block: i32,
    pub mask: MaskAsset,
    /// Path the current mask was loaded from, if any.
    pub mask_path: Option<PathBuf>,
}

impl RuntimeConfig {
    pub fn new(mode: PrivacyMode, blur_kernel: i32, pixel_block: i32) -> Self {
        Self {
            mode,
            blur_kernel,
            pixel_block,
            mask: MaskAsset::Unset,
            mask_path: None,
        }
    }

    pub fn with_mask(mut self, path: PathBuf) -> Self {
        self.mask = MaskAsset::load(&path);
        self.mask_path = Some(path);
        self
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new(PrivacyMode::Blur, DEFAULT_BLUR_KERNEL, DEFAULT_PIXEL_BLOCK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.mode, PrivacyMode::Blur);
        assert_eq!(cfg.blur_kernel, 15);
        assert_eq!(cfg.pixel_block, 10);
        assert_eq!(cfg.mask, MaskAsset::Unset);
        assert!(cfg.mask_path.is_none());
    }

    #[test]
    fn test_with_mask_unreadable_path_stays_unset() {
        let cfg = RuntimeConfig::default().with_mask(PathBuf::from("/no/such/mask.png"));
        assert_eq!(cfg.mask, MaskAsset::Unset);
        assert_eq!(cfg.mask_path, Some(PathBuf::from("/no/such/mask.png")));
    }
}
