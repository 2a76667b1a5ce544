use std::path::Path;

/// The static overlay image used by the masking transform.
///
/// Loading never fails loudly: an unreadable or missing file produces
/// [`MaskAsset::Unset`], which the transform engine treats as a no-op.
/// Reload replaces the whole value, so readers never observe a partially
/// loaded asset.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum MaskAsset {
    #[default]
    Unset,
    Loaded {
        /// RGBA pixels, row-major.
        data: Vec<u8>,
        width: u32,
        height: u32,
    },
}

impl MaskAsset {
    /// Decode an image file to RGBA. Any read or decode failure yields
    /// [`MaskAsset::Unset`] with a warning, matching the engine's no-op rule.
    pub fn load(path: &Path) -> Self {
        match image::open(path) {
            Ok(img) => {
                let rgba = img.to_rgba8();
                let (width, height) = rgba.dimensions();
                log::info!("Loaded mask image {} ({width}x{height})", path.display());
                MaskAsset::Loaded {
                    data: rgba.into_raw(),
                    width,
                    height,
                }
            }
            Err(e) => {
                log::warn!(
                    "Could not load mask image {}: {e}; masking will be a no-op",
                    path.display()
                );
                MaskAsset::Unset
            }
        }
    }

    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(data.len(), (width * height * 4) as usize);
        MaskAsset::Loaded {
            data,
            width,
            height,
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, MaskAsset::Loaded { .. })
    }
}
