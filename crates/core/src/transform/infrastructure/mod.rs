pub mod gaussian;
pub mod mask_overlay;
pub mod pixelate;
pub mod resize;
pub mod roi;
