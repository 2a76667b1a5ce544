pub mod control;
pub mod detection;
pub mod masking;
pub mod overlay;
pub mod pipeline;
pub mod shared;
pub mod transform;
pub mod video;
