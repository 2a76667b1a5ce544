pub mod mask_asset;
