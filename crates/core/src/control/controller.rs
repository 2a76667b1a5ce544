use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::control::command::ControlCommand;
use crate::control::runtime_config::RuntimeConfig;
use crate::masking::mask_asset::MaskAsset;
use crate::shared::constants::{BLUR_KERNEL_STEP, PIXEL_BLOCK_STEP};
use crate::transform::mode::PrivacyMode;

/// Whether the pipeline should keep ticking after a key was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlOutcome {
    Continue,
    Quit,
}

/// Source of a replacement mask path when the operator presses `u`.
///
/// This is the one deliberately blocking interaction in the pipeline, so it
/// sits behind a trait: tests script it, the CLI wires in stdin.
pub trait MaskPathPrompt: Send {
    /// Ask the operator for a path. `None` means the request was declined
    /// (empty input / closed stream) and the config stays as it is.
    fn request_path(&mut self) -> Option<PathBuf>;
}

/// Reads one line from stdin, blocking frame processing until the operator
/// answers.
pub struct StdinMaskPrompt;

impl MaskPathPrompt for StdinMaskPrompt {
    fn request_path(&mut self) -> Option<PathBuf> {
        print!("Enter new mask image path: ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(n) if n > 0 => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(trimmed))
                }
            }
            _ => None,
        }
    }
}

/// Maps operator key presses onto configuration mutations.
///
/// All mutations happen between ticks; during a tick the config is
/// read-only for the transform engine and renderer.
pub struct Controller {
    prompt: Box<dyn MaskPathPrompt>,
}

impl Controller {
    pub fn new(prompt: Box<dyn MaskPathPrompt>) -> Self {
        Self { prompt }
    }

    /// Handle one key press. Unrecognized keys leave the config untouched.
    pub fn handle(&mut self, key: char, config: &mut RuntimeConfig) -> ControlOutcome {
        let Some(command) = ControlCommand::from_key(key) else {
            return ControlOutcome::Continue;
        };

        match command {
            ControlCommand::SetMode(mode) => {
                config.mode = mode;
                log::info!("Mode set to {mode}");
            }
            ControlCommand::DecreaseStrength => match config.mode {
                PrivacyMode::Blur => {
                    config.blur_kernel = (config.blur_kernel - BLUR_KERNEL_STEP).max(1);
                    log::info!("Blur kernel decreased to {}", config.blur_kernel);
                }
                PrivacyMode::Pixelate => {
                    config.pixel_block = (config.pixel_block - PIXEL_BLOCK_STEP).max(1);
                    log::info!("Pixel block decreased to {}", config.pixel_block);
                }
                PrivacyMode::Mask => {}
            },
            ControlCommand::IncreaseStrength => match config.mode {
                PrivacyMode::Blur => {
                    config.blur_kernel += BLUR_KERNEL_STEP;
                    log::info!("Blur kernel increased to {}", config.blur_kernel);
                }
                PrivacyMode::Pixelate => {
                    config.pixel_block += PIXEL_BLOCK_STEP;
                    log::info!("Pixel block increased to {}", config.pixel_block);
                }
                PrivacyMode::Mask => {}
            },
            ControlCommand::ReloadMask => {
                if let Some(path) = self.prompt.request_path() {
                    // Replace the whole asset in one assignment; readers
                    // never see a partially loaded mask.
                    config.mask = MaskAsset::load(&path);
                    config.mask_path = Some(path);
                } else {
                    log::info!("Mask reload cancelled");
                }
            }
            ControlCommand::Quit => {
                log::info!("Shutdown requested");
                return ControlOutcome::Quit;
            }
        }

        ControlOutcome::Continue
    }
}
