use crate::error::{KeyLabelError, KlResult};
use clap::Args;

/// Parameters for turning ergogen points into ZMK / keymap-drawer layouts.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Key width in devicetree units.
    #[arg(long, default_value_t = 100)]
    pub key_width: i32,
    #[arg(long, default_value_t = 100)]
    pub key_height: i32,
    /// Gap between the two halves, in millimetres.
    #[arg(long, default_value_t = 25.0)]
    pub gap_mm: f64,
    /// Key width in keymap-drawer units.
    #[arg(long, default_value_t = 1.0)]
    pub json_key_width: f64,
    /// Rotate the devicetree coordinates by 180 degrees (board mounted
    /// upside down).
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub rotate_180: bool,
    #[arg(long, default_value = "xk42")]
    pub keyboard_id: String,
    #[arg(long, default_value = "XK42")]
    pub keyboard_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            key_width: 100,
            key_height: 100,
            gap_mm: 25.0,
            json_key_width: 1.0,
            rotate_180: false,
            keyboard_id: "xk42".to_string(),
            keyboard_name: "XK42".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Width of a 1u key in millimetres.
    pub const KEY_PITCH_MM: f64 = 19.05;

    pub fn dts_scale(&self) -> f64 {
        self.key_width as f64 / Self::KEY_PITCH_MM
    }

    pub fn json_scale(&self) -> f64 {
        self.json_key_width / Self::KEY_PITCH_MM
    }

    pub fn validate(&self) -> KlResult<()> {
        if self.key_width <= 0 || self.key_height <= 0 {
            return Err(KeyLabelError::Config(
                "--key-width and --key-height must be positive".to_string(),
            ));
        }
        if self.json_key_width <= 0.0 {
            return Err(KeyLabelError::Config(
                "--json-key-width must be positive".to_string(),
            ));
        }
        if self.gap_mm < 0.0 {
            return Err(KeyLabelError::Config(
                "--gap-mm cannot be negative".to_string(),
            ));
        }
        Ok(())
    }
}
