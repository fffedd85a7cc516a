//! Chart sizing options

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Canvas size and histogram resolution shared by all charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    /// Number of shared bins in density overlays
    pub bins: usize,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 480,
            bins: 20,
        }
    }
}

impl ChartOptions {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidOption(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.bins == 0 {
            return Err(Error::InvalidOption("bins must be positive".to_string()));
        }
        Ok(())
    }
}
