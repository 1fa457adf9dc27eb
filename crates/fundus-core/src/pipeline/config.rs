use serde::{Deserialize, Serialize};

use crate::capture::BurstConfig;
use crate::crop::EllipseSpec;
use crate::error::Result;
use crate::filters::EnhanceParams;

/// Everything the capture pipeline needs besides the camera itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Convert the final image to a red-free (green channel) view.
    #[serde(default)]
    pub red_free: bool,
    #[serde(default)]
    pub burst: BurstConfig,
    /// Operator-placed field of view. No crop when absent.
    #[serde(default)]
    pub crop: Option<EllipseSpec>,
    /// Contrast enhancement. Skipped when absent.
    #[serde(default)]
    pub enhancement: Option<EnhanceParams>,
}

impl PipelineConfig {
    /// Check every section before any frame is grabbed.
    pub fn validate(&self) -> Result<()> {
        self.burst.validate()?;
        if let Some(ref crop) = self.crop {
            crop.validate()?;
        }
        if let Some(ref enhancement) = self.enhancement {
            enhancement.validate()?;
        }
        Ok(())
    }
}
