// File: crates/chart-viewport/src/config.rs
// Summary: Serializable computator setup (kind, zoom limit, viewports, layout) with validation.

use serde::{Deserialize, Serialize};

use crate::computator::ComputatorKind;
use crate::error::{ConfigError, Result};
use crate::types::{Insets, DEFAULT_MAXIMUM_ZOOM};
use crate::viewport::Viewport;

/// Everything needed to bring a computator into a usable state in one step.
///
/// Missing JSON fields fall back to [`ComputatorConfig::default`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputatorConfig {
    pub kind: ComputatorKind,
    pub max_zoom: f32,
    pub chart_width: i32,
    pub chart_height: i32,
    pub padding: Insets,
    pub max_viewport: Option<Viewport>,
    /// Defaults to the maximum viewport (fully zoomed out).
    pub current_viewport: Option<Viewport>,
}

impl Default for ComputatorConfig {
    fn default() -> Self {
        Self {
            kind: ComputatorKind::Standard,
            max_zoom: DEFAULT_MAXIMUM_ZOOM,
            chart_width: 0,
            chart_height: 0,
            padding: Insets::default(),
            max_viewport: None,
            current_viewport: None,
        }
    }
}

impl ComputatorConfig {
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects values the computator would silently turn into NaN math.
    /// Zoom factors in `(0, 1)` are accepted here and floored by the computator.
    pub fn validate(&self) -> Result<()> {
        if !self.max_zoom.is_finite() || self.max_zoom <= 0.0 {
            return Err(ConfigError::InvalidMaxZoom(self.max_zoom));
        }
        for (name, viewport) in [("maximum", self.max_viewport), ("current", self.current_viewport)] {
            if let Some(v) = viewport {
                let finite = v.left.is_finite() && v.top.is_finite() && v.right.is_finite() && v.bottom.is_finite();
                if !finite {
                    return Err(ConfigError::InvalidViewport { name, viewport: v });
                }
            }
        }
        Ok(())
    }
}
