// File: crates/chart-viewport/src/lib.rs
// Summary: Core library entry point; exports the viewport computator, axis tick planner and float formatting.

pub mod axis;
pub mod computator;
pub mod config;
pub mod error;
pub mod float;
pub mod format;
pub mod geometry;
pub mod listener;
pub mod types;
pub mod view;
pub mod viewport;

pub use axis::{auto_generated_axis_values, compute_auto_generated_axis_values, AxisAutoValues};
pub use computator::{ChartComputator, ComputatorKind};
pub use config::ComputatorConfig;
pub use error::{ConfigError, Result};
pub use float::{almost_equal, next_down, next_up, round_to_one_significant_figure};
pub use format::{format_float, format_float_to_string, ValueFormatter};
pub use geometry::{PointF, RectI32, SizeI32};
pub use listener::{DummyViewportChangeListener, ViewportChangeListener};
pub use types::{Insets, DEFAULT_MAXIMUM_ZOOM};
pub use view::{ScrollResult, ZoomType};
pub use viewport::Viewport;
