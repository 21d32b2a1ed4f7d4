//! Drawing style of the curve and its editing overlay.

use serde::{Deserialize, Serialize};

use crate::constants::{CURVE_STROKE_WIDTH, GUIDE_STROKE_WIDTH, HANDLE_RADIUS, HANDLE_STROKE_WIDTH};
use crate::types::Rgba;

/// Colours and sizes shared by the canvases and the `[style]` config section.
///
/// Widths and radii are in device pixels; canvases divide them by the zoom so
/// they keep their on-screen size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasStyle {
    pub background: Rgba,
    pub curve_color: Rgba,
    pub curve_width: f64,
    pub handle_radius: f64,
    pub handle_fill: Rgba,
    pub handle_stroke: Rgba,
    pub handle_stroke_width: f64,
    pub guide_color: Rgba,
    pub guide_width: f64,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            background: Rgba::WHITE,
            curve_color: Rgba::BLUE,
            curve_width: CURVE_STROKE_WIDTH,
            handle_radius: HANDLE_RADIUS,
            handle_fill: Rgba::WHITE,
            handle_stroke: Rgba::BLACK,
            handle_stroke_width: HANDLE_STROKE_WIDTH,
            guide_color: Rgba::BLACK,
            guide_width: GUIDE_STROKE_WIDTH,
        }
    }
}
