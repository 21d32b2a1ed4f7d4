//! Editor-wide constants.

/// Maximum curve-space distance at which a pointer-down hits an editable point.
pub const PICK_RADIUS: f64 = 10.0;

/// Radius of the circular handle drawn for every editable point.
pub const HANDLE_RADIUS: f64 = 8.0;

/// Default drawing surface width in curve units.
pub const DEFAULT_CANVAS_WIDTH: f64 = 512.0;

/// Default drawing surface height in curve units.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 512.0;

/// Fraction of the viewport reserved on each side when fitting content.
pub const VIEW_PADDING: f64 = 0.05;

/// Stroke width of the drawn curve.
pub const CURVE_STROKE_WIDTH: f64 = 5.0;

/// Outline width of each handle.
pub const HANDLE_STROKE_WIDTH: f64 = 2.0;

/// Stroke width of the anchor-to-control guide lines.
pub const GUIDE_STROKE_WIDTH: f64 = 2.0;
