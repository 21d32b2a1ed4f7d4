//! Viewport and coordinate transformation between screen and curve space.
//!
//! Input plumbing receives pointer positions in screen space (0,0 at
//! top-left, +Y down) and must hand the editor positions in curve space
//! (0,0 at bottom-left, +Y up). Canvases use the inverse mapping to draw.

use std::fmt;

use curvekit_core::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, VIEW_PADDING};
use curvekit_core::PathError;

use crate::editor::PointerEvent;
use crate::model::Path;
use crate::Point;

const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 50.0;

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a 1:1 viewport with curve-space origin at the bottom-left corner.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            canvas_width,
            canvas_height,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when window resizes).
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = width;
        self.canvas_height = height;
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level; values outside 0.1..50.0 are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > MIN_ZOOM && zoom < MAX_ZOOM {
            self.zoom = zoom;
        }
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts pixel coordinates to curve coordinates.
    ///
    /// ```text
    /// world_x = (pixel_x - pan_x) / zoom
    /// world_y = (canvas_height - pixel_y - pan_y) / zoom  // Flip Y-axis
    /// ```
    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> Point {
        let world_x = (pixel_x - self.pan_x) / self.zoom;
        let world_y = (self.canvas_height - pixel_y - self.pan_y) / self.zoom;
        Point::new(world_x, world_y)
    }

    /// Converts curve coordinates to pixel coordinates.
    ///
    /// ```text
    /// pixel_x = world_x * zoom + pan_x
    /// pixel_y = canvas_height - (world_y * zoom + pan_y)  // Flip Y-axis
    /// ```
    pub fn world_to_pixel(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        let pixel_x = world_x * self.zoom + self.pan_x;
        let pixel_y = self.canvas_height - (world_y * self.zoom + self.pan_y);
        (pixel_x, pixel_y)
    }

    pub fn world_point_to_pixel(&self, point: &Point) -> (f64, f64) {
        self.world_to_pixel(point.x, point.y)
    }

    /// Maps a pointer event received in screen space into curve space.
    pub fn event_to_world(&self, event: &PointerEvent) -> PointerEvent {
        let screen = event.position();
        event.with_position(self.pixel_to_world(screen.x, screen.y))
    }

    /// Fits the given bounding box into the viewport with padding.
    ///
    /// `padding` is the fraction of the viewport reserved on each side
    /// (0.0 - 0.5). Degenerate boxes leave the viewport untouched.
    pub fn fit_to_bounds(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64, padding: f64) {
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let width = max_x - min_x;
        let height = max_y - min_y;

        let padding_factor = 1.0 - (padding * 2.0);
        let zoom_x = (self.canvas_width * padding_factor) / width;
        let zoom_y = (self.canvas_height * padding_factor) / height;
        let new_zoom = zoom_x.min(zoom_y).clamp(MIN_ZOOM, MAX_ZOOM);

        let content_pixel_width = width * new_zoom;
        let content_pixel_height = height * new_zoom;
        let left = self.canvas_width / 2.0 - content_pixel_width / 2.0;
        let top = self.canvas_height / 2.0 - content_pixel_height / 2.0;

        // pan_x = pixel_x - world_x * zoom
        // pan_y = canvas_height - pixel_y - world_y * zoom, with pixel_y at the box's bottom edge
        self.zoom = new_zoom;
        self.pan_x = left - min_x * new_zoom;
        self.pan_y = self.canvas_height - top - content_pixel_height - min_y * new_zoom;
    }

    /// Fits the drawn extent of `path` with the default padding.
    pub fn fit_to_path(&mut self, path: &Path) -> Result<(), PathError> {
        let (min_x, min_y, max_x, max_y) = path.bounds()?;
        tracing::debug!(
            "Fitting viewport to ({}, {}) - ({}, {})",
            min_x,
            min_y,
            max_x,
            max_y
        );
        self.fit_to_bounds(min_x, min_y, max_x, max_y, VIEW_PADDING);
        Ok(())
    }

    /// Resets to 1:1 with no pan.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}
