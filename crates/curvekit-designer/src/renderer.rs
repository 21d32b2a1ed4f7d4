//! Rendering of an edited path.
//!
//! The editor never draws directly. After every change it hands the current
//! path description and overlay geometry to a [`RenderAdapter`], which owns
//! the actual drawing surface. [`PixmapCanvas`] is the raster implementation,
//! backed by tiny-skia.
//!
//! Draw order for one frame:
//! 1. `draw_curve` with the serialized path
//! 2. `clear_overlay`
//! 3. `draw_guide_line` for every anchor-to-control segment
//! 4. `draw_handle` for every editable point

use image::{Rgba as ImageRgba, RgbaImage};
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform};

use curvekit_core::{Error, PathError, Rgba};

pub use curvekit_core::CanvasStyle;

use crate::geometry;
use crate::model::{NodeKind, Path, PathNode};
use crate::svg_path;
use crate::viewport::Viewport;
use crate::Point;

/// A drawing surface that can show a curve and its editing overlay.
///
/// All coordinates are in curve space (+Y up). Mapping to the device is the
/// adapter's business.
pub trait RenderAdapter {
    /// Replaces the drawn curve with the one described by `d`.
    fn draw_curve(&mut self, d: &str);

    /// Draws a circular handle centred on `center`.
    fn draw_handle(&mut self, center: Point);

    /// Draws a straight guide from an anchor to one of its controls.
    fn draw_guide_line(&mut self, from: Point, to: Point);

    /// Removes every handle and guide line.
    fn clear_overlay(&mut self);
}

/// Redraws the curve and the full overlay of `path` on `adapter`.
pub fn render_path<R: RenderAdapter + ?Sized>(path: &Path, adapter: &mut R) -> Result<(), PathError> {
    let d = svg_path::serialize(path)?;
    adapter.draw_curve(&d);
    adapter.clear_overlay();

    let guides = geometry::guide_lines(path);
    for guide in &guides {
        adapter.draw_guide_line(guide.anchor, guide.control);
    }

    let points = geometry::points(path);
    for point in &points {
        adapter.draw_handle(point.position);
    }

    tracing::trace!(
        "Rendered {} nodes, {} guides, {} handles",
        path.len(),
        guides.len(),
        points.len()
    );
    Ok(())
}

fn skia_color(c: Rgba) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn solid_paint(c: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(skia_color(c));
    paint.anti_alias = true;
    paint
}

/// Builds a tiny-skia path from parsed nodes. `None` when nothing drawable remains.
fn skia_path(nodes: &[PathNode]) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    let mut previous = Point::default();
    for node in nodes {
        let (x, y) = (node.anchor.x as f32, node.anchor.y as f32);
        match node.kind {
            NodeKind::Move => pb.move_to(x, y),
            NodeKind::Line => pb.line_to(x, y),
            NodeKind::Quadratic { cp } => pb.quad_to(cp.x as f32, cp.y as f32, x, y),
            NodeKind::Cubic { cp1, cp2 } => {
                let cp1 = cp1.unwrap_or(previous);
                pb.cubic_to(
                    cp1.x as f32,
                    cp1.y as f32,
                    cp2.x as f32,
                    cp2.y as f32,
                    x,
                    y,
                )
            }
        }
        previous = node.anchor;
    }
    pb.finish()
}

/// Raster canvas with a curve layer and a transparent overlay layer.
pub struct PixmapCanvas {
    curve: Pixmap,
    overlay: Pixmap,
    style: CanvasStyle,
    viewport: Viewport,
}

impl PixmapCanvas {
    /// Creates a canvas of `width` x `height` pixels showing curve space 1:1.
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        let viewport = Viewport::new(f64::from(width), f64::from(height));
        Self::with_viewport(width, height, viewport)
    }

    pub fn with_viewport(width: u32, height: u32, viewport: Viewport) -> Result<Self, Error> {
        let curve = Pixmap::new(width, height)
            .ok_or_else(|| Error::other(format!("invalid canvas size {}x{}", width, height)))?;
        let overlay = curve.clone();
        let mut canvas = Self {
            curve,
            overlay,
            style: CanvasStyle::default(),
            viewport,
        };
        canvas.clear_curve();
        Ok(canvas)
    }

    pub fn with_style(mut self, style: CanvasStyle) -> Self {
        self.style = style;
        self.clear_curve();
        self
    }

    pub fn style(&self) -> &CanvasStyle {
        &self.style
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn width(&self) -> u32 {
        self.curve.width()
    }

    pub fn height(&self) -> u32 {
        self.curve.height()
    }

    fn transform(&self) -> Transform {
        // pixel_y = canvas_height - (world_y * zoom + pan_y)
        let zoom = self.viewport.zoom() as f32;
        let pan_x = self.viewport.pan_x() as f32;
        let pan_y = self.viewport.pan_y() as f32;
        let canvas_height = self.curve.height() as f32;
        Transform::from_scale(zoom, -zoom).post_translate(pan_x, canvas_height - pan_y)
    }

    fn device_width(&self, width: f64) -> f32 {
        (width / self.viewport.zoom()) as f32
    }

    fn clear_curve(&mut self) {
        self.curve.fill(skia_color(self.style.background));
    }

    /// Both layers flattened into one pixmap.
    pub fn to_pixmap(&self) -> Pixmap {
        let mut frame = self.curve.clone();
        frame.draw_pixmap(
            0,
            0,
            self.overlay.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        frame
    }

    /// The flattened frame as straight-alpha RGBA.
    pub fn to_image(&self) -> Option<RgbaImage> {
        let frame = self.to_pixmap();
        let data = frame
            .pixels()
            .iter()
            .flat_map(|px| {
                let c = px.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect::<Vec<u8>>();
        RgbaImage::from_raw(frame.width(), frame.height(), data)
    }

    /// Colour of one pixel of the flattened frame, for inspection.
    pub fn pixel(&self, x: u32, y: u32) -> Option<ImageRgba<u8>> {
        self.to_image()
            .and_then(|img| img.get_pixel_checked(x, y).copied())
    }
}

impl RenderAdapter for PixmapCanvas {
    fn draw_curve(&mut self, d: &str) {
        self.clear_curve();

        let nodes = match svg_path::parse(d) {
            Ok(nodes) => nodes,
            Err(e) => {
                tracing::warn!("Cannot rasterize path data: {}", e);
                return;
            }
        };
        let Some(path) = skia_path(&nodes) else {
            return;
        };

        let paint = solid_paint(self.style.curve_color);
        let stroke = Stroke {
            width: self.device_width(self.style.curve_width),
            ..Default::default()
        };
        let transform = self.transform();
        self.curve.stroke_path(&path, &paint, &stroke, transform, None);
    }

    fn draw_handle(&mut self, center: Point) {
        let radius = self.device_width(self.style.handle_radius);
        let Some(circle) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius) else {
            return;
        };

        let transform = self.transform();
        let fill = solid_paint(self.style.handle_fill);
        self.overlay
            .fill_path(&circle, &fill, FillRule::Winding, transform, None);

        let outline = solid_paint(self.style.handle_stroke);
        let stroke = Stroke {
            width: self.device_width(self.style.handle_stroke_width),
            ..Default::default()
        };
        self.overlay
            .stroke_path(&circle, &outline, &stroke, transform, None);
    }

    fn draw_guide_line(&mut self, from: Point, to: Point) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let Some(line) = pb.finish() else {
            return;
        };

        let paint = solid_paint(self.style.guide_color);
        let stroke = Stroke {
            width: self.device_width(self.style.guide_width),
            ..Default::default()
        };
        let transform = self.transform();
        self.overlay.stroke_path(&line, &paint, &stroke, transform, None);
    }

    fn clear_overlay(&mut self) {
        self.overlay.fill(Color::TRANSPARENT);
    }
}
