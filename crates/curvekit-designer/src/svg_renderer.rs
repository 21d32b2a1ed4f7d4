//! SVG document canvas.
//!
//! Keeps the latest curve description and the overlay elements drawn since
//! the last clear, and writes them out as a standalone SVG document. Both
//! layers sit in a group that flips the Y axis, so the path data and handle
//! positions are emitted in curve space unchanged.

use std::fmt::Write;

use curvekit_core::Rgba;

use crate::renderer::{CanvasStyle, RenderAdapter};
use crate::viewport::Viewport;
use crate::Point;

#[derive(Debug, Clone, PartialEq)]
enum OverlayElement {
    Guide { from: Point, to: Point },
    Handle { center: Point },
}

/// A [`RenderAdapter`] producing an SVG document.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    viewport: Viewport,
    style: CanvasStyle,
    curve: String,
    overlay: Vec<OverlayElement>,
}

impl SvgCanvas {
    /// A canvas of `width` x `height` showing curve space 1:1.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_viewport(Viewport::new(width, height))
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            style: CanvasStyle::default(),
            curve: String::new(),
            overlay: Vec::new(),
        }
    }

    pub fn with_style(mut self, style: CanvasStyle) -> Self {
        self.style = style;
        self
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The last curve description drawn.
    pub fn curve_data(&self) -> &str {
        &self.curve
    }

    pub fn handle_count(&self) -> usize {
        self.overlay
            .iter()
            .filter(|e| matches!(e, OverlayElement::Handle { .. }))
            .count()
    }

    pub fn guide_count(&self) -> usize {
        self.overlay
            .iter()
            .filter(|e| matches!(e, OverlayElement::Guide { .. }))
            .count()
    }

    /// Curve space to canvas: `translate(0,height) scale(1,-1)` at 1:1.
    fn layer_transform(&self) -> String {
        let zoom = self.viewport.zoom();
        format!(
            "translate({},{}) scale({},{})",
            self.viewport.pan_x(),
            self.viewport.canvas_height() - self.viewport.pan_y(),
            zoom,
            -zoom
        )
    }

    fn scaled(&self, width: f64) -> f64 {
        width / self.viewport.zoom()
    }

    /// Renders the canvas as a complete SVG document.
    pub fn to_svg_document(&self) -> String {
        let width = self.viewport.canvas_width();
        let height = self.viewport.canvas_height();
        let transform = self.layer_transform();
        let style = &self.style;

        let mut svg = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = width,
            h = height
        );
        let _ = writeln!(
            svg,
            r#"  <rect width="100%" height="100%"{}/>"#,
            paint_attr("fill", style.background)
        );

        let _ = writeln!(svg, r#"  <g id="drawing" transform="{}">"#, transform);
        if !self.curve.is_empty() {
            let _ = writeln!(
                svg,
                r#"    <path d="{}" fill="none"{} stroke-width="{}"/>"#,
                self.curve,
                paint_attr("stroke", style.curve_color),
                self.scaled(style.curve_width)
            );
        }
        svg.push_str("  </g>\n");

        let _ = writeln!(svg, r#"  <g id="overlay" transform="{}">"#, transform);
        for element in &self.overlay {
            match element {
                OverlayElement::Guide { from, to } => {
                    let _ = writeln!(
                        svg,
                        r#"    <line x1="{}" y1="{}" x2="{}" y2="{}"{} stroke-width="{}"/>"#,
                        from.x,
                        from.y,
                        to.x,
                        to.y,
                        paint_attr("stroke", style.guide_color),
                        self.scaled(style.guide_width)
                    );
                }
                OverlayElement::Handle { center } => {
                    let _ = writeln!(
                        svg,
                        r#"    <circle cx="{}" cy="{}" r="{}"{}{} stroke-width="{}"/>"#,
                        center.x,
                        center.y,
                        self.scaled(style.handle_radius),
                        paint_attr("fill", style.handle_fill),
                        paint_attr("stroke", style.handle_stroke),
                        self.scaled(style.handle_stroke_width)
                    );
                }
            }
        }
        svg.push_str("  </g>\n");
        svg.push_str("</svg>\n");
        svg
    }
}

/// ` name="#rrggbb"`, plus a matching opacity attribute for translucent colours.
fn paint_attr(name: &str, color: Rgba) -> String {
    if color.is_opaque() {
        format!(r#" {}="{}""#, name, color.to_hex_rgb())
    } else {
        format!(
            r#" {}="{}" {}-opacity="{:.3}""#,
            name,
            color.to_hex_rgb(),
            name,
            color.opacity()
        )
    }
}

impl RenderAdapter for SvgCanvas {
    fn draw_curve(&mut self, d: &str) {
        self.curve.clear();
        self.curve.push_str(d);
    }

    fn draw_handle(&mut self, center: Point) {
        self.overlay.push(OverlayElement::Handle { center });
    }

    fn draw_guide_line(&mut self, from: Point, to: Point) {
        self.overlay.push(OverlayElement::Guide { from, to });
    }

    fn clear_overlay(&mut self) {
        self.overlay.clear();
    }
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::with_viewport(Viewport::default())
    }
}
