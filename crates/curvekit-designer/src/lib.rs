//! # CurveKit Designer
//!
//! The editing core of CurveKit: the path model, its SVG path serialization,
//! the overlay geometry shown while editing, and the drag/constraint engine
//! that reshapes the curve from pointer input.
//!
//! ## Core Components
//!
//! - **Model**: [`Path`] of [`PathNode`]s (move, line, quadratic, cubic) with
//!   a per-node smooth flag; legacy [`Joint`] lists import through
//!   [`Path::from_joints`]
//! - **SVG path**: [`svg_path::serialize`] and [`svg_path::parse`] for the
//!   absolute `M`/`L`/`Q`/`C` subset
//! - **Geometry**: editable points and guide lines derived from a path
//! - **Editor**: hit-testing, the idle/dragging state machine and smooth
//!   tangent mirroring
//! - **Rendering**: the [`RenderAdapter`] contract with SVG and raster canvases
//! - **Viewport**: screen to curve space mapping
//!
//! ## Architecture
//!
//! ```text
//! PointerEvent (screen) ──Viewport──▶ PointerEvent (curve space)
//!                                        │
//!                                   EditSession
//!                                     ├── PathEditor ── Path
//!                                     └── RenderAdapter
//!                                           ▲
//!                     svg_path::serialize ──┤
//!                     geometry::{points, guide_lines}
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use curvekit_designer::{EditSession, PathEditor, PointerEvent, Path, Point, SvgCanvas};
//!
//! let path = Path::new(Point::new(100.0, 100.0))
//!     .line_to(Point::new(200.0, 100.0))
//!     .quad_to(Point::new(200.0, 300.0), Point::new(300.0, 300.0));
//! let mut session = EditSession::new(PathEditor::new(path), SvgCanvas::default())?;
//!
//! session.handle(PointerEvent::Down(Point::new(300.0, 300.0)))?;
//! session.handle(PointerEvent::Move(Point::new(310.0, 310.0)))?;
//! session.handle(PointerEvent::Up(Point::new(310.0, 310.0)))?;
//! ```

pub mod editor;
pub mod geometry;
pub mod model;
pub mod renderer;
pub mod session;
pub mod svg_path;
pub mod svg_renderer;
pub mod viewport;

pub use editor::{EditOutcome, EditState, PathEditor, PointerEvent, Selection};
pub use geometry::{EditablePoint, GuideLine};
pub use model::{sample_joints, sample_path, Joint, NodeKind, Path, PathNode, Point, PointRole};
pub use renderer::{render_path, CanvasStyle, PixmapCanvas, RenderAdapter};
pub use session::{load_script, EditSession, SharedEditor};
pub use svg_renderer::SvgCanvas;
pub use viewport::Viewport;
