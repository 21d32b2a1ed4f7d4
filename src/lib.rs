//! # CurveKit
//!
//! An interactive Bézier path editor core:
//! - A path model of move, line, quadratic and cubic nodes with smooth joints
//! - SVG path serialization of the edited curve
//! - A drag engine with hit-testing and tangent mirroring on smooth nodes
//! - SVG document and raster canvases for the curve and its editing overlay
//!
//! ## Architecture
//!
//! CurveKit is organized as a workspace with multiple crates:
//!
//! 1. **curvekit-core** - Errors, constants, colours, shared-state aliases
//! 2. **curvekit-designer** - Path model, serializer, editor, canvases
//! 3. **curvekit-settings** - Configuration files and validation
//! 4. **curvekit** - Demo binary that replays a pointer script on the sample curve

pub use curvekit_designer as designer;

pub use curvekit_core::{Error, PathError, Result, Rgba};
pub use curvekit_designer::{
    load_script, sample_path, CanvasStyle, EditOutcome, EditSession, Path, PathEditor, PathNode,
    PixmapCanvas, Point, PointerEvent, RenderAdapter, SvgCanvas, Viewport,
};
pub use curvekit_settings::{Config, SettingsManager};

use image::RgbaImage;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty formatted output on stderr, keeping stdout free for documents
/// - RUST_LOG environment variable support, `info` when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Viewport of the configured canvas size, fitted around `path`.
pub fn fitted_viewport(config: &Config, path: &Path) -> Result<Viewport> {
    let mut viewport = Viewport::new(config.canvas.width, config.canvas.height);
    viewport.fit_to_path(path)?;
    Ok(viewport)
}

/// Replays screen-space pointer events on the sample curve.
///
/// Events are mapped into curve space through `viewport` before reaching the
/// editor; the adapter ends up showing the final state.
pub fn run_sample_session<R: RenderAdapter>(
    config: &Config,
    viewport: &Viewport,
    screen_events: &[PointerEvent],
    adapter: R,
) -> Result<EditSession<R>> {
    let editor = PathEditor::with_pick_radius(sample_path()?, config.editor.pick_radius);
    let mut session = EditSession::new(editor, adapter)?;

    let curve_events = screen_events.iter().map(|e| viewport.event_to_world(e));
    let outcomes = session.replay(curve_events)?;
    let moves = outcomes.iter().filter(|o| o.is_mutation()).count();
    tracing::info!(
        "Replayed {} events, {} moved the curve",
        outcomes.len(),
        moves
    );

    Ok(session)
}

/// Renders the sample session as an SVG document.
pub fn render_svg(config: &Config, screen_events: &[PointerEvent]) -> Result<String> {
    let viewport = fitted_viewport(config, &sample_path()?)?;
    let canvas = SvgCanvas::with_viewport(viewport.clone()).with_style(config.style.clone());
    let session = run_sample_session(config, &viewport, screen_events, canvas)?;
    Ok(session.adapter().to_svg_document())
}

/// Renders the sample session to an RGBA image.
pub fn render_image(config: &Config, screen_events: &[PointerEvent]) -> Result<RgbaImage> {
    let viewport = fitted_viewport(config, &sample_path()?)?;
    let canvas = PixmapCanvas::with_viewport(
        config.canvas.width.round() as u32,
        config.canvas.height.round() as u32,
        viewport.clone(),
    )?
    .with_style(config.style.clone());
    let session = run_sample_session(config, &viewport, screen_events, canvas)?;
    session
        .adapter()
        .to_image()
        .ok_or_else(|| Error::other("rendered frame does not fit an image buffer"))
}
