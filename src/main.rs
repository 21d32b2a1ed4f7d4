use std::path::{Path, PathBuf};

use anyhow::Context;

use curvekit::{init_logging, load_script, Config, PointerEvent, SettingsManager, BUILD_DATE, VERSION};

/// Usage: `curvekit [SCRIPT.json] [OUTPUT.png]`
///
/// Replays the pointer script (screen coordinates) on the sample curve and
/// prints the resulting SVG document. With a second argument the frame is
/// also written as an image. `CURVEKIT_CONFIG` overrides the config file.
fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("CurveKit {} (built {})", VERSION, BUILD_DATE);

    let config = load_config()?;

    let mut args = std::env::args_os().skip(1);
    let events = match args.next() {
        Some(script) => read_script(&PathBuf::from(script))?,
        None => Vec::new(),
    };

    let svg = curvekit::render_svg(&config, &events).context("Failed to render SVG")?;
    print!("{}", svg);

    if let Some(output) = args.next() {
        let output = PathBuf::from(output);
        let image = curvekit::render_image(&config, &events).context("Failed to rasterize")?;
        image
            .save(&output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        tracing::info!("Wrote {}", output.display());
    }

    Ok(())
}

fn load_config() -> anyhow::Result<Config> {
    let manager = match std::env::var_os("CURVEKIT_CONFIG") {
        Some(path) => SettingsManager::open(PathBuf::from(path))?,
        None => match SettingsManager::open_default() {
            Ok(manager) => manager,
            Err(e) => {
                tracing::warn!("Using default settings: {}", e);
                return Ok(Config::default());
            }
        },
    };
    Ok(manager.config().clone())
}

fn read_script(path: &Path) -> anyhow::Result<Vec<PointerEvent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    load_script(&text).with_context(|| format!("Invalid script {}", path.display()))
}
