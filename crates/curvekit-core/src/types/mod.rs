//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: The `Arc<Mutex<T>>` alias guarding a shared editor.
//! - [`color`]: Hex-encoded RGBA colour shared by styles and settings.
//! - [`style`]: Canvas colours and stroke sizes.

pub mod aliases;
pub mod color;
pub mod style;

pub use aliases::*;
pub use color::{ParseColorError, Rgba};
pub use style::CanvasStyle;
