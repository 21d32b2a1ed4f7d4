//! Geometric model of the edited curve.

mod joint;
mod node;
mod path;
mod point;

pub use joint::{sample_joints, sample_path, Joint};
pub use node::{NodeKind, PathNode, PointRole};
pub use path::Path;
pub use point::Point;
