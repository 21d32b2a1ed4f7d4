//! Overlay geometry derived from a path: the editable points drawn as handles
//! and hit-tested by the editor, and the guide lines joining each control
//! point to the anchor it belongs to.
//!
//! Both extractors only read the current state of the path.

use serde::{Deserialize, Serialize};

use crate::model::{Path, PointRole};
use crate::Point;

/// A point the user can grab, tagged with the field it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditablePoint {
    pub index: usize,
    pub role: PointRole,
    pub position: Point,
}

/// A straight segment from an anchor to one of its tangent control points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideLine {
    pub anchor: Point,
    pub control: Point,
}

/// Every anchor and existing control point, in document order.
///
/// Within a node the order is anchor, then `ControlA`, then `ControlB`. This
/// is also the precedence order used for hit-testing.
pub fn points(path: &Path) -> Vec<EditablePoint> {
    let mut result = Vec::with_capacity(path.len() * 3);
    for (index, node) in path.iter().enumerate() {
        for role in PointRole::ORDER {
            if let Some(position) = node.point(role) {
                result.push(EditablePoint {
                    index,
                    role,
                    position,
                });
            }
        }
    }
    result
}

/// One guide line per existing control point, drawn from the anchor whose
/// tangent it shapes: a cubic's first control hangs off the previous anchor,
/// every other control off its node's own anchor.
pub fn guide_lines(path: &Path) -> Vec<GuideLine> {
    let mut result = Vec::with_capacity(path.len() * 2);
    let mut previous = Point::default();
    for node in path {
        for (role, control) in node.controls() {
            result.push(GuideLine {
                anchor: node.tangent_anchor(role, previous),
                control,
            });
        }
        previous = node.anchor;
    }
    result
}
