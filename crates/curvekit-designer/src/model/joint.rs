//! Import of the anchor-with-two-handles joint representation.
//!
//! Older documents describe a curve as a list of joints: an on-curve point with
//! an optional incoming handle (`control1`) and an optional outgoing handle
//! (`control2`). The command of each segment is implied by which handles are
//! present on either side of it. Joints are converted once into explicit
//! [`PathNode`]s; the editor never works on joints directly.

use serde::{Deserialize, Serialize};

use curvekit_core::PathError;

use super::{Path, PathNode, Point};

/// An on-curve point with optional handles on either side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    pub point: Point,
    #[serde(default)]
    pub control1: Option<Point>,
    #[serde(default)]
    pub control2: Option<Point>,
    #[serde(default)]
    pub smooth: bool,
}

impl Joint {
    pub fn corner(point: Point) -> Self {
        Self {
            point,
            control1: None,
            control2: None,
            smooth: false,
        }
    }

    pub fn with_controls(point: Point, control1: Option<Point>, control2: Option<Point>) -> Self {
        Self {
            point,
            control1,
            control2,
            smooth: false,
        }
    }

    pub fn smooth(mut self) -> Self {
        self.smooth = true;
        self
    }
}

impl Path {
    /// Converts a joint list into explicit commands.
    ///
    /// Segment rules, for each joint after the first:
    /// - previous outgoing and current incoming handle: cubic through both
    /// - only the current incoming handle: cubic whose first control follows
    ///   the previous point
    /// - no handles: line
    /// - previous outgoing handle without a current incoming one: rejected
    pub fn from_joints(joints: &[Joint]) -> Result<Path, PathError> {
        let (first, rest) = joints.split_first().ok_or(PathError::Empty)?;

        let mut nodes = Vec::with_capacity(joints.len());
        let mut start = PathNode::move_to(first.point);
        start.smooth = first.smooth;
        nodes.push(start);

        let mut prev = first;
        for (offset, joint) in rest.iter().enumerate() {
            let mut node = match (prev.control2, joint.control1) {
                (Some(out), Some(inc)) => PathNode::cubic_to(out, inc, joint.point),
                (None, Some(inc)) => PathNode::cubic_from_anchor(inc, joint.point),
                (None, None) => PathNode::line_to(joint.point),
                (Some(_), None) => {
                    return Err(PathError::UnrecognizedJoint { index: offset + 1 });
                }
            };
            node.smooth = joint.smooth;
            nodes.push(node);
            prev = joint;
        }

        Path::from_nodes(nodes)
    }
}

/// The demonstration curve: two corners, then a smooth and two plain curved joints.
pub fn sample_joints() -> Vec<Joint> {
    vec![
        Joint::corner(Point::new(100.0, 100.0)),
        Joint::corner(Point::new(200.0, 100.0)),
        Joint::with_controls(
            Point::new(200.0, 200.0),
            Some(Point::new(100.0, 200.0)),
            Some(Point::new(300.0, 200.0)),
        )
        .smooth(),
        Joint::with_controls(
            Point::new(300.0, 300.0),
            Some(Point::new(200.0, 300.0)),
            Some(Point::new(400.0, 300.0)),
        ),
        Joint::with_controls(
            Point::new(400.0, 400.0),
            Some(Point::new(300.0, 400.0)),
            None,
        ),
    ]
}

/// [`sample_joints`] converted to an explicit path.
pub fn sample_path() -> Result<Path, PathError> {
    Path::from_joints(&sample_joints())
}
