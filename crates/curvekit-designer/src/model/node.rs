use serde::{Deserialize, Serialize};

use super::Point;

/// Drawing command carried by a node, with the control points that command needs.
///
/// A cubic without `cp1` leaves the previous anchor with no handle of its own:
/// its first control is that anchor, wherever it currently is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeKind {
    Move,
    Line,
    Quadratic {
        cp: Point,
    },
    Cubic {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cp1: Option<Point>,
        cp2: Point,
    },
}

impl NodeKind {
    /// The command letter this kind serializes to.
    pub fn command(&self) -> char {
        match self {
            NodeKind::Move => 'M',
            NodeKind::Line => 'L',
            NodeKind::Quadratic { .. } => 'Q',
            NodeKind::Cubic { .. } => 'C',
        }
    }
}

/// Which field of a node a point refers to.
///
/// `ControlA` is the quadratic control or the first cubic control;
/// `ControlB` is the second cubic control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointRole {
    Anchor,
    ControlA,
    ControlB,
}

impl PointRole {
    /// Extraction and hit-test order within a single node.
    pub const ORDER: [PointRole; 3] = [PointRole::Anchor, PointRole::ControlA, PointRole::ControlB];
}

/// One command of a path: where it ends, how it gets there, and whether the
/// handles on either side of its anchor are kept collinear while editing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathNode {
    #[serde(flatten)]
    pub kind: NodeKind,
    pub anchor: Point,
    #[serde(default)]
    pub smooth: bool,
}

impl PathNode {
    pub fn new(kind: NodeKind, anchor: Point) -> Self {
        Self {
            kind,
            anchor,
            smooth: false,
        }
    }

    pub fn move_to(anchor: Point) -> Self {
        Self::new(NodeKind::Move, anchor)
    }

    pub fn line_to(anchor: Point) -> Self {
        Self::new(NodeKind::Line, anchor)
    }

    pub fn quad_to(cp: Point, anchor: Point) -> Self {
        Self::new(NodeKind::Quadratic { cp }, anchor)
    }

    pub fn cubic_to(cp1: Point, cp2: Point, anchor: Point) -> Self {
        Self::new(
            NodeKind::Cubic {
                cp1: Some(cp1),
                cp2,
            },
            anchor,
        )
    }

    /// A cubic whose first control stays on the previous anchor.
    pub fn cubic_from_anchor(cp2: Point, anchor: Point) -> Self {
        Self::new(NodeKind::Cubic { cp1: None, cp2 }, anchor)
    }

    /// Marks the node smooth.
    pub fn smooth(mut self) -> Self {
        self.smooth = true;
        self
    }

    pub fn is_move(&self) -> bool {
        matches!(self.kind, NodeKind::Move)
    }

    /// The point stored under `role`, if this kind of node has one.
    pub fn point(&self, role: PointRole) -> Option<Point> {
        match (role, &self.kind) {
            (PointRole::Anchor, _) => Some(self.anchor),
            (PointRole::ControlA, NodeKind::Quadratic { cp }) => Some(*cp),
            (PointRole::ControlA, NodeKind::Cubic { cp1, .. }) => *cp1,
            (PointRole::ControlB, NodeKind::Cubic { cp2, .. }) => Some(*cp2),
            _ => None,
        }
    }

    pub fn point_mut(&mut self, role: PointRole) -> Option<&mut Point> {
        match (role, &mut self.kind) {
            (PointRole::Anchor, _) => Some(&mut self.anchor),
            (PointRole::ControlA, NodeKind::Quadratic { cp }) => Some(cp),
            (PointRole::ControlA, NodeKind::Cubic { cp1, .. }) => cp1.as_mut(),
            (PointRole::ControlB, NodeKind::Cubic { cp2, .. }) => Some(cp2),
            _ => None,
        }
    }

    /// The control leaving the previous anchor: the quadratic control or `cp1`.
    pub fn leading_role(&self) -> Option<PointRole> {
        match self.kind {
            NodeKind::Quadratic { .. } | NodeKind::Cubic { cp1: Some(_), .. } => {
                Some(PointRole::ControlA)
            }
            _ => None,
        }
    }

    /// The control arriving at this node's anchor: the quadratic control or `cp2`.
    pub fn trailing_role(&self) -> Option<PointRole> {
        match self.kind {
            NodeKind::Quadratic { .. } => Some(PointRole::ControlA),
            NodeKind::Cubic { .. } => Some(PointRole::ControlB),
            _ => None,
        }
    }

    /// The anchor whose tangent the control under `role` shapes, given the
    /// anchor of the node before this one.
    pub fn tangent_anchor(&self, role: PointRole, previous: Point) -> Point {
        match (role, self.kind) {
            (PointRole::ControlA, NodeKind::Cubic { .. }) => previous,
            _ => self.anchor,
        }
    }

    /// Existing control points in role order.
    pub fn controls(&self) -> impl Iterator<Item = (PointRole, Point)> + '_ {
        [PointRole::ControlA, PointRole::ControlB]
            .into_iter()
            .filter_map(move |role| self.point(role).map(|p| (role, p)))
    }

    /// Moves the anchor and every control of this node by `delta`.
    pub fn translate(&mut self, delta: Point) {
        self.anchor += delta;
        match &mut self.kind {
            NodeKind::Move | NodeKind::Line => {}
            NodeKind::Quadratic { cp } => *cp += delta,
            NodeKind::Cubic { cp1, cp2 } => {
                if let Some(cp1) = cp1 {
                    *cp1 += delta;
                }
                *cp2 += delta;
            }
        }
    }
}
