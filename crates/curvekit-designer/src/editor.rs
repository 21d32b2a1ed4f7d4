//! Interactive editing of a path by dragging its points.
//!
//! [`PathEditor`] owns the path and a two-state machine driven by pointer
//! stimuli in curve space:
//!
//! ```text
//!            down (hit)              move: apply delta
//!   Idle  ───────────────▶  Dragging ◀──────────────┐
//!    ▲  ◀───────────────────  │  └──────────────────┘
//!    │          up            │
//!    └── down (miss), move ───┘ (ignored while idle)
//! ```
//!
//! Moving an anchor translates it with the controls of its node. Moving a
//! control translates only that control. When the anchor it is a tangent of
//! is smooth, the control on the other side of that anchor is re-aimed so the
//! two handles point in exactly opposite directions while the re-aimed handle
//! keeps its length.
//!
//! The handles meeting at the anchor of node `i` are node `i`'s trailing
//! control (`cp2`, or the quadratic `cp`) and node `i + 1`'s leading control
//! (`cp1`, or the quadratic `cp`); node `i`'s smooth flag governs that joint.

use serde::{Deserialize, Serialize};

use curvekit_core::constants::PICK_RADIUS;

use crate::geometry;
use crate::model::{Path, PathNode, PointRole};
use crate::Point;

/// The field currently being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub index: usize,
    pub role: PointRole,
}

impl Selection {
    pub fn new(index: usize, role: PointRole) -> Self {
        Self { index, role }
    }
}

/// Drag state of the editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditState {
    Idle,
    Dragging {
        selection: Selection,
        /// Last pointer position seen in this drag session.
        cursor: Point,
    },
}

/// A pointer stimulus in curve space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down(p) | PointerEvent::Move(p) | PointerEvent::Up(p) => *p,
        }
    }

    /// The same stimulus at a different position, used by input adapters that
    /// map screen coordinates into curve space.
    pub fn with_position(&self, p: Point) -> PointerEvent {
        match self {
            PointerEvent::Down(_) => PointerEvent::Down(p),
            PointerEvent::Move(_) => PointerEvent::Move(p),
            PointerEvent::Up(_) => PointerEvent::Up(p),
        }
    }
}

/// What a stimulus did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    /// A pointer-down hit a point and started a drag.
    Selected(Selection),
    /// A pointer-down hit nothing.
    Missed,
    /// The selected point moved by `delta`.
    Moved { selection: Selection, delta: Point },
    /// A drag session ended.
    Released,
    /// The stimulus had no effect in the current state.
    Ignored,
}

impl EditOutcome {
    /// Whether the path changed and derived outputs must be recomputed.
    pub fn is_mutation(&self) -> bool {
        matches!(self, EditOutcome::Moved { .. })
    }
}

/// Owns a path and edits it in response to pointer stimuli.
#[derive(Debug, Clone)]
pub struct PathEditor {
    path: Path,
    state: EditState,
    pick_radius: f64,
}

impl PathEditor {
    pub fn new(path: Path) -> Self {
        Self::with_pick_radius(path, PICK_RADIUS)
    }

    pub fn with_pick_radius(path: Path, pick_radius: f64) -> Self {
        debug_assert!(
            pick_radius.is_finite() && pick_radius > 0.0,
            "pick_radius must be positive and finite, got {pick_radius}"
        );
        Self {
            path,
            state: EditState::Idle,
            pick_radius,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Direct access to the model. Callers must keep any active selection valid.
    pub fn path_mut(&mut self) -> &mut Path {
        &mut self.path
    }

    pub fn into_path(self) -> Path {
        self.path
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn pick_radius(&self) -> f64 {
        self.pick_radius
    }

    pub fn selection(&self) -> Option<Selection> {
        match self.state {
            EditState::Idle => None,
            EditState::Dragging { selection, .. } => Some(selection),
        }
    }

    pub fn cursor(&self) -> Option<Point> {
        match self.state {
            EditState::Idle => None,
            EditState::Dragging { cursor, .. } => Some(cursor),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, EditState::Dragging { .. })
    }

    /// First editable point strictly within the pick radius of `p`, in extraction order.
    pub fn hit_test(&self, p: Point) -> Option<Selection> {
        geometry::points(&self.path)
            .into_iter()
            .find(|candidate| candidate.position.distance_to(&p) < self.pick_radius)
            .map(|hit| Selection::new(hit.index, hit.role))
    }

    pub fn handle(&mut self, event: PointerEvent) -> EditOutcome {
        match event {
            PointerEvent::Down(p) => self.pointer_down(p),
            PointerEvent::Move(p) => self.pointer_move(p),
            PointerEvent::Up(p) => self.pointer_up(p),
        }
    }

    pub fn pointer_down(&mut self, p: Point) -> EditOutcome {
        match self.hit_test(p) {
            Some(selection) => {
                tracing::debug!(
                    "Selected node {} {:?} at ({}, {})",
                    selection.index,
                    selection.role,
                    p.x,
                    p.y
                );
                self.state = EditState::Dragging {
                    selection,
                    cursor: p,
                };
                EditOutcome::Selected(selection)
            }
            None => {
                tracing::debug!("No point within {} of ({}, {})", self.pick_radius, p.x, p.y);
                self.state = EditState::Idle;
                EditOutcome::Missed
            }
        }
    }

    pub fn pointer_move(&mut self, p: Point) -> EditOutcome {
        let EditState::Dragging { selection, cursor } = self.state else {
            return EditOutcome::Ignored;
        };

        let delta = p - cursor;
        self.state = EditState::Dragging {
            selection,
            cursor: p,
        };
        if self.apply_delta(selection, delta) {
            tracing::debug!(
                "Moved node {} {:?} by ({}, {})",
                selection.index,
                selection.role,
                delta.x,
                delta.y
            );
            EditOutcome::Moved { selection, delta }
        } else {
            EditOutcome::Ignored
        }
    }

    pub fn pointer_up(&mut self, _p: Point) -> EditOutcome {
        let was_dragging = self.is_dragging();
        self.state = EditState::Idle;
        if was_dragging {
            EditOutcome::Released
        } else {
            EditOutcome::Ignored
        }
    }

    /// Applies a drag step to the selected field. False when the selection is stale.
    fn apply_delta(&mut self, selection: Selection, delta: Point) -> bool {
        let Some(node) = self.path.node_mut(selection.index) else {
            tracing::warn!(
                "Selected node {} no longer exists, drag ignored",
                selection.index
            );
            return false;
        };

        let moved = match selection.role {
            PointRole::Anchor => {
                node.translate(delta);
                return true;
            }
            role => match node.point_mut(role) {
                Some(control) => {
                    *control += delta;
                    *control
                }
                None => {
                    tracing::warn!(
                        "Node {} has no {:?}, drag ignored",
                        selection.index,
                        role
                    );
                    return false;
                }
            },
        };

        for (joint, partner) in smooth_partners(&self.path, selection).into_iter().flatten() {
            self.mirror_across(joint, moved, partner);
        }
        true
    }

    /// Re-aims the control at `partner` through the anchor of node `joint`.
    fn mirror_across(&mut self, joint: usize, moved: Point, partner: Selection) {
        let Some(anchor) = self.path.node(joint).map(|node| node.anchor) else {
            return;
        };
        let Some(paired) = self
            .path
            .node_mut(partner.index)
            .and_then(|node| node.point_mut(partner.role))
        else {
            return;
        };
        if mirror_paired_control(anchor, moved, paired) {
            tracing::trace!(
                "Mirrored node {} {:?} across node {}",
                partner.index,
                partner.role,
                joint
            );
        }
    }
}

/// Smooth joints the control at `selection` is a tangent of, each as the
/// joint's node index and the control on the other side of its anchor.
///
/// A trailing control pairs forward with the next node's leading control; a
/// leading control pairs back with the previous node's trailing control. A
/// quadratic control is both.
fn smooth_partners(path: &Path, selection: Selection) -> [Option<(usize, Selection)>; 2] {
    let index = selection.index;
    let Some(node) = path.node(index) else {
        return [None, None];
    };

    let forward = if node.smooth && node.trailing_role() == Some(selection.role) {
        path.node(index + 1)
            .and_then(PathNode::leading_role)
            .map(|role| (index, Selection::new(index + 1, role)))
    } else {
        None
    };

    let backward = if node.leading_role() == Some(selection.role) {
        index.checked_sub(1).and_then(|joint| {
            let previous = path.node(joint).filter(|n| n.smooth)?;
            let role = previous.trailing_role()?;
            Some((joint, Selection::new(joint, role)))
        })
    } else {
        None
    };

    [forward, backward]
}

/// Points `paired` directly away from `moved` through `anchor`, keeping its
/// distance from the anchor.
///
/// Leaves `paired` in place and returns false when `moved` sits exactly on
/// the anchor, where no direction is defined.
fn mirror_paired_control(anchor: Point, moved: Point, paired: &mut Point) -> bool {
    if moved == anchor {
        tracing::debug!("Zero-length tangent, keeping paired control in place");
        return false;
    }

    let length = paired.distance_to(&anchor);
    let angle = anchor.angle_to(&moved) + std::f64::consts::PI;
    *paired = anchor.polar(length, angle);
    true
}
