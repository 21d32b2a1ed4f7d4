use lyon::path::Path as LyonPath;
use serde::{Deserialize, Serialize};

use curvekit_core::PathError;

use super::{NodeKind, PathNode, Point};

/// An ordered sequence of path nodes describing a single curve.
///
/// The structure is plain and directly mutable: nodes can be read and edited
/// in place, but never inserted or removed once built. Callers that edit
/// through [`Path::node_mut`] are responsible for keeping node 0 a move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PathNode>", into = "Vec<PathNode>")]
pub struct Path {
    nodes: Vec<PathNode>,
}

impl Path {
    /// Starts a new path at `start`.
    pub fn new(start: Point) -> Self {
        Self {
            nodes: vec![PathNode::move_to(start)],
        }
    }

    /// Builds a path from prepared nodes.
    ///
    /// Fails when the list is empty or when its first node has nothing to
    /// draw from.
    pub fn from_nodes(nodes: Vec<PathNode>) -> Result<Self, PathError> {
        let path = Self { nodes };
        path.validate()?;
        Ok(path)
    }

    pub fn move_to(mut self, anchor: Point) -> Self {
        self.nodes.push(PathNode::move_to(anchor));
        self
    }

    pub fn line_to(mut self, anchor: Point) -> Self {
        self.nodes.push(PathNode::line_to(anchor));
        self
    }

    pub fn quad_to(mut self, cp: Point, anchor: Point) -> Self {
        self.nodes.push(PathNode::quad_to(cp, anchor));
        self
    }

    pub fn cubic_to(mut self, cp1: Point, cp2: Point, anchor: Point) -> Self {
        self.nodes.push(PathNode::cubic_to(cp1, cp2, anchor));
        self
    }

    /// Appends a cubic ending on a smooth anchor: its `cp2` and the next
    /// node's leading control are kept collinear while editing.
    pub fn smooth_cubic_to(mut self, cp1: Point, cp2: Point, anchor: Point) -> Self {
        self.nodes.push(PathNode::cubic_to(cp1, cp2, anchor).smooth());
        self
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&PathNode> {
        self.nodes.get(index)
    }

    pub fn node_mut(&mut self, index: usize) -> Option<&mut PathNode> {
        self.nodes.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathNode> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, PathNode> {
        self.nodes.iter_mut()
    }

    /// Checks that every drawing node has an anchor before it.
    pub fn validate(&self) -> Result<(), PathError> {
        match self.nodes.first() {
            None => Err(PathError::Empty),
            Some(first) if !first.is_move() => Err(PathError::MissingPredecessor { index: 0 }),
            Some(_) => Ok(()),
        }
    }

    /// Converts the model into a lyon path for tessellation or measurement.
    pub fn to_lyon_path(&self) -> Result<LyonPath, PathError> {
        self.validate()?;

        let mut builder = LyonPath::builder();
        let mut open = false;
        let mut previous = self.nodes[0].anchor;
        for node in &self.nodes {
            let to = node.anchor.into();
            match node.kind {
                NodeKind::Move => {
                    if open {
                        builder.end(false);
                    }
                    builder.begin(to);
                    open = true;
                }
                NodeKind::Line => {
                    builder.line_to(to);
                }
                NodeKind::Quadratic { cp } => {
                    builder.quadratic_bezier_to(cp.into(), to);
                }
                NodeKind::Cubic { cp1, cp2 } => {
                    builder.cubic_bezier_to(cp1.unwrap_or(previous).into(), cp2.into(), to);
                }
            }
            previous = node.anchor;
        }
        if open {
            builder.end(false);
        }
        Ok(builder.build())
    }

    /// Tight axis-aligned bounds of the drawn curve as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> Result<(f64, f64, f64, f64), PathError> {
        let path = self.to_lyon_path()?;
        let bb = lyon::algorithms::aabb::bounding_box(path.iter());
        Ok((
            bb.min.x as f64,
            bb.min.y as f64,
            bb.max.x as f64,
            bb.max.y as f64,
        ))
    }
}

impl TryFrom<Vec<PathNode>> for Path {
    type Error = PathError;

    fn try_from(nodes: Vec<PathNode>) -> Result<Self, Self::Error> {
        Path::from_nodes(nodes)
    }
}

impl From<Path> for Vec<PathNode> {
    fn from(path: Path) -> Self {
        path.nodes
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathNode;
    type IntoIter = std::slice::Iter<'a, PathNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
