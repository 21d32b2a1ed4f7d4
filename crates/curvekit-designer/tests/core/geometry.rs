use curvekit_designer::geometry::{guide_lines, points, GuideLine};
use curvekit_designer::model::{Path, PathNode, PointRole};

use crate::common::p;

fn mixed_path() -> Path {
    Path::new(p(0.0, 0.0))
        .line_to(p(10.0, 0.0))
        .quad_to(p(15.0, 10.0), p(20.0, 0.0))
        .cubic_to(p(25.0, 5.0), p(30.0, 5.0), p(35.0, 0.0))
}

#[test]
fn test_points_in_document_order() {
    let pts = points(&mixed_path());
    let tagged: Vec<(usize, PointRole)> = pts.iter().map(|e| (e.index, e.role)).collect();
    assert_eq!(
        tagged,
        vec![
            (0, PointRole::Anchor),
            (1, PointRole::Anchor),
            (2, PointRole::Anchor),
            (2, PointRole::ControlA),
            (3, PointRole::Anchor),
            (3, PointRole::ControlA),
            (3, PointRole::ControlB),
        ]
    );
    assert_eq!(pts[3].position, p(15.0, 10.0));
    assert_eq!(pts[6].position, p(30.0, 5.0));
}

#[test]
fn test_guide_lines_start_at_tangent_anchor() {
    let guides = guide_lines(&mixed_path());
    assert_eq!(
        guides,
        vec![
            GuideLine {
                anchor: p(20.0, 0.0),
                control: p(15.0, 10.0)
            },
            GuideLine {
                anchor: p(20.0, 0.0),
                control: p(25.0, 5.0)
            },
            GuideLine {
                anchor: p(35.0, 0.0),
                control: p(30.0, 5.0)
            },
        ]
    );
}

#[test]
fn test_straight_path_has_no_guides() {
    let path = Path::new(p(0.0, 0.0)).line_to(p(5.0, 5.0));
    assert!(guide_lines(&path).is_empty());
    assert_eq!(points(&path).len(), 2);
}

#[test]
fn test_extractors_follow_mutation() {
    let mut path = mixed_path();
    if let Some(cp) = path.node_mut(2).and_then(|n| n.point_mut(PointRole::ControlA)) {
        *cp = p(0.0, 50.0);
    }
    assert_eq!(points(&path)[3].position, p(0.0, 50.0));
    assert_eq!(guide_lines(&path)[0].control, p(0.0, 50.0));
}

#[test]
fn test_first_control_from_anchor_is_not_editable() {
    let mut nodes = Path::new(p(0.0, 0.0)).line_to(p(10.0, 0.0)).nodes().to_vec();
    nodes.push(PathNode::cubic_from_anchor(p(15.0, 5.0), p(20.0, 0.0)));
    let path = Path::from_nodes(nodes).unwrap();

    let tagged: Vec<(usize, PointRole)> = points(&path).iter().map(|e| (e.index, e.role)).collect();
    assert_eq!(
        tagged,
        vec![
            (0, PointRole::Anchor),
            (1, PointRole::Anchor),
            (2, PointRole::Anchor),
            (2, PointRole::ControlB),
        ]
    );
    assert_eq!(
        guide_lines(&path),
        vec![GuideLine {
            anchor: p(20.0, 0.0),
            control: p(15.0, 5.0)
        }]
    );
}
