use curvekit_designer::editor::{EditOutcome, EditState, PathEditor, PointerEvent, Selection};
use curvekit_designer::model::{NodeKind, Path, PointRole};
use curvekit_designer::Point;

use crate::common::{assert_close, p};

fn scenario_editor() -> PathEditor {
    PathEditor::new(
        Path::new(p(100.0, 100.0))
            .line_to(p(200.0, 100.0))
            .quad_to(p(200.0, 300.0), p(300.0, 300.0)),
    )
}

/// Two cubics meeting at a smooth anchor (200,200): node 1 arrives through
/// (100,200), node 2 leaves through (300,200).
fn smooth_editor() -> PathEditor {
    PathEditor::new(
        Path::new(p(0.0, 200.0))
            .smooth_cubic_to(p(50.0, 250.0), p(100.0, 200.0), p(200.0, 200.0))
            .cubic_to(p(300.0, 200.0), p(400.0, 250.0), p(400.0, 200.0)),
    )
}

fn assert_antiparallel(anchor: Point, a: Point, b: Point) {
    let (a, b) = (a - anchor, b - anchor);
    let cross = a.x * b.y - a.y * b.x;
    assert!(cross.abs() < 1e-6, "handles not collinear: {:?} {:?}", a, b);
    assert!(a.x * b.x + a.y * b.y < 0.0, "handles on the same side");
}

#[test]
fn test_starts_idle() {
    let editor = scenario_editor();
    assert_eq!(editor.state(), EditState::Idle);
    assert_eq!(editor.selection(), None);
    assert_eq!(editor.cursor(), None);
    assert_eq!(editor.pick_radius(), 10.0);
}

#[test]
fn test_pointer_down_near_anchor_selects_it() {
    let mut editor = scenario_editor();
    let outcome = editor.pointer_down(p(101.0, 101.0));
    let expected = Selection::new(0, PointRole::Anchor);
    assert_eq!(outcome, EditOutcome::Selected(expected));
    assert_eq!(
        editor.state(),
        EditState::Dragging {
            selection: expected,
            cursor: p(101.0, 101.0)
        }
    );
}

#[test]
fn test_pointer_down_far_away_selects_nothing() {
    let mut editor = scenario_editor();
    assert_eq!(editor.pointer_down(p(400.0, 400.0)), EditOutcome::Missed);
    assert!(!editor.is_dragging());
}

#[test]
fn test_pick_radius_is_exclusive() {
    let editor = scenario_editor();
    assert!(editor.hit_test(p(110.0, 100.0)).is_none());
    assert!(editor.hit_test(p(109.9, 100.0)).is_some());
}

#[test]
fn test_custom_pick_radius() {
    let editor = PathEditor::with_pick_radius(Path::new(p(0.0, 0.0)), 30.0);
    assert!(editor.hit_test(p(20.0, 0.0)).is_some());
}

#[test]
fn test_hit_prefers_anchor_over_coincident_control() {
    let editor = PathEditor::new(
        Path::new(p(0.0, 0.0)).cubic_to(p(10.0, 10.0), p(51.0, 50.0), p(51.0, 50.0)),
    );
    assert_eq!(
        editor.hit_test(p(51.0, 50.0)),
        Some(Selection::new(1, PointRole::Anchor))
    );
}

#[test]
fn test_hit_prefers_first_control() {
    let editor = PathEditor::new(
        Path::new(p(0.0, 0.0)).cubic_to(p(50.0, 50.0), p(50.0, 52.0), p(65.0, 50.0)),
    );
    assert_eq!(
        editor.hit_test(p(50.0, 51.0)),
        Some(Selection::new(1, PointRole::ControlA))
    );
}

#[test]
fn test_hit_prefers_earlier_node() {
    let editor = PathEditor::new(Path::new(p(0.0, 0.0)).line_to(p(4.0, 0.0)));
    assert_eq!(
        editor.hit_test(p(2.0, 0.0)),
        Some(Selection::new(0, PointRole::Anchor))
    );
}

#[test]
fn test_move_while_idle_is_ignored() {
    let mut editor = scenario_editor();
    let before = editor.path().clone();
    assert_eq!(editor.pointer_move(p(150.0, 150.0)), EditOutcome::Ignored);
    assert_eq!(editor.path(), &before);
}

#[test]
fn test_up_while_idle_is_ignored() {
    let mut editor = scenario_editor();
    assert_eq!(editor.pointer_up(p(0.0, 0.0)), EditOutcome::Ignored);
}

#[test]
fn test_drag_quadratic_control_leaves_other_nodes() {
    let mut editor = scenario_editor();
    let before = editor.path().clone();

    assert_eq!(
        editor.handle(PointerEvent::Down(p(200.0, 300.0))),
        EditOutcome::Selected(Selection::new(2, PointRole::ControlA))
    );
    let outcome = editor.handle(PointerEvent::Move(p(220.0, 310.0)));
    assert_eq!(
        outcome,
        EditOutcome::Moved {
            selection: Selection::new(2, PointRole::ControlA),
            delta: p(20.0, 10.0)
        }
    );
    assert_eq!(
        editor.handle(PointerEvent::Up(p(220.0, 310.0))),
        EditOutcome::Released
    );

    let path = editor.path();
    assert_eq!(path.node(0), before.node(0));
    assert_eq!(path.node(1), before.node(1));
    assert_eq!(path.node(2).map(|n| n.anchor), Some(p(300.0, 300.0)));
    assert_eq!(
        path.node(2).map(|n| n.kind),
        Some(NodeKind::Quadratic { cp: p(220.0, 310.0) })
    );
}

#[test]
fn test_drag_anchor_carries_its_control() {
    let mut editor = scenario_editor();
    editor.pointer_down(p(300.0, 300.0));
    editor.pointer_move(p(310.0, 310.0));
    editor.pointer_up(p(310.0, 310.0));

    let node = editor.path().node(2).copied().unwrap();
    assert_eq!(node.anchor, p(310.0, 310.0));
    assert_eq!(node.kind, NodeKind::Quadratic { cp: p(210.0, 310.0) });
    assert_eq!(editor.path().node(0).unwrap().anchor, p(100.0, 100.0));
    assert_eq!(editor.path().node(1).unwrap().anchor, p(200.0, 100.0));
}

#[test]
fn test_moves_accumulate_from_last_cursor() {
    let mut editor = scenario_editor();
    editor.pointer_down(p(102.0, 100.0));
    editor.pointer_move(p(112.0, 100.0));
    editor.pointer_move(p(112.0, 95.0));
    assert_eq!(editor.cursor(), Some(p(112.0, 95.0)));
    assert_eq!(editor.path().node(0).unwrap().anchor, p(110.0, 95.0));
}

#[test]
fn test_up_ends_session() {
    let mut editor = scenario_editor();
    editor.pointer_down(p(100.0, 100.0));
    editor.pointer_up(p(100.0, 100.0));
    assert_eq!(editor.state(), EditState::Idle);

    let before = editor.path().clone();
    editor.pointer_move(p(300.0, 300.0));
    assert_eq!(editor.path(), &before);
}

#[test]
fn test_down_while_dragging_rehits() {
    let mut editor = scenario_editor();
    editor.pointer_down(p(100.0, 100.0));
    assert_eq!(
        editor.pointer_down(p(200.0, 100.0)),
        EditOutcome::Selected(Selection::new(1, PointRole::Anchor))
    );
    assert_eq!(editor.pointer_down(p(0.0, 0.0)), EditOutcome::Missed);
    assert_eq!(editor.state(), EditState::Idle);
}

#[test]
fn test_smooth_leading_control_mirrors_previous_trailing() {
    let mut editor = smooth_editor();
    assert_eq!(
        editor.pointer_down(p(300.0, 200.0)),
        EditOutcome::Selected(Selection::new(2, PointRole::ControlA))
    );
    editor.pointer_move(p(200.0, 300.0));

    let path = editor.path();
    assert_close(path.node(2).unwrap().point(PointRole::ControlA).unwrap(), p(200.0, 300.0));
    assert_close(path.node(1).unwrap().point(PointRole::ControlB).unwrap(), p(200.0, 100.0));
    assert_eq!(path.node(1).unwrap().point(PointRole::ControlA), Some(p(50.0, 250.0)));
    assert_eq!(path.node(1).unwrap().anchor, p(200.0, 200.0));
    assert_eq!(path.node(2).unwrap().point(PointRole::ControlB), Some(p(400.0, 250.0)));
}

#[test]
fn test_smooth_trailing_control_mirrors_next_leading() {
    let mut editor = smooth_editor();
    assert_eq!(
        editor.pointer_down(p(100.0, 200.0)),
        EditOutcome::Selected(Selection::new(1, PointRole::ControlB))
    );
    editor.pointer_move(p(100.0, 150.0));

    let path = editor.path();
    let incoming = path.node(1).unwrap().point(PointRole::ControlB).unwrap();
    let outgoing = path.node(2).unwrap().point(PointRole::ControlA).unwrap();
    assert_eq!(incoming, p(100.0, 150.0));
    assert_antiparallel(p(200.0, 200.0), incoming, outgoing);
    assert!((outgoing.distance_to(&p(200.0, 200.0)) - 100.0).abs() < 1e-9);
    // The start tangent of node 1 is not part of this joint.
    assert_eq!(path.node(1).unwrap().point(PointRole::ControlA), Some(p(50.0, 250.0)));
}

#[test]
fn test_smooth_mirror_keeps_pair_length() {
    let mut editor = PathEditor::new(
        Path::new(p(0.0, 0.0))
            .smooth_cubic_to(p(0.0, 50.0), p(40.0, 50.0), p(50.0, 50.0))
            .cubic_to(p(80.0, 50.0), p(90.0, 90.0), p(100.0, 100.0)),
    );
    // The incoming handle sits 10 from the shared anchor.
    editor.pointer_down(p(80.0, 50.0));
    editor.pointer_move(p(50.0, 90.0));

    let incoming = editor.path().node(1).unwrap().point(PointRole::ControlB).unwrap();
    assert!((incoming.distance_to(&p(50.0, 50.0)) - 10.0).abs() < 1e-9);
    assert_close(incoming, p(50.0, 40.0));
}

#[test]
fn test_smooth_degenerate_tangent_leaves_pair() {
    let mut editor = smooth_editor();
    editor.pointer_down(p(300.0, 200.0));
    editor.pointer_move(p(200.0, 200.0));

    let path = editor.path();
    assert_eq!(path.node(2).unwrap().point(PointRole::ControlA), Some(p(200.0, 200.0)));
    let incoming = path.node(1).unwrap().point(PointRole::ControlB).unwrap();
    assert_eq!(incoming, p(100.0, 200.0));
    assert!(incoming.is_finite());
}

#[test]
fn test_non_smooth_control_is_independent() {
    let mut editor = PathEditor::new(
        Path::new(p(0.0, 200.0))
            .cubic_to(p(50.0, 250.0), p(100.0, 200.0), p(200.0, 200.0))
            .cubic_to(p(300.0, 200.0), p(400.0, 250.0), p(400.0, 200.0)),
    );
    let before = editor.path().clone();
    editor.pointer_down(p(300.0, 200.0));
    editor.pointer_move(p(250.0, 260.0));
    assert_eq!(editor.path().node(1), before.node(1));
    assert_eq!(editor.path().node(0), before.node(0));
}

#[test]
fn test_smooth_flag_of_other_anchor_is_ignored() {
    // Node 2 is smooth, but node 2's first control belongs to node 1's corner anchor.
    let mut editor = PathEditor::new(
        Path::new(p(0.0, 200.0))
            .cubic_to(p(50.0, 250.0), p(100.0, 200.0), p(200.0, 200.0))
            .smooth_cubic_to(p(300.0, 200.0), p(400.0, 250.0), p(400.0, 200.0)),
    );
    let before = editor.path().clone();
    editor.pointer_down(p(300.0, 200.0));
    editor.pointer_move(p(250.0, 260.0));
    assert_eq!(editor.path().node(1), before.node(1));
    assert_eq!(
        editor.path().node(2).unwrap().point(PointRole::ControlB),
        Some(p(400.0, 250.0))
    );
}

#[test]
fn test_smooth_anchor_drag_is_rigid() {
    let mut editor = smooth_editor();
    // Anchor (200,200) and nothing else within range.
    editor.pointer_down(p(200.0, 205.0));
    editor.pointer_move(p(210.0, 225.0));
    let node = editor.path().node(1).copied().unwrap();
    assert_eq!(node.anchor, p(210.0, 220.0));
    assert_eq!(
        node.kind,
        NodeKind::Cubic {
            cp1: Some(p(60.0, 270.0)),
            cp2: p(110.0, 220.0)
        }
    );
    assert_eq!(
        editor.path().node(2).unwrap().point(PointRole::ControlA),
        Some(p(300.0, 200.0))
    );
}

#[test]
fn test_stale_selection_is_skipped() {
    let mut editor = scenario_editor();
    editor.pointer_down(p(200.0, 300.0));
    editor.path_mut().node_mut(2).unwrap().kind = NodeKind::Line;
    let before = editor.path().clone();
    assert_eq!(editor.pointer_move(p(210.0, 300.0)), EditOutcome::Ignored);
    assert_eq!(editor.path(), &before);
}

#[test]
fn test_into_path_returns_edited_model() {
    let mut editor = scenario_editor();
    editor.pointer_down(p(200.0, 100.0));
    editor.pointer_move(p(200.0, 120.0));
    let path = editor.into_path();
    assert_eq!(path.node(1).unwrap().anchor, p(200.0, 120.0));
}
