use curvekit_designer::editor::{EditOutcome, PathEditor, PointerEvent, Selection};
use curvekit_designer::model::{sample_path, Path, Point, PointRole};
use curvekit_designer::session::EditSession;
use curvekit_designer::svg_renderer::SvgCanvas;

use crate::common::{p, DrawCall, RecordingCanvas};

fn scenario_session() -> EditSession<RecordingCanvas> {
    let path = Path::new(p(100.0, 100.0))
        .line_to(p(200.0, 100.0))
        .quad_to(p(200.0, 300.0), p(300.0, 300.0));
    EditSession::new(PathEditor::new(path), RecordingCanvas::new()).unwrap()
}

#[test]
fn test_initial_frame() {
    let session = scenario_session();
    assert_eq!(
        session.adapter().calls,
        vec![
            DrawCall::Curve("M100,100L200,100Q200,300,300,300".to_string()),
            DrawCall::ClearOverlay,
            DrawCall::Guide(p(300.0, 300.0), p(200.0, 300.0)),
            DrawCall::Handle(p(100.0, 100.0)),
            DrawCall::Handle(p(200.0, 100.0)),
            DrawCall::Handle(p(300.0, 300.0)),
            DrawCall::Handle(p(200.0, 300.0)),
        ]
    );
}

#[test]
fn test_only_mutations_redraw() {
    let mut session = scenario_session();

    session.handle(PointerEvent::Move(p(5.0, 5.0))).unwrap();
    session.handle(PointerEvent::Down(p(400.0, 400.0))).unwrap();
    session.handle(PointerEvent::Down(p(100.0, 100.0))).unwrap();
    session.handle(PointerEvent::Up(p(100.0, 100.0))).unwrap();
    assert_eq!(session.adapter().frame_count(), 1);

    session.handle(PointerEvent::Down(p(300.0, 300.0))).unwrap();
    session.handle(PointerEvent::Move(p(310.0, 310.0))).unwrap();
    assert_eq!(session.adapter().frame_count(), 2);
    assert_eq!(
        session.adapter().last_curve(),
        Some("M100,100L200,100Q210,310,310,310")
    );
}

#[test]
fn test_redraw_overlay_follows_drag() {
    let mut session = scenario_session();
    session
        .replay([
            PointerEvent::Down(p(200.0, 300.0)),
            PointerEvent::Move(p(220.0, 310.0)),
        ])
        .unwrap();

    let frame = session.adapter().last_frame();
    assert!(frame.contains(&DrawCall::Guide(p(300.0, 300.0), p(220.0, 310.0))));
    assert!(frame.contains(&DrawCall::Handle(p(220.0, 310.0))));
    assert!(!frame.contains(&DrawCall::Handle(p(200.0, 300.0))));
}

#[test]
fn test_replay_returns_outcomes_in_order() {
    let mut session = scenario_session();
    let outcomes = session
        .replay([
            PointerEvent::Down(p(101.0, 101.0)),
            PointerEvent::Move(p(111.0, 101.0)),
            PointerEvent::Up(p(111.0, 101.0)),
            PointerEvent::Move(p(150.0, 150.0)),
        ])
        .unwrap();

    let selection = Selection::new(0, PointRole::Anchor);
    assert_eq!(
        outcomes,
        vec![
            EditOutcome::Selected(selection),
            EditOutcome::Moved {
                selection,
                delta: p(10.0, 0.0)
            },
            EditOutcome::Released,
            EditOutcome::Ignored,
        ]
    );
    assert_eq!(session.editor().path().node(0).unwrap().anchor, p(110.0, 100.0));
}

fn sample_session() -> EditSession<SvgCanvas> {
    EditSession::new(PathEditor::new(sample_path().unwrap()), SvgCanvas::default()).unwrap()
}

fn assert_smooth_joint(anchor: Point, incoming: Point, outgoing: Point) {
    let a = incoming - anchor;
    let b = outgoing - anchor;
    let cross = a.x * b.y - a.y * b.x;
    assert!(cross.abs() < 1e-6, "handles not collinear: {:?} {:?}", a, b);
    assert!(a.x * b.x + a.y * b.y < 0.0);
}

#[test]
fn test_sample_path_outgoing_handle_drag() {
    let mut session = sample_session();

    // The smooth joint (200,200) leaves through node 3's first control.
    assert_eq!(
        session.handle(PointerEvent::Down(p(300.0, 200.0))).unwrap(),
        EditOutcome::Selected(Selection::new(3, PointRole::ControlA))
    );
    session.handle(PointerEvent::Move(p(300.0, 260.0))).unwrap();
    session.handle(PointerEvent::Up(p(300.0, 260.0))).unwrap();

    let path = session.editor().path();
    let incoming = path.node(2).unwrap().point(PointRole::ControlB).unwrap();
    let outgoing = path.node(3).unwrap().point(PointRole::ControlA).unwrap();
    assert_eq!(outgoing, p(300.0, 260.0));
    assert_smooth_joint(p(200.0, 200.0), incoming, outgoing);
    assert!((incoming.distance_to(&p(200.0, 200.0)) - 100.0).abs() < 1e-9);
    assert_eq!(path.node(1).unwrap().anchor, p(200.0, 100.0));
}

#[test]
fn test_sample_path_incoming_handle_drag() {
    let mut session = sample_session();

    session.handle(PointerEvent::Down(p(100.0, 200.0))).unwrap();
    session.handle(PointerEvent::Move(p(100.0, 250.0))).unwrap();
    session.handle(PointerEvent::Up(p(100.0, 250.0))).unwrap();

    let path = session.editor().path();
    let incoming = path.node(2).unwrap().point(PointRole::ControlB).unwrap();
    let outgoing = path.node(3).unwrap().point(PointRole::ControlA).unwrap();
    assert_eq!(incoming, p(100.0, 250.0));
    assert_smooth_joint(p(200.0, 200.0), incoming, outgoing);
    assert!((outgoing.distance_to(&p(200.0, 200.0)) - 100.0).abs() < 1e-9);

    // The curve still leaves (200,100) with no handle of its own.
    let d = session.adapter().curve_data();
    assert!(d.starts_with("M100,100L200,100C200,100,100,250,200,200C"), "{}", d);
}

#[test]
fn test_sample_path_corner_drag_carries_curve_start() {
    let mut session = sample_session();

    assert_eq!(
        session.handle(PointerEvent::Down(p(200.0, 100.0))).unwrap(),
        EditOutcome::Selected(Selection::new(1, PointRole::Anchor))
    );
    session.handle(PointerEvent::Move(p(220.0, 100.0))).unwrap();
    session.handle(PointerEvent::Up(p(220.0, 100.0))).unwrap();

    assert_eq!(
        session.adapter().curve_data(),
        "M100,100L220,100C220,100,100,200,200,200C300,200,200,300,300,300C400,300,300,400,400,400"
    );
    assert_eq!(session.adapter().handle_count(), 10);
    assert_eq!(session.adapter().guide_count(), 5);
}

#[test]
fn test_into_parts() {
    let session = scenario_session();
    let (editor, canvas) = session.into_parts();
    assert_eq!(editor.path().len(), 3);
    assert_eq!(canvas.frame_count(), 1);
}
