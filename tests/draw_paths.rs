//! End-to-end drawing scenarios through the public API.

use kurbo::Point;

use svgbasic::{
    interpret, CanvasOp, DisplayList, DrawError, PathCommand, PathSet, Subpath, Transform, EPSILON,
};

fn assert_pt(p: Point, x: f64, y: f64) {
    assert!(
        (p.x - x).abs() < EPSILON && (p.y - y).abs() < EPSILON,
        "expected ({x}, {y}), got ({}, {})",
        p.x,
        p.y
    );
}

#[test]
fn triangle_scaled_and_offset() {
    // One subpath: M(0,0) L(10,0) L(10,10) Z at scale 2, origin (5,5).
    let mut paths = PathSet::new(10.0, 10.0);
    paths.push(Subpath::from_commands(vec![
        PathCommand::MoveTo(Point::new(0.0, 0.0)),
        PathCommand::LineTo(Point::new(10.0, 0.0)),
        PathCommand::LineTo(Point::new(10.0, 10.0)),
        PathCommand::ClosePath,
    ]));
    let mut dl = DisplayList::new();

    interpret(&paths, Transform::new(2.0, Point::new(5.0, 5.0)), &mut dl).unwrap();

    assert_eq!(dl.len(), 4);
    assert_eq!(dl.ops[0], CanvasOp::MoveTo(Point::new(5.0, 5.0)));
    let CanvasOp::Line { from, to } = dl.ops[3] else {
        panic!("expected the closing line");
    };
    assert_pt(from, 25.0, 25.0);
    assert_pt(to, 5.0, 5.0);

    let bb = dl.bbox();
    assert!((bb.width() - 20.0).abs() < EPSILON);
    assert!((bb.height() - 20.0).abs() < EPSILON);
}

#[test]
fn cubic_from_origin() {
    let mut paths = PathSet::new(3.0, 3.0);
    paths.push(Subpath::from_commands(vec![
        PathCommand::MoveTo(Point::new(0.0, 0.0)),
        PathCommand::CubicCurveTo {
            c1: Point::new(1.0, 1.0),
            c2: Point::new(2.0, 2.0),
            end: Point::new(3.0, 3.0),
        },
    ]));
    let mut dl = DisplayList::new();

    interpret(&paths, Transform::IDENTITY, &mut dl).unwrap();

    assert_eq!(dl.ops[0], CanvasOp::MoveTo(Point::ZERO));
    let CanvasOp::CubicBezier { from, c1, c2, end, .. } = dl.ops[1] else {
        panic!("expected a cubic");
    };
    assert_pt(from, 0.0, 0.0);
    assert_pt(c1, 1.0, 1.0);
    assert_pt(c2, 2.0, 2.0);
    assert_pt(end, 3.0, 3.0);
}

#[test]
fn scale_derived_from_viewbox() {
    // The usual caller pattern: fit a 100-unit-wide drawing into 25 units.
    let mut paths = PathSet::new(100.0, 40.0);
    paths.push(Subpath::from_commands(vec![
        PathCommand::MoveTo(Point::new(0.0, 0.0)),
        PathCommand::HorizontalLineTo(100.0),
        PathCommand::VerticalLineTo(40.0),
        PathCommand::ClosePath,
    ]));
    let scale = 25.0 / paths.width;
    let mut dl = DisplayList::new();

    interpret(&paths, Transform::new(scale, Point::new(30.0, 60.0)), &mut dl).unwrap();

    let bb = dl.bbox();
    assert!((bb.width() - 25.0).abs() < EPSILON);
    assert!((bb.height() - 10.0).abs() < EPSILON);
    assert!((bb.min_x - 30.0).abs() < EPSILON);
    assert!((bb.min_y - 60.0).abs() < EPSILON);
}

#[test]
fn unknown_tag_surfaces_a_descriptive_message() {
    let mut paths = PathSet::new(0.0, 0.0);
    paths.push(Subpath::from_commands(vec![
        PathCommand::MoveTo(Point::ZERO),
        PathCommand::Unknown('S'),
    ]));
    let mut dl = DisplayList::new();

    let err = interpret(&paths, Transform::IDENTITY, &mut dl).unwrap_err();

    assert_eq!(err, DrawError::UnsupportedCommand { tag: 'S' });
    assert_eq!(format!("{err}"), "unexpected path command 'S'");
    assert_eq!(dl.len(), 1);
}

#[test]
fn rerunning_a_pass_is_deterministic() {
    let mut paths = PathSet::new(4.0, 4.0);
    paths.push(Subpath::from_commands(vec![
        PathCommand::MoveTo(Point::new(1.0, 1.0)),
        PathCommand::QuadraticCurveTo {
            ctrl: Point::new(2.0, 3.0),
            end: Point::new(3.0, 1.0),
        },
        PathCommand::ClosePath,
    ]));
    let transform = Transform::new(1.5, Point::new(-2.0, 4.0));

    let mut first = DisplayList::new();
    interpret(&paths, transform, &mut first).unwrap();
    let mut second = DisplayList::new();
    interpret(&paths, transform, &mut second).unwrap();

    assert_eq!(first, second);
}
