#![allow(clippy::unwrap_used)]

use segclip::error::ParseError;
use segclip::io::{format_results, parse_vertices, ClipInput};
use segclip::view::Viewport;
use segclip::{ClipSegments, ClipWindow, Rectangle, SegclipError, Segment};

const SAMPLE: &str = "6
-9 -6 -3 6
-8 8 8 -6
-12 0 -2 0
0 -9 0 9
-3 -3 3 3
6 -8 12 8
-10 -10 10 10
";

#[test]
fn sample_through_rectangle_clipper() {
    let input = ClipInput::parse(SAMPLE).unwrap();
    let results = ClipSegments::new(input.window).execute(&input.segments);

    assert_eq!(results.len(), 6);
    assert!(results.iter().all(Option::is_some));
    assert_eq!(results[2], Some(Segment::new(-10.0, 0.0, -2.0, 0.0)));

    let text = format_results(&results);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "-9 -6 -3 6");
    assert_eq!(lines[2], "-10 0 -2 0");
    assert!(lines[5].starts_with("6 -8 10 "));
}

#[test]
fn reversed_corners_still_clip() {
    let input = ClipInput::parse("1\n-20 0 20 0\n10 10 -10 -10\n").unwrap();
    assert_eq!(input.window, Rectangle::new(-10.0, -10.0, 10.0, 10.0));
    let visible = ClipSegments::new(input.window).visible(&input.segments);
    assert_eq!(visible, vec![Segment::new(-10.0, 0.0, 10.0, 0.0)]);
}

#[test]
fn sample_through_polygon_clipper() {
    let input = ClipInput::parse(SAMPLE).unwrap();
    let polygon = parse_vertices("5,5 -5,5 -5,-5 5,-5").unwrap();
    let op = ClipSegments::new(ClipWindow::Convex(polygon));
    let results = op.execute(&input.segments);

    assert_eq!(results[4], Some(Segment::new(-3.0, -3.0, 3.0, 3.0)));
    // (6,-8)-(12,8) stays right of x = 5.
    assert!(results[5].is_none());
    let text = format_results(&results);
    assert_eq!(text.lines().nth(5), Some("-"));
}

#[test]
fn malformed_input_rejected_entirely() {
    let broken = SAMPLE.replace("0 -9 0 9", "0 -9 zero 9");
    match ClipInput::parse(&broken) {
        Err(SegclipError::Parse(ParseError::InvalidSegment { index })) => assert_eq!(index, 4),
        other => panic!("expected invalid segment, got {other:?}"),
    }
}

#[test]
fn viewport_fits_sample() {
    let input = ClipInput::parse(SAMPLE).unwrap();
    let points = input.segments.iter().flat_map(|s| [s.start, s.end]);
    let view = Viewport::fit(points);
    // x spans [-12, 12], y spans [-9, 9].
    assert!((view.xmin + 12.0 + 24.0 * 0.12).abs() < 1e-9);
    assert!((view.ymax - 9.0 - 18.0 * 0.12).abs() < 1e-9);
}
