use std::fmt::Write;

use crate::geometry::Segment;

/// Formats a segment as `x1 y1 x2 y2`.
#[must_use]
pub fn format_segment(segment: &Segment) -> String {
    format!(
        "{} {} {} {}",
        segment.start.x, segment.start.y, segment.end.x, segment.end.y
    )
}

/// Formats clip results one line per input segment; invisible segments are
/// written as `-`.
#[must_use]
pub fn format_results(results: &[Option<Segment>]) -> String {
    let mut out = String::new();
    for result in results {
        match result {
            Some(segment) => {
                let _ = writeln!(out, "{}", format_segment(segment));
            }
            None => out.push_str("-\n"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_segment() {
        assert_eq!(
            format_segment(&Segment::new(-10.0, 0.0, -2.5, 0.0)),
            "-10 0 -2.5 0"
        );
    }

    #[test]
    fn formats_results_with_gaps() {
        let results = [
            Some(Segment::new(0.0, 0.0, 1.0, 1.0)),
            None,
            Some(Segment::new(2.0, 2.0, 3.0, 3.0)),
        ];
        assert_eq!(format_results(&results), "0 0 1 1\n-\n2 2 3 3\n");
        assert_eq!(format_results(&[]), "");
    }
}
