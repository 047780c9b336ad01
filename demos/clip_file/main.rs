//! Clips segments read from a text file and prints the visible parts.
//!
//! Usage:
//! ```text
//! cargo run --example clip_file                           # built-in sample, rectangle window
//! cargo run --example clip_file -- input.txt              # rectangle window from the file
//! cargo run --example clip_file -- input.txt -5,-5 5,-5 0,5   # convex polygon window
//! ```
//!
//! Output has one line per input segment: `x1 y1 x2 y2`, or `-` when nothing
//! is visible. Set `RUST_LOG=segclip=debug` for batch summaries.

use std::error::Error;

use segclip::io::{format_results, parse_vertices, ClipInput};
use segclip::view::Viewport;
use segclip::{ClipSegments, ClipWindow};

const SAMPLE: &str = "6
-9 -6 -3 6
-8 8 8 -6
-12 0 -2 0
0 -9 0 9
-3 -3 3 3
6 -8 12 8
-10 -10 10 10
";

fn main() -> Result<(), Box<dyn Error>> {
    // Default: WARN for everything, INFO for segclip.
    // Override with RUST_LOG env var (e.g. RUST_LOG=segclip=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("clip_file=info".parse().unwrap_or_default())
        .add_directive("segclip=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let text = match args.next() {
        Some(path) if path != "-" => std::fs::read_to_string(path)?,
        _ => SAMPLE.to_owned(),
    };
    let input = ClipInput::parse(&text)?;

    let vertices = args.collect::<Vec<_>>().join(" ");
    let window = if vertices.is_empty() {
        ClipWindow::Rectangle(input.window)
    } else {
        let polygon = parse_vertices(&vertices)?;
        if !polygon.is_closed() {
            return Err("a convex window needs at least 3 vertices".into());
        }
        if !polygon.is_convex() {
            tracing::warn!("clip polygon is not convex, results are unspecified");
        }
        ClipWindow::Convex(polygon)
    };

    let op = ClipSegments::new(window);
    let results = op.execute(&input.segments);

    let extent = input
        .segments
        .iter()
        .flat_map(|s| [s.start, s.end])
        .chain(match op.window() {
            ClipWindow::Rectangle(r) => r.to_polygon().vertices().to_vec(),
            ClipWindow::Convex(p) => p.vertices().to_vec(),
        });
    let view = Viewport::fit(extent);
    tracing::info!(
        algorithm = op.window().algorithm(),
        visible = results.iter().flatten().count(),
        total = results.len(),
        ?view,
        "clipping done"
    );

    print!("{}", format_results(&results));
    Ok(())
}
