//! Text ingestion and presentation around the clippers.
//!
//! Input format:
//!
//! ```text
//! n
//! x1 y1 x2 y2      (n lines)
//! xa ya xb yb      (two opposite window corners, any order)
//! ```

mod input;
mod output;

pub use input::{parse_vertices, ClipInput};
pub use output::{format_results, format_segment};
