//! Measurement harness: fonts, wrap math, and the off-screen layout pass

pub mod font;
mod geometry;
mod harness;
mod wrap;

pub use font::{FontId, FontLibrary, FontMetrics};
pub use geometry::PageGeometry;
pub use harness::{
    measure_document, BlockExtent, LayoutPass, Measurable, MeasuredDocument, SectionExtent,
};
pub use wrap::{text_height, wrapped_line_count};
