/// Output collaborators for vecscii (SVG document builder, persistence).

pub mod storage;
pub mod svg;

pub use storage::{DirStore, OutputStore};
pub use svg::{SvgDocument, SvgOptions, render_document};
