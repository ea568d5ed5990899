//! Page rasterization.
//!
//! The rasterizer is a capability interface so tests can substitute a
//! deterministic implementation without a native rendering library. The
//! production implementation is [`PdfiumRasterizer`].

mod pdfium;

pub use pdfium::PdfiumRasterizer;

use image::RgbImage;

use crate::error::Result;

/// Abstract interface for rendering the first page of a document.
///
/// Implementations render page index 0 of `document` at `zoom` times the
/// page's native point size, producing an RGB raster with no alpha
/// channel. Multi-page plans are out of scope; only page 0 is ever
/// rendered.
pub trait PageRasterizer {
    /// Render page 0 of the document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Document`] if the bytes cannot be parsed as
    /// a renderable document, or [`crate::Error::NoPages`] if the document
    /// has zero pages. Failures here are fatal to the run.
    fn rasterize(&self, document: &[u8], zoom: f32) -> Result<RgbImage>;
}
