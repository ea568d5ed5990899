//! PDFium-backed rasterizer.

use image::RgbImage;
use pdfium_render::prelude::*;

use crate::error::{Error, Result};
use crate::raster::PageRasterizer;

/// Production [`PageRasterizer`] backed by `pdfium-render`.
///
/// Binds libpdfium dynamically at construction: a library next to the
/// executable takes precedence over the system library.
pub struct PdfiumRasterizer {
    pdfium: Pdfium,
}

impl PdfiumRasterizer {
    /// Bind the PDFium library and create a rasterizer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Document`] if no PDFium library can be loaded.
    pub fn new() -> Result<Self> {
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| Error::Document(format!("failed to bind pdfium library: {e:?}")))?;

        Ok(Self {
            pdfium: Pdfium::new(bindings),
        })
    }
}

impl PageRasterizer for PdfiumRasterizer {
    fn rasterize(&self, document: &[u8], zoom: f32) -> Result<RgbImage> {
        let document = self
            .pdfium
            .load_pdf_from_byte_slice(document, None)
            .map_err(|e| Error::Document(format!("cannot open document: {e:?}")))?;

        let pages = document.pages();
        if pages.len() == 0 {
            return Err(Error::NoPages);
        }

        let page = pages
            .get(0)
            .map_err(|e| Error::Document(format!("cannot load first page: {e:?}")))?;

        // Page dimensions are in points; zoom scales them to pixels.
        let pixel_width = (page.width().value * zoom) as i32;
        let pixel_height = (page.height().value * zoom) as i32;

        let bitmap = page
            .render_with_config(
                &PdfRenderConfig::new()
                    .set_target_width(pixel_width)
                    .set_target_height(pixel_height),
            )
            .map_err(|e| Error::Document(format!("page render failed: {e:?}")))?;

        Ok(bitmap.as_image().to_rgb8())
    }
}
