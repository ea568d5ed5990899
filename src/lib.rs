//! # roomcrop
//!
//! Floor-plan room extraction library for Rust.
//!
//! This library takes an architectural floor-plan PDF, locates room
//! labels on its first page with OCR, and assembles a new PDF with one
//! labeled page per room.
//!
//! ## Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "tesseract")]
//! # fn run() -> roomcrop::Result<()> {
//! use roomcrop::{extract_rooms_from_file, Extraction};
//!
//! match extract_rooms_from_file("plan.pdf")? {
//!     Extraction::Document(doc) => {
//!         std::fs::write("plan_rooms.pdf", &doc.bytes)?;
//!         println!("Extracted {} rooms", doc.page_count());
//!     }
//!     Extraction::NoRooms => println!("No room labels found"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! The convenience functions require the `tesseract` feature (native
//! Tesseract and Leptonica via `leptess`). Without it, build a
//! [`RoomExtractor`] with your own engines through
//! [`RoomExtractor::with_engines`].
//!
//! ## Pipeline
//!
//! - **Rasterize**: page 0 rendered via PDFium at a configurable zoom
//! - **Recognize**: grayscale OCR producing word-level detections
//! - **Filter**: room-label matching ("SALA", or "SUP" with "M2")
//! - **Crop**: padded regions clipped to the raster extents
//! - **Compose**: A4 portrait output, one heading + image per room

pub mod compose;
pub mod detect;
pub mod error;
pub mod filter;
pub mod model;
pub mod ocr;
pub mod pipeline;
pub mod raster;

// Re-export commonly used types
pub use compose::{crop_bounds, crop_region, ComposeOptions, Layout, PdfComposer};
pub use detect::{detect_format_from_bytes, is_pdf_bytes, PdfFormat};
pub use error::{Error, Result};
pub use filter::{is_room_label, room_candidates};
pub use model::{BBox, CropRect, Detection, Extraction, RoomDocument, RoomRegion};
pub use ocr::{RecognizerConfig, TextRecognizer};
pub use pipeline::{ExtractOptions, RoomExtractor};
pub use raster::{PageRasterizer, PdfiumRasterizer};

#[cfg(feature = "tesseract")]
pub use ocr::LeptessRecognizer;

#[cfg(feature = "tesseract")]
use std::path::Path;

/// Extract rooms from floor-plan PDF bytes with default options.
///
/// # Example
///
/// ```no_run
/// use roomcrop::extract_rooms;
///
/// let data = std::fs::read("plan.pdf").unwrap();
/// let outcome = extract_rooms(&data).unwrap();
/// ```
#[cfg(feature = "tesseract")]
pub fn extract_rooms(data: &[u8]) -> Result<Extraction> {
    extract_rooms_with_options(data, ExtractOptions::default())
}

/// Extract rooms from floor-plan PDF bytes with custom options.
///
/// # Example
///
/// ```no_run
/// use roomcrop::{extract_rooms_with_options, ExtractOptions, Layout};
///
/// let data = std::fs::read("plan.pdf").unwrap();
/// let options = ExtractOptions::new()
///     .with_zoom(2.0)
///     .with_padding(100)
///     .with_layout(Layout::FixedOffset);
/// let outcome = extract_rooms_with_options(&data, options).unwrap();
/// ```
#[cfg(feature = "tesseract")]
pub fn extract_rooms_with_options(data: &[u8], options: ExtractOptions) -> Result<Extraction> {
    let mut extractor = RoomExtractor::new(options)?;
    extractor.extract(data)
}

/// Extract rooms from a floor-plan PDF file with default options.
///
/// # Example
///
/// ```no_run
/// use roomcrop::extract_rooms_from_file;
///
/// let outcome = extract_rooms_from_file("plan.pdf").unwrap();
/// ```
#[cfg(feature = "tesseract")]
pub fn extract_rooms_from_file<P: AsRef<Path>>(path: P) -> Result<Extraction> {
    let data = std::fs::read(path)?;
    extract_rooms(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_detect_format_empty_data() {
        let data: [u8; 0] = [];
        let result = detect_format_from_bytes(&data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_format_too_short() {
        let data = b"%PDF-";
        let result = detect_format_from_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_format_unknown_magic() {
        let data = b"<!DOCTYPE html><html></html>";
        let result = detect_format_from_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_valid_pdf_17() {
        let data = b"%PDF-1.7\n%test";
        let format = detect_format_from_bytes(data).unwrap();
        assert_eq!(format.version, "1.7");
    }

    #[test]
    fn test_is_pdf_bytes() {
        assert!(is_pdf_bytes(b"%PDF-1.4\ntest"));
        assert!(!is_pdf_bytes(b"Not a PDF file"));
        assert!(!is_pdf_bytes(b""));
    }

    // ==================== Builder Pattern Tests ====================

    #[test]
    fn test_extract_options_defaults() {
        let options = ExtractOptions::default();
        assert_eq!(options.zoom, 6.0);
        assert_eq!(options.padding, 200);
        assert_eq!(options.layout, Layout::Centered);
    }

    #[test]
    fn test_extract_options_chained() {
        let options = ExtractOptions::new()
            .with_zoom(2.0)
            .with_padding(100)
            .with_image_scale(0.2)
            .with_layout(Layout::FixedOffset)
            .with_recognizer_config(RecognizerConfig::new().with_language("spa"));

        assert_eq!(options.zoom, 2.0);
        assert_eq!(options.padding, 100);
        assert_eq!(options.image_scale, 0.2);
        assert_eq!(options.layout, Layout::FixedOffset);
        assert_eq!(options.ocr.language, "spa");
    }

    #[test]
    fn test_layout_default() {
        assert_eq!(Layout::default(), Layout::Centered);
    }
}
