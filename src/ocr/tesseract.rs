//! Tesseract recognizer backed by `leptess`.

use std::io::Cursor;

use image::{GrayImage, ImageFormat};
use leptess::{LepTess, Variable};

use crate::error::{Error, Result};
use crate::model::Detection;
use crate::ocr::{parse_tsv_detections, RecognizerConfig, TextRecognizer};

/// Production [`TextRecognizer`] over native Tesseract.
///
/// Word boxes are taken from Tesseract's TSV output, which reports
/// coordinates in the pixel space of the image it was given.
pub struct LeptessRecognizer {
    engine: LepTess,
}

impl LeptessRecognizer {
    /// Initialize Tesseract with the configured language and page
    /// segmentation mode.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Recognition`] if the engine or its language data
    /// cannot be loaded.
    pub fn new(config: &RecognizerConfig) -> Result<Self> {
        let mut engine = LepTess::new(None, &config.language)
            .map_err(|e| Error::Recognition(format!("tesseract init failed: {e}")))?;

        engine
            .set_variable(
                Variable::TesseditPagesegMode,
                &config.page_seg_mode.to_string(),
            )
            .map_err(|e| Error::Recognition(format!("cannot set page segmentation mode: {e}")))?;

        Ok(Self { engine })
    }
}

impl TextRecognizer for LeptessRecognizer {
    fn recognize(&mut self, image: &GrayImage) -> Result<Vec<Detection>> {
        // Leptonica reads encoded bytes, so round-trip through in-memory PNG.
        let mut png = Cursor::new(Vec::new());
        image
            .write_to(&mut png, ImageFormat::Png)
            .map_err(|e| Error::Recognition(format!("cannot encode raster for OCR: {e}")))?;

        self.engine
            .set_image_from_mem(png.get_ref())
            .map_err(|e| Error::Recognition(format!("leptonica rejected raster: {e}")))?;

        let tsv = self
            .engine
            .get_tsv_text(0)
            .map_err(|e| Error::Recognition(format!("tesseract produced no output: {e}")))?;

        Ok(parse_tsv_detections(&tsv))
    }
}
