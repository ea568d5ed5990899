//! Pipeline orchestration.
//!
//! One run is a strictly sequential pass: render → recognize → filter →
//! crop → paginate. There is no batching, retry, or partial-failure
//! recovery; the first fatal error aborts the run. All intermediates are
//! owned values released by scope on every exit path, and concurrent
//! callers construct independent extractors (no shared mutable state).

use std::fmt;

use image::imageops;

use crate::compose::{self, ComposeOptions, Layout, PdfComposer};
use crate::detect;
use crate::error::Result;
use crate::filter;
use crate::model::{Extraction, RoomDocument, RoomRegion};
use crate::ocr::{self, RecognizerConfig, TextRecognizer};
use crate::raster::PageRasterizer;

/// Options for one extraction run.
///
/// Unifies the tuning constants of the pipeline into a single
/// configuration; none of these are exposed to the end user beyond the
/// caller's own surface.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Render magnification relative to the page's native point size.
    pub zoom: f32,

    /// Crop padding in raster pixels around each label's bounding box.
    pub padding: u32,

    /// Output image scale in millimetres per raster pixel.
    pub image_scale: f32,

    /// Image placement on the output page.
    pub layout: Layout,

    /// Recognition engine configuration.
    pub ocr: RecognizerConfig,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the render magnification.
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Set the crop padding in pixels.
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Set the output image scale (mm per raster pixel).
    pub fn with_image_scale(mut self, scale: f32) -> Self {
        self.image_scale = scale;
        self
    }

    /// Set the image placement.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the recognition language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.ocr = self.ocr.with_language(language);
        self
    }

    /// Set the recognizer configuration.
    pub fn with_recognizer_config(mut self, config: RecognizerConfig) -> Self {
        self.ocr = config;
        self
    }

    fn compose_options(&self) -> ComposeOptions {
        ComposeOptions::new()
            .with_image_scale(self.image_scale)
            .with_layout(self.layout)
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            zoom: 6.0,
            padding: 200,
            image_scale: 0.15,
            layout: Layout::Centered,
            ocr: RecognizerConfig::default(),
        }
    }
}

/// Pipeline stage, used for diagnostics.
///
/// Per run: `Idle → Rasterized → Recognized → Filtered → Assembling →
/// Done`, with failure reachable from any stage. No transition is
/// retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Rasterized,
    Recognized,
    Filtered,
    Assembling,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Rasterized => "rasterized",
            Stage::Recognized => "recognized",
            Stage::Filtered => "filtered",
            Stage::Assembling => "assembling",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// The extraction pipeline with its rendering and recognition engines.
///
/// Engines are injected capabilities so the pipeline can run against
/// deterministic stubs in tests. Use [`RoomExtractor::new`] (feature
/// `tesseract`) for the production pairing of PDFium and Tesseract.
pub struct RoomExtractor {
    rasterizer: Box<dyn PageRasterizer>,
    recognizer: Box<dyn TextRecognizer>,
    options: ExtractOptions,
}

impl RoomExtractor {
    /// Create an extractor with explicit engines.
    pub fn with_engines(
        rasterizer: Box<dyn PageRasterizer>,
        recognizer: Box<dyn TextRecognizer>,
        options: ExtractOptions,
    ) -> Self {
        Self {
            rasterizer,
            recognizer,
            options,
        }
    }

    /// Create an extractor with the production engines.
    ///
    /// # Errors
    ///
    /// Fails if the PDFium library cannot be bound or Tesseract cannot be
    /// initialized for the configured language.
    #[cfg(feature = "tesseract")]
    pub fn new(options: ExtractOptions) -> Result<Self> {
        let rasterizer = crate::raster::PdfiumRasterizer::new()?;
        let recognizer = crate::ocr::LeptessRecognizer::new(&options.ocr)?;
        Ok(Self::with_engines(
            Box::new(rasterizer),
            Box::new(recognizer),
            options,
        ))
    }

    /// The options this extractor runs with.
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Run the pipeline over one uploaded document.
    ///
    /// # Errors
    ///
    /// Input and recognition failures abort the run. A run with zero
    /// matching labels is not an error; it returns
    /// [`Extraction::NoRooms`].
    pub fn extract(&mut self, input: &[u8]) -> Result<Extraction> {
        let format = detect::detect_format_from_bytes(input)?;
        log::debug!("input accepted as {format}");

        let raster = self.rasterizer.rasterize(input, self.options.zoom)?;
        log::debug!(
            "stage {}: {}x{} raster at zoom {}",
            Stage::Rasterized,
            raster.width(),
            raster.height(),
            self.options.zoom
        );

        let gray = imageops::grayscale(&raster);
        let detections = ocr::retain_nonempty(self.recognizer.recognize(&gray)?);
        drop(gray);
        log::debug!("stage {}: {} detections", Stage::Recognized, detections.len());

        let candidates = filter::room_candidates(detections);
        log::debug!(
            "stage {}: {} room candidates",
            Stage::Filtered,
            candidates.len()
        );
        if candidates.is_empty() {
            return Ok(Extraction::NoRooms);
        }

        log::debug!("stage {}", Stage::Assembling);
        let mut composer = PdfComposer::new(self.options.compose_options());
        let mut rooms = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let Some(crop) = compose::crop_bounds(
                &candidate.bbox,
                self.options.padding,
                raster.width(),
                raster.height(),
            ) else {
                log::debug!(
                    "skipping degenerate crop for {:?} at {:?}",
                    candidate.text,
                    candidate.bbox
                );
                continue;
            };

            let region = compose::crop_region(&raster, &crop);
            composer.add_room_page(&candidate.text, &region)?;
            rooms.push(RoomRegion {
                label: candidate.text,
                bbox: candidate.bbox,
                crop,
            });
        }

        // Every candidate can still be degenerate.
        if rooms.is_empty() {
            return Ok(Extraction::NoRooms);
        }

        let bytes = composer.finish()?;
        log::debug!("stage {}: {} pages", Stage::Done, rooms.len());
        Ok(Extraction::Document(RoomDocument { bytes, rooms }))
    }
}
