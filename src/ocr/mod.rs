//! Text recognition over the rasterized page.
//!
//! Recognition quality is delegated entirely to the external engine; this
//! module owns only its configuration and the conversion of engine output
//! into [`Detection`]s aligned to raster pixel coordinates. The recognizer
//! is a capability interface so tests can inject canned detections.

#[cfg(feature = "tesseract")]
mod tesseract;

#[cfg(feature = "tesseract")]
pub use tesseract::LeptessRecognizer;

use image::GrayImage;

use crate::error::Result;
use crate::model::{BBox, Detection};

/// Abstract interface for text recognition.
///
/// The pipeline hands implementations a grayscale conversion of the
/// rasterized page and expects word-level detections in the same pixel
/// coordinate space, in whatever order the engine emits them.
pub trait TextRecognizer {
    /// Recognize text in the image.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Recognition`] if the engine fails to run.
    /// Failures here are fatal to the run.
    fn recognize(&mut self, image: &GrayImage) -> Result<Vec<Detection>>;
}

/// Configuration for the recognition engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// Tesseract language code (e.g., "eng", "spa")
    pub language: String,

    /// Page segmentation mode. The default, 6, assumes a single uniform
    /// block of text with no column or paragraph segmentation, which
    /// suits sparse floor-plan labels. The OCR engine mode is left at
    /// Tesseract's default (LSTM + legacy, the equivalent of `--oem 3`).
    pub page_seg_mode: u8,
}

impl RecognizerConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recognition language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the page segmentation mode.
    pub fn with_page_seg_mode(mut self, mode: u8) -> Self {
        self.page_seg_mode = mode;
        self
    }
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            page_seg_mode: 6,
        }
    }
}

/// Word-row level in Tesseract TSV output.
const TSV_WORD_LEVEL: u32 = 5;

/// Parse Tesseract TSV output into detections.
///
/// The TSV table has one row per layout element (page, block, paragraph,
/// line, word); only word rows carry text. Rows with empty or
/// whitespace-only text are dropped here, as are malformed rows and the
/// header row.
pub fn parse_tsv_detections(tsv: &str) -> Vec<Detection> {
    let mut detections = Vec::new();

    for line in tsv.lines() {
        let cols: Vec<&str> = line.split('\t').collect();
        if cols.len() < 12 {
            continue;
        }

        // The header row fails this parse and is skipped with it.
        let Ok(level) = cols[0].parse::<u32>() else {
            continue;
        };
        if level != TSV_WORD_LEVEL {
            continue;
        }

        let (Ok(left), Ok(top), Ok(width), Ok(height)) = (
            cols[6].parse::<i64>(),
            cols[7].parse::<i64>(),
            cols[8].parse::<i64>(),
            cols[9].parse::<i64>(),
        ) else {
            continue;
        };

        let text = cols[11].trim();
        if text.is_empty() {
            continue;
        }

        detections.push(Detection::new(
            text,
            BBox::new(
                left.max(0) as u32,
                top.max(0) as u32,
                width.max(0) as u32,
                height.max(0) as u32,
            ),
        ));
    }

    detections
}

/// Trim detection text and drop empty or whitespace-only detections.
///
/// Applied by the pipeline to every recognizer's output before filtering,
/// so stub implementations need not bother trimming.
pub fn retain_nonempty(detections: Vec<Detection>) -> Vec<Detection> {
    detections
        .into_iter()
        .filter_map(|mut detection| {
            let trimmed = detection.text.trim();
            if trimmed.is_empty() {
                return None;
            }
            if trimmed.len() != detection.text.len() {
                detection.text = trimmed.to_string();
            }
            Some(detection)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_TSV: &str = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext\n\
        1\t1\t0\t0\t0\t0\t0\t0\t2000\t1500\t-1\t\n\
        4\t1\t1\t1\t1\t0\t90\t95\t300\t30\t-1\t\n\
        5\t1\t1\t1\t1\t1\t100\t100\t80\t20\t96.5\tSALA\n\
        5\t1\t1\t1\t1\t2\t190\t100\t40\t20\t91.0\t101\n\
        5\t1\t1\t1\t2\t1\t300\t400\t100\t25\t88.2\t \n";

    #[test]
    fn test_parse_tsv_word_rows_only() {
        let detections = parse_tsv_detections(SAMPLE_TSV);
        assert_eq!(detections.len(), 2);
        assert_eq!(detections[0].text, "SALA");
        assert_eq!(detections[0].bbox, BBox::new(100, 100, 80, 20));
        assert_eq!(detections[1].text, "101");
    }

    #[test]
    fn test_parse_tsv_skips_header_and_malformed() {
        let tsv = "level\tpage\nnot\tenough\tcolumns\n";
        assert!(parse_tsv_detections(tsv).is_empty());
    }

    #[test]
    fn test_parse_tsv_clamps_negative_coords() {
        let tsv = "5\t1\t1\t1\t1\t1\t-3\t-1\t80\t20\t90.0\tSALA\n";
        let detections = parse_tsv_detections(tsv);
        assert_eq!(detections.len(), 1);
        assert_eq!(detections[0].bbox, BBox::new(0, 0, 80, 20));
    }

    #[test]
    fn test_retain_nonempty_trims() {
        let input = vec![
            Detection::new("  SALA 101  ", BBox::new(0, 0, 10, 10)),
            Detection::new("   ", BBox::new(5, 5, 10, 10)),
            Detection::new("", BBox::new(6, 6, 10, 10)),
            Detection::new("SUP", BBox::new(7, 7, 10, 10)),
        ];
        let kept = retain_nonempty(input);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].text, "SALA 101");
        assert_eq!(kept[1].text, "SUP");
    }

    #[test]
    fn test_recognizer_config_builder() {
        let config = RecognizerConfig::new()
            .with_language("spa")
            .with_page_seg_mode(11);
        assert_eq!(config.language, "spa");
        assert_eq!(config.page_seg_mode, 11);
    }

    #[test]
    fn test_recognizer_config_defaults() {
        let config = RecognizerConfig::default();
        assert_eq!(config.language, "eng");
        assert_eq!(config.page_seg_mode, 6);
    }
}
