//! Recognizer output types in raster pixel coordinates.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in pixel coordinates of the rasterized page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BBox {
    /// Left coordinate (x)
    pub x: u32,
    /// Top coordinate (y)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl BBox {
    /// Create a new bounding box.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge coordinate (exclusive).
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge coordinate (exclusive).
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }
}

/// A single text detection: recognized text plus its bounding box.
///
/// Detections form a flat, stably-sequenced list. There is no identity
/// beyond position in the list; the pipeline preserves the order the
/// recognizer emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// The recognized text content
    pub text: String,
    /// Bounding box of the text in raster pixels
    pub bbox: BBox,
}

impl Detection {
    /// Create a new detection.
    pub fn new(text: impl Into<String>, bbox: BBox) -> Self {
        Self {
            text: text.into(),
            bbox,
        }
    }
}

/// Crop bounds clipped to the raster extents.
///
/// Constructed only by the assembler's bounds computation, which
/// guarantees non-zero area and containment within the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRect {
    /// Left coordinate (x)
    pub x: u32,
    /// Top coordinate (y)
    pub y: u32,
    /// Width in pixels (non-zero)
    pub width: u32,
    /// Height in pixels (non-zero)
    pub height: u32,
}

impl CropRect {
    /// Create a new crop rectangle.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Area in pixels.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_edges() {
        let bbox = BBox::new(100, 200, 80, 20);
        assert_eq!(bbox.right(), 180);
        assert_eq!(bbox.bottom(), 220);
    }

    #[test]
    fn test_bbox_edges_saturate() {
        let bbox = BBox::new(u32::MAX - 1, 0, 10, 5);
        assert_eq!(bbox.right(), u32::MAX);
    }

    #[test]
    fn test_crop_rect_area() {
        let crop = CropRect::new(0, 0, 300, 200);
        assert_eq!(crop.area(), 60_000);
    }

    #[test]
    fn test_detection_new() {
        let det = Detection::new("SALA 101", BBox::new(1, 2, 3, 4));
        assert_eq!(det.text, "SALA 101");
        assert_eq!(det.bbox.width, 3);
    }
}
