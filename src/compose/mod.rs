//! Crop & paginate assembler.
//!
//! Computes padded, clipped crop bounds for each room candidate and
//! assembles the output document one page at a time via [`PdfComposer`].

mod pdf;

pub use pdf::PdfComposer;

use image::{imageops, RgbImage};

use crate::model::{BBox, CropRect};

/// Options controlling page assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeOptions {
    /// Output image scale in millimetres per raster pixel.
    pub image_scale: f32,

    /// Image placement on the page.
    pub layout: Layout,
}

impl ComposeOptions {
    /// Create new compose options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image scale (mm per raster pixel).
    pub fn with_image_scale(mut self, scale: f32) -> Self {
        self.image_scale = scale;
        self
    }

    /// Set the image placement.
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            image_scale: 0.15,
            layout: Layout::Centered,
        }
    }
}

/// Image placement on the output page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Horizontally centered, 30 mm below the top edge.
    #[default]
    Centered,
    /// Fixed offset: 10 mm from the left, 20 mm below the top edge.
    FixedOffset,
}

/// Compute padded crop bounds for a detection, clipped to the raster.
///
/// The bounding box is expanded by `padding` pixels on all four sides and
/// clamped to `[0, image_width) × [0, image_height)`. Returns `None` when
/// the clipped region has zero area (the candidate lies outside the
/// raster), which the pipeline treats as a silent per-item skip.
pub fn crop_bounds(
    bbox: &BBox,
    padding: u32,
    image_width: u32,
    image_height: u32,
) -> Option<CropRect> {
    let x0 = bbox.x.saturating_sub(padding);
    let y0 = bbox.y.saturating_sub(padding);
    let x1 = bbox.right().saturating_add(padding).min(image_width);
    let y1 = bbox.bottom().saturating_add(padding).min(image_height);

    if x1 <= x0 || y1 <= y0 {
        return None;
    }

    Some(CropRect::new(x0, y0, x1 - x0, y1 - y0))
}

/// Copy the crop region out of the raster.
pub fn crop_region(raster: &RgbImage, crop: &CropRect) -> RgbImage {
    imageops::crop_imm(raster, crop.x, crop.y, crop.width, crop.height).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_bounds_interior() {
        let bbox = BBox::new(500, 500, 80, 20);
        let crop = crop_bounds(&bbox, 100, 2000, 2000).unwrap();
        assert_eq!(crop, CropRect::new(400, 400, 280, 220));
    }

    #[test]
    fn test_crop_bounds_clips_at_origin() {
        let bbox = BBox::new(0, 0, 50, 20);
        let crop = crop_bounds(&bbox, 200, 1000, 1000).unwrap();
        assert_eq!(crop.x, 0);
        assert_eq!(crop.y, 0);
        assert_eq!(crop.width, 250);
        assert_eq!(crop.height, 220);
    }

    #[test]
    fn test_crop_bounds_clips_at_far_edge() {
        let bbox = BBox::new(950, 980, 100, 50);
        let crop = crop_bounds(&bbox, 100, 1000, 1000).unwrap();
        assert_eq!(crop.x + crop.width, 1000);
        assert_eq!(crop.y + crop.height, 1000);
    }

    #[test]
    fn test_crop_bounds_degenerate_outside_raster() {
        // Entirely beyond the raster: clipped region has zero area.
        let bbox = BBox::new(5000, 5000, 100, 50);
        assert!(crop_bounds(&bbox, 100, 1000, 1000).is_none());
    }

    #[test]
    fn test_crop_bounds_zero_size_bbox_no_padding() {
        let bbox = BBox::new(100, 100, 0, 0);
        assert!(crop_bounds(&bbox, 0, 1000, 1000).is_none());
    }

    #[test]
    fn test_crop_bounds_zero_size_bbox_with_padding() {
        // Padding alone gives the region area.
        let bbox = BBox::new(100, 100, 0, 0);
        let crop = crop_bounds(&bbox, 50, 1000, 1000).unwrap();
        assert_eq!(crop, CropRect::new(50, 50, 100, 100));
    }

    #[test]
    fn test_crop_region_dimensions() {
        let raster = RgbImage::from_pixel(400, 300, image::Rgb([255, 255, 255]));
        let crop = CropRect::new(10, 20, 100, 50);
        let region = crop_region(&raster, &crop);
        assert_eq!(region.dimensions(), (100, 50));
    }

    #[test]
    fn test_compose_options_builder() {
        let options = ComposeOptions::new()
            .with_image_scale(0.2)
            .with_layout(Layout::FixedOffset);
        assert_eq!(options.image_scale, 0.2);
        assert_eq!(options.layout, Layout::FixedOffset);
    }
}
