//! Incremental PDF output writer.
//!
//! Builds the output document page by page over `lopdf`: each page is A4
//! portrait with a centered 12 pt Helvetica heading and one embedded RGB
//! image (Flate-compressed raw samples, no intermediate files).

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use image::RgbImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};

use crate::compose::{ComposeOptions, Layout};
use crate::error::Result;

const A4_WIDTH_MM: f32 = 210.0;
const A4_HEIGHT_MM: f32 = 297.0;
const MM_TO_PT: f32 = 72.0 / 25.4;

const A4_WIDTH_PT: f32 = A4_WIDTH_MM * MM_TO_PT;
const A4_HEIGHT_PT: f32 = A4_HEIGHT_MM * MM_TO_PT;

const HEADING_SIZE_PT: f32 = 12.0;
/// Heading baseline distance from the top edge.
const HEADING_TOP_MM: f32 = 16.0;
const SIDE_MARGIN_MM: f32 = 10.0;
const BOTTOM_MARGIN_MM: f32 = 10.0;

/// Incremental writer for the per-room output document.
///
/// Pages are appended in call order and the document is serialized once
/// by [`PdfComposer::finish`]. The composer never emits an empty
/// document; the pipeline reports "no rooms" instead of finishing with
/// zero pages.
pub struct PdfComposer {
    doc: Document,
    pages_id: ObjectId,
    font_id: ObjectId,
    kids: Vec<Object>,
    options: ComposeOptions,
}

impl PdfComposer {
    /// Create an empty composer.
    pub fn new(options: ComposeOptions) -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
            "Encoding" => "WinAnsiEncoding",
        });

        Self {
            doc,
            pages_id,
            font_id,
            kids: Vec::new(),
            options,
        }
    }

    /// Append one page: heading, then the cropped image.
    pub fn add_room_page(&mut self, label: &str, image: &RgbImage) -> Result<()> {
        let (width_px, height_px) = image.dimensions();
        let image_id = self.doc.add_object(image_xobject(image)?);

        let (x_pt, y_pt, w_pt, h_pt) = self.place_image(width_px, height_px);
        let heading_x = centered_heading_x(label);
        let heading_y = (A4_HEIGHT_MM - HEADING_TOP_MM) * MM_TO_PT;

        let operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), HEADING_SIZE_PT.into()]),
            Operation::new("Td", vec![heading_x.into(), heading_y.into()]),
            Operation::new("Tj", vec![Object::string_literal(encode_win_ansi(label))]),
            Operation::new("ET", vec![]),
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    w_pt.into(),
                    0.into(),
                    0.into(),
                    h_pt.into(),
                    x_pt.into(),
                    y_pt.into(),
                ],
            ),
            Operation::new("Do", vec!["Im0".into()]),
            Operation::new("Q", vec![]),
        ];

        let content = Content { operations };
        let content_id = self
            .doc
            .add_object(Stream::new(dictionary! {}, content.encode()?));

        let resources = dictionary! {
            "Font" => dictionary! { "F1" => self.font_id },
            "XObject" => dictionary! { "Im0" => image_id },
        };

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), A4_WIDTH_PT.into(), A4_HEIGHT_PT.into()],
            "Contents" => content_id,
            "Resources" => resources,
        });
        self.kids.push(page_id.into());

        Ok(())
    }

    /// Number of pages appended so far.
    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Finalize and serialize the document to bytes.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let kids = std::mem::take(&mut self.kids);
        let count = kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);
        self.doc.compress();

        let mut bytes = Vec::new();
        self.doc.save_to(&mut bytes)?;
        Ok(bytes)
    }

    /// Compute the image placement rectangle in page points.
    ///
    /// The image is scaled by `image_scale` (mm per raster pixel) and
    /// positioned per the layout; it is shrunk further only when it would
    /// overflow the content box.
    fn place_image(&self, width_px: u32, height_px: u32) -> (f32, f32, f32, f32) {
        let mut width_mm = width_px as f32 * self.options.image_scale;
        let mut height_mm = height_px as f32 * self.options.image_scale;

        let (fixed_x_mm, top_mm) = match self.options.layout {
            Layout::Centered => (None, 30.0),
            Layout::FixedOffset => (Some(10.0), 20.0),
        };

        let max_width_mm = A4_WIDTH_MM - 2.0 * SIDE_MARGIN_MM;
        let max_height_mm = A4_HEIGHT_MM - top_mm - BOTTOM_MARGIN_MM;
        let fit = (max_width_mm / width_mm)
            .min(max_height_mm / height_mm)
            .min(1.0);
        width_mm *= fit;
        height_mm *= fit;

        let x_mm = fixed_x_mm.unwrap_or((A4_WIDTH_MM - width_mm) / 2.0);
        // PDF origin is bottom-left.
        let y_mm = A4_HEIGHT_MM - top_mm - height_mm;

        (
            x_mm * MM_TO_PT,
            y_mm * MM_TO_PT,
            width_mm * MM_TO_PT,
            height_mm * MM_TO_PT,
        )
    }
}

/// Build an RGB image XObject stream (Flate-compressed raw samples).
fn image_xobject(image: &RgbImage) -> Result<Stream> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(image.as_raw())?;
    let data = encoder.finish()?;

    Ok(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(image.width()),
            "Height" => i64::from(image.height()),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        },
        data,
    ))
}

/// Horizontal start of a centered heading, with a coarse Helvetica
/// advance estimate of half an em per character.
fn centered_heading_x(label: &str) -> f32 {
    let text_width = label.chars().count() as f32 * HEADING_SIZE_PT * 0.5;
    ((A4_WIDTH_PT - text_width) / 2.0).max(SIDE_MARGIN_MM * MM_TO_PT)
}

/// Map the label to WinAnsi bytes; characters outside Latin-1 become '?'.
fn encode_win_ansi(label: &str) -> Vec<u8> {
    label
        .chars()
        .map(|c| if (c as u32) <= 0xFF { c as u8 } else { b'?' })
        .collect()
}
