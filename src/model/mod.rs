//! Data model for the extraction pipeline.
//!
//! These types bridge the pipeline stages: the recognizer produces
//! [`Detection`]s in raster pixel coordinates, the filter narrows them to
//! room candidates, and the assembler resolves each surviving candidate
//! into a [`RoomRegion`] with its clipped crop bounds. Nothing here
//! persists beyond one run.

mod detection;
mod outcome;

pub use detection::{BBox, CropRect, Detection};
pub use outcome::{Extraction, RoomDocument, RoomRegion};
