//! Run outcome types.

use serde::{Deserialize, Serialize};

use super::{BBox, CropRect};

/// A room candidate that survived cropping, with its resolved bounds.
///
/// Each `RoomRegion` corresponds to exactly one page of the output
/// document, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRegion {
    /// The recognized room label (used as the page heading)
    pub label: String,
    /// Bounding box of the label text in raster pixels
    pub bbox: BBox,
    /// Padded crop bounds, clipped to the raster extents
    pub crop: CropRect,
}

/// The assembled output document plus the regions it was built from.
#[derive(Debug, Clone)]
pub struct RoomDocument {
    /// Serialized PDF bytes (A4 portrait, one page per room)
    pub bytes: Vec<u8>,
    /// Surviving room regions in page order
    pub rooms: Vec<RoomRegion>,
}

impl RoomDocument {
    /// Number of pages in the output document.
    ///
    /// Invariant: equals the number of surviving (non-degenerate) room
    /// candidates.
    pub fn page_count(&self) -> usize {
        self.rooms.len()
    }

    /// Labels in page order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(|r| r.label.as_str())
    }
}

/// Outcome of one pipeline run.
///
/// A run that completes but matches no room labels is not a failure; it
/// yields [`Extraction::NoRooms`] and no document is produced. An empty
/// or corrupt PDF is never emitted.
#[derive(Debug, Clone)]
pub enum Extraction {
    /// At least one room was found; the output document was assembled.
    Document(RoomDocument),
    /// No detection passed the room filter (or every crop was degenerate).
    NoRooms,
}

impl Extraction {
    /// True if the run found no rooms.
    pub fn is_no_rooms(&self) -> bool {
        matches!(self, Extraction::NoRooms)
    }

    /// The assembled document, if any rooms were found.
    pub fn document(&self) -> Option<&RoomDocument> {
        match self {
            Extraction::Document(doc) => Some(doc),
            Extraction::NoRooms => None,
        }
    }

    /// Consume the outcome, returning the document if any rooms were found.
    pub fn into_document(self) -> Option<RoomDocument> {
        match self {
            Extraction::Document(doc) => Some(doc),
            Extraction::NoRooms => None,
        }
    }
}
