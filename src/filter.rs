//! Room label filter.
//!
//! Floor-plan label fonts and OCR noise make exact tokenization
//! unreliable, so matching is deliberately loose: case-insensitive
//! substrings, trading precision for recall. Stray text containing "sala"
//! inside another word is accepted and not filtered further.

use crate::model::Detection;

/// Room-label predicate.
///
/// Accepts iff the uppercased text contains `"SALA"`, or contains both
/// `"SUP"` and `"M2"` as substrings (not necessarily adjacent or
/// word-bounded).
pub fn is_room_label(text: &str) -> bool {
    let upper = text.to_uppercase();
    upper.contains("SALA") || (upper.contains("SUP") && upper.contains("M2"))
}

/// Select detections whose text matches the room-label pattern.
///
/// Order-preserving subset of the input.
pub fn room_candidates(detections: Vec<Detection>) -> Vec<Detection> {
    detections
        .into_iter()
        .filter(|d| is_room_label(&d.text))
        .collect()
}
