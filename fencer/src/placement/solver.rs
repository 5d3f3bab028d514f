use crate::geometry::primitives::Edge;
use crate::geometry::{HeadingReference, Orientation};

/// Heading of an edge: the signed angle around the up axis from `reference` to the horizontal
/// projection of the edge, positive when turning from +x toward +z.
///
/// An edge without horizontal extent (vertical or degenerate) has a yaw of 0.
pub fn yaw(edge: &Edge, reference: &HeadingReference) -> f64 {
    let d = edge.vector();
    let Some(r) = reference.unit() else {
        return 0.0;
    };
    let cross = r.0 * d.2 - r.2 * d.0;
    let dot = r.0 * d.0 + r.2 * d.2;
    match cross == 0.0 && dot == 0.0 {
        true => 0.0,
        false => cross.atan2(dot),
    }
}

/// Slope of a (conformed) sub-segment: the signed angle between its horizontal projection and its
/// full displacement. Positive uphill, negative downhill, within [-90°, 90°].
///
/// A purely vertical sub-segment tilts a full ±90°, one without any displacement not at all.
pub fn tilt(sub_segment: &Edge) -> f64 {
    sub_segment.rise().atan2(sub_segment.horizontal_length())
}

/// Orientation of an element spanning `sub_segment` on `edge`.
///
/// The yaw follows the parent edge so every element of one edge shares the same heading,
/// the tilt follows the sub-segment itself.
pub fn orient(sub_segment: &Edge, edge: &Edge, reference: &HeadingReference) -> Orientation {
    Orientation::new(yaw(edge, reference), tilt(sub_segment))
}
