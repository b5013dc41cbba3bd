//! Segment geometry resolution.
//!
//! A segment may carry a raw coordinate sequence, an encoded route string,
//! both, or neither. Resolution applies a fixed priority and reports whether
//! it had to approximate, so the presentation layer can dash such routes.

use crate::domain::Segment;
use crate::domain::LatLng;

use super::polyline;

/// The drawable path for a segment.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPath {
    /// Ordered coordinates to draw.
    pub points: Vec<LatLng>,
    /// True when no authoritative route data existed and the path is a
    /// straight line between the endpoints. Part of the contract, not a
    /// styling hint: callers distinguish approximated routes visually.
    pub approximated: bool,
}

/// Error returned when a segment cannot be resolved at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// One or both endpoints lack a valid coordinate pair, so not even a
    /// straight-line fallback is possible. Callers skip the segment and log
    /// a warning; this is never fatal to the rest of the itinerary.
    #[error("segment has no renderable geometry")]
    NoRenderableGeometry,
}

/// Resolve the drawable path for a segment.
///
/// Priority order, first applicable wins:
///
/// 1. the segment's raw coordinate sequence, verbatim;
/// 2. its encoded route string, when it decodes to at least one point;
/// 3. the straight line between its endpoints (`approximated = true`).
///
/// An encoded string that decodes to nothing falls through to the straight
/// line and is reported as approximated.
pub fn resolve(segment: &Segment) -> Result<ResolvedPath, GeometryError> {
    let (Some(from), Some(to)) = (segment.from_coords(), segment.to_coords()) else {
        return Err(GeometryError::NoRenderableGeometry);
    };

    if let Some(points) = &segment.polyline {
        if !points.is_empty() {
            return Ok(ResolvedPath {
                points: points.clone(),
                approximated: false,
            });
        }
    }

    if let Some(encoded) = segment.encoded_polyline.as_deref() {
        let points = polyline::decode(encoded);
        if !points.is_empty() {
            return Ok(ResolvedPath {
                points,
                approximated: false,
            });
        }
    }

    Ok(ResolvedPath {
        points: vec![from, to],
        approximated: true,
    })
}
