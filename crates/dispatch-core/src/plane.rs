//! The normalized dispatch plane and its coordinate type.
//!
//! Driver and waypoint positions live on a flat `[0,100]×[0,100]` plane —
//! a rendering-friendly abstraction, not geographic coordinates.  `f32` gives
//! far more precision than the plane needs while keeping the type `Copy` and
//! cheap to move through snapshots.

/// Lower bound of both plane axes.
pub const PLANE_MIN: f32 = 0.0;
/// Upper bound of both plane axes.
pub const PLANE_MAX: f32 = 100.0;

/// A 2-D coordinate on the normalized dispatch plane.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanePoint {
    pub x: f32,
    pub y: f32,
}

impl PlanePoint {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other` in plane units.
    #[inline]
    pub fn distance(self, other: PlanePoint) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Direction from `self` toward `target` in degrees.
    ///
    /// Pure `atan2` convention: 0° points along +x, angles grow
    /// counter-clockwise, range `(-180, 180]`.  Any glyph-alignment offset is
    /// a presentation concern and is applied at the presentation boundary,
    /// never here.
    #[inline]
    pub fn heading_deg(self, target: PlanePoint) -> f32 {
        let dx = target.x - self.x;
        let dy = target.y - self.y;
        dy.atan2(dx).to_degrees()
    }

    /// The unit vector from `self` toward `target`, or `None` when the two
    /// points coincide (no meaningful direction).
    pub fn direction_to(self, target: PlanePoint) -> Option<(f32, f32)> {
        let dx = target.x - self.x;
        let dy = target.y - self.y;
        let norm = (dx * dx + dy * dy).sqrt();
        if norm == 0.0 {
            return None;
        }
        Some((dx / norm, dy / norm))
    }

    /// This point with both coordinates clamped onto the plane.
    #[inline]
    pub fn clamped(self) -> PlanePoint {
        PlanePoint {
            x: self.x.clamp(PLANE_MIN, PLANE_MAX),
            y: self.y.clamp(PLANE_MIN, PLANE_MAX),
        }
    }

    /// `true` if both coordinates are within plane bounds.
    #[inline]
    pub fn in_bounds(self) -> bool {
        (PLANE_MIN..=PLANE_MAX).contains(&self.x) && (PLANE_MIN..=PLANE_MAX).contains(&self.y)
    }
}

impl std::fmt::Display for PlanePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
