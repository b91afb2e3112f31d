//! Presentation-boundary helpers.
//!
//! The simulation core stores pure `atan2` headings (0° = +x,
//! counter-clockwise).  Map renderers that draw a north-facing vehicle glyph
//! rotate it by a fixed +90° so the glyph points along the direction of
//! travel.  That offset is a drawing convention, so it lives here and is
//! applied on the way out — never inside the simulator.

/// Fixed rotation aligning a north-facing glyph with the travel direction.
pub const GLYPH_HEADING_OFFSET_DEG: f32 = 90.0;

/// Heading as a renderer wants it: glyph offset applied, normalized to
/// `[0, 360)`.
pub fn display_heading_deg(heading_deg: f32) -> f32 {
    (heading_deg + GLYPH_HEADING_OFFSET_DEG).rem_euclid(360.0)
}
