//! Connector path geometry.
//!
//! A relation between two table cards is rendered as a cubic bezier curve
//! that leaves the source card horizontally and arrives at the target card
//! horizontally, whatever the vertical offset between the two cards. This
//! module computes the curve from the two anchor points and serializes it
//! as SVG path commands for rendering.

/// Which end of a relation an anchor belongs to.
///
/// Source anchors sit on the right edge of a card, target anchors on the
/// left edge, so the curve always flows out of the source toward the
/// target's facing side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorRole {
    /// The referenced end of the relation (curve departs here).
    Source,
    /// The referencing end of the relation (curve arrives here).
    Target,
}

/// A cubic bezier connector between two anchor points.
///
/// Control points are derived from the anchors alone; the path holds no
/// state of its own and can be rebuilt at any time from current card
/// positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectorPath {
    pub start: (f32, f32),
    pub ctrl1: (f32, f32),
    pub ctrl2: (f32, f32),
    pub end: (f32, f32),
}

/// Build the connector curve between a source anchor and a target anchor.
///
/// The control points extend horizontally from each anchor by half the
/// horizontal distance between the anchors, which makes the curve depart
/// and arrive horizontally regardless of where the cards sit relative to
/// each other.
///
/// If both anchors share the same x coordinate the control points collapse
/// onto the anchors and the curve degenerates to a vertical segment. That
/// is a valid path, not an error.
///
/// # Arguments
/// * `source` - Source anchor (right edge of the source card)
/// * `target` - Target anchor (left edge of the target card)
pub fn build_connector_path(source: (f32, f32), target: (f32, f32)) -> ConnectorPath {
    let control_offset = (target.0 - source.0).abs() * 0.5;

    ConnectorPath {
        start: source,
        ctrl1: (source.0 + control_offset, source.1),
        ctrl2: (target.0 - control_offset, target.1),
        end: target,
    }
}

impl ConnectorPath {
    /// Serialize to SVG path commands.
    ///
    /// # Returns
    /// A path command string (e.g., `"M 264 95 C 292 95 292 250 320 250"`).
    pub fn to_svg_commands(&self) -> String {
        format!(
            "M {} {} C {} {} {} {} {} {}",
            self.start.0,
            self.start.1,
            self.ctrl1.0,
            self.ctrl1.1,
            self.ctrl2.0,
            self.ctrl2.1,
            self.end.0,
            self.end.1,
        )
    }

    /// Evaluate the curve at parameter t (0.0 to 1.0).
    pub fn eval(&self, t: f32) -> (f32, f32) {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        let x = mt3 * self.start.0
            + 3.0 * mt2 * t * self.ctrl1.0
            + 3.0 * mt * t2 * self.ctrl2.0
            + t3 * self.end.0;
        let y = mt3 * self.start.1
            + 3.0 * mt2 * t * self.ctrl1.1
            + 3.0 * mt * t2 * self.ctrl2.1
            + t3 * self.end.1;

        (x, y)
    }
}

/// Squared distance from a point to a line segment.
fn distance_to_segment_sq(point: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let ab = (b.0 - a.0, b.1 - a.1);
    let ap = (point.0 - a.0, point.1 - a.1);

    let ab_len_sq = ab.0 * ab.0 + ab.1 * ab.1;

    if ab_len_sq < f32::EPSILON {
        // Degenerate segment (a == b)
        return ap.0 * ap.0 + ap.1 * ap.1;
    }

    // Project point onto line, clamped to segment
    let t = ((ap.0 * ab.0 + ap.1 * ab.1) / ab_len_sq).clamp(0.0, 1.0);

    let closest = (a.0 + t * ab.0, a.1 + t * ab.1);

    let dx = point.0 - closest.0;
    let dy = point.1 - closest.1;
    dx * dx + dy * dy
}

/// Minimum distance from a point to a connector curve.
///
/// Samples the curve at regular intervals and measures against the
/// resulting polyline.
///
/// # Arguments
/// * `point` - The point to measure distance from
/// * `path` - The connector curve
/// * `num_samples` - Number of samples (0 falls back to 20)
pub fn distance_to_connector(point: (f32, f32), path: &ConnectorPath, num_samples: usize) -> f32 {
    let num_samples = if num_samples == 0 { 20 } else { num_samples };

    let mut min_dist_sq = f32::MAX;
    let mut prev_point = path.eval(0.0);

    for i in 1..=num_samples {
        let t = i as f32 / num_samples as f32;
        let curr_point = path.eval(t);

        let dist_sq = distance_to_segment_sq(point, prev_point, curr_point);
        if dist_sq < min_dist_sq {
            min_dist_sq = dist_sq;
        }

        prev_point = curr_point;
    }

    min_dist_sq.sqrt()
}
