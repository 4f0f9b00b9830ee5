//! **Mathematical Foundation: Trapezoidal Rack Tooth**
//!
//! A rack is a gear of infinite radius, so its involute flanks degenerate to
//! straight lines inclined by the pressure angle `α`. With module `m`, head
//! factor `h` and clearance factor `c`, one tooth centred on the origin has
//! pitch-axis coordinates `x` and height-axis coordinates `y`:
//! ```text
//! x₁ = -mπ/2                 y₁ = -m(1 + c)
//! x₂ = -mπ/4 + y₁·tan α      y₂ = y₁
//! x₃ = -mπ/4 + y₃·tan α      y₃ =  m(1 + h)
//! x₄..x₆ = -x₃, -x₂, -x₁     y₄..y₆ = y₃, y₂, y₁
//! ```
//! The pitch line (`y = 0`) splits each pitch `mπ` into equal tooth and gap
//! widths of `mπ/2`. Points are stored as `(y, x, 0)`: the height axis is X
//! and the pitch axis is Y of the sketch plane.

use crate::errors::RackError;
use crate::float_types::{PI, Real};
use crate::params::RackProperties;
use crate::sketch::{Edge, Wire, insert_fillet};
use nalgebra::Point3;
use tracing::debug;

/// Edge slots of the four tooth corners, in insertion order: left root,
/// left tip, right tip, right root.
pub const FILLET_SLOTS: [usize; 4] = [0, 2, 4, 6];

/// The six raw vertices of one tooth before any rounding.
///
/// Runs root-left, flank-root-left, tip-left, tip-right, flank-root-right,
/// root-right, and is mirror symmetric about the pitch-axis origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToothProfile {
    pub vertices: [Point3<Real>; 6],
}

impl ToothProfile {
    /// The five straight segments joining consecutive vertices.
    pub fn segments(&self) -> [[Point3<Real>; 2]; 5] {
        let v = &self.vertices;
        [[v[0], v[1]], [v[1], v[2]], [v[2], v[3]], [v[3], v[4]], [v[4], v[5]]]
    }

    /// Height of the tooth tip above the pitch line.
    pub fn tip_height(&self) -> Real {
        self.vertices[2].x
    }

    /// Depth of the tooth root below the pitch line (negative).
    pub fn root_height(&self) -> Real {
        self.vertices[0].x
    }
}

/// Computes the raw tooth vertices from the transverse properties.
pub fn tooth_points(properties: &RackProperties, head: Real, clearance: Real) -> ToothProfile {
    let m = properties.module;
    let tan_alpha = properties.pressure_angle.tan();

    let x1 = -m * PI / 2.0;
    let y1 = -m * (1.0 + clearance);
    let x2 = -m * PI / 4.0 + y1 * tan_alpha;
    let y3 = m * (1.0 + head);
    let x3 = -m * PI / 4.0 + y3 * tan_alpha;

    let at = |x: Real, y: Real| Point3::new(y, x, 0.0);
    ToothProfile {
        vertices: [
            at(x1, y1),
            at(x2, y1),
            at(x3, y3),
            at(-x3, y3),
            at(-x2, y1),
            at(-x1, y1),
        ],
    }
}

/// Connects the raw vertices into a five-edge wire.
pub fn tooth_wire(profile: &ToothProfile) -> Result<Wire, RackError> {
    Wire::from_segments(&profile.segments())
}

/// Rounds the two root and two tip corners of a raw tooth wire.
///
/// Radii are absolute lengths; 0 keeps a corner sharp. The result is the
/// continuous edge chain of the rounded tooth.
pub fn filleted_tooth_edges(
    tooth: &Wire,
    head_radius: Real,
    root_radius: Real,
) -> Result<Vec<Edge>, RackError> {
    if tooth.len() != 5 {
        return Err(RackError::geometry(format!(
            "a raw tooth has 5 edges, got {}",
            tooth.len()
        )));
    }
    let radii = [root_radius, head_radius, head_radius, root_radius];

    let mut slots: Vec<Option<Edge>> = tooth.edges().iter().copied().map(Some).collect();
    for (pos, radius) in FILLET_SLOTS.into_iter().zip(radii) {
        slots = insert_fillet(slots, pos, radius)?;
    }

    let edges: Vec<Edge> = slots.into_iter().flatten().collect();
    debug!(
        head_radius,
        root_radius,
        edges = edges.len(),
        arcs = edges.iter().filter(|e| e.is_arc()).count(),
        "filleted tooth"
    );
    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::GearingParameters;

    fn default_profile() -> ToothProfile {
        let params = GearingParameters::default();
        tooth_points(&params.compute_properties(), params.head, params.clearance)
    }

    #[test]
    fn raw_tooth_is_symmetric() {
        let profile = default_profile();
        let v = profile.vertices;
        for i in 0..3 {
            assert!((v[i].x - v[5 - i].x).abs() < 1e-12);
            assert!((v[i].y + v[5 - i].y).abs() < 1e-12);
        }
        assert!((profile.tip_height() - 1.0).abs() < 1e-12);
        assert!((profile.root_height() + 1.25).abs() < 1e-12);
    }

    #[test]
    fn tooth_spans_one_pitch() {
        let v = default_profile().vertices;
        assert!((v[5].y - v[0].y - PI).abs() < 1e-12);
    }

    #[test]
    fn tooth_is_half_a_pitch_wide_on_the_pitch_line() {
        // the left flank crosses y = 0 at x = -π/4
        let v = default_profile().vertices;
        let (a, b) = (v[1], v[2]);
        let t = -a.x / (b.x - a.x);
        let crossing = a.y + t * (b.y - a.y);
        assert!((crossing + PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn sharp_corners_keep_five_edges() {
        let wire = tooth_wire(&default_profile()).unwrap();
        let edges = filleted_tooth_edges(&wire, 0.0, 0.0).unwrap();
        assert_eq!(edges, wire.edges().to_vec());
    }

    #[test]
    fn every_positive_radius_adds_an_arc() {
        let wire = tooth_wire(&default_profile()).unwrap();
        let edges = filleted_tooth_edges(&wire, 0.1, 0.1).unwrap();
        assert_eq!(edges.len(), 9);
        assert_eq!(edges.iter().filter(|e| e.is_arc()).count(), 4);
        assert!(Wire::from_edges(edges).is_ok());
    }

    #[test]
    fn root_fillet_wider_than_the_root_fails() {
        let wire = tooth_wire(&default_profile()).unwrap();
        assert!(matches!(
            filleted_tooth_edges(&wire, 0.0, 1.0),
            Err(RackError::GeometricConstraint(_))
        ));
    }
}
