//! Turning the closed rack cross-section into a solid

use crate::errors::RackError;
use crate::float_types::Real;
use crate::mesh::{Mesh, loft};
use crate::rack::RackShape;
use crate::sketch::{Face, Wire};
use crate::traits::Translate;
use nalgebra::Vector3;
use tracing::debug;

/// How the cross-section is carried along Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolidKind {
    /// `height == 0`: no solid, the outline is the result.
    Outline,
    /// Straight prism.
    Prism,
    /// Two profiles, the top one shifted by `tan β · height` along the pitch axis.
    SingleHelix,
    /// Three profiles: shifted by `tan β · height / 2` at mid-height and back
    /// to no shift at the top.
    DoubleHelix,
}

impl SolidKind {
    pub fn select(height: Real, helix_angle: Real, double_helix: bool) -> Self {
        if height == 0.0 {
            SolidKind::Outline
        } else if helix_angle == 0.0 {
            SolidKind::Prism
        } else if double_helix {
            SolidKind::DoubleHelix
        } else {
            SolidKind::SingleHelix
        }
    }
}

/// **Mathematical Foundation: Helical Racks as Sheared Prisms**
///
/// A rack tooth skewed by the helix angle `β` is the straight prism sheared
/// along the pitch axis:
/// ```text
/// (x, y, z) ↦ (x, y + z·tan β, z)
/// ```
/// The shear preserves volume, so every variant below encloses
/// `area · height`. The herringbone applies the shear up to `height / 2` and
/// its inverse above, which is why its top profile sits directly over the base.
///
/// The outline is validated as a face in every case; a self-intersecting
/// outline fails with [`RackError::GeometricConstraint`] even when no solid
/// is requested.
pub fn build_solid(
    outline: Wire,
    height: Real,
    helix_angle: Real,
    double_helix: bool,
    arc_segments: usize,
) -> Result<RackShape, RackError> {
    let kind = SolidKind::select(height, helix_angle, double_helix);
    let face = Face::from_wire(outline, arc_segments)?;
    debug!(?kind, height, helix_angle, area = face.area(), "building rack solid");

    match kind {
        SolidKind::Outline => Ok(RackShape::Outline(face.wire().clone())),
        SolidKind::Prism => {
            let solid = face.extrude(Vector3::new(0.0, 0.0, height))?;
            Ok(RackShape::Extruded {
                outline: face.wire().clone(),
                solid,
            })
        },
        SolidKind::SingleHelix => {
            let base = face.wire().clone();
            let top = base.translate(0.0, helix_angle.tan() * height, height);
            lofted(vec![base, top], arc_segments)
        },
        SolidKind::DoubleHelix => {
            let base = face.wire().clone();
            let mid = base.translate(0.0, helix_angle.tan() * height / 2.0, height / 2.0);
            let top = base.translate(0.0, 0.0, height);
            lofted(vec![base, mid, top], arc_segments)
        },
    }
}

fn lofted(profiles: Vec<Wire>, arc_segments: usize) -> Result<RackShape, RackError> {
    let solid: Mesh = loft(&profiles, true, true, arc_segments)?;
    Ok(RackShape::Lofted { profiles, solid })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_machine() {
        assert_eq!(SolidKind::select(0.0, 0.3, true), SolidKind::Outline);
        assert_eq!(SolidKind::select(5.0, 0.0, true), SolidKind::Prism);
        assert_eq!(SolidKind::select(5.0, 0.3, false), SolidKind::SingleHelix);
        assert_eq!(SolidKind::select(5.0, -0.3, true), SolidKind::DoubleHelix);
    }
}
