//! Replicating one rounded tooth into a rack and closing it into a cross-section

use crate::errors::RackError;
use crate::float_types::Real;
use crate::sketch::{Edge, Wire};
use crate::traits::Translate;
use nalgebra::Vector3;
use tracing::debug;

/// Builds the repeating unit of the rack from a rounded tooth.
///
/// The unit is the tooth without its outer root edges, followed by a bridge
/// along the root from the tooth's end to where the next tooth starts one
/// `pitch` further along the pitch axis.
pub fn tooth_unit(tooth_edges: &[Edge], pitch: Real) -> Result<Wire, RackError> {
    let n = tooth_edges.len();
    if n < 3 {
        return Err(RackError::geometry(format!(
            "a tooth needs at least 3 edges to tile, got {n}"
        )));
    }
    let inner = &tooth_edges[1..n - 1];
    let bridge = Edge::line(
        inner[inner.len() - 1].last_vertex(),
        inner[0].first_vertex() + Vector3::new(0.0, pitch, 0.0),
    );
    Wire::from_edges(inner.iter().copied().chain(std::iter::once(bridge)).collect())
}

/// Tiles `num_teeth` copies of the tooth unit along the pitch axis.
///
/// Every copy is the unit translated by a whole number of pitches, so
/// corresponding vertices of neighbouring teeth differ by exactly `pitch`.
/// The last copy loses its bridge. With `add_endings` the tooth's outer root
/// edges cap both ends and the chain spans `num_teeth * pitch`.
pub fn tile_teeth(
    tooth_edges: &[Edge],
    num_teeth: usize,
    pitch: Real,
    add_endings: bool,
) -> Result<Wire, RackError> {
    if num_teeth == 0 {
        return Err(RackError::invalid("num_teeth", "cannot tile zero teeth"));
    }
    let unit = tooth_unit(tooth_edges, pitch)?;
    let last = num_teeth - 1;

    let mut edges: Vec<Edge> = Vec::with_capacity(unit.len() * num_teeth + 2);
    if add_endings {
        edges.push(tooth_edges[0]);
    }
    for i in 0..num_teeth {
        let copy = unit.translate(0.0, pitch * i as Real, 0.0);
        let copy = if i == last {
            copy.without_last_edge().ok_or_else(|| {
                RackError::geometry("tooth unit has no edges besides its bridge")
            })?
        } else {
            copy
        };
        edges.extend(copy.into_edges());
    }
    if add_endings {
        edges.push(tooth_edges[tooth_edges.len() - 1].translate(0.0, pitch * last as Real, 0.0));
    }

    let chain = Wire::from_edges(edges)?;
    debug!(
        num_teeth,
        pitch,
        add_endings,
        edges = chain.len(),
        extent = chain.last_vertex().y - chain.first_vertex().y,
        "tiled teeth"
    );
    Ok(chain)
}

/// Closes the open tooth chain with a base strip `thickness` below its ends.
///
/// From the chain's end the outline steps down the height axis, runs back
/// along the base and climbs to the chain's start.
pub fn close_outline(chain: &Wire, thickness: Real) -> Result<Wire, RackError> {
    if !thickness.is_finite() || thickness <= 0.0 {
        return Err(RackError::invalid(
            "thickness",
            format!("{thickness} must be greater than zero"),
        ));
    }
    let start = chain.first_vertex();
    let end = chain.last_vertex();
    let down = Vector3::new(thickness, 0.0, 0.0);

    let base = Wire::from_segments(&[
        [end, end - down],
        [end - down, start - down],
        [start - down, start],
    ])?;
    let outline = Wire::join([chain.clone(), base])?;
    debug!(thickness, edges = outline.len(), "closed outline");
    Ok(outline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::PI;
    use crate::params::GearingParameters;
    use crate::rack::tooth::{tooth_points, tooth_wire};

    fn sharp_tooth() -> Vec<Edge> {
        let params = GearingParameters::default();
        let profile = tooth_points(&params.compute_properties(), params.head, params.clearance);
        tooth_wire(&profile).unwrap().into_edges()
    }

    #[test]
    fn unit_ends_where_the_next_tooth_starts() {
        let tooth = sharp_tooth();
        let unit = tooth_unit(&tooth, PI).unwrap();
        assert_eq!(unit.len(), 4);
        let gap = unit.last_vertex() - (unit.first_vertex() + Vector3::new(0.0, PI, 0.0));
        assert!(gap.norm() < 1e-12);
    }

    #[test]
    fn endings_extend_the_chain_to_whole_pitches() {
        let tooth = sharp_tooth();
        let with = tile_teeth(&tooth, 4, PI, true).unwrap();
        assert!((with.last_vertex().y - with.first_vertex().y - 4.0 * PI).abs() < 1e-9);
        assert_eq!(with.len(), 4 * 4 - 1 + 2);

        let without = tile_teeth(&tooth, 4, PI, false).unwrap();
        assert_eq!(without.len(), 4 * 4 - 1);
        assert!(without.last_vertex().y - without.first_vertex().y < 4.0 * PI);
    }

    #[test]
    fn closed_outline_drops_by_thickness() {
        let tooth = sharp_tooth();
        let chain = tile_teeth(&tooth, 3, PI, true).unwrap();
        let outline = close_outline(&chain, 5.0).unwrap();
        assert!(outline.is_closed());
        assert_eq!(outline.len(), chain.len() + 3);
        let lowest = outline
            .edges()
            .iter()
            .map(|e| e.first_vertex().x)
            .fold(Real::INFINITY, Real::min);
        assert!((lowest + 6.25).abs() < 1e-12);
    }
}
