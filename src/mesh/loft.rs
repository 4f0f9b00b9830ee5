//! Ruled lofts between stacked profiles

use crate::errors::RackError;
use crate::float_types::{Real, tolerance};
use crate::mesh::triangulate::triangulate_ring;
use crate::mesh::{Mesh, Polygon};
use crate::sketch::{Face, Wire};
use nalgebra::Point3;

/// Lofts a solid (or open shell) through `profiles`, bottom to top.
///
/// Every profile must be a closed, non-self-intersecting wire in its own
/// plane parallel to XY, and all profiles must discretise to the same number
/// of vertices so that vertex `i` of one profile pairs with vertex `i` of the
/// next. Translated copies of one wire always qualify.
///
/// Only ruled lofts are available between more than two profiles; with two
/// profiles a smooth loft and a ruled loft coincide. With `solid` the first
/// and last profiles are capped.
pub fn loft(profiles: &[Wire], ruled: bool, solid: bool, arc_segments: usize) -> Result<Mesh, RackError> {
    if !ruled && profiles.len() > 2 {
        return Err(RackError::geometry(
            "smooth lofts through more than two profiles are not supported, use a ruled loft",
        ));
    }
    let rings = profiles
        .iter()
        .map(|w| Face::from_wire(w.clone(), arc_segments).map(|f| f.ring().to_vec()))
        .collect::<Result<Vec<_>, _>>()?;
    loft_rings(&rings, solid)
}

/// Lofts already-validated rings (no repeated closing vertex).
pub(crate) fn loft_rings(rings: &[Vec<Point3<Real>>], solid: bool) -> Result<Mesh, RackError> {
    let tol = tolerance();
    if rings.len() < 2 {
        return Err(RackError::geometry("a loft needs at least two profiles"));
    }
    let n = rings[0].len();
    if n < 3 || rings.iter().any(|r| r.len() != n) {
        return Err(RackError::geometry(format!(
            "loft profiles must share one vertex count, got {:?}",
            rings.iter().map(Vec::len).collect::<Vec<_>>()
        )));
    }

    let heights: Vec<Real> = rings.iter().map(|r| r[0].z).collect();
    let rising = heights[heights.len() - 1] > heights[0];
    let monotonic = heights.windows(2).all(|h| {
        let dz = h[1] - h[0];
        dz.abs() > tol && (dz > 0.0) == rising
    });
    if !monotonic {
        return Err(RackError::geometry(format!(
            "loft profiles must be stacked at strictly increasing or decreasing heights, got {heights:?}"
        )));
    }

    let area = signed_area_xy(&rings[0]);
    if area.abs() <= tol {
        return Err(RackError::geometry("loft profile encloses no area"));
    }
    // side walls below assume counter-clockwise profiles
    let oriented: Vec<Vec<Point3<Real>>> = if area > 0.0 {
        rings.to_vec()
    } else {
        rings
            .iter()
            .map(|r| r.iter().rev().copied().collect())
            .collect()
    };

    let mut polygons = Vec::with_capacity((rings.len() - 1) * n + 2 * n);
    for pair in oriented.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        for i in 0..n {
            let j = (i + 1) % n;
            polygons.push(Polygon::from_points(&[lower[i], lower[j], upper[j], upper[i]]));
        }
    }

    if solid {
        let (bottom, top) = (&oriented[0], &oriented[oriented.len() - 1]);
        let bottom_triangles = triangulate_ring(&xy(bottom));
        // a translated copy reuses the bottom triangulation
        let top_triangles =
            (!is_translated_copy(bottom, top, tol)).then(|| triangulate_ring(&xy(top)));
        polygons.extend(cap(bottom, &bottom_triangles, false));
        polygons.extend(cap(top, top_triangles.as_deref().unwrap_or(&bottom_triangles), true));
    }

    let mesh = Mesh::from_polygons(polygons);
    Ok(if rising { mesh } else { mesh.inverse() })
}

/// Cap over `triangles` of `ring`, facing +Z (`up`) or -Z.
fn cap(ring: &[Point3<Real>], triangles: &[[usize; 3]], up: bool) -> Vec<Polygon> {
    triangles
        .iter()
        .map(|&[a, b, c]| {
            let (pa, pb, pc) = (ring[a], ring[b], ring[c]);
            let ccw = (pb.x - pa.x) * (pc.y - pa.y) - (pb.y - pa.y) * (pc.x - pa.x) > 0.0;
            let (pb, pc) = if ccw == up { (pb, pc) } else { (pc, pb) };
            Polygon::from_points(&[pa, pb, pc])
        })
        .collect()
}

fn xy(ring: &[Point3<Real>]) -> Vec<[Real; 2]> {
    ring.iter().map(|p| [p.x, p.y]).collect()
}

/// True when `other` is `ring` shifted by one XY offset, vertex for vertex.
fn is_translated_copy(ring: &[Point3<Real>], other: &[Point3<Real>], tol: Real) -> bool {
    let offset = other[0].xy() - ring[0].xy();
    ring.iter()
        .zip(other)
        .all(|(a, b)| (b.xy() - a.xy() - offset).norm() <= tol)
}

/// Shoelace area of a ring projected onto XY.
fn signed_area_xy(ring: &[Point3<Real>]) -> Real {
    let n = ring.len();
    0.5 * (0..n)
        .map(|i| {
            let (a, b) = (ring[i], ring[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum::<Real>()
}
