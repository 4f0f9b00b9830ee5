//! Self-intersection detection for closed rings.
//!
//! Segments are swept along the axis where the ring is longest, so long
//! racks only compare segments whose extents overlap. Intersection tests use
//! `geo`'s exact line intersection.

use crate::float_types::{Real, tolerance};
use geo::algorithm::line_intersection::{LineIntersection, line_intersection};
use geo::{Coord, Line};
use nalgebra::Point3;

/// Returns the first point where the closed ring `ring` (no repeated closing
/// point) crosses or touches itself, ignoring the shared vertex of
/// neighbouring segments.
pub fn ring_self_intersection(ring: &[Point3<Real>]) -> Option<Point3<Real>> {
    let n = ring.len();
    if n < 3 {
        return None;
    }
    let tol = tolerance();

    let (mut x0, mut x1, mut y0, mut y1) = (Real::MAX, -Real::MAX, Real::MAX, -Real::MAX);
    for p in ring {
        x0 = x0.min(p.x);
        x1 = x1.max(p.x);
        y0 = y0.min(p.y);
        y1 = y1.max(p.y);
    }
    let along_y = y1 - y0 > x1 - x0;
    let key = |p: &Point3<Real>| if along_y { p.y } else { p.x };

    let segments: Vec<Line<Real>> = (0..n)
        .map(|i| {
            let a = ring[i];
            let b = ring[(i + 1) % n];
            Line::new(Coord { x: a.x, y: a.y }, Coord { x: b.x, y: b.y })
        })
        .collect();
    let extent = |i: usize| {
        let (a, b) = (key(&ring[i]), key(&ring[(i + 1) % n]));
        (a.min(b), a.max(b))
    };

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| extent(i).0.total_cmp(&extent(j).0));

    let mut active: Vec<usize> = Vec::new();
    for &i in &order {
        let (lo, _) = extent(i);
        active.retain(|&j| extent(j).1 >= lo - tol);

        for &j in &active {
            let neighbours = (i + 1) % n == j || (j + 1) % n == i;
            let Some(hit) = line_intersection(segments[i], segments[j]) else {
                continue;
            };
            match hit {
                LineIntersection::SinglePoint { intersection, .. } => {
                    if neighbours {
                        // neighbours may only meet at their shared vertex
                        let shared = if (i + 1) % n == j { ring[j] } else { ring[i] };
                        let d = ((intersection.x - shared.x).powi(2)
                            + (intersection.y - shared.y).powi(2))
                        .sqrt();
                        if d <= tol {
                            continue;
                        }
                    }
                    return Some(Point3::new(intersection.x, intersection.y, ring[i].z));
                },
                LineIntersection::Collinear { intersection } => {
                    if neighbours && intersection.start == intersection.end {
                        continue;
                    }
                    return Some(Point3::new(intersection.start.x, intersection.start.y, ring[i].z));
                },
            }
        }
        active.push(i);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(points: &[[Real; 2]]) -> Vec<Point3<Real>> {
        points.iter().map(|&[x, y]| Point3::new(x, y, 0.0)).collect()
    }

    #[test]
    fn simple_square_is_clean() {
        let square = ring(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        assert!(ring_self_intersection(&square).is_none());
    }

    #[test]
    fn bow_tie_crosses_itself() {
        let bow_tie = ring(&[[0.0, 0.0], [1.0, 1.0], [1.0, 0.0], [0.0, 1.0]]);
        let hit = ring_self_intersection(&bow_tie).expect("bow tie must self-intersect");
        assert!((hit.x - 0.5).abs() < 1e-12 && (hit.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn spike_folding_back_is_detected() {
        let folded = ring(&[[0.0, 0.0], [2.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        assert!(ring_self_intersection(&folded).is_some());
    }
}
