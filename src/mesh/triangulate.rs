//! Cap triangulation of simple rings in the XY plane
//!
//! Rack outlines are monotone along the pitch axis, so the sweep below
//! triangulates them in linear time after one pass over the ring. Rings that
//! are monotone along neither axis go through ear clipping.

use crate::float_types::Real;
use geo::{Coord, LineString, Polygon as GeoPolygon, TriangulateEarcut};
use std::cmp::Ordering;

/// Triangulates a simple ring, returning index triples into `ring`.
///
/// The ring carries no repeated closing vertex. Triangle winding is not
/// normalised.
pub fn triangulate_ring(ring: &[[Real; 2]]) -> Vec<[usize; 3]> {
    if ring.len() < 3 {
        return Vec::new();
    }
    // pitch axis first, then height
    [1, 0]
        .into_iter()
        .find_map(|axis| monotone_triangles(ring, axis))
        .unwrap_or_else(|| earcut_triangles(ring))
}

fn earcut_triangles(ring: &[[Real; 2]]) -> Vec<[usize; 3]> {
    let n = ring.len();
    let coords: Vec<Coord<Real>> = ring.iter().map(|&[x, y]| Coord { x, y }).collect();
    let polygon = GeoPolygon::new(LineString::new(coords), vec![]);

    // the closing coordinate gets index n and aliases vertex 0
    polygon
        .earcut_triangles_raw()
        .triangle_indices
        .chunks_exact(3)
        .map(|tri| [tri[0] % n, tri[1] % n, tri[2] % n])
        .collect()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Chain {
    Forward,
    Backward,
}

/// Sweep triangulation of a ring that is strictly monotone along `axis`,
/// ties broken by the other coordinate. `None` when the ring is not.
fn monotone_triangles(ring: &[[Real; 2]], axis: usize) -> Option<Vec<[usize; 3]>> {
    let n = ring.len();
    let key = |i: usize| (ring[i][axis], ring[i][1 - axis]);
    let cmp = |i: usize, j: usize| key(i).partial_cmp(&key(j));
    let next = |i: usize| (i + 1) % n;
    let prev = |i: usize| (i + n - 1) % n;

    let mut lo = 0;
    let mut hi = 0;
    for i in 1..n {
        if cmp(i, lo)? == Ordering::Less {
            lo = i;
        }
        if cmp(i, hi)? == Ordering::Greater {
            hi = i;
        }
    }
    if lo == hi {
        return None;
    }

    // ascending from `lo` to `hi` along both directions of the ring
    let mut forward = Vec::new();
    let mut i = next(lo);
    while i != hi {
        forward.push(i);
        i = next(i);
    }
    let mut backward = Vec::new();
    let mut i = prev(lo);
    while i != hi {
        backward.push(i);
        i = prev(i);
    }
    let ascending = |chain: &[usize], from: usize| {
        let mut last = from;
        for &i in chain.iter().chain(std::iter::once(&hi)) {
            if cmp(last, i) != Some(Ordering::Less) {
                return false;
            }
            last = i;
        }
        true
    };
    if !ascending(&forward, lo) || !ascending(&backward, lo) {
        return None;
    }

    let mut sorted = Vec::with_capacity(n);
    sorted.push((lo, Chain::Forward));
    let (mut f, mut b) = (0, 0);
    while f < forward.len() || b < backward.len() {
        let take_forward = b == backward.len()
            || (f < forward.len() && cmp(forward[f], backward[b]) == Some(Ordering::Less));
        if take_forward {
            sorted.push((forward[f], Chain::Forward));
            f += 1;
        } else {
            sorted.push((backward[b], Chain::Backward));
            b += 1;
        }
    }
    sorted.push((hi, Chain::Forward));

    let orientation = signed_area(ring).signum();
    let turn = |a: usize, b: usize, c: usize| {
        let [ax, ay] = ring[a];
        let [bx, by] = ring[b];
        let [cx, cy] = ring[c];
        orientation * ((bx - ax) * (cy - ay) - (by - ay) * (cx - ax))
    };

    let mut triangles = Vec::with_capacity(n - 2);
    let mut stack = vec![sorted[0], sorted[1]];
    for &(u, side) in &sorted[2..n - 1] {
        let (top, top_side) = stack[stack.len() - 1];
        if side != top_side {
            for pair in stack.windows(2) {
                triangles.push([u, pair[0].0, pair[1].0]);
            }
            stack.clear();
            stack.push((top, top_side));
        } else {
            let mut last = stack.pop()?;
            while let Some(&(candidate, _)) = stack.last() {
                // the diagonal u-candidate stays inside while `last` is convex
                let t = turn(candidate, last.0, u);
                let convex = match side {
                    Chain::Forward => t > 0.0,
                    Chain::Backward => t < 0.0,
                };
                if !convex {
                    break;
                }
                triangles.push([u, last.0, candidate]);
                last = stack.pop()?;
            }
            stack.push(last);
        }
        stack.push((u, side));
    }
    for pair in stack.windows(2) {
        triangles.push([hi, pair[0].0, pair[1].0]);
    }

    (triangles.len() == n - 2).then_some(triangles)
}

fn signed_area(ring: &[[Real; 2]]) -> Real {
    let n = ring.len();
    0.5 * (0..n)
        .map(|i| {
            let ([ax, ay], [bx, by]) = (ring[i], ring[(i + 1) % n]);
            ax * by - bx * ay
        })
        .sum::<Real>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(ring: &[[Real; 2]], triangles: &[[usize; 3]]) -> Real {
        triangles
            .iter()
            .map(|&[a, b, c]| signed_area(&[ring[a], ring[b], ring[c]]).abs())
            .sum()
    }

    /// Comb of trapezoidal teeth on a strip, monotone along y.
    fn comb(teeth: usize) -> Vec<[Real; 2]> {
        let mut ring = vec![[-1.0, 0.0]];
        for i in 0..teeth {
            let y = 2.0 * i as Real;
            ring.extend([[0.0, y], [1.0, y + 0.5], [1.0, y + 1.0], [0.0, y + 1.5]]);
        }
        let end = 2.0 * teeth as Real - 0.5;
        ring.push([-1.0, end]);
        ring
    }

    #[test]
    fn comb_is_swept_not_ear_clipped() {
        let ring = comb(50);
        let tris = monotone_triangles(&ring, 1).expect("comb is monotone along y");
        assert_eq!(tris.len(), ring.len() - 2);
        let expected = 99.5 + 50.0;
        assert!((area(&ring, &tris) - expected).abs() < 1e-9);
    }

    #[test]
    fn clockwise_comb_covers_the_same_area() {
        let mut ring = comb(7);
        ring.reverse();
        let tris = triangulate_ring(&ring);
        assert_eq!(tris.len(), ring.len() - 2);
        assert!((area(&ring, &tris) - (13.5 + 7.0)).abs() < 1e-9);
    }

    #[test]
    fn spiral_falls_back_to_ear_clipping() {
        // a "G" shape, monotone along neither axis
        let ring = [
            [0.0, 0.0],
            [3.0, 0.0],
            [3.0, 2.0],
            [2.0, 2.0],
            [2.0, 1.0],
            [1.0, 1.0],
            [1.0, 3.0],
            [3.0, 3.0],
            [3.0, 4.0],
            [0.0, 4.0],
        ];
        assert!(monotone_triangles(&ring, 0).is_none());
        assert!(monotone_triangles(&ring, 1).is_none());
        let tris = triangulate_ring(&ring);
        assert_eq!(tris.len(), ring.len() - 2);
        assert!((area(&ring, &tris) - signed_area(&ring).abs()).abs() < 1e-9);
    }
}
