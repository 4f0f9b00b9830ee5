//! **Mathematical Foundation: Tangent Arc Fillets Between Straight Edges**
//!
//! For two lines meeting at corner `B` with interior angle `θ`, a fillet of
//! radius `r` touches each line at distance
//! ```text
//! d = r / tan(θ / 2)
//! ```
//! from the corner, and its centre lies on the angle bisector at distance
//! `r / sin(θ / 2)` from `B`. The fillet is feasible only if both lines are at
//! least `d` long; otherwise the arc would run past the end of an edge.

use crate::errors::RackError;
use crate::float_types::{PI, Real, TAU, tolerance};
use crate::sketch::edge::Edge;
use nalgebra::Point3;

/// Rounds the corner between `first` (ending at the corner) and `second`
/// (starting at it) with a tangent arc of `radius`.
///
/// Returns the trimmed first line, the arc and the trimmed second line.
pub fn fillet_between(first: &Edge, second: &Edge, radius: Real) -> Result<[Edge; 3], RackError> {
    let tol = tolerance();
    let (Edge::Line { start: a, end: b }, Edge::Line { start: b2, end: c }) = (*first, *second)
    else {
        return Err(RackError::geometry("fillets are only supported between straight edges"));
    };
    if (b2 - b).norm() > tol {
        return Err(RackError::geometry("fillet edges do not share a corner"));
    }
    if (a.z - b.z).abs() > tol || (c.z - b.z).abs() > tol {
        return Err(RackError::geometry("fillet edges must lie in a plane parallel to XY"));
    }

    let to_a = a - b;
    let to_c = c - b;
    let (len_a, len_c) = (to_a.norm(), to_c.norm());
    if len_a <= tol || len_c <= tol {
        return Err(RackError::geometry(format!(
            "cannot fillet a zero-length edge at ({:.6}, {:.6})",
            b.x, b.y
        )));
    }
    let u1 = to_a / len_a;
    let u2 = to_c / len_c;

    let theta = u1.dot(&u2).clamp(-1.0, 1.0).acos();
    if theta <= tol || PI - theta <= tol {
        return Err(RackError::geometry(format!(
            "edges at ({:.6}, {:.6}) are collinear, no fillet fits",
            b.x, b.y
        )));
    }

    let half = 0.5 * theta;
    let setback = radius / half.tan();
    if setback > len_a + tol || setback > len_c + tol {
        return Err(RackError::geometry(format!(
            "fillet radius {radius} needs {setback:.6} of each adjoining edge but only {:.6} and {:.6} are available",
            len_a, len_c
        )));
    }

    let t1 = b + u1 * setback.min(len_a);
    let t2 = b + u2 * setback.min(len_c);
    let center: Point3<Real> = b + (u1 + u2).normalize() * (radius / half.sin());

    let start_angle = (t1.y - center.y).atan2(t1.x - center.x);
    let end_angle = (t2.y - center.y).atan2(t2.x - center.x);
    let mut sweep = end_angle - start_angle;
    // the fillet arc is always shorter than a half turn
    if sweep > PI {
        sweep -= TAU;
    } else if sweep < -PI {
        sweep += TAU;
    }

    Ok([
        Edge::line(a, t1),
        Edge::Arc {
            center,
            radius,
            start_angle,
            sweep,
        },
        Edge::line(t2, c),
    ])
}

/// Inserts a fillet at the corner after edge slot `pos`.
///
/// Slots hold `None` where an earlier zero-radius call left a corner sharp,
/// which keeps slot positions stable across a fixed sequence of calls: on a
/// five-edge tooth, positions 0, 2, 4 and 6 address its four corners whatever
/// the radii are. A radius of 0 leaves the corner sharp and inserts a `None`
/// placeholder after `pos`; a positive radius replaces the two edges with the
/// trimmed edges and the arc between them.
pub fn insert_fillet(
    mut edges: Vec<Option<Edge>>,
    pos: usize,
    radius: Real,
) -> Result<Vec<Option<Edge>>, RackError> {
    if pos + 1 >= edges.len() {
        return Err(RackError::geometry(format!(
            "no corner after edge slot {pos} in a chain of {} slots",
            edges.len()
        )));
    }
    if !radius.is_finite() || radius < 0.0 {
        return Err(RackError::geometry(format!("fillet radius {radius} is not usable")));
    }

    if radius == 0.0 {
        edges.insert(pos + 1, None);
        return Ok(edges);
    }

    let (Some(first), Some(second)) = (edges[pos], edges[pos + 1]) else {
        return Err(RackError::geometry(format!(
            "edge slots {pos} and {} do not both hold an edge",
            pos + 1
        )));
    };
    let filleted = fillet_between(&first, &second, radius)?;
    edges.splice(pos..pos + 2, filleted.into_iter().map(Some));
    Ok(edges)
}
