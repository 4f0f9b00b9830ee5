mod support;

use nalgebra::{Point3, Vector3};
use rackgen::float_types::{FRAC_PI_2, Real};
use rackgen::mesh::loft;
use rackgen::sketch::insert_fillet;
use rackgen::{Edge, Face, RackError, Translate, Wire};
use support::{assert_close, wire_bounds};

fn p(x: Real, y: Real) -> Point3<Real> {
    Point3::new(x, y, 0.0)
}

fn rectangle(w: Real, h: Real) -> Wire {
    Wire::from_segments(&[
        [p(0.0, 0.0), p(w, 0.0)],
        [p(w, 0.0), p(w, h)],
        [p(w, h), p(0.0, h)],
        [p(0.0, h), p(0.0, 0.0)],
    ])
    .unwrap()
}

#[test]
fn test_translated_wire_keeps_its_shape() {
    let wire = rectangle(2.0, 1.0);
    let moved = wire.translate(1.0, -3.0, 4.0);
    assert_close(moved.length(), wire.length(), 1e-12);
    let (a, b) = (wire_bounds(&wire), wire_bounds(&moved));
    assert!((b.mins - a.mins - Vector3::new(1.0, -3.0, 4.0)).norm() < 1e-12);
    assert!(moved.is_closed());
}

#[test]
fn test_fillet_slots_stay_stable_across_calls() {
    // an open zig-zag of four edges has three corners at slots 0, 2 and 4
    let zigzag = Wire::from_segments(&[
        [p(0.0, 0.0), p(2.0, 0.0)],
        [p(2.0, 0.0), p(2.0, 2.0)],
        [p(2.0, 2.0), p(4.0, 2.0)],
        [p(4.0, 2.0), p(4.0, 4.0)],
    ])
    .unwrap();
    let mut slots: Vec<Option<Edge>> = zigzag.edges().iter().copied().map(Some).collect();
    for (pos, radius) in [(0, 0.5), (2, 0.0), (4, 0.25)] {
        slots = insert_fillet(slots, pos, radius).unwrap();
    }
    let edges: Vec<Edge> = slots.into_iter().flatten().collect();
    assert_eq!(edges.iter().filter(|e| e.is_arc()).count(), 2);

    let filleted = Wire::from_edges(edges).unwrap();
    let shortened = (0.5 + 0.25) * (2.0 - FRAC_PI_2);
    assert_close(filleted.length(), zigzag.length() - shortened, 1e-12);
}

#[test]
fn test_filleted_rectangle_face() {
    let rect = rectangle(4.0, 2.0);
    let mut slots: Vec<Option<Edge>> = rect.edges().iter().copied().map(Some).collect();
    slots = insert_fillet(slots, 0, 0.5).unwrap();
    let wire = Wire::from_edges(slots.into_iter().flatten().collect()).unwrap();
    let face = Face::from_wire(wire, 64).unwrap();
    // the rounded corner removes r² (1 - π/4) from the area
    assert_close(face.area(), 8.0 - 0.25 * (1.0 - FRAC_PI_2 / 2.0), 1e-4);
}

#[test]
fn test_open_wire_cannot_bound_a_face() {
    let open = rectangle(1.0, 1.0).without_last_edge().unwrap();
    assert!(matches!(Face::from_wire(open, 8), Err(RackError::GeometricConstraint(_))));
}

#[test]
fn test_loft_profiles_must_match() {
    let square = rectangle(1.0, 1.0);
    let triangle = Wire::from_segments(&[
        [p(0.0, 0.0), p(1.0, 0.0)],
        [p(1.0, 0.0), p(0.0, 1.0)],
        [p(0.0, 1.0), p(0.0, 0.0)],
    ])
    .unwrap()
    .translate(0.0, 0.0, 1.0);
    assert!(matches!(
        loft(&[square, triangle], true, true, 8),
        Err(RackError::GeometricConstraint(_))
    ));
}

#[test]
fn test_loft_bounding_box() {
    let base = rectangle(3.0, 1.0);
    let top = base.translate(0.0, 2.0, 5.0);
    let solid = loft(&[base, top], true, true, 8).unwrap();
    let bb = solid.bounding_box();
    assert_eq!(bb.extents(), [3.0, 3.0, 5.0]);
    assert_close(solid.volume(), 15.0, 1e-9);
}
