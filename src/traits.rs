use crate::float_types::Real;
use nalgebra::Vector3;

/// Rigid translation, the only transform rack construction needs.
///
/// Copies are made with `Clone`; translating returns a new value and leaves
/// `self` untouched, so a translated copy is geometrically identical to the
/// original up to the offset.
pub trait Translate: Sized {
    /// Returns a new Self translated by vector.
    fn translate_vector(&self, vector: Vector3<Real>) -> Self;

    /// Returns a new Self translated by x, y, and z.
    fn translate(&self, x: Real, y: Real, z: Real) -> Self {
        self.translate_vector(Vector3::new(x, y, z))
    }
}
