//! Scalar type and geometric tolerance shared by the whole crate.

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

#[cfg(feature = "f32")]
use core::f32::consts;
#[cfg(feature = "f64")]
use core::f64::consts;

use std::sync::OnceLock;

/// Distance below which two points coincide and an edge counts as empty.
///
/// Resolved once, on first use:
///  1) a value passed to [`set_tolerance`] before any geometry was built
///  2) the build-time env var `RACKGEN_TOLERANCE` (e.g. `RACKGEN_TOLERANCE=1e-8 cargo build`)
///  3) `1e-6` for `f64`, `1e-4` for `f32`
static TOLERANCE: OnceLock<Real> = OnceLock::new();

#[cfg(feature = "f32")]
const DEFAULT_TOLERANCE: Real = 1e-4;
#[cfg(feature = "f64")]
const DEFAULT_TOLERANCE: Real = 1e-6;

/// Returns the active tolerance.
pub fn tolerance() -> Real {
    *TOLERANCE.get_or_init(|| {
        option_env!("RACKGEN_TOLERANCE")
            .and_then(|s| s.parse::<Real>().ok())
            .map_or(DEFAULT_TOLERANCE, |t| t.max(EPSILON))
    })
}

/// Fixes the tolerance; ignored once [`tolerance`] has been read or set.
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE.set(value.max(EPSILON));
}

/// Machine epsilon of the active `Real`.
pub const EPSILON: Real = Real::EPSILON;
/// Archimedes' constant (π)
pub const PI: Real = consts::PI;
/// π/2
pub const FRAC_PI_2: Real = consts::FRAC_PI_2;
/// The full circle constant (τ)
pub const TAU: Real = consts::TAU;

