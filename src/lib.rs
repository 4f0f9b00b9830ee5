//! Generates the 2D profile and 3D solid of an **involute gear rack** from a
//! handful of gearing parameters.
//!
//! A rack is the straight counterpart of an involute gear: its flanks are
//! lines inclined by the pressure angle, so one tooth is a trapezoid. The
//! crate rounds the tooth's corners, tiles it along the pitch axis, closes
//! the chain with a base strip and carries the cross-section along Z as a
//! prism, a single-helix loft or a herringbone.
//!
//! ```rust
//! use rackgen::{GearingParameters, ProfileBuilder};
//! # fn main() -> Result<(), rackgen::RackError> {
//! let params = GearingParameters {
//!     num_teeth: 10,
//!     root_fillet: 0.2,
//!     ..Default::default()
//! };
//! let build = ProfileBuilder::new(&params).build()?;
//! let solid = build.shape.solid().expect("height is 5 mm");
//! assert!(solid.volume() > 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod aabb;
pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod params;
pub mod rack;
pub mod sketch;
pub mod traits;
pub mod triangulated;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::RackError;
pub use mesh::Mesh;
pub use params::{GearingParameters, PropertyRecord, RackProperties, migrate_record};
pub use rack::{GearRack, ProfileBuilder, RackBuild, RackShape};
pub use sketch::{Edge, Face, Wire};
pub use traits::Translate;
