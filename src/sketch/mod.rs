//! Planar wire kernel: edges, wires, fillets and faces.
//!
//! Profiles live in a plane parallel to XY and are stored with full 3D
//! coordinates so that translated copies can be stacked along Z for lofting.

pub mod edge;
pub mod face;
pub mod fillet;
pub mod validate;
pub mod wire;

pub use edge::Edge;
pub use face::Face;
pub use fillet::{fillet_between, insert_fillet};
pub use wire::Wire;
