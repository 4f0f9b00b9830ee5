//! Rack profile builder: parameters in, outline or solid out.
//!
//! A build runs five stages, each available on its own:
//! 1. [`tooth_points`]: six raw vertices of one trapezoidal tooth.
//! 2. [`tooth_wire`] and [`filleted_tooth_edges`]: the tooth as edges with
//!    its root and tip corners rounded.
//! 3. [`tooth_unit`] and [`tile_teeth`]: the tooth repeated `num_teeth` times
//!    along the pitch axis, optionally capped with full end roots.
//! 4. [`close_outline`]: a base strip closes the chain into a cross-section.
//! 5. [`build_solid`]: prism, single-helix or herringbone loft.
//!
//! The sketch plane uses X for tooth height, Y for the pitch axis and Z for
//! the rack's length.

use crate::errors::RackError;
use crate::mesh::Mesh;
use crate::params::{GearingParameters, RackProperties};
use crate::sketch::{Edge, Wire};
use tracing::{debug, debug_span};

pub mod gear_rack;
pub mod solid;
pub mod tiling;
pub mod tooth;

pub use gear_rack::GearRack;
pub use solid::{SolidKind, build_solid};
pub use tiling::{close_outline, tile_teeth, tooth_unit};
pub use tooth::{ToothProfile, filleted_tooth_edges, tooth_points, tooth_wire};

/// Result geometry of a build.
#[derive(Debug, Clone)]
pub enum RackShape {
    /// Cross-section only, for `height == 0`.
    Outline(Wire),
    /// Straight prism over the cross-section.
    Extruded { outline: Wire, solid: Mesh },
    /// Helical or herringbone loft through stacked copies of the cross-section.
    Lofted { profiles: Vec<Wire>, solid: Mesh },
}

impl RackShape {
    /// Cross-section at `z = 0`.
    pub fn outline(&self) -> &Wire {
        match self {
            RackShape::Outline(outline) | RackShape::Extruded { outline, .. } => outline,
            RackShape::Lofted { profiles, .. } => &profiles[0],
        }
    }

    /// Cross-sections the solid passes through, bottom to top.
    pub fn profiles(&self) -> &[Wire] {
        match self {
            RackShape::Outline(outline) | RackShape::Extruded { outline, .. } => {
                std::slice::from_ref(outline)
            },
            RackShape::Lofted { profiles, .. } => profiles,
        }
    }

    pub fn solid(&self) -> Option<&Mesh> {
        match self {
            RackShape::Outline(_) => None,
            RackShape::Extruded { solid, .. } | RackShape::Lofted { solid, .. } => Some(solid),
        }
    }

    pub fn is_solid(&self) -> bool {
        self.solid().is_some()
    }
}

/// Everything a successful build produces.
#[derive(Debug, Clone)]
pub struct RackBuild {
    pub properties: RackProperties,
    pub shape: RackShape,
}

/// Builds rack geometry from one parameter snapshot.
///
/// The builder holds no state between builds; every call of
/// [`build`](Self::build) recomputes everything from the parameters.
#[derive(Debug, Clone, Copy)]
pub struct ProfileBuilder<'a> {
    params: &'a GearingParameters,
    arc_segments: usize,
}

impl<'a> ProfileBuilder<'a> {
    /// Chords per fillet arc when faces and solids are discretised.
    pub const DEFAULT_ARC_SEGMENTS: usize = 8;

    pub const fn new(params: &'a GearingParameters) -> Self {
        ProfileBuilder {
            params,
            arc_segments: Self::DEFAULT_ARC_SEGMENTS,
        }
    }

    /// Sets the number of chords per fillet arc (at least 1).
    pub fn arc_segments(mut self, arc_segments: usize) -> Self {
        self.arc_segments = arc_segments.max(1);
        self
    }

    pub const fn params(&self) -> &GearingParameters {
        self.params
    }

    /// Raw tooth vertices for the current parameters.
    pub fn tooth_profile(&self) -> ToothProfile {
        tooth_points(&self.params.compute_properties(), self.params.head, self.params.clearance)
    }

    /// One rounded tooth as a continuous edge chain.
    pub fn tooth_edges(&self) -> Result<Vec<Edge>, RackError> {
        let module = self.params.compute_properties().module;
        let profile = self.tooth_profile();
        debug!(
            tip = profile.tip_height(),
            root = profile.root_height(),
            "tooth vertices"
        );
        let wire = tooth_wire(&profile)?;
        filleted_tooth_edges(
            &wire,
            module * self.params.head_fillet,
            module * self.params.root_fillet,
        )
    }

    /// Closed cross-section of the whole rack.
    pub fn outline(&self) -> Result<Wire, RackError> {
        let pitch = self.params.transverse_pitch();
        let tooth = self.tooth_edges()?;
        let chain = tile_teeth(&tooth, self.params.num_teeth, pitch, self.params.add_endings)?;
        close_outline(&chain, self.params.thickness)
    }

    /// Validates the parameters and runs every stage.
    pub fn build(&self) -> Result<RackBuild, RackError> {
        let span = debug_span!("rack_build", num_teeth = self.params.num_teeth);
        let _guard = span.enter();

        self.params.validate()?;
        let properties = self.params.compute_properties();
        debug!(
            module = properties.module,
            normal_module = properties.normal_module,
            pitch = properties.transverse_pitch,
            pressure_angle = properties.pressure_angle,
            "rack properties"
        );

        let outline = self.outline()?;
        let shape = build_solid(
            outline,
            self.params.height,
            self.params.helix_angle,
            self.params.double_helix,
            self.arc_segments,
        )?;
        Ok(RackBuild { properties, shape })
    }
}
