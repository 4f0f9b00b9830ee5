//! Long-lived rack entity as a host document holds it

use crate::errors::RackError;
use crate::float_types::Real;
use crate::params::{GearingParameters, migrate_record};
use crate::rack::{ProfileBuilder, RackShape};
use serde_json::Value;
use tracing::{debug, warn};

/// A rack owned by a host: editable parameters plus the outputs of the last
/// successful recompute.
///
/// Outputs change only when [`recompute`](Self::recompute) succeeds, so a
/// failed edit leaves the previous pitch and geometry in place.
#[derive(Debug, Clone, Default)]
pub struct GearRack {
    pub params: GearingParameters,
    transverse_pitch: Option<Real>,
    shape: Option<RackShape>,
}

impl GearRack {
    pub fn new(params: GearingParameters) -> Self {
        GearRack {
            params,
            transverse_pitch: None,
            shape: None,
        }
    }

    /// Restores a rack from a persisted host record, migrating legacy layouts.
    pub fn from_record(record: Value) -> Result<Self, RackError> {
        Ok(Self::new(migrate_record(record)?))
    }

    /// Pitch of the last successful build.
    pub fn transverse_pitch(&self) -> Option<Real> {
        self.transverse_pitch
    }

    /// Geometry of the last successful build.
    pub fn shape(&self) -> Option<&RackShape> {
        self.shape.as_ref()
    }

    /// Rebuilds from the current parameters.
    pub fn recompute(&mut self) -> Result<&RackShape, RackError> {
        let build = ProfileBuilder::new(&self.params).build().inspect_err(|e| {
            warn!(error = %e, "rack recompute failed, keeping previous geometry");
        })?;
        debug!(pitch = build.properties.transverse_pitch, "rack recomputed");
        self.transverse_pitch = Some(build.properties.transverse_pitch);
        Ok(self.shape.insert(build.shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::PI;

    #[test]
    fn fresh_rack_has_no_outputs() {
        let rack = GearRack::default();
        assert!(rack.transverse_pitch().is_none());
        assert!(rack.shape().is_none());
    }

    #[test]
    fn recompute_publishes_pitch() {
        let mut rack = GearRack::new(GearingParameters {
            module: 2.0,
            num_teeth: 5,
            ..Default::default()
        });
        assert!(rack.recompute().unwrap().is_solid());
        assert!((rack.transverse_pitch().unwrap() - 2.0 * PI).abs() < 1e-12);
    }
}
