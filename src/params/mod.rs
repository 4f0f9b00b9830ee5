//! Gearing parameters of a rack and the quantities derived from them

use crate::errors::RackError;
use crate::float_types::{FRAC_PI_2, PI, Real};
use serde::{Deserialize, Serialize};

pub mod migration;

pub use migration::{PropertyRecord, migrate_record};

/// Allowed tooth counts.
pub const NUM_TEETH_RANGE: std::ops::RangeInclusive<usize> = 3..=10_000;

/// Allowed head/root fillet factors.
pub const FILLET_RANGE: std::ops::RangeInclusive<Real> = 0.0..=1000.0;

/// Engineering inputs of one rack build.
///
/// Lengths are in millimetres and angles in radians. The value is immutable
/// for the duration of a build; construct a fresh one (or clone and edit) to
/// rebuild with different inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GearingParameters {
    /// Tooth size unit; the pitch is `module * π`.
    pub module: Real,
    pub num_teeth: usize,
    /// Sets the flank slope through `tan(pressure_angle)`.
    pub pressure_angle: Real,
    /// Skew of the teeth against the rack's long axis; 0 is a straight rack.
    pub helix_angle: Real,
    /// Depth of the rack body below the tooth root.
    pub thickness: Real,
    /// Length along Z. 0 yields the 2D outline only.
    pub height: Real,
    /// Extra tooth-tip length as a multiple of the module.
    pub head: Real,
    /// Extra root depth as a multiple of the module.
    pub clearance: Real,
    /// Tip fillet radius as a multiple of the module.
    pub head_fillet: Real,
    /// Root fillet radius as a multiple of the module.
    pub root_fillet: Real,
    /// Herringbone instead of a single helix when the helix angle is non-zero.
    pub double_helix: bool,
    /// Full end caps so the rack is exactly `num_teeth` pitches long.
    pub add_endings: bool,
    /// Hint for hosts that keep the tooth count fixed to avoid topology
    /// renaming. Does not change the geometry.
    pub simplified: bool,
    /// Module and pressure angle describe the cutting tool (normal plane)
    /// rather than the rack's transverse plane.
    pub properties_from_tool: bool,
}

impl Default for GearingParameters {
    fn default() -> Self {
        GearingParameters {
            module: 1.0,
            num_teeth: 15,
            pressure_angle: (20.0 as Real).to_radians(),
            helix_angle: 0.0,
            thickness: 5.0,
            height: 5.0,
            head: 0.0,
            clearance: 0.25,
            head_fillet: 0.0,
            root_fillet: 0.0,
            double_helix: false,
            add_endings: true,
            simplified: false,
            properties_from_tool: false,
        }
    }
}

/// Module, pitch and pressure angle as used for the tooth geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RackProperties {
    /// Module in the transverse plane.
    pub module: Real,
    /// Module in the plane normal to the teeth.
    pub normal_module: Real,
    /// Spacing of corresponding flanks along the pitch axis.
    pub transverse_pitch: Real,
    /// Pressure angle in the transverse plane.
    pub pressure_angle: Real,
}

impl GearingParameters {
    /// Checks every field against its allowed range.
    pub fn validate(&self) -> Result<(), RackError> {
        if !NUM_TEETH_RANGE.contains(&self.num_teeth) {
            return Err(RackError::invalid(
                "num_teeth",
                format!(
                    "{} is outside [{}, {}]",
                    self.num_teeth,
                    NUM_TEETH_RANGE.start(),
                    NUM_TEETH_RANGE.end()
                ),
            ));
        }
        positive("module", self.module)?;
        positive("thickness", self.thickness)?;
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(RackError::invalid("height", format!("{} must be zero or positive", self.height)));
        }
        if !self.pressure_angle.is_finite() || self.pressure_angle <= 0.0 || self.pressure_angle >= FRAC_PI_2 {
            return Err(RackError::invalid(
                "pressure_angle",
                format!("{}° is outside (0°, 90°)", self.pressure_angle.to_degrees()),
            ));
        }
        if !self.helix_angle.is_finite() || self.helix_angle.abs() >= FRAC_PI_2 {
            return Err(RackError::invalid(
                "helix_angle",
                format!("{}° is outside (-90°, 90°)", self.helix_angle.to_degrees()),
            ));
        }
        finite("head", self.head)?;
        finite("clearance", self.clearance)?;
        fillet_factor("head_fillet", self.head_fillet)?;
        fillet_factor("root_fillet", self.root_fillet)?;
        Ok(())
    }

    /// Derives the transverse module, pitch and pressure angle.
    ///
    /// When `properties_from_tool` is set the inputs are read as normal-plane
    /// values of the cutting tool and projected into the transverse plane:
    /// ```text
    /// mₜ = mₙ / cos β        αₜ = atan(tan αₙ / cos β)
    /// ```
    /// Otherwise they already are transverse values and pass through.
    pub fn compute_properties(&self) -> RackProperties {
        let cos_beta = self.helix_angle.cos();
        let (module, normal_module, pressure_angle) = if self.properties_from_tool {
            (
                self.module / cos_beta,
                self.module,
                (self.pressure_angle.tan() / cos_beta).atan(),
            )
        } else {
            (self.module, self.module * cos_beta, self.pressure_angle)
        };
        RackProperties {
            module,
            normal_module,
            transverse_pitch: module * PI,
            pressure_angle,
        }
    }

    /// Pitch along the rack's long axis.
    pub fn transverse_pitch(&self) -> Real {
        self.compute_properties().transverse_pitch
    }
}

fn finite(name: &'static str, value: Real) -> Result<(), RackError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RackError::invalid(name, format!("{value} is not a finite number")))
    }
}

fn positive(name: &'static str, value: Real) -> Result<(), RackError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RackError::invalid(name, format!("{value} must be greater than zero")))
    }
}

fn fillet_factor(name: &'static str, value: Real) -> Result<(), RackError> {
    if FILLET_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(RackError::invalid(
            name,
            format!("{value} is outside [{}, {}]", FILLET_RANGE.start(), FILLET_RANGE.end()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GearingParameters::default().validate().is_ok());
    }

    #[test]
    fn tooth_count_bounds() {
        for (n, ok) in [(2, false), (3, true), (10_000, true), (10_001, false)] {
            let params = GearingParameters {
                num_teeth: n,
                ..Default::default()
            };
            assert_eq!(params.validate().is_ok(), ok, "num_teeth = {n}");
        }
    }

    #[test]
    fn fillet_factor_bounds() {
        let params = GearingParameters {
            root_fillet: 1000.5,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(RackError::InvalidParameter { name: "root_fillet", .. })
        ));
        let params = GearingParameters {
            head_fillet: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(RackError::InvalidParameter { name: "head_fillet", .. })
        ));
    }

    #[test]
    fn non_positive_lengths_are_rejected() {
        for params in [
            GearingParameters { module: 0.0, ..Default::default() },
            GearingParameters { thickness: -1.0, ..Default::default() },
            GearingParameters { height: -0.5, ..Default::default() },
        ] {
            assert!(params.validate().is_err());
        }
    }

    #[test]
    fn pitch_ignores_helix_unless_from_tool() {
        let params = GearingParameters {
            module: 2.0,
            helix_angle: (15.0 as Real).to_radians(),
            ..Default::default()
        };
        assert!((params.transverse_pitch() - 2.0 * PI).abs() < 1e-12);

        let tool = GearingParameters {
            properties_from_tool: true,
            ..params
        };
        let props = tool.compute_properties();
        let cos_beta = tool.helix_angle.cos();
        assert!((props.transverse_pitch - 2.0 * PI / cos_beta).abs() < 1e-12);
        assert!((props.normal_module - 2.0).abs() < 1e-12);
        assert!(props.pressure_angle > tool.pressure_angle);
    }
}
