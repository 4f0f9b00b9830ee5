//! Host property records and their migration to [`GearingParameters`].
//!
//! Hosts persist the rack as a flat key-value record with lengths in
//! millimetres and angles in degrees. Older records used `beta` for the helix
//! angle and predate several optional fields. [`migrate_record`] brings any
//! such record to the current layout before it becomes a typed parameter
//! value, so the builder never needs to ask which fields exist.

use crate::errors::RackError;
use crate::float_types::Real;
use crate::params::GearingParameters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Field renames applied to legacy records, `(old, new)`.
pub const LEGACY_RENAMES: &[(&str, &str)] = &[("beta", "helix_angle")];

/// Fields every record has carried since the first layout.
pub const REQUIRED_FIELDS: &[&str] = &[
    "num_teeth",
    "module",
    "pressure_angle",
    "height",
    "thickness",
    "helix_angle",
];

/// Fields that legacy records may lack; they take their default value.
pub const OPTIONAL_FIELDS: &[&str] = &[
    "head",
    "clearance",
    "head_fillet",
    "root_fillet",
    "double_helix",
    "add_endings",
    "simplified",
    "properties_from_tool",
];

/// The rack as a host stores it: millimetres and degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyRecord {
    pub num_teeth: i64,
    pub module: Real,
    /// Degrees.
    pub pressure_angle: Real,
    /// Degrees.
    pub helix_angle: Real,
    pub height: Real,
    pub thickness: Real,
    pub head: Real,
    pub clearance: Real,
    pub head_fillet: Real,
    pub root_fillet: Real,
    pub double_helix: bool,
    pub add_endings: bool,
    pub simplified: bool,
    pub properties_from_tool: bool,
}

impl Default for PropertyRecord {
    fn default() -> Self {
        PropertyRecord::from(&GearingParameters::default())
    }
}

impl From<&GearingParameters> for PropertyRecord {
    fn from(p: &GearingParameters) -> Self {
        PropertyRecord {
            num_teeth: p.num_teeth as i64,
            module: p.module,
            pressure_angle: p.pressure_angle.to_degrees(),
            helix_angle: p.helix_angle.to_degrees(),
            height: p.height,
            thickness: p.thickness,
            head: p.head,
            clearance: p.clearance,
            head_fillet: p.head_fillet,
            root_fillet: p.root_fillet,
            double_helix: p.double_helix,
            add_endings: p.add_endings,
            simplified: p.simplified,
            properties_from_tool: p.properties_from_tool,
        }
    }
}

impl TryFrom<PropertyRecord> for GearingParameters {
    type Error = RackError;

    /// Converts units and validates the result.
    fn try_from(r: PropertyRecord) -> Result<Self, Self::Error> {
        let num_teeth = usize::try_from(r.num_teeth)
            .map_err(|_| RackError::invalid("num_teeth", format!("{} is negative", r.num_teeth)))?;
        let params = GearingParameters {
            module: r.module,
            num_teeth,
            pressure_angle: r.pressure_angle.to_radians(),
            helix_angle: r.helix_angle.to_radians(),
            thickness: r.thickness,
            height: r.height,
            head: r.head,
            clearance: r.clearance,
            head_fillet: r.head_fillet,
            root_fillet: r.root_fillet,
            double_helix: r.double_helix,
            add_endings: r.add_endings,
            simplified: r.simplified,
            properties_from_tool: r.properties_from_tool,
        };
        params.validate()?;
        Ok(params)
    }
}

/// Applies [`LEGACY_RENAMES`] in place.
///
/// A record holding both the old and the new name is accepted only when both
/// carry the same value.
pub fn rename_legacy_fields(record: &mut Map<String, Value>) -> Result<(), RackError> {
    for &(old, new) in LEGACY_RENAMES {
        let Some(value) = record.remove(old) else {
            continue;
        };
        match record.get(new) {
            Some(existing) if existing != &value => {
                return Err(RackError::Migration(format!(
                    "record holds both `{old}` ({value}) and `{new}` ({existing})"
                )));
            },
            Some(_) => {},
            None => {
                debug!(old, new, "renaming legacy field");
                record.insert(new.to_owned(), value);
            },
        }
    }
    Ok(())
}

/// Migrates a persisted host record and converts it into validated parameters.
///
/// Range violations surface as [`RackError::InvalidParameter`]; structural
/// problems (not an object, missing required fields, wrong value types,
/// conflicting renames) as [`RackError::Migration`].
pub fn migrate_record(record: Value) -> Result<GearingParameters, RackError> {
    let Value::Object(mut map) = record else {
        return Err(RackError::Migration("record is not a key-value object".into()));
    };
    rename_legacy_fields(&mut map)?;

    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|f| !map.contains_key(*f))
        .collect();
    if !missing.is_empty() {
        return Err(RackError::Migration(format!("record lacks required fields {missing:?}")));
    }
    for &field in OPTIONAL_FIELDS.iter().filter(|f| !map.contains_key(**f)) {
        warn!(field, "legacy record lacks field, using default");
    }

    let record: PropertyRecord =
        serde_json::from_value(Value::Object(map)).map_err(|e| RackError::Migration(e.to_string()))?;
    GearingParameters::try_from(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn current_record() -> Value {
        serde_json::to_value(PropertyRecord::default()).unwrap()
    }

    #[test]
    fn current_record_round_trips_to_defaults() {
        let params = migrate_record(current_record()).unwrap();
        let defaults = GearingParameters::default();
        assert_eq!(params.num_teeth, defaults.num_teeth);
        assert!((params.pressure_angle - defaults.pressure_angle).abs() < 1e-12);
    }

    #[test]
    fn beta_becomes_helix_angle() {
        let record = json!({
            "num_teeth": 20,
            "module": 2.0,
            "pressure_angle": 20.0,
            "height": 10.0,
            "thickness": 4.0,
            "beta": 12.5,
        });
        let params = migrate_record(record).unwrap();
        assert!((params.helix_angle - (12.5 as Real).to_radians()).abs() < 1e-12);
        // optional fields missing from the legacy layout take their defaults
        assert!((params.clearance - 0.25).abs() < 1e-12);
        assert!(params.add_endings);
        assert!(!params.properties_from_tool);
    }

    #[test]
    fn conflicting_rename_fails() {
        let mut record = current_record();
        record["beta"] = json!(5.0);
        record["helix_angle"] = json!(7.0);
        assert!(matches!(migrate_record(record), Err(RackError::Migration(_))));
    }

    #[test]
    fn missing_required_field_fails() {
        let mut record = current_record();
        record.as_object_mut().unwrap().remove("module");
        assert!(matches!(migrate_record(record), Err(RackError::Migration(_))));
    }

    #[test]
    fn out_of_range_values_stay_parameter_errors() {
        let mut record = current_record();
        record["num_teeth"] = json!(2);
        assert!(matches!(
            migrate_record(record),
            Err(RackError::InvalidParameter { name: "num_teeth", .. })
        ));
    }
}
