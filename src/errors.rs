//! Errors raised while validating parameters and building rack geometry

/// Everything that can go wrong between a parameter record and a finished rack.
///
/// No variant is recovered from inside the crate: a failed build returns the
/// error unchanged and produces neither an outline nor a solid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RackError {
    /// A gearing parameter is outside its allowed range. Raised before any geometry exists.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The requested geometry cannot be realised: an infeasible fillet radius,
    /// a self-intersecting outline, mismatched loft profiles or a non-planar face.
    #[error("geometric constraint violated: {0}")]
    GeometricConstraint(String),

    /// A persisted host record could not be brought to the current field layout.
    #[error("parameter record migration failed: {0}")]
    Migration(String),
}

impl RackError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        RackError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    pub(crate) fn geometry(reason: impl Into<String>) -> Self {
        RackError::GeometricConstraint(reason.into())
    }
}
