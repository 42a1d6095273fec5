//! Error types for scene assembly and animation.

use thiserror::Error;

/// Result type for scene and animation operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors raised while registering parts, resolving poses or generating frames.
///
/// Every variant reflects a configuration mistake (bad registration order,
/// malformed plan, missing asset). None of them are transient.
#[derive(Debug, Error)]
pub enum SceneError {
    /// A part with this name is already registered.
    #[error("Part '{name}' is already registered")]
    DuplicateName {
        /// The duplicate part name.
        name: String,
    },

    /// The declared parent has not been registered yet.
    #[error("Parent part '{parent}' is not registered (required by '{child}')")]
    UnknownParent {
        /// The part being registered.
        child: String,
        /// The missing parent name.
        parent: String,
    },

    /// Lookup of a registered part failed.
    #[error("Part '{name}' not found")]
    NotFound {
        /// The missing part name.
        name: String,
    },

    /// An animation plan targets a part that has no base pose.
    #[error("Animation targets unknown part '{name}'")]
    UnknownPart {
        /// The unknown part name.
        name: String,
    },

    /// The animation plan cannot produce frames.
    #[error("Invalid animation plan: {reason}")]
    InvalidPlan {
        /// Why the plan was rejected.
        reason: String,
    },

    /// The geometry loader could not find the named asset.
    #[error("Geometry asset '{name}' not found")]
    GeometryNotFound {
        /// The asset name or path that was requested.
        name: String,
    },

    /// A rotation axis name other than x, y or z.
    #[error("Unknown rotation axis '{0}' (expected x, y or z)")]
    InvalidAxis(String),

    /// The OBJ file exists but could not be parsed.
    #[error("Failed to load OBJ asset '{name}': {source}")]
    ObjLoad {
        /// The asset name.
        name: String,
        /// The underlying loader error.
        #[source]
        source: tobj::LoadError,
    },
}

impl SceneError {
    pub(crate) fn invalid_plan(reason: impl Into<String>) -> Self {
        Self::InvalidPlan {
            reason: reason.into(),
        }
    }
}
