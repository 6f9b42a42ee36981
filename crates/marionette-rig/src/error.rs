use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RigError {
    /// The joint is not part of this rig's registry. Callers treat this as a
    /// reportable no-op.
    #[error("joint not found: {0}")]
    UnknownJoint(String),
}
