use thiserror::Error;

use super::definition::WeaponType;

#[derive(Debug, Error)]
pub enum WeaponError {
    #[error("no weapon definition registered for {0:?}")]
    UnknownType(WeaponType),
    #[error("{0:?} has no firing pattern")]
    PatternNotImplemented(WeaponType),
    #[error("weapon table defines {0:?} more than once")]
    DuplicateDefinition(WeaponType),
    #[error("invalid definition for {kind:?}: {reason}")]
    InvalidDefinition { kind: WeaponType, reason: &'static str },
    #[error("failed to parse weapon table: {0}")]
    Config(#[from] ron::error::SpannedError),
}
