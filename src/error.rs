use thiserror::Error;

/// Failures reported while asking the foreign runtime for type metadata.
///
/// The primitives in this crate never produce these themselves except for the
/// installation bookkeeping; every other variant originates in the runtime and is
/// passed through untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("no foreign type system has been installed")]
    NotInstalled,
    #[error("a foreign type system is already installed")]
    AlreadyInstalled,
    #[error("Class not found: {0}")]
    ClassNotFound(String),
    #[error("Type lookup failed: {0}")]
    Lookup(String),
}
