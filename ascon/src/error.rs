//======================================================================
// src/error.rs
// Precondition failures. Authentication failure is not an error: the
// runtime decrypt functions report it as `false`.
//======================================================================

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("invalid nonce length: expected {expected} bytes, got {actual}")]
    InvalidNonceLength { expected: usize, actual: usize },

    #[error("invalid tag length: expected {expected} bytes, got {actual}")]
    InvalidTagLength { expected: usize, actual: usize },

    #[error("customization string is {actual} bytes, at most {max} allowed")]
    CustomizationTooLong { max: usize, actual: usize },

    #[error("message is {actual} bytes, at most {max} allowed")]
    MessageTooLong { max: usize, actual: usize },

    #[error("requested {actual} output bytes, at most {max} allowed")]
    OutputTooLong { max: usize, actual: usize },

    #[error("batch lanes must all have the same length")]
    LaneLengthMismatch,

    #[error("unknown algorithm name")]
    UnknownAlgorithm,
}

pub type Result<T> = core::result::Result<T, Error>;
