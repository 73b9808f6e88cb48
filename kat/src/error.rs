//======================================================================
// kat/src/error.rs
// Errors raised while reading, converting or checking vectors.
//======================================================================

use crate::algorithm::Algorithm;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KatError {
    #[error("line {line}: expected `Field = value`, got {text:?}")]
    MalformedLine { line: usize, text: String },

    #[error("line {line}: field {field} is not valid hex")]
    Hex {
        line: usize,
        field: String,
        #[source]
        source: hex::FromHexError,
    },

    #[error("record starting at line {line} has no {field} field")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: invalid {field} value {value:?}")]
    InvalidValue {
        line: usize,
        field: String,
        value: String,
    },

    #[error("ACVP test case {tc_id} has no {field} field")]
    MissingJsonField { tc_id: u64, field: &'static str },

    #[error("unknown algorithm {0:?}")]
    UnknownAlgorithm(String),

    #[error("{0} is not a hash or XOF")]
    NotADigest(Algorithm),

    #[error("record {count} is not a {algorithm} vector")]
    RecordMismatch { algorithm: Algorithm, count: usize },

    #[error("malformed ACVP JSON")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Ascon(#[from] ascon_lwc::Error),
}

pub type Result<T> = std::result::Result<T, KatError>;
