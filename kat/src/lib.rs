//======================================================================
// kat/src/lib.rs
// Crate entry point for the known-answer-test tooling.
//======================================================================

//! Reading, writing and checking Ascon known-answer-test files.
//!
//! KAT files use the `Field = hexvalue` layout of the LWC submission
//! packages. [`acvp::convert`] turns NIST ACVP JSON vector sets into the
//! same records, and [`check::check_records`] recomputes every record
//! with `ascon-lwc`.

// --- Module Declarations ---

pub mod acvp;
pub mod algorithm;
pub mod check;
pub mod error;
pub mod kat;

// --- Test Module ---
#[cfg(test)]
mod tests;

// --- Re-exports ---

pub use crate::acvp::{convert, read_vector_set, VectorSet};
pub use crate::algorithm::{Algorithm, RecordKind};
pub use crate::check::{check_record, check_records, CheckReport};
pub use crate::error::{KatError, Result};
pub use crate::kat::{parse, render, AeadVector, DigestVector, KatRecord};
