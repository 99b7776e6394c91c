//! Error types for WWN decoding

use thiserror::Error;

/// Errors raised by a vendor lookup collaborator
///
/// Per-address problems never surface as errors: a malformed or unknown
/// address simply produces no descriptor, and an id the lookup leaves out
/// is just left unresolved. Only a failing vendor lookup is an error, handed
/// back to the caller untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The lookup service or database could not be reached
    #[error("vendor lookup unavailable: {0}")]
    Unavailable(String),
}
