//! Crate-level error types.

use std::fmt;

/// Errors produced by the kemio crate.
///
/// Every failure is synchronous and propagates immediately; nothing in this
/// crate retries. Callers are expected to abort the current presentation
/// step on any of these.
#[derive(Debug)]
pub enum KemioError {
    /// A pool transition was requested between pools keyed to different
    /// elements. Fatal to that call; no partial plan is produced.
    MismatchedKind {
        /// Atomic number of the pool the transition was invoked on.
        expected: u32,
        /// Atomic number of the target pool.
        found: u32,
    },
    /// A group was built from (or extended with) two pools sharing the same
    /// atomic number.
    DuplicateKey(u32),
    /// Catalog lookup by atomic number or symbol found no record.
    UnknownElement(String),
    /// The catalog resource is malformed or incomplete.
    CatalogParse(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for KemioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MismatchedKind { expected, found } => write!(
                f,
                "cannot transition between pools of different elements \
                 (atomic number {expected} vs {found})"
            ),
            Self::DuplicateKey(z) => {
                write!(f, "group already holds a pool for atomic number {z}")
            }
            Self::UnknownElement(query) => {
                write!(f, "no catalog record for {query}")
            }
            Self::CatalogParse(msg) => {
                write!(f, "catalog parse error: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for KemioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for KemioError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
