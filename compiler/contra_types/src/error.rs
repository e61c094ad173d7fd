//! Construction errors.
//!
//! Construction is the only fallible part of the core. Subtyping, membership,
//! matching, equality and hashing are total.

use crate::Idx;

/// Error raised by a smart constructor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// A component handle is not a type of this pool.
    #[error("invalid type parameter at position {position}: {idx:?} is not a type")]
    InvalidTypeParam { position: usize, idx: Idx },

    /// A generic base is not a nominal type.
    #[error("generic base {idx:?} is not a nominal type")]
    NotNominal { idx: Idx },
}
