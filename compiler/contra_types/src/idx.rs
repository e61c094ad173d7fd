//! Type handle.
//!
//! `Idx` is how every layer refers to a type. Hash-consed kinds hand out one
//! index per distinct descriptor, so `Idx` equality is identity equality for
//! them. Tuples are the exception: each construction gets a fresh index and
//! structural comparison goes through [`Pool::equal`](crate::Pool::equal).

use std::fmt;

/// A 32-bit index into the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Pre-interned Types (indices 0-2) ===

    /// The top type `%any`: every type is a subtype, every value a member.
    pub const TOP: Self = Self(0);
    /// The `nil` type: the sentinel dropped by intersection and union
    /// normalization and returned when nothing is left.
    pub const NIL: Self = Self(1);
    /// The wildcard query type `*`, matching anything.
    pub const WILD: Self = Self(2);

    /// Number of pre-interned types.
    pub const PRE_INTERNED: u32 = 3;

    /// Sentinel value indicating no type. Never accepted by constructors.
    pub const NONE: Self = Self(u32::MAX);

    /// Create an index from a raw u32 value.
    ///
    /// The result is only meaningful for the pool that produced `raw`.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::TOP => write!(f, "Idx::TOP"),
            Self::NIL => write!(f, "Idx::NIL"),
            Self::WILD => write!(f, "Idx::WILD"),
            Self::NONE => write!(f, "Idx::NONE"),
            _ => write!(f, "Idx({})", self.0),
        }
    }
}

impl Default for Idx {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pre_interned_indices_are_fixed() {
        assert_eq!(Idx::TOP.raw(), 0);
        assert_eq!(Idx::NIL.raw(), 1);
        assert_eq!(Idx::WILD.raw(), 2);
        assert_eq!(Idx::PRE_INTERNED, 3);
    }

    #[test]
    fn none_is_the_default() {
        assert_eq!(Idx::default(), Idx::NONE);
    }

    #[test]
    fn debug_names_sentinels() {
        assert_eq!(format!("{:?}", Idx::NIL), "Idx::NIL");
        assert_eq!(format!("{:?}", Idx::from_raw(42)), "Idx(42)");
    }
}
