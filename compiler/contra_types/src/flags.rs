//! Pre-computed type metadata flags.
//!
//! Computed once when a type is allocated and never recomputed. Tuple
//! promotion does not change a tuple's flags: the promoted array is built
//! from the same params.

use bitflags::bitflags;

bitflags! {
    /// Pre-computed type properties for O(1) queries.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct TypeFlags: u32 {
        // === Presence Flags ===

        /// Contains a type variable.
        const HAS_VAR = 1 << 0;
        /// Contains a tuple (mutable bound-tracking state).
        const HAS_TUPLE = 1 << 1;
    }
}

impl TypeFlags {
    /// Flags that propagate from child types to parents.
    pub const PROPAGATE_MASK: Self =
        Self::from_bits_truncate(Self::HAS_VAR.bits() | Self::HAS_TUPLE.bits());

    /// Combine propagated flags from child types.
    #[inline]
    pub fn propagate_all(children: impl IntoIterator<Item = Self>) -> Self {
        children
            .into_iter()
            .fold(Self::empty(), |acc, child| acc | (child & Self::PROPAGATE_MASK))
    }

    /// Check if instantiation can return the type unchanged.
    ///
    /// Types containing tuples are always rebuilt so that the copy gets fresh
    /// bound-tracking state.
    #[inline]
    pub const fn is_inert(self) -> bool {
        !self.intersects(Self::HAS_VAR.union(Self::HAS_TUPLE))
    }
}

impl Default for TypeFlags {
    fn default() -> Self {
        Self::empty()
    }
}
