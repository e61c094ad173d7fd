//! Handles for class, symbol and variable names.

use std::fmt;

/// Number of interner shards a name can point into.
pub(crate) const SHARDS: usize = 16;

const SHARD_BITS: u32 = SHARDS.trailing_zeros();
const SHARD_MASK: u32 = (1 << SHARD_BITS) - 1;
/// First slot that no longer fits beside the shard bits.
const SLOT_LIMIT: u32 = 1 << (u32::BITS - SHARD_BITS);

/// A class, symbol or variable name interned in a
/// [`StringInterner`](crate::StringInterner).
///
/// The shard sits in the low bits and the slot within the shard above it.
/// Two names are equal iff the same interner produced them from the same
/// text. There is no `Ord`: the only order that means anything is the order
/// of the texts, and only the interner knows those.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Name for `slot` of `shard`, or `None` when either is out of range.
    pub(crate) fn pack(shard: usize, slot: usize) -> Option<Self> {
        let shard = u32::try_from(shard).ok().filter(|&s| s <= SHARD_MASK)?;
        let slot = u32::try_from(slot).ok().filter(|&s| s < SLOT_LIMIT)?;
        Some(Name((slot << SHARD_BITS) | shard))
    }

    #[inline]
    pub(crate) const fn shard(self) -> usize {
        (self.0 & SHARD_MASK) as usize
    }

    #[inline]
    pub(crate) const fn slot(self) -> usize {
        (self.0 >> SHARD_BITS) as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({}@{})", self.slot(), self.shard())
    }
}
