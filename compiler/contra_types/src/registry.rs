//! Per-constructor canonicalization registries.
//!
//! The pool owns one registry per hash-consed constructor, so a nominal
//! `Foo` and a variable `Foo` never share an entry. Entries are never
//! evicted.
//!
//! - [`Registry<K>`] maps a descriptor key to its handle. It serves
//!   constructors whose keys are plain data.
//! - [`ComponentRegistry`] serves unions and intersections. Their component
//!   lists may hold tuples, which are distinct handles even when equal, so
//!   entries are bucketed by structural hash and confirmed by a structural
//!   comparison the pool supplies.

use std::collections::hash_map::Entry;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::Idx;

/// Hash-consing table for one constructor.
#[derive(Debug)]
pub struct Registry<K> {
    map: FxHashMap<K, Idx>,
}

impl<K: Eq + Hash> Registry<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Return the handle for `key`, building it on first use.
    ///
    /// `build` runs at most once per distinct key and receives the key as it
    /// will be stored. Lookup and insertion happen under the same `&mut`
    /// borrow, so no other caller can observe the key without its handle.
    pub fn intern_with(&mut self, key: K, build: impl FnOnce(&K) -> Idx) -> Idx {
        match self.map.entry(key) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let idx = build(entry.key());
                entry.insert(idx);
                idx
            }
        }
    }

    /// Number of canonical instances built so far.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<K: Eq + Hash> Default for Registry<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash-consing table keyed by structure rather than by handles.
///
/// Lookup and insertion are separate calls because confirming a match
/// reads the pool that owns this registry. Callers hold `&mut Pool`
/// across both, which keeps the pair atomic.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    buckets: FxHashMap<u64, SmallVec<[Idx; 1]>>,
    len: usize,
}

impl ComponentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// First entry stored under `hash` for which `same` holds.
    pub fn find(&self, hash: u64, same: impl Fn(Idx) -> bool) -> Option<Idx> {
        self.buckets
            .get(&hash)?
            .iter()
            .copied()
            .find(|&idx| same(idx))
    }

    /// Store `idx` under `hash`. The caller has checked with `find` that no
    /// equal entry exists.
    pub fn insert(&mut self, hash: u64, idx: Idx) {
        self.buckets.entry(hash).or_default().push(idx);
        self.len += 1;
    }

    /// Number of canonical instances built so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
