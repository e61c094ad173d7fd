//! Sharded string interner for class, symbol and variable names.
//!
//! Interning is a lookup-or-insert: the read lock serves the common case and
//! the write lock re-checks before inserting, so two threads racing on the
//! same string always receive the same `Name`.

use crate::name::{self, Name};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Per-shard storage for interned strings.
struct InternShard {
    /// Text to the name already handed out for it.
    map: FxHashMap<&'static str, Name>,
    /// Texts by slot.
    strings: Vec<&'static str>,
}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        }
    }
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternError {
    /// Shard ran out of slots.
    #[error("interner shard {shard_idx} exceeded capacity: {count} strings")]
    ShardOverflow { shard_idx: usize, count: usize },
}

/// Sharded string interner for concurrent access.
///
/// Strings are leaked on insertion and live as long as the process, matching
/// the lifetime of the types that refer to them.
pub struct StringInterner {
    shards: [RwLock<InternShard>; name::SHARDS],
    /// Total count of interned strings across all shards.
    total_count: AtomicUsize,
}

impl StringInterner {
    /// Create a new interner with the core class names pre-interned.
    pub fn new() -> Self {
        let interner = Self {
            shards: std::array::from_fn(|_| RwLock::new(InternShard::new())),
            total_count: AtomicUsize::new(0),
        };
        interner.pre_intern_core_classes();
        interner
    }

    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % name::SHARDS
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        let shard_idx = Self::shard_for(s);
        let shard = &self.shards[shard_idx];

        if let Some(&name) = shard.read().map.get(s) {
            return Ok(name);
        }

        let mut guard = shard.write();

        // Another writer may have inserted while we waited for the lock.
        if let Some(&name) = guard.map.get(s) {
            return Ok(name);
        }

        let count = guard.strings.len();
        let name = Name::pack(shard_idx, count)
            .ok_or(InternError::ShardOverflow { shard_idx, count })?;

        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        guard.strings.push(leaked);
        guard.map.insert(leaked, name);
        self.total_count.fetch_add(1, Ordering::Relaxed);

        Ok(name)
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity. Use `try_intern` for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Look up the string for a Name.
    ///
    /// # Panics
    /// Panics if `name` was not produced by this interner.
    pub fn lookup(&self, name: Name) -> &'static str {
        let guard = self.shards[name.shard()].read();
        guard.strings[name.slot()]
    }

    fn pre_intern_core_classes(&self) {
        const CORE: &[&str] = &[
            "BasicObject",
            "Object",
            "Numeric",
            "Integer",
            "Float",
            "String",
            "Symbol",
            "Array",
            "Hash",
            "NilClass",
            "TrueClass",
            "FalseClass",
        ];

        for class in CORE {
            self.intern(class);
        }
    }

    /// Get the number of interned strings.
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Check if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Clonable, thread-safe handle to one `StringInterner`.
///
/// Every pool that must agree on names holds a clone of the same handle.
#[derive(Clone)]
pub struct SharedInterner(Arc<StringInterner>);

impl SharedInterner {
    /// Create a new shared interner.
    pub fn new() -> Self {
        SharedInterner(Arc::new(StringInterner::new()))
    }
}

impl Default for SharedInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SharedInterner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedInterner")
            .field("len", &self.0.len())
            .finish()
    }
}

impl std::ops::Deref for SharedInterner {
    type Target = StringInterner;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
