//! Thread-safe handle to one pool.
//!
//! Construction and subtyping both take `&mut Pool`, so a pool shared
//! across threads sits behind one `RwLock`. Equality, hashing, membership,
//! matching and rendering need only the read lock. Bound recording and
//! promotion run under the write lock, which serializes them per pool.

use std::sync::Arc;

use contra_ir::SharedInterner;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::Pool;

/// Shared, lock-protected [`Pool`].
#[derive(Clone, Default)]
pub struct SharedPool(Arc<RwLock<Pool>>);

impl SharedPool {
    /// Create a shared pool with its own name table.
    pub fn new() -> Self {
        Self::from_pool(Pool::new())
    }

    /// Create a shared pool interning into `names`.
    pub fn with_interner(names: SharedInterner) -> Self {
        Self::from_pool(Pool::with_interner(names))
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: Pool) -> Self {
        Self(Arc::new(RwLock::new(pool)))
    }

    /// Acquire shared access.
    pub fn read(&self) -> RwLockReadGuard<'_, Pool> {
        self.0.read()
    }

    /// Acquire exclusive access.
    pub fn write(&self) -> RwLockWriteGuard<'_, Pool> {
        self.0.write()
    }

    /// Run `f` with exclusive access.
    pub fn with<R>(&self, f: impl FnOnce(&mut Pool) -> R) -> R {
        f(&mut self.0.write())
    }
}

impl std::fmt::Debug for SharedPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedPool").field(&*self.0.read()).finish()
    }
}
