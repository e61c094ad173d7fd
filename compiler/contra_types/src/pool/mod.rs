//! The type pool.
//!
//! Every type lives in one `Pool` and is referenced by its `Idx`. The pool
//! owns one canonicalization registry per hash-consed constructor plus the
//! side table of tuple entries, whose state changes after construction.
//!
//! # Layout
//!
//! - `items[idx]`: kind payload and pre-computed flags for every type
//! - `tuples[n]`: params, fixed hash and promotion state of the n-th tuple
//! - registries: normalized descriptor -> canonical `Idx`, per constructor;
//!   unions and intersections are found by structural hash and `equal`
//!
//! Nothing is ever removed. Handles stay valid for the life of the pool.

mod construct;
mod format;

use contra_ir::{Name, SharedInterner};
use rustc_hash::FxHashMap;

use crate::registry::{ComponentRegistry, Registry};
use crate::{Idx, Tag, TypeError, TypeFlags};

/// Kind payload of one pool slot.
#[derive(Clone, Debug)]
pub(crate) enum TypeData {
    Top,
    Nil,
    Wild,
    Nominal(Name),
    Symbol(Name),
    Var(Name),
    Generic { base: Idx, params: Box<[Idx]> },
    /// Index into `Pool::tuples`.
    Tuple(u32),
    Union(Box<[Idx]>),
    Intersection(Box<[Idx]>),
    Annotated { name: Name, ty: Idx },
}

impl TypeData {
    fn tag(&self) -> Tag {
        match self {
            TypeData::Top => Tag::Top,
            TypeData::Nil => Tag::Nil,
            TypeData::Wild => Tag::Wild,
            TypeData::Nominal(_) => Tag::Nominal,
            TypeData::Symbol(_) => Tag::Symbol,
            TypeData::Var(_) => Tag::Var,
            TypeData::Generic { .. } => Tag::Generic,
            TypeData::Tuple(_) => Tag::Tuple,
            TypeData::Union(_) => Tag::Union,
            TypeData::Intersection(_) => Tag::Intersection,
            TypeData::Annotated { .. } => Tag::Annotated,
        }
    }
}

#[derive(Clone, Debug)]
struct Item {
    data: TypeData,
    flags: TypeFlags,
}

/// Representation state of a tuple.
///
/// The only transition is `Fixed -> Promoted`, performed by replacing the
/// whole state. Bound lists exist only before promotion.
#[derive(Clone, Debug)]
pub(crate) enum TupleState {
    Fixed {
        /// Types this tuple has been proven a subtype of.
        ubounds: Vec<Idx>,
        /// Types proven to be subtypes of this tuple.
        lbounds: Vec<Idx>,
    },
    Promoted {
        /// The homogeneous `Array<Union(params)>` this tuple became.
        array: Idx,
    },
}

#[derive(Clone, Debug)]
pub(crate) struct TupleEntry {
    pub(crate) params: Box<[Idx]>,
    /// Computed from `params` at construction; survives promotion.
    pub(crate) hash: u64,
    pub(crate) state: TupleState,
}

/// Unified storage for all types of one program.
pub struct Pool {
    items: Vec<Item>,
    pub(crate) tuples: Vec<TupleEntry>,

    // One registry per hash-consed constructor.
    nominals: Registry<Name>,
    symbols: Registry<Name>,
    vars: Registry<Name>,
    generics: Registry<(Idx, Box<[Idx]>)>,
    unions: ComponentRegistry,
    intersections: ComponentRegistry,
    annotated: Registry<(Name, Idx)>,

    /// Class -> direct superclass.
    superclasses: FxHashMap<Name, Name>,
    names: SharedInterner,

    /// `Array`, the base tuples promote into.
    array_base: Idx,
    /// `Hash`, checked structurally by membership.
    hash_base: Idx,
    /// Slots allocated by the constructor itself.
    builtins: usize,
}

impl Pool {
    /// Create a pool with its own name table.
    pub fn new() -> Self {
        Self::with_interner(SharedInterner::new())
    }

    /// Create a pool that interns names into `names`.
    pub fn with_interner(names: SharedInterner) -> Self {
        let mut pool = Self {
            items: Vec::with_capacity(256),
            tuples: Vec::new(),
            nominals: Registry::new(),
            symbols: Registry::new(),
            vars: Registry::new(),
            generics: Registry::new(),
            unions: ComponentRegistry::new(),
            intersections: ComponentRegistry::new(),
            annotated: Registry::new(),
            superclasses: FxHashMap::default(),
            names,
            array_base: Idx::NONE,
            hash_base: Idx::NONE,
            builtins: 0,
        };

        // Pre-interned slots must match the `Idx` constants.
        pool.alloc(TypeData::Top, TypeFlags::empty());
        pool.alloc(TypeData::Nil, TypeFlags::empty());
        pool.alloc(TypeData::Wild, TypeFlags::empty());
        debug_assert_eq!(pool.items.len(), Idx::PRE_INTERNED as usize);

        pool.array_base = pool.nominal("Array");
        pool.hash_base = pool.nominal("Hash");
        pool.install_core_hierarchy();
        pool.builtins = pool.items.len();
        pool
    }

    fn install_core_hierarchy(&mut self) {
        const CORE: &[(&str, &str)] = &[
            ("Object", "BasicObject"),
            ("Numeric", "Object"),
            ("Integer", "Numeric"),
            ("Float", "Numeric"),
            ("String", "Object"),
            ("Symbol", "Object"),
            ("Array", "Object"),
            ("Hash", "Object"),
            ("NilClass", "Object"),
            ("TrueClass", "Object"),
            ("FalseClass", "Object"),
        ];

        for &(child, parent) in CORE {
            self.declare_superclass(child, parent);
        }
    }

    /// Push a new slot and return its handle.
    pub(crate) fn alloc(&mut self, data: TypeData, flags: TypeFlags) -> Idx {
        push_item(&mut self.items, data, flags)
    }

    /// Canonical intersection for an already normalized component list.
    ///
    /// An existing intersection with the same members in any order is
    /// reused, even when its tuple members are other, equal instances.
    pub(crate) fn intern_intersection(&mut self, types: Box<[Idx]>) -> Idx {
        let hash = self.intersection_hash(&types);
        let found = self
            .intersections
            .find(hash, |idx| self.equal_sets(self.components(idx), &types));
        if let Some(idx) = found {
            return idx;
        }

        let flags = self.flags_of(&types);
        let idx = self.alloc(TypeData::Intersection(types), flags);
        self.intersections.insert(hash, idx);
        idx
    }

    /// Canonical union for an already normalized component list.
    pub(crate) fn intern_union(&mut self, types: Box<[Idx]>) -> Idx {
        let hash = self.union_hash(&types);
        let found = self
            .unions
            .find(hash, |idx| self.equal_sets(self.components(idx), &types));
        if let Some(idx) = found {
            return idx;
        }

        let flags = self.flags_of(&types);
        let idx = self.alloc(TypeData::Union(types), flags);
        self.unions.insert(hash, idx);
        idx
    }

    pub(crate) fn data(&self, idx: Idx) -> &TypeData {
        &self.items[idx.raw() as usize].data
    }

    /// Reject handles that do not belong to this pool.
    pub(crate) fn check_param(&self, position: usize, idx: Idx) -> Result<(), TypeError> {
        if self.contains(idx) {
            Ok(())
        } else {
            Err(TypeError::InvalidTypeParam { position, idx })
        }
    }

    pub(crate) fn check_params(&self, params: &[Idx]) -> Result<(), TypeError> {
        params
            .iter()
            .enumerate()
            .try_for_each(|(position, &idx)| self.check_param(position, idx))
    }

    pub(crate) fn flags_of(&self, params: &[Idx]) -> TypeFlags {
        TypeFlags::propagate_all(params.iter().map(|&p| self.flags(p)))
    }

    // === Queries ===

    /// Check if `idx` is a type of this pool.
    #[inline]
    pub fn contains(&self, idx: Idx) -> bool {
        (idx.raw() as usize) < self.items.len()
    }

    /// Kind of a type.
    ///
    /// # Panics
    /// Panics if `idx` is not a type of this pool.
    #[inline]
    pub fn tag(&self, idx: Idx) -> Tag {
        self.data(idx).tag()
    }

    /// Pre-computed flags of a type.
    #[inline]
    pub fn flags(&self, idx: Idx) -> TypeFlags {
        self.items[idx.raw() as usize].flags
    }

    /// Name of a nominal, symbol, variable or annotated argument.
    pub fn name_of(&self, idx: Idx) -> Option<Name> {
        match *self.data(idx) {
            TypeData::Nominal(name)
            | TypeData::Symbol(name)
            | TypeData::Var(name)
            | TypeData::Annotated { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Components of a union or intersection; empty for other kinds.
    pub fn components(&self, idx: Idx) -> &[Idx] {
        match self.data(idx) {
            TypeData::Union(types) | TypeData::Intersection(types) => types,
            _ => &[],
        }
    }

    /// Base and params of a generic type.
    pub fn generic_parts(&self, idx: Idx) -> Option<(Idx, &[Idx])> {
        match self.data(idx) {
            TypeData::Generic { base, params } => Some((*base, params)),
            _ => None,
        }
    }

    /// Wrapped type of an annotated argument.
    pub fn annotated_inner(&self, idx: Idx) -> Option<Idx> {
        match *self.data(idx) {
            TypeData::Annotated { ty, .. } => Some(ty),
            _ => None,
        }
    }

    /// Check if `idx` is `Array<T>` for some `T`.
    pub fn is_array(&self, idx: Idx) -> bool {
        matches!(self.data(idx), TypeData::Generic { base, params } if *base == self.array_base && params.len() == 1)
    }

    /// The `Array` nominal.
    #[inline]
    pub fn array_base(&self) -> Idx {
        self.array_base
    }

    /// The `Hash` nominal.
    #[inline]
    pub fn hash_base(&self) -> Idx {
        self.hash_base
    }

    /// Number of types in the pool, pre-interned ones included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no type beyond the built-in ones has been created.
    pub fn is_empty(&self) -> bool {
        self.items.len() == self.builtins
    }

    // === Names and classes ===

    /// The name table this pool interns into.
    #[inline]
    pub fn names(&self) -> &SharedInterner {
        &self.names
    }

    /// Text of an interned name.
    #[inline]
    pub fn lookup_name(&self, name: Name) -> &'static str {
        self.names.lookup(name)
    }

    /// Record `parent` as the direct superclass of `child`.
    ///
    /// A later declaration for the same child replaces the earlier one.
    pub fn declare_superclass(&mut self, child: &str, parent: &str) {
        let child = self.names.intern(child);
        let parent = self.names.intern(parent);
        self.superclasses.insert(child, parent);
    }

    /// Check if `class` is `ancestor` or inherits from it.
    pub fn is_descendant(&self, class: Name, ancestor: Name) -> bool {
        let mut current = class;
        // A chain can visit each declared class at most once unless the
        // declarations form a cycle.
        for _ in 0..=self.superclasses.len() {
            if current == ancestor {
                return true;
            }
            match self.superclasses.get(&current) {
                Some(&parent) => current = parent,
                None => return false,
            }
        }
        false
    }

    // === Registry sizes ===

    /// Number of canonical instances per hash-consed constructor, in the
    /// order nominal, symbol, variable, generic, union, intersection,
    /// annotated.
    pub fn registry_sizes(&self) -> [usize; 7] {
        [
            self.nominals.len(),
            self.symbols.len(),
            self.vars.len(),
            self.generics.len(),
            self.unions.len(),
            self.intersections.len(),
            self.annotated.len(),
        ]
    }
}

fn push_item(items: &mut Vec<Item>, data: TypeData, flags: TypeFlags) -> Idx {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "a pool never approaches u32::MAX types"
    )]
    let idx = Idx::from_raw(items.len() as u32);
    items.push(Item { data, flags });
    idx
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool")
            .field("types", &self.items.len())
            .field("tuples", &self.tuples.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
