//! Type kind tag for tag-driven dispatch.
//!
//! The discriminant order doubles as the first key of the structural type
//! order used to normalize intersections and unions, so reordering variants
//! changes how normalized types render.

use std::fmt;

/// Type kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Tag {
    // === Sentinels ===
    /// The `nil` type.
    Nil = 0,
    /// The top type `%any`.
    Top = 1,
    /// Wildcard query `*`.
    Wild = 2,

    // === Named leaves ===
    /// Class name, e.g. `Integer`.
    Nominal = 3,
    /// Singleton symbol type, rendered bare, e.g. `red`.
    Symbol = 4,
    /// Type variable, rendered `:t`.
    Var = 5,

    // === Composites ===
    /// Nominal base applied to params, e.g. `Array<t>`.
    Generic = 6,
    /// Fixed-arity heterogeneous sequence.
    Tuple = 7,
    /// Any of several types.
    Union = 8,
    /// All of several types.
    Intersection = 9,
    /// Named argument wrapper around another type.
    Annotated = 10,
}

impl Tag {
    /// Check if this kind has no child types.
    #[inline]
    pub const fn is_leaf(self) -> bool {
        matches!(
            self,
            Tag::Nil | Tag::Top | Tag::Wild | Tag::Nominal | Tag::Symbol | Tag::Var
        )
    }

    /// Human-readable kind name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Nil => "nil",
            Tag::Top => "top",
            Tag::Wild => "wildcard",
            Tag::Nominal => "nominal",
            Tag::Symbol => "symbol",
            Tag::Var => "variable",
            Tag::Generic => "generic",
            Tag::Tuple => "tuple",
            Tag::Union => "union",
            Tag::Intersection => "intersection",
            Tag::Annotated => "annotated",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
