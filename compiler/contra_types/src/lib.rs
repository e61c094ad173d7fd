//! Type descriptors and subtyping for runtime contracts.
//!
//! Every type lives in a [`Pool`] and is referred to by an [`Idx`]:
//! - leaves: nominal classes, singleton symbols, type variables, plus the
//!   pre-interned top (`%any`), `nil` and wildcard (`*`) types
//! - composites: generics, unions, intersections, annotated arguments
//! - tuples: fixed-length sequences that may be promoted to arrays
//!
//! All kinds except tuples are hash-consed: constructing the same
//! normalized descriptor twice returns the same `Idx`. Tuples carry
//! mutable bound-tracking state and get a fresh `Idx` each time.
//!
//! The relations are [`Pool::subtype`], [`Pool::member`],
//! [`Pool::matches`] and [`Pool::equal`]. Substitution of type variables
//! is [`Pool::instantiate`].

mod equality;
mod error;
mod flags;
mod idx;
mod instantiate;
mod intersection;
mod matching;
mod member;
mod order;
mod pool;
mod registry;
mod relate;
mod shared;
mod stack;
mod tag;
mod tuple;

pub use error::TypeError;
pub use flags::TypeFlags;
pub use idx::Idx;
pub use instantiate::Substitution;
pub use pool::Pool;
pub use registry::{ComponentRegistry, Registry};
pub use shared::SharedPool;
pub use tag::Tag;

pub use contra_ir::{Name, SharedInterner, Value};

// Handles are passed by value everywhere.
#[cfg(target_pointer_width = "64")]
const _: () = {
    assert!(std::mem::size_of::<Idx>() == 4);
    assert!(std::mem::size_of::<Tag>() == 1);
};
