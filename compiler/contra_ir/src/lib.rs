//! Contra IR - shared identifiers and runtime values.
//!
//! This crate holds the pieces every layer of the contract type system
//! agrees on:
//! - `Name`: a compact interned identifier (class, symbol and variable names)
//! - `StringInterner` / `SharedInterner`: the sharded, thread-safe name table
//! - `Value`: the runtime value model that membership checks inspect
//!
//! Names compare in O(1) by index. Their textual order is only available
//! through the interner, which is what deterministic orderings must use.

mod interner;
mod name;
mod value;

pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use value::Value;
