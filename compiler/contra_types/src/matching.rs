//! Query matching.
//!
//! Matching answers "does this signature type fit this query type", where
//! the query may contain the wildcard `*` anywhere. It is structural and
//! read-only: unlike `subtype`, it never records bounds or promotes.

use crate::pool::TypeData;
use crate::stack::ensure_sufficient_stack;
use crate::{Idx, Pool};

impl Pool {
    /// Check if `ty` matches the query `query`.
    pub fn matches(&self, ty: Idx, query: Idx) -> bool {
        ensure_sufficient_stack(|| {
            if let Some(slot) = self.tuple_slot(ty) {
                return self.tuple_matches(slot, query);
            }

            let query = self.annotated_inner(query).unwrap_or(query);
            if query == Idx::WILD {
                return true;
            }

            match (self.data(ty), self.data(query)) {
                (
                    TypeData::Generic { base, params },
                    TypeData::Generic {
                        base: query_base,
                        params: query_params,
                    },
                ) => base == query_base && self.matches_all(params, query_params),
                (TypeData::Union(types), TypeData::Union(query_types))
                | (TypeData::Intersection(types), TypeData::Intersection(query_types)) => {
                    self.matches_all(types, query_types)
                }
                (TypeData::Annotated { ty, .. }, _) => self.matches(*ty, query),
                _ => self.equal(ty, query),
            }
        })
    }

    fn matches_all(&self, types: &[Idx], queries: &[Idx]) -> bool {
        types.len() == queries.len()
            && types
                .iter()
                .zip(queries)
                .all(|(&ty, &query)| self.matches(ty, query))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
