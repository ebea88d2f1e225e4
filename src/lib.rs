//! A generic mathematical set: an unordered collection of unique values backed by a hash table.
//!
//! The whole crate is the [`Set`] container. It stores each element as a key of a
//! [`hashbrown`] map with the unit type as its value, so membership, insertion and removal are
//! all expected O(1), and the set-algebra functions ([`union`], [`intersection`],
//! [`difference`], [`symmetric_difference`]) and relational predicates (subset, superset,
//! equality) are built purely from membership and mutation.
//!
//! # Null sets
//! A set produced by [`Set::default`] has no allocated table at all. Such a "null" set is
//! readable (it behaves as empty for every query) and writable (the first insertion allocates
//! the table), but `==` treats it as a distinct state: a null set is only ever equal to another
//! null set, never to an allocated set - not even an allocated *empty* one. This identity-style
//! short-circuit can surprise consumers; use [`Set::new`] unless the null state is wanted. See
//! the equality notes on the [`PartialEq`] impl of [`Set`].
//!
//! # Ordering
//! Iteration order is unspecified and unstable: two otherwise identical sets may yield their
//! elements in different orders, and repeated calls on the same set may too. Never rely on it.
//!
//! # Concurrency
//! The container performs no internal synchronization. Concurrent mutation, or mutation during
//! reads, requires external locking.

#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod set;

#[cfg(test)]
pub(crate) mod util;

#[doc(inline)]
pub use set::*;
