//! Eager set algebra: each function builds and returns a fresh set, leaving both inputs
//! untouched. The lazy, allocation-free counterparts are the like-named methods on [`Set`].

use std::hash::{BuildHasher, Hash};

use super::Set;

/// Returns a new set with the elements of `a` that are not in `b`. (`a \ b`)
pub fn difference<T, S>(a: &Set<T, S>, b: &Set<T, S>) -> Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default
{
    a.difference(b).cloned().collect()
}

/// Returns a new set with the elements that are in exactly one of `a` and `b`. (`a △ b`)
pub fn symmetric_difference<T, S>(a: &Set<T, S>, b: &Set<T, S>) -> Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default
{
    a.symmetric_difference(b).cloned().collect()
}

/// Returns a new set with the elements that are in both `a` and `b`. (`a ∩ b`)
pub fn intersection<T, S>(a: &Set<T, S>, b: &Set<T, S>) -> Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default
{
    a.intersection(b).cloned().collect()
}

/// Returns a new set with the elements that are in `a`, `b` or both. (`a ∪ b`)
pub fn union<T, S>(a: &Set<T, S>, b: &Set<T, S>) -> Set<T, S>
where
    T: Hash + Eq + Clone,
    S: BuildHasher + Default
{
    a.union(b).cloned().collect()
}
