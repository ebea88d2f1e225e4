use std::hash::{BuildHasher, Hash};
use std::iter::Chain;

use hashbrown::HashMap;
use hashbrown::hash_map::{IntoKeys, Keys};

use super::Set;

impl<T: Hash + Eq, S: BuildHasher> IntoIterator for Set<T, S> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.elements.map(HashMap::into_keys))
    }
}

pub struct IntoIter<T: Hash + Eq> (
    pub(crate) Option<IntoKeys<T, ()>>,
);

impl<T: Hash + Eq> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.as_ref().map_or((0, Some(0)), |keys| keys.size_hint())
    }
}

impl<'a, T: Hash + Eq, S: BuildHasher> IntoIterator for &'a Set<T, S> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.elements.as_ref().map(HashMap::keys))
    }
}

pub struct Iter<'a, T: Hash + Eq> (
    pub(crate) Option<Keys<'a, T, ()>>,
);

impl<'a, T: Hash + Eq> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.as_ref().map_or((0, Some(0)), |keys| keys.size_hint())
    }
}

pub struct Difference<'a, T: Hash + Eq, S: BuildHasher> {
    pub(crate) inner: Iter<'a, T>,
    pub(crate) other: &'a Set<T, S>
}

impl<'a, T: Hash + Eq, S: BuildHasher> Iterator for Difference<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next && self.other.contains(item) {
            next = self.inner.next();
        }
        next
    }
}

pub struct SymmetricDifference<'a, T: Hash + Eq, S: BuildHasher> {
    pub(crate) inner: Chain<Difference<'a, T, S>, Difference<'a, T, S>>
}

impl<'a, T: Hash + Eq, S: BuildHasher> Iterator for SymmetricDifference<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

pub struct Intersection<'a, T: Hash + Eq, S: BuildHasher> {
    pub(crate) inner: Iter<'a, T>,
    pub(crate) other: &'a Set<T, S>
}

impl<'a, T: Hash + Eq, S: BuildHasher> Iterator for Intersection<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next && !self.other.contains(item) {
            next = self.inner.next();
        }
        next
    }
}

pub struct Union<'a, T: Hash + Eq, S: BuildHasher> {
    pub(crate) inner: Chain<Iter<'a, T>, Difference<'a, T, S>>
}

impl<'a, T: Hash + Eq, S: BuildHasher> Iterator for Union<'a, T, S> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}
