use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash};

use hashbrown::{DefaultHashBuilder, HashMap};

use super::{Difference, Intersection, Iter, SymmetricDifference, Union};

/// An unordered collection of unique values, backed by a hash table mapping each element to a
/// unit presence marker.
///
/// Every operation is total: no query or mutation ever fails, including on a null set (see
/// [`Set::default`]).
#[derive(Clone)]
pub struct Set<T: Hash + Eq, S: BuildHasher = DefaultHashBuilder> {
    // None is the null state: readable as empty, allocated on first insertion.
    pub(crate) elements: Option<HashMap<T, (), S>>,
}

impl<T: Hash + Eq> Set<T> {
    /// Returns a new empty set with an allocated table.
    pub fn new() -> Set<T> {
        Set {
            elements: Some(HashMap::new())
        }
    }

    /// Returns a new set with the distinct values of the given sequence. Duplicates collapse
    /// silently and the order of the input is irrelevant to the result.
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Set<T> {
        elements.into_iter().collect()
    }

    pub fn with_capacity(cap: usize) -> Set<T> {
        Set {
            elements: Some(HashMap::with_capacity(cap))
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> Set<T, S> {
    pub fn with_hasher(hasher: S) -> Set<T, S> {
        Set {
            elements: Some(HashMap::with_hasher(hasher))
        }
    }

    /// Returns the number of elements in the set; 0 for an empty or null set.
    pub fn len(&self) -> usize {
        self.elements.as_ref().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true iff the given element is in the set.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized
    {
        self.elements.as_ref().is_some_and(|map| map.contains_key(item))
    }

    /// Returns true iff every element of `other` is in the set. Vacuously true when `other` is
    /// empty or null.
    pub fn contains_all(&self, other: &Set<T, S>) -> bool {
        other.iter().all(|item| self.contains(item))
    }

    /// Returns true iff every element of the set is in `other`. Always true for an empty
    /// receiver. Cardinality rules a subset out before any element-wise check.
    pub fn is_subset(&self, other: &Set<T, S>) -> bool {
        self.len() <= other.len() && other.contains_all(self)
    }

    /// Returns true iff the set is a subset of `other` and strictly smaller.
    pub fn is_proper_subset(&self, other: &Set<T, S>) -> bool {
        self.len() < other.len() && other.contains_all(self)
    }

    /// Returns true iff every element of `other` is in the set.
    pub fn is_superset(&self, other: &Set<T, S>) -> bool {
        self.len() >= other.len() && self.contains_all(other)
    }

    /// Returns true iff the set is a superset of `other` and strictly larger.
    pub fn is_proper_superset(&self, other: &Set<T, S>) -> bool {
        self.len() > other.len() && self.contains_all(other)
    }

    /// Removes the given element. Returns whether it was present; removing an absent element,
    /// or removing from an empty or null set, is a no-op rather than an error.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized
    {
        self.elements.as_mut().is_some_and(|map| map.remove(item).is_some())
    }

    /// Removes every element of `other` that is present in the set. Elements of `other` absent
    /// from the set are silently ignored; `other` itself is untouched.
    pub fn remove_all(&mut self, other: &Set<T, S>) {
        for item in other.iter() {
            self.remove(item);
        }
    }

    /// Collects all elements into a vector, in unspecified order. Repeated calls may yield
    /// different orders.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone
    {
        self.iter().cloned().collect()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Lazily iterates over the elements of `self` that are not in `other`. (`self \ other`)
    pub fn difference<'a>(&'a self, other: &'a Set<T, S>) -> Difference<'a, T, S> {
        Difference {
            inner: self.iter(),
            other
        }
    }

    /// Lazily iterates over the elements that are in exactly one of `self` and `other`.
    /// (`self △ other`)
    pub fn symmetric_difference<'a>(&'a self, other: &'a Set<T, S>) -> SymmetricDifference<'a, T, S> {
        SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Lazily iterates over the elements that are in both `self` and `other`. (`self ∩ other`)
    pub fn intersection<'a>(&'a self, other: &'a Set<T, S>) -> Intersection<'a, T, S> {
        Intersection {
            inner: self.iter(),
            other
        }
    }

    /// Lazily iterates over the elements that are in `self`, `other` or both. (`self ∪ other`)
    pub fn union<'a>(&'a self, other: &'a Set<T, S>) -> Union<'a, T, S> {
        Union {
            inner: self.iter().chain(other.difference(self)),
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> Set<T, S> {
    /// Inserts the given element, returning true iff it was not already present. Inserting into
    /// a null set allocates its table.
    pub fn insert(&mut self, item: T) -> bool {
        self.elements
            .get_or_insert_with(HashMap::default)
            .insert(item, ())
            .is_none()
    }

    /// Inserts a clone of every element of `other`. `other` is untouched.
    pub fn insert_all(&mut self, other: &Set<T, S>)
    where
        T: Clone
    {
        for item in other.iter() {
            self.insert(item.clone());
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> Default for Set<T, S> {
    /// Returns a null set: one with no allocated table. It reads as empty and the first
    /// insertion allocates storage, but under `==` it is only ever equal to another null set.
    fn default() -> Set<T, S> {
        Set {
            elements: None
        }
    }
}

/// Content equality, with one caveat: a null set (see [`Set::default`]) compares equal to
/// another null set and to nothing else. An allocated empty set and a null set are *not* equal,
/// in either order, even though every read on them agrees. Allocated sets compare by
/// cardinality, then membership.
impl<T: Hash + Eq, S: BuildHasher> PartialEq for Set<T, S> {
    fn eq(&self, other: &Set<T, S>) -> bool {
        match (&self.elements, &other.elements) {
            (None, None) => true,
            (None, Some(_)) | (Some(_), None) => false,
            (Some(_), Some(_)) => self.len() == other.len() && self.contains_all(other),
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher> Eq for Set<T, S> {}

impl<T: Hash + Eq + Debug, S: BuildHasher> Debug for Set<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: Hash + Eq + Display, S: BuildHasher> Display for Set<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "#{{{}}}",
            self.iter()
                .map(|i| i.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
