use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use hashbrown::HashMap;

use super::Set;

impl<T: Hash + Eq, S: BuildHasher + Default> FromIterator<T> for Set<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = Set {
            elements: Some(HashMap::with_capacity_and_hasher(iter.size_hint().0, S::default()))
        };

        for item in iter {
            set.insert(item);
        }

        set
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> Extend<T> for Set<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default, const N: usize> From<[T; N]> for Set<T, S> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher + Default> BitOr for &Set<T, S> {
    type Output = Set<T, S>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> BitOrAssign for Set<T, S> {
    fn bitor_assign(&mut self, rhs: Self) {
        for item in rhs {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher + Default> BitAnd for &Set<T, S> {
    type Output = Set<T, S>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, S: BuildHasher> BitAndAssign for Set<T, S> {
    fn bitand_assign(&mut self, rhs: Self) {
        if let Some(map) = &mut self.elements {
            map.retain(|item, _| rhs.contains(item));
        }
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher + Default> BitXor for &Set<T, S> {
    type Output = Set<T, S>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, S: BuildHasher + Default> BitXorAssign for Set<T, S> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if !self.remove(&item) {
                self.insert(item);
            }
        }
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher + Default> Sub for &Set<T, S> {
    type Output = Set<T, S>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, S: BuildHasher> SubAssign for Set<T, S> {
    fn sub_assign(&mut self, rhs: Self) {
        for item in rhs {
            self.remove(&item);
        }
    }
}
