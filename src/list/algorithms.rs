use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        let mut list = List::try_with_capacity(self.len()).unwrap_or_default();
        list.extend(self.iter().cloned());
        list
    }

    fn clone_from(&mut self, other: &Self) {
        while self.len() > other.len() {
            self.pop_back();
        }
        let mut iter_other = other.iter();
        for (elem, elem_other) in self.iter_mut().zip(&mut iter_other) {
            elem.clone_from(elem_other);
        }
        self.extend(iter_other.cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for elt in self {
            elt.hash(state);
        }
        self.len().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::iter::FromIterator;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_cmp() {
        let a = List::from_iter([1, 2, 3]);
        let b = List::from_iter([1, 2, 4]);
        let c = List::from_iter([1, 2]);
        assert_ne!(a, b);
        assert!(a < b);
        assert!(c < a);
        assert_eq!(a, List::from_iter(1..=3));
        assert_eq!(hash_of(&a), hash_of(&List::from_iter(1..=3)));
    }

    #[test]
    fn list_clone() {
        let list = List::from_iter(0..5);
        let cloned = list.clone();
        assert_eq!(list, cloned);
        cloned.assert_well_formed();

        let mut shorter = List::from_iter(10..12);
        shorter.clone_from(&list);
        assert_eq!(shorter, list);
        shorter.assert_well_formed();

        let mut longer = List::from_iter(10..20);
        longer.clone_from(&list);
        assert_eq!(longer, list);
        longer.assert_well_formed();
    }
}
