//! Ordered set of unique elements with the usual set algebra.

use std::collections::BTreeSet;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Sub};
use thiserror::Error;
use tracing::debug;

use super::Element;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SetError {
    #[error("Element {0} is not in the set")]
    MissingElement(Element),
}

/// Collection of unique [`Element`]s.
///
/// Iteration and display follow element order, so output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueSet {
    items: BTreeSet<Element>,
}

impl ValueSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, element: &Element) -> bool {
        self.items.contains(element)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.items.iter()
    }

    /// Insert `element`. Returns false if it was already present.
    pub fn add(&mut self, element: impl Into<Element>) -> bool {
        self.items.insert(element.into())
    }

    /// Merge every element of `other` into `self`.
    pub fn update(&mut self, other: &ValueSet) {
        self.items.extend(other.items.iter().cloned());
    }

    /// Remove `element`, failing when it is absent.
    pub fn remove(&mut self, element: impl Into<Element>) -> Result<(), SetError> {
        let element = element.into();
        if self.items.remove(&element) {
            Ok(())
        } else {
            Err(SetError::MissingElement(element))
        }
    }

    /// Remove `element` if present. Returns whether it was removed.
    pub fn discard(&mut self, element: impl Into<Element>) -> bool {
        let element = element.into();
        let removed = self.items.remove(&element);
        if !removed {
            debug!(%element, "discard of absent element");
        }
        removed
    }

    /// True when the two sets share no element.
    pub fn is_disjoint(&self, other: &ValueSet) -> bool {
        self.items.is_disjoint(&other.items)
    }

    pub fn is_subset(&self, other: &ValueSet) -> bool {
        self.items.is_subset(&other.items)
    }

    pub fn is_superset(&self, other: &ValueSet) -> bool {
        self.items.is_superset(&other.items)
    }

    pub fn union(&self, other: &ValueSet) -> ValueSet {
        self.items.union(&other.items).cloned().collect()
    }

    pub fn intersection(&self, other: &ValueSet) -> ValueSet {
        self.items.intersection(&other.items).cloned().collect()
    }

    /// Elements of `self` not in `other`.
    pub fn difference(&self, other: &ValueSet) -> ValueSet {
        self.items.difference(&other.items).cloned().collect()
    }

    /// Elements in exactly one of the two sets.
    pub fn symmetric_difference(&self, other: &ValueSet) -> ValueSet {
        self.items
            .symmetric_difference(&other.items)
            .cloned()
            .collect()
    }
}

impl<E: Into<Element>> FromIterator<E> for ValueSet {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<E: Into<Element>> Extend<E> for ValueSet {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a ValueSet {
    type Item = &'a Element;
    type IntoIter = std::collections::btree_set::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return f.write_str("set()");
        }
        f.write_str("{")?;
        for (i, element) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("}")
    }
}

impl BitOr for &ValueSet {
    type Output = ValueSet;

    fn bitor(self, rhs: &ValueSet) -> ValueSet {
        self.union(rhs)
    }
}

impl BitAnd for &ValueSet {
    type Output = ValueSet;

    fn bitand(self, rhs: &ValueSet) -> ValueSet {
        self.intersection(rhs)
    }
}

impl Sub for &ValueSet {
    type Output = ValueSet;

    fn sub(self, rhs: &ValueSet) -> ValueSet {
        self.difference(rhs)
    }
}

impl BitXor for &ValueSet {
    type Output = ValueSet;

    fn bitxor(self, rhs: &ValueSet) -> ValueSet {
        self.symmetric_difference(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[i64]) -> ValueSet {
        values.iter().copied().collect()
    }

    #[test]
    fn test_from_list_removes_duplicates() {
        let s: ValueSet = vec![1, 2, 2, 3, 3, 3].into_iter().collect();
        assert_eq!(s.len(), 3);
        assert_eq!(s.to_string(), "{1, 2, 3}");
    }

    #[test]
    fn test_empty_display() {
        assert_eq!(ValueSet::new().to_string(), "set()");
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut s = ValueSet::new();
        assert!(s.add(3));
        assert!(s.add("a"));
        assert!(!s.add("a"));
        assert_eq!(s.to_string(), "{3, 'a'}");
    }

    #[test]
    fn test_remove_vs_discard() {
        let mut s = set(&[1, 2]);
        assert_eq!(s.remove(25), Err(SetError::MissingElement(Element::Int(25))));
        assert!(!s.discard(25));
        assert_eq!(s.remove(1), Ok(()));
        assert!(s.discard(2));
        assert!(s.is_empty());
    }

    #[test]
    fn test_contains_and_iteration_order() {
        let mut s = set(&[3, 1]);
        s.extend(["b", "a"]);
        assert!(s.contains(&Element::from(1)));
        assert!(s.contains(&Element::from("a")));
        assert!(!s.contains(&Element::from(2)));

        let expected = vec![
            Element::from(1),
            Element::from(3),
            Element::from("a"),
            Element::from("b"),
        ];
        assert_eq!(s.iter().cloned().collect::<Vec<_>>(), expected);
        assert_eq!((&s).into_iter().count(), 4);
        let mut seen = Vec::new();
        for element in &s {
            seen.push(element.to_string());
        }
        assert_eq!(seen, vec!["1", "3", "'a'", "'b'"]);
    }

    #[test]
    fn test_update_merges() {
        let mut a = set(&[1, 2]);
        let mut b = ValueSet::new();
        b.add("a");
        b.add(2);
        a.update(&b);
        assert_eq!(a.to_string(), "{1, 2, 'a'}");
    }

    #[test]
    fn test_relations() {
        let a = set(&[1, 2, 3, 4, 5, 6]);
        let b = set(&[5, 6, 7, 8, 9, 10]);
        assert!(!a.is_disjoint(&b));
        assert!(set(&[25, 50, 99]).is_disjoint(&b));
        assert!(set(&[1, 2, 3]).is_subset(&a));
        assert!(a.is_superset(&set(&[1, 2, 3])));
        assert!(!b.is_subset(&a));
        assert!(ValueSet::new().is_subset(&a));
    }

    #[test]
    fn test_venn_operations() {
        let a = set(&[1, 2, 3, 4, 5, 6]);
        let b = set(&[5, 6, 7, 8, 9, 10]);
        assert_eq!(a.union(&b), set(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]));
        assert_eq!(a.intersection(&b), set(&[5, 6]));
        assert_eq!(a.difference(&b), set(&[1, 2, 3, 4]));
        assert_eq!(b.difference(&a), set(&[7, 8, 9, 10]));
        assert_eq!(a.symmetric_difference(&b), set(&[1, 2, 3, 4, 7, 8, 9, 10]));
    }

    #[test]
    fn test_operators_match_methods() {
        let a = set(&[1, 2, 3]);
        let b = set(&[3, 4]);
        assert_eq!(&a | &b, a.union(&b));
        assert_eq!(&a & &b, a.intersection(&b));
        assert_eq!(&a - &b, a.difference(&b));
        assert_eq!(&a ^ &b, a.symmetric_difference(&b));
    }
}
