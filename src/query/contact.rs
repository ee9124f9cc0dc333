//! Contact points and the ordered, deduplicated contact collection.

use core::cmp::Ordering;
use std::collections::btree_set::{self, BTreeSet};

use crate::math::{Point, Real, UnitVector};
use crate::shape::Polytope;
use ordered_float::OrderedFloat;

/// A single contact point between two polytopes.
///
/// The owning bodies are borrowed for reporting only; no ownership is
/// transferred to the physics layer.
#[derive(Debug, Copy, Clone)]
pub struct Contact<'a> {
    /// The first body of the pair.
    pub first: &'a Polytope,
    /// The second body of the pair.
    pub second: &'a Polytope,
    /// The world-space contact position.
    pub position: Point<Real>,
    /// The world-space contact normal, pointing away from `second`.
    pub normal: UnitVector<Real>,
}

impl Contact<'_> {
    fn key(&self) -> (OrderedFloat<Real>, OrderedFloat<Real>, OrderedFloat<Real>) {
        (
            OrderedFloat(self.position.x),
            OrderedFloat(self.position.y),
            OrderedFloat(self.position.z),
        )
    }
}

/// Contacts are ordered and compared by position alone (lexicographically
/// on x, then y, then z), which is also the deduplication key: two contacts
/// at the same position collapse to one set entry regardless of bodies or
/// normals.
impl Ord for Contact<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Contact<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Contact<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Contact<'_> {}

/// An ordered set of contacts, deduplicated by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSet<'a> {
    contacts: BTreeSet<Contact<'a>>,
}

impl<'a> ContactSet<'a> {
    /// Creates an empty contact set.
    pub fn new() -> Self {
        ContactSet {
            contacts: BTreeSet::new(),
        }
    }

    /// Inserts a contact, collapsing positional duplicates.
    ///
    /// Returns `false` if an equal-position contact was already present; the
    /// existing entry is kept.
    pub fn insert(&mut self, contact: Contact<'a>) -> bool {
        self.contacts.insert(contact)
    }

    /// The number of distinct contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the set holds no contact. An empty set is a valid outcome of
    /// contact generation ("no manifold this step"), not an error.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Iterates over the contacts in position order.
    pub fn iter(&self) -> btree_set::Iter<'_, Contact<'a>> {
        self.contacts.iter()
    }
}

impl<'a, 'b> IntoIterator for &'b ContactSet<'a> {
    type Item = &'b Contact<'a>;
    type IntoIter = btree_set::Iter<'b, Contact<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
