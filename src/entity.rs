//! The set of entities referenced by an interaction table.

use std::collections::HashMap;

/// An insertion-ordered set of entity identifiers.
///
/// Iteration always yields entities in the order in which they were first
/// inserted. Downstream consumers use the position of an entity within the set
/// as a stable index, so this ordering is part of the contract.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EntitySet {
    /// The entities, in first-seen order.
    entities: Vec<String>,

    /// The position of each entity within `entities`.
    index: HashMap<String, usize>,
}

impl EntitySet {
    /// Creates an empty [`EntitySet`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entity into the set.
    ///
    /// Returns `true` if the entity was not already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use pcomplex::EntitySet;
    ///
    /// let mut entities = EntitySet::new();
    ///
    /// assert!(entities.insert("NEK9"));
    /// assert!(entities.insert("CDK1"));
    /// assert!(!entities.insert("NEK9"));
    ///
    /// assert_eq!(entities.iter().collect::<Vec<_>>(), vec!["NEK9", "CDK1"]);
    /// ```
    pub fn insert(&mut self, entity: &str) -> bool {
        if self.index.contains_key(entity) {
            return false;
        }

        self.index.insert(entity.to_string(), self.entities.len());
        self.entities.push(entity.to_string());
        true
    }

    /// Whether the set contains `entity`.
    pub fn contains(&self, entity: &str) -> bool {
        self.index.contains_key(entity)
    }

    /// Gets the first-seen position of `entity` within the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use pcomplex::EntitySet;
    ///
    /// let entities = ["NEK9", "CDK1", "INCENP"].into_iter().collect::<EntitySet>();
    ///
    /// assert_eq!(entities.position("CDK1"), Some(1));
    /// assert_eq!(entities.position("AURKB"), None);
    /// ```
    pub fn position(&self, entity: &str) -> Option<usize> {
        self.index.get(entity).copied()
    }

    /// Gets the number of entities in the set.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates over the entities in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entities.iter().map(String::as_str)
    }

    /// Gets the entities as a slice, in first-seen order.
    pub fn as_slice(&self) -> &[String] {
        &self.entities
    }
}

impl<'a> IntoIterator for &'a EntitySet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

impl<S> Extend<S> for EntitySet
where
    S: AsRef<str>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for entity in iter {
            self.insert(entity.as_ref());
        }
    }
}

impl<S> FromIterator<S> for EntitySet
where
    S: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut entities = Self::new();
        entities.extend(iter);
        entities
    }
}
