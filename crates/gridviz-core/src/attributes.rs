//! One association's attribute collection.
//!
//! An [`Attributes`] collection stores named arrays in insertion order,
//! keeps names unique within the collection, and carries the
//! collection-level active scalars/vectors selections.

use crate::array::AttributeArray;

/// An insertion-ordered collection of uniquely named attribute arrays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    arrays: Vec<AttributeArray>,
    active_scalars: Option<String>,
    active_vectors: Option<String>,
}

impl Attributes {
    /// Creates a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an array, replacing any existing array of the same name in place.
    pub fn insert(&mut self, array: AttributeArray) {
        match self.arrays.iter_mut().find(|a| a.name() == array.name()) {
            Some(slot) => *slot = array,
            None => self.arrays.push(array),
        }
    }

    /// Gets an array by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeArray> {
        self.arrays.iter().find(|a| a.name() == name)
    }

    /// Gets a mutable array by name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut AttributeArray> {
        self.arrays.iter_mut().find(|a| a.name() == name)
    }

    /// Checks whether an array with the given name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.arrays.iter().any(|a| a.name() == name)
    }

    /// Removes and returns an array by name.
    ///
    /// A collection-level active selection naming the removed array is cleared.
    pub fn pop(&mut self, name: &str) -> Option<AttributeArray> {
        let index = self.arrays.iter().position(|a| a.name() == name)?;
        if self.active_scalars.as_deref() == Some(name) {
            self.active_scalars = None;
        }
        if self.active_vectors.as_deref() == Some(name) {
            self.active_vectors = None;
        }
        Some(self.arrays.remove(index))
    }

    /// Returns the array names in storage order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.arrays.iter().map(AttributeArray::name)
    }

    /// Returns an iterator over the arrays in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeArray> {
        self.arrays.iter()
    }

    /// Returns the number of arrays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arrays.len()
    }

    /// Returns true if the collection holds no arrays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arrays.is_empty()
    }

    /// Removes all arrays and clears the active selections.
    pub fn clear(&mut self) {
        self.arrays.clear();
        self.active_scalars = None;
        self.active_vectors = None;
    }

    /// Returns the collection-level active scalars selection.
    #[must_use]
    pub fn active_scalars(&self) -> Option<&str> {
        self.active_scalars.as_deref()
    }

    /// Sets or clears the collection-level active scalars selection.
    ///
    /// This is plain bookkeeping; name resolution and validation happen in
    /// [`crate::registry::AttributeRegistry`].
    pub fn set_active_scalars(&mut self, name: Option<&str>) {
        self.active_scalars = name.map(str::to_string);
    }

    /// Returns the collection-level active vectors selection.
    #[must_use]
    pub fn active_vectors(&self) -> Option<&str> {
        self.active_vectors.as_deref()
    }

    /// Sets or clears the collection-level active vectors selection.
    pub fn set_active_vectors(&mut self, name: Option<&str>) {
        self.active_vectors = name.map(str::to_string);
    }
}
