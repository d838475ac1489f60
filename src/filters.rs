//! Editable list of attribute filters shown in the picker

use serde::{Deserialize, Serialize};

use crate::types::FilterSpec;

/// Ordered filter rows as edited in the UI.
///
/// Rows may be incomplete (empty attribute name) and attribute names may
/// repeat; both are preserved as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterList {
    rows: Vec<FilterSpec>,
}

impl FilterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an empty row at the end
    pub fn add(&mut self) {
        self.rows.push(FilterSpec::default());
    }

    /// Delete the row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> FilterSpec {
        self.rows.remove(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut FilterSpec> {
        self.rows.get_mut(index)
    }

    pub fn replace_all(&mut self, rows: Vec<FilterSpec>) {
        self.rows = rows;
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterSpec> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn as_slice(&self) -> &[FilterSpec] {
        &self.rows
    }

    /// Rows with an attribute chosen, in order
    pub fn complete(&self) -> Vec<FilterSpec> {
        self.rows.iter().filter(|f| f.is_complete()).cloned().collect()
    }
}

impl From<Vec<FilterSpec>> for FilterList {
    fn from(rows: Vec<FilterSpec>) -> Self {
        Self { rows }
    }
}

impl<'a> IntoIterator for &'a FilterList {
    type Item = &'a FilterSpec;
    type IntoIter = std::slice::Iter<'a, FilterSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
