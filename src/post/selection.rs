//! The set of images chosen for download.

use std::collections::BTreeSet;
use tracing::debug;

/// Indices into the current post's image list that the user wants.
///
/// Every index is in `[0, total)`. A fresh set starts with everything
/// selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: BTreeSet<usize>,
    total: usize,
}

impl SelectionSet {
    /// Creates a set of `count` images with all of them selected.
    pub fn all(count: usize) -> Self {
        let mut selection = Self::default();
        selection.initialize(count);
        selection
    }

    /// Resets the set to `count` images, all selected.
    pub fn initialize(&mut self, count: usize) {
        self.total = count;
        self.selected = (0..count).collect();
    }

    /// Flips the membership of `index`.
    ///
    /// Indices past the end of the image list are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.total {
            debug!(index, total = self.total, "Ignoring out of range toggle");
            return;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    /// Clears the selection if everything is selected, otherwise selects
    /// everything.
    ///
    /// This is not an invert: a partial selection always becomes a full one.
    pub fn toggle_all(&mut self) {
        if self.is_all_selected() {
            self.selected.clear();
        } else {
            self.selected = (0..self.total).collect();
        }
    }

    /// Label for the toggle-all action in the current state.
    pub fn toggle_all_label(&self) -> &'static str {
        if self.is_all_selected() {
            "Deselect All"
        } else {
            "Select All"
        }
    }

    /// Number of selected images.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Total number of images the set covers.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Return `true` if `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Return `true` if the selected count equals the total.
    pub fn is_all_selected(&self) -> bool {
        self.selected.len() == self.total
    }

    /// Return `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    /// Projects the selection onto `items`, keeping their original order.
    pub fn selected_items<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        items
            .iter()
            .enumerate()
            .filter(|(i, _)| self.is_selected(*i))
            .map(|(_, item)| item)
            .collect()
    }
}
