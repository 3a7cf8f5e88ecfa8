//! Row selection, independent of filter and page.

use std::{
    any::Any,
    collections::BTreeSet,
    ops::{Deref, DerefMut},
};

use user_table_states::{State, state_assign_impl};

/// Ordered set of selected user ids.
///
/// Ids are never validated against the current filter: a selected row that is filtered out
/// stays selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<u64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: u64) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Adds every page id when `checked`, otherwise removes exactly those ids.
    pub fn select_all_on_page(&mut self, page_ids: &[u64], checked: bool) {
        if checked {
            self.ids.extend(page_ids.iter().copied());
        } else {
            for id in page_ids {
                self.ids.remove(id);
            }
        }
    }

    /// False for an empty page.
    pub fn is_all_selected_on_page(&self, page_ids: &[u64]) -> bool {
        !page_ids.is_empty() && page_ids.iter().all(|id| self.ids.contains(id))
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.ids.iter().copied()
    }

    /// Toolbar label, e.g. "3 selected".
    pub fn label(&self) -> String {
        format!("{} selected", self.ids.len())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSelection(pub Selection);

impl Deref for UserSelection {
    type Target = Selection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for UserSelection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl State for UserSelection {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}
