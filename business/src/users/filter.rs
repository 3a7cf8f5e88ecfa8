//! Search filtering over the base list.

use std::any::Any;

use user_table_states::{Compute, ComputeDeps, Dep, State, Updater, assign_impl, state_assign_impl};

use super::{User, UserTablePage, UsersLoadCompute};

/// True when `term` (already lowercased) occurs in first name, last name, email or username.
fn matches_lowercase(user: &User, term: &str) -> bool {
    [
        user.firstname.as_str(),
        user.lastname.as_str(),
        user.email.as_str(),
        user.username(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(term))
}

/// Case-insensitive substring match on first name, last name, email or username.
///
/// The term is used as typed: surrounding whitespace is part of the needle.
pub fn matches_term(user: &User, term: &str) -> bool {
    term.is_empty() || matches_lowercase(user, &term.to_lowercase())
}

/// Users matching `term`, in base-list order. An empty term keeps everyone.
pub fn derive_filtered(base: &[User], term: &str) -> Vec<User> {
    if term.is_empty() {
        return base.to_vec();
    }

    let needle = term.to_lowercase();
    base.iter()
        .filter(|user| matches_lowercase(user, &needle))
        .cloned()
        .collect()
}

/// Current contents of the search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearchInput {
    pub term: String,
}

impl UserSearchInput {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }
}

impl State for UserSearchInput {
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

/// Filtered list derived from the loaded users and the search term.
///
/// Recomputing also moves the table back to page 1, so a new term never lands on a page that
/// no longer exists.
#[derive(Debug, Clone, Default)]
pub struct FilteredUsersCompute {
    pub users: Vec<User>,
    /// Term the list was derived with.
    pub term: String,
}

impl FilteredUsersCompute {
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Compute for FilteredUsersCompute {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::new()
            .state::<UserSearchInput>()
            .compute::<UsersLoadCompute>()
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let term = deps.state::<UserSearchInput>().term.clone();
        let base = deps.compute::<UsersLoadCompute>().users().unwrap_or_default();

        updater.set(FilteredUsersCompute {
            users: derive_filtered(base, &term),
            term,
        });
        updater.set(UserTablePage::first());
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(self.clone()))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
