//! Fixed-size page windows over the filtered list.

use std::{any::Any, ops::Range};

use log::debug;
use user_table_states::{Compute, ComputeDeps, Dep, State, Updater, assign_impl, state_assign_impl};

use crate::UserTableConfig;

use super::{FilteredUsersCompute, User};

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// `ceil(count / size)`; zero records means zero pages.
pub fn total_pages(count: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    count.div_ceil(size)
}

/// Pulls `page` into `[1, total_pages]`. With no pages the table stays on page 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Window for `current_page` over `count` filtered records.
///
/// `start` and `end` are clamped to `count`, so an out-of-range page yields an empty window
/// rather than a panic; [`PageWindowCompute`] clamps the page itself.
pub fn derive_page(count: usize, current_page: usize, page_size: usize) -> PageWindow {
    let current_page = current_page.max(1);
    let start = ((current_page - 1) * page_size).min(count);
    let end = (start + page_size).min(count);

    PageWindow {
        current_page,
        total_pages: total_pages(count, page_size),
        page_size,
        start,
        end,
        filtered_count: count,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub start: usize,
    pub end: usize,
    pub filtered_count: usize,
}

impl Default for PageWindow {
    fn default() -> Self {
        derive_page(0, 1, DEFAULT_PAGE_SIZE)
    }
}

impl PageWindow {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = self.end.min(items.len());
        &items[self.start.min(end)..end]
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// "Showing 6 to 10 of 12 results". An empty list reads "Showing 1 to 0 of 0 results".
    pub fn range_text(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.start + 1,
            self.end,
            self.filtered_count
        )
    }

    /// "Page 2 of 3". An empty list has zero pages and stays on page 1: "Page 1 of 0".
    pub fn page_text(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

/// 1-based page the table is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserTablePage {
    pub current: usize,
}

impl Default for UserTablePage {
    fn default() -> Self {
        Self::first()
    }
}

impl UserTablePage {
    pub fn first() -> Self {
        Self { current: 1 }
    }

    /// No-op on page 1.
    pub fn previous_page(&mut self) {
        if self.current > 1 {
            self.current -= 1;
        }
    }

    /// No-op on the last page.
    pub fn next_page(&mut self, total_pages: usize) {
        if self.current < total_pages {
            self.current += 1;
        }
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }
}

impl State for UserTablePage {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        Some(Box::new(*self))
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// The visible page: its window and the users in it.
#[derive(Debug, Clone, Default)]
pub struct PageWindowCompute {
    pub window: PageWindow,
    pub users: Vec<User>,
}

impl PageWindowCompute {
    /// Ids on the visible page, the argument for the select-all helpers.
    pub fn ids(&self) -> Vec<u64> {
        self.users.iter().map(|user| user.id).collect()
    }
}

impl Compute for PageWindowCompute {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::new()
            .state::<UserTablePage>()
            .state::<UserTableConfig>()
            .compute::<FilteredUsersCompute>()
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let page = deps.state::<UserTablePage>().current;
        let page_size = deps.state::<UserTableConfig>().page_size;
        let filtered = &deps.compute::<FilteredUsersCompute>().users;

        let clamped = clamp_page(page, total_pages(filtered.len(), page_size));
        if clamped != page {
            debug!("PageWindowCompute: page {page} out of range, clamped to {clamped}");
            updater.set(UserTablePage { current: clamped });
        }

        let window = derive_page(filtered.len(), clamped, page_size);
        updater.set(PageWindowCompute {
            window,
            users: window.slice(filtered).to_vec(),
        });
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(1, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(12, 5), 3);
    }

    #[test]
    fn twelve_records_make_three_pages() {
        let first = derive_page(12, 1, 5);
        assert_eq!(first.range(), 0..5);
        assert!(!first.has_previous());
        assert!(first.has_next());
        assert_eq!(first.range_text(), "Showing 1 to 5 of 12 results");

        let last = derive_page(12, 3, 5);
        assert_eq!(last.total_pages, 3);
        assert_eq!(last.range(), 10..12);
        assert_eq!(last.len(), 2);
        assert!(last.has_previous());
        assert!(!last.has_next());
        assert_eq!(last.range_text(), "Showing 11 to 12 of 12 results");
        assert_eq!(last.page_text(), "Page 3 of 3");
    }

    #[test]
    fn page_lengths_hold_for_every_count() {
        for count in 0..=23 {
            let pages = total_pages(count, 5);
            for page in 1..=pages {
                let window = derive_page(count, page, 5);
                assert!(window.len() <= 5);
                if page == pages {
                    assert_eq!(window.len(), count - 5 * (pages - 1));
                } else {
                    assert_eq!(window.len(), 5);
                }
            }
        }
    }

    #[test]
    fn empty_list_has_no_navigation() {
        let window = derive_page(0, 1, 5);
        assert!(window.is_empty());
        assert!(!window.has_previous());
        assert!(!window.has_next());
        assert_eq!(window.total_pages, 0);
        assert_eq!(window.range_text(), "Showing 1 to 0 of 0 results");
        assert_eq!(window.page_text(), "Page 1 of 0");
    }

    #[test]
    fn page_past_the_end_is_an_empty_window() {
        let window = derive_page(4, 3, 5);
        assert!(window.is_empty());
        assert_eq!(window.slice(&[1, 2, 3, 4]), &[] as &[i32]);
    }

    #[test]
    fn clamp_keeps_page_in_bounds() {
        assert_eq!(clamp_page(3, 1), 1);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn page_navigation_stops_at_bounds() {
        let mut page = UserTablePage::first();
        page.previous_page();
        assert_eq!(page.current, 1);

        page.next_page(2);
        page.next_page(2);
        assert_eq!(page.current, 2);

        page.reset();
        assert_eq!(page, UserTablePage::default());
    }

    #[test]
    fn slice_follows_window() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(derive_page(12, 2, 5).slice(&items), &[6, 7, 8, 9, 10]);
    }
}
