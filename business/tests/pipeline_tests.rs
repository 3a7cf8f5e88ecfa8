//! Filter, pagination and selection working together on a loaded table.

mod common;

use common::*;
use user_table_business::{
    FilteredUsersCompute, PageWindowCompute, TablePresentation, UserSearchInput, UserSelection,
    UserTablePage, current_presentation,
};
use user_table_states::StateCtx;

fn page_ids(ctx: &StateCtx) -> Vec<u64> {
    ctx.cached::<PageWindowCompute>().unwrap().ids()
}

fn next_page(ctx: &mut StateCtx) {
    let total = ctx.cached::<PageWindowCompute>().unwrap().window.total_pages;
    ctx.state_mut::<UserTablePage>().next_page(total);
    ctx.run_computed();
}

#[test]
fn test_twelve_users_paginate_into_three_pages() {
    let mut ctx = loaded_ctx(users_from(twelve_users()));

    let window = ctx.cached::<PageWindowCompute>().unwrap().window;
    assert_eq!(window.total_pages, 3);
    assert!(!window.has_previous());

    next_page(&mut ctx);
    assert_eq!(page_ids(&ctx), vec![6, 7, 8, 9, 10]);

    next_page(&mut ctx);
    let page = ctx.cached::<PageWindowCompute>().unwrap();
    assert_eq!(page.ids(), vec![11, 12]);
    assert!(!page.window.has_next());
    assert_eq!(page.window.range_text(), "Showing 11 to 12 of 12 results");

    // Next on the last page does nothing
    next_page(&mut ctx);
    assert_eq!(ctx.state::<UserTablePage>().current, 3);
}

#[test]
fn test_search_filters_and_resets_page() {
    let mut ctx = loaded_ctx(users_from(twelve_users()));
    next_page(&mut ctx);
    next_page(&mut ctx);
    assert_eq!(ctx.state::<UserTablePage>().current, 3);

    ctx.state_mut::<UserSearchInput>().term = "a".to_string();
    ctx.run_computed();

    assert_eq!(ctx.state::<UserTablePage>().current, 1);
    assert_eq!(page_ids(&ctx), vec![2, 7, 12]);
    let window = ctx.cached::<PageWindowCompute>().unwrap().window;
    assert_eq!(window.total_pages, 1);
    assert!(!window.has_next());
}

#[test]
fn test_search_without_matches_is_ready_without_results() {
    let mut ctx = loaded_ctx(users_from(twelve_users()));

    ctx.state_mut::<UserSearchInput>().term = "nobody".to_string();
    ctx.run_computed();

    assert!(ctx.cached::<FilteredUsersCompute>().unwrap().is_empty());
    assert_eq!(
        current_presentation(&ctx),
        TablePresentation::Ready { has_results: false }
    );
    let window = ctx.cached::<PageWindowCompute>().unwrap().window;
    assert_eq!(window.total_pages, 0);
    assert_eq!(window.current_page, 1);
    assert_eq!(window.range_text(), "Showing 1 to 0 of 0 results");
    assert_eq!(window.page_text(), "Page 1 of 0");
    assert!(!window.has_previous());
    assert!(!window.has_next());
}

#[test]
fn test_selection_survives_filter_and_paging() {
    let mut ctx = loaded_ctx(users_from(twelve_users()));

    let ids = page_ids(&ctx);
    ctx.state_mut::<UserSelection>().select_all_on_page(&ids, true);
    assert!(ctx.state::<UserSelection>().is_all_selected_on_page(&ids));

    ctx.state_mut::<UserSearchInput>().term = "zoe".to_string();
    ctx.run_computed();
    assert_eq!(page_ids(&ctx), vec![12]);

    // filtered-out rows stay selected
    let selection = ctx.state::<UserSelection>();
    assert_eq!(selection.len(), 5);
    assert!(!selection.is_all_selected_on_page(&[12]));

    ctx.state_mut::<UserSelection>().toggle(12);
    ctx.state_mut::<UserSearchInput>().term.clear();
    ctx.run_computed();

    let selection = ctx.state::<UserSelection>();
    assert_eq!(selection.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 12]);
    assert_eq!(selection.label(), "6 selected");
}

#[test]
fn test_unselect_all_keeps_other_pages() {
    let mut ctx = loaded_ctx(users_from(twelve_users()));
    ctx.state_mut::<UserSelection>().toggle(11);

    let ids = page_ids(&ctx);
    ctx.state_mut::<UserSelection>().select_all_on_page(&ids, true);
    ctx.state_mut::<UserSelection>().select_all_on_page(&ids, false);

    assert_eq!(
        ctx.state::<UserSelection>().iter().collect::<Vec<_>>(),
        vec![11]
    );
}
