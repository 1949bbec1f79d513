use super::*;
use crate::net::types::Page;

fn page_state(page: u32, total_pages: u32, total_results: u64) -> PageState {
    PageState { page, total_pages, total_results, limit: 10 }
}

#[test]
fn empty_envelope_renders_empty_message_without_pager() {
    let page: Page<u8> = Page { results: Vec::new(), page: 1, limit: None, total_pages: 0, total_results: 0 };
    let kind = TableBody::select(false, false, page.results.len());
    assert_eq!(kind, TableBody::Empty);
    assert_eq!(kind.placeholder(), Some("This is empty. Please create a new one."));
    assert!(!kind.shows_pager(&PageState::from_page(&page, 10)));
}

#[test]
fn loading_wins_over_rows_and_errors() {
    assert_eq!(TableBody::select(true, false, 0), TableBody::Loading);
    assert_eq!(TableBody::select(true, true, 5), TableBody::Loading);
    assert_eq!(TableBody::Loading.placeholder(), Some(LOADING_MESSAGE));
}

#[test]
fn load_failure_replaces_empty_message() {
    let kind = TableBody::select(false, true, 0);
    assert_eq!(kind, TableBody::Failed);
    assert_eq!(kind.placeholder(), None);
    assert!(!kind.shows_pager(&page_state(1, 3, 25)));
}

#[test]
fn rows_show_pager_only_when_results_overflow() {
    let kind = TableBody::select(false, false, 10);
    assert_eq!(kind, TableBody::Rows);
    assert!(kind.shows_pager(&page_state(1, 3, 25)));
    assert!(!kind.shows_pager(&page_state(1, 1, 10)));
}

#[test]
fn emptied_last_page_shows_no_pager() {
    let page: Page<u8> = Page { results: Vec::new(), page: 3, limit: Some(10), total_pages: 2, total_results: 20 };
    let kind = TableBody::select(false, false, page.results.len());
    assert_eq!(kind.placeholder(), Some(EMPTY_MESSAGE));
    assert!(!kind.shows_pager(&PageState::from_page(&page, 10)));
}

#[test]
fn empty_rows_hide_pager_even_inside_range() {
    // Envelope still claims page 1 of 2.
    let kind = TableBody::select(false, false, 0);
    assert!(!kind.shows_pager(&page_state(1, 2, 20)));
}
