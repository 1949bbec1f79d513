use super::*;

fn state(page: u32, total_pages: u32, total_results: u64, limit: u32) -> PageState {
    PageState { page, total_pages, total_results, limit }
}

#[test]
fn pager_visible_iff_results_exceed_limit() {
    for limit in [1_u32, 5, 10, 25] {
        for total in 0_u64..60 {
            let s = state(1, 1, total, limit);
            assert_eq!(s.pager_visible(), total > u64::from(limit), "limit={limit} total={total}");
        }
    }
}

#[test]
fn prev_on_first_page_is_noop() {
    let s = state(1, 3, 25, 10);
    assert!(!s.has_prev());
    assert_eq!(s.prev(), None);
}

#[test]
fn next_on_last_page_is_noop() {
    let s = state(3, 3, 25, 10);
    assert!(!s.has_next());
    assert_eq!(s.next(), None);
}

#[test]
fn middle_page_navigates_both_ways() {
    let s = state(2, 3, 25, 10);
    assert_eq!(s.prev(), Some(1));
    assert_eq!(s.next(), Some(3));
}

#[test]
fn empty_envelope_hides_pager_and_disables_navigation() {
    let page: Page<u8> = Page { results: Vec::new(), page: 1, limit: None, total_pages: 0, total_results: 0 };
    let s = PageState::from_page(&page, 10);
    assert!(!s.pager_visible());
    assert_eq!(s.prev(), None);
    assert_eq!(s.next(), None);
    assert_eq!(s.range_label(), "No results");
}

#[test]
fn from_page_prefers_server_limit() {
    let page: Page<u8> = Page { results: Vec::new(), page: 2, limit: Some(20), total_pages: 3, total_results: 45 };
    let s = PageState::from_page(&page, 10);
    assert_eq!(s.limit, 20);
    assert_eq!(s.page, 2);
}

#[test]
fn range_label_clamps_last_page() {
    assert_eq!(state(1, 5, 45, 10).range_label(), "Showing 1-10 of 45");
    assert_eq!(state(5, 5, 45, 10).range_label(), "Showing 41-45 of 45");
}

fn emptied_last_page() -> Page<u8> {
    Page { results: Vec::new(), page: 3, limit: Some(10), total_pages: 2, total_results: 20 }
}

#[test]
fn page_past_the_end_hides_pager() {
    let s = PageState::from_page(&emptied_last_page(), 10);
    assert!(s.is_past_end());
    assert!(!s.pager_visible());
}

#[test]
fn emptied_last_page_falls_back_to_new_last_page() {
    assert_eq!(fallback_page(&emptied_last_page()), Some(2));
}

#[test]
fn emptied_only_page_falls_back_to_first() {
    let page: Page<u8> = Page { results: Vec::new(), page: 2, limit: Some(10), total_pages: 0, total_results: 0 };
    assert_eq!(fallback_page(&page), Some(1));
}

#[test]
fn in_range_pages_need_no_fallback() {
    let empty: Page<u8> = Page { results: Vec::new(), page: 1, limit: None, total_pages: 0, total_results: 0 };
    assert_eq!(fallback_page(&empty), None);
    let full: Page<u8> = Page { results: vec![1], page: 3, limit: Some(10), total_pages: 2, total_results: 20 };
    assert_eq!(fallback_page(&full), None);
}
