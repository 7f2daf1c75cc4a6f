use super::*;

fn paged(total: usize, size: usize) -> Pagination {
    let mut p = Pagination::new(size);
    p.reset(total);
    p
}

// =============================================================
// Slicing
// =============================================================

#[test]
fn range_covers_requested_page() {
    let mut p = paged(25, 10);
    assert_eq!(p.total_pages(), 3);
    assert_eq!(p.range(), 0..10);
    assert!(p.go_to(1));
    assert_eq!(p.range(), 10..20);
    assert!(p.go_to(2));
    assert_eq!(p.range(), 20..25);
}

#[test]
fn slice_returns_page_items() {
    let items: Vec<u32> = (0..25).collect();
    let mut p = paged(items.len(), 10);
    p.go_to(2);
    assert_eq!(p.slice(&items), &[20, 21, 22, 23, 24]);
}

#[test]
fn out_of_range_page_is_noop() {
    let mut p = paged(25, 10);
    p.go_to(1);
    assert!(!p.go_to(3));
    assert_eq!(p.page, 1);
}

#[test]
fn empty_list_has_no_pages() {
    let mut p = paged(0, 10);
    assert_eq!(p.total_pages(), 0);
    assert!(!p.go_to(0));
    assert_eq!(p.range(), 0..0);
    assert_eq!(p.summary(), "Sin resultados");
}

#[test]
fn reset_returns_to_first_page() {
    let mut p = paged(50, 10);
    p.go_to(4);
    p.reset(12);
    assert_eq!(p.page, 0);
    assert_eq!(p.total_pages(), 2);
}

#[test]
fn prev_next_respect_bounds() {
    let mut p = paged(15, 10);
    assert!(!p.prev());
    assert!(p.next());
    assert!(!p.next());
    assert_eq!(p.page, 1);
    assert!(p.prev());
}

#[test]
fn zero_page_size_is_clamped() {
    let p = paged(3, 0);
    assert_eq!(p.page_size, 1);
    assert_eq!(p.total_pages(), 3);
}

// =============================================================
// Page links
// =============================================================

#[test]
fn links_show_all_pages_when_few() {
    let p = paged(40, 10);
    assert_eq!(
        p.links(),
        vec![PageLink::Page(0), PageLink::Page(1), PageLink::Page(2), PageLink::Page(3)]
    );
}

#[test]
fn links_collapse_runs_around_current_page() {
    let mut p = paged(200, 10);
    p.go_to(10);
    assert_eq!(
        p.links(),
        vec![
            PageLink::Page(0),
            PageLink::Gap,
            PageLink::Page(8),
            PageLink::Page(9),
            PageLink::Page(10),
            PageLink::Page(11),
            PageLink::Page(12),
            PageLink::Gap,
            PageLink::Page(19),
        ]
    );
}

#[test]
fn summary_is_one_based() {
    let mut p = paged(42, 10);
    p.go_to(1);
    assert_eq!(p.summary(), "Mostrando 11-20 de 42");
}
