use super::*;

struct Even;

impl ListFilter<u32> for Even {
    fn matches(&self, item: &u32, _today: NaiveDate) -> bool {
        item % 2 == 0
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn begin_load_guards_reentry() {
    let mut list: ListPage<u32> = ListPage::default();
    assert!(list.begin_load());
    assert!(!list.begin_load());
    list.finish_load(vec![1, 2]);
    assert!(!list.loading);
    assert!(list.begin_load());
}

#[test]
fn begin_load_during_load_queues_one_reload() {
    let mut list: ListPage<u32> = ListPage::default();
    assert!(list.begin_load());
    assert!(!list.begin_load());
    assert!(!list.begin_load());
    list.finish_load(vec![1]);
    assert!(list.take_reload_request());
    assert!(!list.take_reload_request());
}

#[test]
fn discard_load_keeps_rows() {
    let mut list = ListPage::new(10);
    list.finish_load(vec![2_u32, 4]);
    list.apply_filter(&Even, today());
    list.begin_load();
    list.discard_load();
    assert!(!list.loading);
    assert_eq!(list.page_items(), &[2, 4]);
}

#[test]
fn clear_resets_rows_and_pager_but_not_loading() {
    let mut list = ListPage::new(10);
    list.finish_load(vec![2_u32, 4]);
    list.apply_filter(&Even, today());
    list.begin_load();
    list.clear();
    assert!(list.page_items().is_empty());
    assert_eq!(list.pagination.total, 0);
    assert!(list.loading);
}

#[test]
fn fail_load_clears_rows_and_records_error() {
    let mut list = ListPage::new(10);
    list.finish_load(vec![1_u32, 2, 3]);
    list.apply_filter(&Even, today());
    list.begin_load();
    list.fail_load("Error de conexión");
    assert!(list.items.is_empty());
    assert!(list.filtered.is_empty());
    assert_eq!(list.pagination.total, 0);
    assert_eq!(list.error.as_deref(), Some("Error de conexión"));
    assert!(!list.loading);
}

#[test]
fn apply_filter_resets_to_first_page() {
    let mut list = ListPage::new(2);
    list.finish_load((0_u32..10).collect());
    list.apply_filter(&Even, today());
    assert!(list.go_to_page(2));
    assert_eq!(list.page_items(), &[8]);

    list.apply_filter(&Even, today());
    assert_eq!(list.pagination.page, 0);
    assert_eq!(list.page_items(), &[0, 2]);
}

#[test]
fn go_to_page_out_of_range_is_noop() {
    let mut list = ListPage::new(2);
    list.finish_load((0_u32..4).collect());
    list.apply_filter(&Even, today());
    assert!(!list.go_to_page(1));
    assert_eq!(list.pagination.page, 0);
}

#[test]
fn count_where_uses_all_loaded_rows() {
    let mut list = ListPage::new(2);
    list.finish_load(vec![1_u32, 2, 3, 4]);
    list.apply_filter(&Even, today());
    assert_eq!(list.count_where(|n| *n > 1), 3);
}
