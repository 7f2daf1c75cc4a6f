use super::*;

#[test]
fn date_is_day_month_year() {
    let d = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
    assert_eq!(date(d), "07/03/2026");
    assert_eq!(date_time(d.and_hms_opt(14, 5, 0).unwrap()), "07/03/2026 14:05");
    assert_eq!(opt_date_time(None), "");
}

#[test]
fn currency_groups_thousands_with_dots() {
    assert_eq!(currency(0.0), "$ 0");
    assert_eq!(currency(999.0), "$ 999");
    assert_eq!(currency(1000.0), "$ 1.000");
    assert_eq!(currency(1_234_567.4), "$ 1.234.567");
    assert_eq!(currency(-2500.6), "-$ 2.501");
}

#[test]
fn yes_no_is_spanish() {
    assert_eq!(yes_no(true), "Sí");
    assert_eq!(yes_no(false), "No");
}
