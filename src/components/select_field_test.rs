use super::*;

fn options() -> Vec<(i64, String)> {
    vec![
        (1, "Regional Antioquia".to_owned()),
        (2, "Regional Bogotá".to_owned()),
        (3, "Regional Caldas".to_owned()),
    ]
}

#[test]
fn empty_term_shows_everything() {
    assert_eq!(visible_options(&options(), &SearchTerm::default(), None).len(), 3);
}

#[test]
fn term_filters_case_insensitively() {
    let visible = visible_options(&options(), &SearchTerm::new("BOGOTÁ"), None);
    assert_eq!(visible, vec![(2, "Regional Bogotá".to_owned())]);
}

#[test]
fn selection_survives_filtering() {
    let ids: Vec<i64> = visible_options(&options(), &SearchTerm::new("caldas"), Some(1))
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn option_values_parse_to_ids() {
    assert_eq!(parse_option_value("12"), Some(12));
    assert_eq!(parse_option_value(""), None);
    assert_eq!(parse_option_value("abc"), None);
}
