use super::*;

struct Row {
    name: &'static str,
    plate: Option<&'static str>,
    value: Option<f64>,
    acquired: Option<NaiveDate>,
    active: bool,
}

fn columns() -> Vec<Column<Row>> {
    vec![
        Column::new("Nombre", ColumnKind::String, 3.0, |r: &Row| r.name.into()),
        Column::new("Placa", ColumnKind::String, 1.5, |r: &Row| r.plate.into()),
        Column::new("Valor", ColumnKind::Currency, 1.5, |r: &Row| r.value.into()),
        Column::new("Adquisición", ColumnKind::Date, 1.5, |r: &Row| r.acquired.into()),
        Column::new("Activo", ColumnKind::Boolean, 1.0, |r: &Row| r.active.into()),
    ]
}

fn generated_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(8, 15, 0).unwrap()
}

fn table() -> ReportTable {
    let rows = [
        Row {
            name: "Portátil Lenovo",
            plate: Some("SENA-0001"),
            value: Some(2_350_000.0),
            acquired: NaiveDate::from_ymd_opt(2024, 3, 5),
            active: true,
        },
        Row { name: "Silla", plate: None, value: None, acquired: None, active: false },
    ];
    ReportTable::build("Bienes del inventario", generated_at(), &columns(), &rows)
}

#[test]
fn build_maps_rows_through_columns() {
    let t = table();
    assert_eq!(t.columns.len(), 5);
    assert_eq!(t.columns[2].kind, ColumnKind::Currency);
    assert_eq!(t.rows.len(), 2);
    assert_eq!(t.rows[1][1], CellValue::Empty);
    assert_eq!(t.rows[0][4], CellValue::Bool(true));
}

#[test]
fn text_rows_apply_column_formats() {
    assert_eq!(
        table().text_rows(),
        vec![
            vec!["Portátil Lenovo", "SENA-0001", "$ 2.350.000", "05/03/2024", "Sí"],
            vec!["Silla", "", "", "", "No"],
        ]
    );
}

#[test]
fn format_cell_plain_number_outside_currency_column() {
    assert_eq!(format_cell(ColumnKind::String, &CellValue::Number(12.0)), "12");
    assert_eq!(format_cell(ColumnKind::Currency, &CellValue::Number(-2500.6)), "-$ 2.501");
}

#[test]
fn file_stem_is_slug_plus_date() {
    assert_eq!(table().file_stem(), "bienes_del_inventario_20261019");
}

#[test]
fn empty_table() {
    let t = ReportTable::build("Vacío", generated_at(), &columns(), &[]);
    assert!(t.is_empty());
    assert!(t.text_rows().is_empty());
}
