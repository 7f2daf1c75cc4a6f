use super::*;
use crate::export::{Column, ColumnHeader};
use chrono::NaiveDate;

fn table(title: &str, rows: Vec<Vec<CellValue>>) -> ReportTable {
    ReportTable {
        title: title.to_owned(),
        generated_at: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap().and_hms_opt(9, 0, 0).unwrap(),
        columns: vec![
            ColumnHeader { title: "Nombre", kind: ColumnKind::String, width: 3.0 },
            ColumnHeader { title: "Valor", kind: ColumnKind::Currency, width: 1.5 },
            ColumnHeader { title: "Fecha", kind: ColumnKind::Date, width: 1.5 },
            ColumnHeader { title: "Activo", kind: ColumnKind::Boolean, width: 1.0 },
        ],
        rows,
    }
}

#[test]
fn renders_zip_container() {
    let rows = vec![
        vec![
            CellValue::Text("Portátil".to_owned()),
            CellValue::Number(1_500_000.0),
            CellValue::Date(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()),
            CellValue::Bool(true),
        ],
        vec![CellValue::Empty, CellValue::Empty, CellValue::Empty, CellValue::Bool(false)],
    ];
    let bytes = render(&table("Bienes", rows)).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn renders_header_only_table() {
    let bytes = render(&table("Vacío", Vec::new())).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn built_table_renders() {
    let columns = [Column::new("N", ColumnKind::String, 1.0, |n: &i64| CellValue::Number(*n as f64))];
    let t = ReportTable::build("Números", table("x", Vec::new()).generated_at, &columns, &[1, 2, 3]);
    assert!(render(&t).is_ok());
}

#[test]
fn sheet_name_is_sanitized() {
    assert_eq!(sheet_name("Préstamos [2026/10]"), "Préstamos 202610");
    assert_eq!(sheet_name("???"), "Reporte");
    assert_eq!(sheet_name(&"x".repeat(40)).chars().count(), 31);
}
