use super::*;

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_reports_download_unavailable() {
    let err = save_bytes("reporte.pdf", PDF_MIME, b"%PDF").unwrap_err();
    assert_eq!(err, "descarga no disponible fuera del navegador");
}
