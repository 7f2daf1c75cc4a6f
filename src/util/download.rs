//! Trigger a browser download for generated report bytes.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// MIME type for `.xlsx` workbooks.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
/// MIME type for PDF documents.
pub const PDF_MIME: &str = "application/pdf";
/// Delay before the Blob URL is revoked; revoking in the click handler can
/// cancel the download in Firefox.
pub const REVOKE_AFTER_MS: u32 = 1_000;

/// Offer `bytes` as a file download named `filename`.
///
/// # Errors
///
/// Returns a message when the browser refuses to build the Blob or link.
pub fn save_bytes(filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes).into());
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| format!("{e:?}"))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "no document".to_owned())?;
        let anchor = document
            .create_element("a")
            .map_err(|e| format!("{e:?}"))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor cast failed".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
        gloo_timers::callback::Timeout::new(REVOKE_AFTER_MS, move || {
            let _ = web_sys::Url::revoke_object_url(&url);
        })
        .forget();
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (filename, mime, bytes);
        Err("descarga no disponible fuera del navegador".to_owned())
    }
}
