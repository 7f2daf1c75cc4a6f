//! File input for multipart uploads; the chosen file is read on submit.

use leptos::prelude::*;

use crate::error::ApiError;
use crate::net::http::UploadFile;

/// Accepted types for verification photos.
pub const IMAGE_ACCEPT: &str = "image/*";
/// Accepted types for cancellation formats.
pub const DOCUMENT_ACCEPT: &str = ".pdf,.doc,.docx,.xlsx,image/*";

#[component]
pub fn FilePicker(
    #[prop(into)] label: String,
    #[prop(into)] accept: String,
    node_ref: NodeRef<leptos::html::Input>,
) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <input class="dialog__input" type="file" accept=accept node_ref=node_ref/>
        </label>
    }
}

/// The file chosen in `input`.
///
/// # Errors
///
/// `ApiError::Validation` when nothing was chosen.
pub fn selected_file(input: NodeRef<leptos::html::Input>) -> Result<UploadFile, ApiError> {
    #[cfg(feature = "csr")]
    let file = input.get_untracked().and_then(|el| el.files()).and_then(|list| list.get(0)).map(UploadFile::new);
    #[cfg(not(feature = "csr"))]
    let file: Option<UploadFile> = {
        let _ = input;
        None
    };
    file.ok_or_else(|| ApiError::validation("Seleccione un archivo"))
}
