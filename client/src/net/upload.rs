//! Multipart uploads with progress reporting.
//!
//! `gloo-net` has no upload progress hook, so multipart bodies go through a
//! raw `XMLHttpRequest` whose `upload.onprogress` feeds the caller. Bearer
//! injection and 401 interception match the JSON path in `api`.
//!
//! Files are validated before any bytes leave the browser: size, count and
//! extension limits below mirror what the backend accepts.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use serde::de::DeserializeOwned;

use super::api::{ApiError, Method};

pub const MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;
pub const MAX_FILES: usize = 5;

/// Drawings and documents accepted on quotation requests.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "png", "jpg", "jpeg", "dwg", "dxf", "step", "stp"];
/// Product photos and blog covers.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Bytes sent so far out of the request body size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UploadProgress {
    pub loaded: u64,
    pub total: u64,
}

impl UploadProgress {
    /// Whole percent complete, clamped to `0..=100`.
    #[must_use]
    pub fn percent(self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let pct = (self.loaded.saturating_mul(100) / self.total).min(100);
        u8::try_from(pct).unwrap_or(100)
    }
}

/// Why a picked file was refused before upload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FileRejection {
    #[error("{name} exceeds the size limit")]
    TooLarge { name: String },
    #[error("{name} has an unsupported type")]
    UnsupportedType { name: String },
    #[error("too many files (max {max})")]
    TooMany { max: usize },
}

impl FileRejection {
    /// i18n key for the rejection toast.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            FileRejection::TooLarge { .. } => "upload.too_large",
            FileRejection::UnsupportedType { .. } => "upload.bad_type",
            FileRejection::TooMany { .. } => "upload.too_many",
        }
    }
}

/// A file chosen in an `<input type="file">`.
///
/// Outside the browser only the metadata exists, which keeps validation
/// testable without web-sys.
#[derive(Clone, Debug)]
pub struct PickedFile {
    pub name: String,
    pub size: u64,
    #[cfg(feature = "hydrate")]
    pub file: web_sys::File,
}

impl PickedFile {
    #[cfg(not(feature = "hydrate"))]
    #[must_use]
    pub fn from_meta(name: &str, size: u64) -> Self {
        Self { name: name.to_owned(), size }
    }
}

/// Lowercased extension of `name`, if it has one.
#[must_use]
pub fn extension(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Check count, size and extension limits for a batch of files.
///
/// # Errors
///
/// Returns the first rule the batch violates.
pub fn check_files(files: &[PickedFile], allowed: &[&str]) -> Result<(), FileRejection> {
    if files.len() > MAX_FILES {
        return Err(FileRejection::TooMany { max: MAX_FILES });
    }
    for file in files {
        let supported = extension(&file.name).is_some_and(|ext| allowed.contains(&ext.as_str()));
        if !supported {
            return Err(FileRejection::UnsupportedType { name: file.name.clone() });
        }
        if file.size > MAX_FILE_BYTES {
            return Err(FileRejection::TooLarge { name: file.name.clone() });
        }
    }
    Ok(())
}

/// Human readable size (`"512 B"`, `"2.4 MB"`).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn display_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

/// Text fields plus files for a multipart request.
#[derive(Clone, Debug, Default)]
pub struct UploadForm {
    pub fields: Vec<(String, String)>,
    pub files: Vec<(String, PickedFile)>,
}

impl UploadForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_owned(), value.into()));
        self
    }

    /// Add a text field only when `value` is present.
    #[must_use]
    pub fn optional_text(self, name: &str, value: Option<String>) -> Self {
        match value {
            Some(value) => self.text(name, value),
            None => self,
        }
    }

    #[must_use]
    pub fn file(mut self, name: &str, file: PickedFile) -> Self {
        self.files.push((name.to_owned(), file));
        self
    }

    #[must_use]
    pub fn files(self, name: &str, files: impl IntoIterator<Item = PickedFile>) -> Self {
        files.into_iter().fold(self, |form, file| form.file(name, file))
    }

    #[cfg(feature = "hydrate")]
    fn to_form_data(&self) -> Result<web_sys::FormData, ApiError> {
        let data = web_sys::FormData::new().map_err(js_error)?;
        for (name, value) in &self.fields {
            data.append_with_str(name, value).map_err(js_error)?;
        }
        for (name, picked) in &self.files {
            data.append_with_blob_and_filename(name, &picked.file, &picked.name)
                .map_err(js_error)?;
        }
        Ok(data)
    }
}

#[cfg(feature = "hydrate")]
fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Collect the files selected in the input that fired `ev`.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn picked_files(ev: &web_sys::Event) -> Vec<PickedFile> {
    use wasm_bindgen::JsCast as _;

    let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
        return Vec::new();
    };
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| PickedFile { name: file.name(), size: file.size() as u64, file })
        .collect()
}

/// Send `form` as `multipart/form-data`, reporting upload progress.
///
/// # Errors
///
/// Returns `ApiError` for transport failures or non-success statuses, and
/// `Unavailable` outside the browser.
pub async fn send_multipart<T, F>(method: Method, path: &str, form: UploadForm, on_progress: F) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    F: Fn(UploadProgress) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use futures::channel::oneshot;
        use wasm_bindgen::JsCast as _;
        use wasm_bindgen::closure::Closure;

        use super::api::{ErrorBody, bearer, decode_body, on_unauthorized, stored_token};

        let body = form.to_form_data()?;
        let xhr = web_sys::XmlHttpRequest::new().map_err(js_error)?;
        xhr.open(method.as_str(), path).map_err(js_error)?;
        xhr.set_request_header("Accept", "application/json").map_err(js_error)?;
        if let Some(token) = stored_token() {
            xhr.set_request_header("Authorization", &bearer(&token)).map_err(js_error)?;
        }

        type Slot = Rc<RefCell<Option<oneshot::Sender<Result<(), ApiError>>>>>;
        fn finish(slot: &Slot, outcome: Result<(), ApiError>) {
            if let Some(sender) = slot.borrow_mut().take() {
                let _ = sender.send(outcome);
            }
        }

        let (tx, rx) = oneshot::channel::<Result<(), ApiError>>();
        let tx: Slot = Rc::new(RefCell::new(Some(tx)));

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let progress_cb = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |ev: web_sys::ProgressEvent| {
            if ev.length_computable() {
                on_progress(UploadProgress { loaded: ev.loaded() as u64, total: ev.total() as u64 });
            }
        });
        if let Ok(upload) = xhr.upload() {
            upload.set_onprogress(Some(progress_cb.as_ref().unchecked_ref()));
        }

        let load_tx = tx.clone();
        let load_cb = Closure::<dyn FnMut()>::new(move || finish(&load_tx, Ok(())));
        let error_tx = tx.clone();
        let error_cb = Closure::<dyn FnMut()>::new(move || {
            finish(&error_tx, Err(ApiError::Network("upload failed".to_owned())));
        });
        let abort_tx = tx;
        let abort_cb = Closure::<dyn FnMut()>::new(move || {
            finish(&abort_tx, Err(ApiError::Network("upload aborted".to_owned())));
        });
        xhr.set_onload(Some(load_cb.as_ref().unchecked_ref()));
        xhr.set_onerror(Some(error_cb.as_ref().unchecked_ref()));
        xhr.set_onabort(Some(abort_cb.as_ref().unchecked_ref()));

        xhr.send_with_opt_form_data(Some(&body)).map_err(js_error)?;
        let outcome = rx.await.unwrap_or_else(|_| Err(ApiError::Network("upload dropped".to_owned())));
        drop((progress_cb, load_cb, error_cb, abort_cb));
        outcome?;

        let status = xhr.status().map_err(js_error)?;
        let text = xhr.response_text().map_err(js_error)?.unwrap_or_default();
        if status == 401 {
            on_unauthorized();
            return Err(ApiError::Unauthorized);
        }
        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<ErrorBody>(&text).ok().and_then(ErrorBody::into_message);
            log::warn!("{} {path} upload failed: {status}", method.as_str());
            return Err(ApiError::from_status(status, message));
        }
        decode_body(&text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, form, on_progress);
        Err(ApiError::Unavailable)
    }
}
