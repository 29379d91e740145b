//! HTTP client for the stem separation server.
//!
//! Two operations: a multipart upload of one audio file, raced against
//! the configured timeout, and a fetch of the stems list. Both run on
//! the browser's fetch stack via `gloo-net`.

use futures::future::{Either, select};
use futures::pin_mut;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use stemdrop_core::stems::{self, StemsError};
use stemdrop_core::{StemEntry, UploadConfig, server_error};
use wasm_bindgen::JsValue;

/// Endpoint returning the JSON array of downloadable stem names.
pub const STEMS_ENDPOINT: &str = "/stems";

/// A failed server operation.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection reset,
    /// fetch rejection).
    #[error("network error: {0}")]
    Network(String),
    /// No response within the configured upload timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    /// The server answered with a non-2xx status.
    #[error("server responded {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for message extraction.
        body: String,
    },
    /// A browser API call failed while building the request.
    #[error("browser API error: {0}")]
    Browser(String),
    /// The stems list body did not parse.
    #[error(transparent)]
    Stems(#[from] StemsError),
}

impl From<gloo_net::Error> for ApiError {
    fn from(value: gloo_net::Error) -> Self {
        Self::Network(value.to_string())
    }
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        Self::Browser(format!("{value:?}"))
    }
}

impl ApiError {
    /// User-facing text for a failed upload.
    ///
    /// A server response contributes its own message (plain-text body,
    /// or the `error` field of a JSON body); everything else shows the
    /// fixed fallback.
    #[must_use]
    pub fn upload_message(&self) -> String {
        match self {
            Self::Status { body, .. } => server_error::message_from_body(body),
            Self::Network(_) | Self::Timeout(_) | Self::Browser(_) | Self::Stems(_) => {
                server_error::FALLBACK_MESSAGE.to_owned()
            }
        }
    }
}

/// Upload one audio file as a multipart POST.
///
/// The file bytes are appended under `config.field_name` with the
/// original filename. The request is raced against `config.timeout_ms`;
/// the separation run happens while the request is held open, so the
/// timeout is generous. The 2xx response body is not inspected.
///
/// # Errors
///
/// [`ApiError::Browser`] if the form cannot be built,
/// [`ApiError::Timeout`] if the timer wins the race,
/// [`ApiError::Network`] if fetch itself fails, and
/// [`ApiError::Status`] (body preserved) for a non-2xx answer.
pub async fn upload(config: UploadConfig, bytes: &[u8], filename: &str) -> Result<(), ApiError> {
    let form = multipart_form(config.field_name, bytes, filename)?;
    let request = Request::post(config.endpoint).body(form)?;

    let send = request.send();
    let timeout = TimeoutFuture::new(config.timeout_ms);
    pin_mut!(send, timeout);

    let response = match select(send, timeout).await {
        Either::Left((result, _)) => result?,
        Either::Right(((), _)) => return Err(ApiError::Timeout(config.timeout_ms)),
    };

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: response.status(),
            body,
        });
    }
    Ok(())
}

/// Fetch the current list of downloadable stems.
///
/// # Errors
///
/// [`ApiError::Network`] if fetch fails, [`ApiError::Status`] for a
/// non-2xx answer, and [`ApiError::Stems`] for a malformed body.
pub async fn fetch_stems() -> Result<Vec<StemEntry>, ApiError> {
    let response = Request::get(STEMS_ENDPOINT).send().await?;
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: response.status(),
            body,
        });
    }
    let body = response.text().await?;
    Ok(stems::parse_list(&body)?)
}

/// Build the multipart form carrying the file bytes.
///
/// The bytes go through a `Blob` so the browser attaches the filename
/// and a multipart boundary itself.
fn multipart_form(
    field_name: &str,
    bytes: &[u8],
    filename: &str,
) -> Result<web_sys::FormData, ApiError> {
    let parts = js_sys::Array::new();
    let part: JsValue = js_sys::Uint8Array::from(bytes).into();
    parts.push(&part);

    let blob = web_sys::Blob::new_with_u8_array_sequence(&parts)?;

    let form = web_sys::FormData::new()?;
    form.append_with_blob_and_filename(field_name, &blob, filename)?;
    Ok(form)
}
