//! Browser `Transport` backed by `gloo-net` fetch.
//!
//! Paths are relative: the host server forwards `/api/*` to the backend, so
//! the page, the API and the session cookie share one origin.

use gloo_net::http::{Request, RequestBuilder};
use wasm_bindgen::JsValue;

use super::transport::{
    ApiRequest, ApiResponse, Body, GATEWAY_FAILURE_HEADER, ImageUpload, Method, Part, Transport, TransportError,
};

/// Zero-sized fetch transport; safe to construct inside any event handler.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.path),
            Method::Post => Request::post(&request.path),
        };
        if let Some(value) = request.authorization() {
            builder = builder.header("Authorization", &value);
        }
        if request.include_credentials {
            builder = builder.credentials(web_sys::RequestCredentials::Include);
        }

        let resp = match request.body {
            Body::Empty => builder.send().await,
            Body::Json(value) => build_json(builder, &value)?.send().await,
            Body::Multipart(parts) => {
                let form = build_form(&parts).map_err(js_error)?;
                builder.body(form).map_err(|e| TransportError(e.to_string()))?.send().await
            }
        }
        .map_err(|e| TransportError(e.to_string()))?;

        let status = resp.status();
        let gateway_failure = resp.headers().has(GATEWAY_FAILURE_HEADER);
        let body = resp.text().await.unwrap_or_default();
        Ok(ApiResponse { gateway_failure, ..ApiResponse::new(status, body) })
    }
}

fn build_json(builder: RequestBuilder, value: &serde_json::Value) -> Result<Request, TransportError> {
    builder.json(value).map_err(|e| TransportError(e.to_string()))
}

fn build_form(parts: &[(String, Part)]) -> Result<web_sys::FormData, JsValue> {
    let form = web_sys::FormData::new()?;
    for (name, part) in parts {
        match part {
            Part::Text(value) => form.append_with_str(name, value)?,
            Part::File(upload) => {
                let blob = to_blob(upload)?;
                form.append_with_blob_and_filename(name, &blob, &upload.file_name)?;
            }
        }
    }
    Ok(form)
}

fn to_blob(upload: &ImageUpload) -> Result<web_sys::Blob, JsValue> {
    let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
    let sequence = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&upload.content_type);
    web_sys::Blob::new_with_u8_array_sequence_and_options(&sequence, &options)
}

fn js_error(err: JsValue) -> TransportError {
    TransportError(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Read a file picked in an `<input type="file">` into an `ImageUpload`.
///
/// # Errors
///
/// Returns an error if the browser fails to read the file contents.
pub async fn read_image(file: web_sys::File) -> Result<ImageUpload, TransportError> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(js_error)?;
    Ok(ImageUpload {
        file_name: file.name(),
        content_type: file.type_(),
        bytes: js_sys::Uint8Array::new(&buffer).to_vec(),
    })
}
