//! Browser implementations of the transport and credential seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! `BrowserTransport` speaks `fetch` through `gloo-net`, always including
//! cookies, and enforces the client timeout with an `AbortController`.
//! `BrowserCredentials` reads the script-visible `access_token` cookie and the
//! `localStorage` token.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser (native tests, tooling) both types compile to inert
//! stubs: the transport fails every request and the store holds nothing.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

use super::client::HttpClient;
use super::credentials::CredentialStore;
use super::error::TransportError;
use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::config::ApiConfig;

/// The client every screen shares.
pub type AppClient = HttpClient<BrowserTransport, BrowserCredentials>;

/// Build the shared client from compile-time configuration.
pub fn app_client() -> AppClient {
    let config = ApiConfig::from_build_env();
    let credentials = BrowserCredentials::new(&config);
    log::debug!("[api] base url {}", config.base_url);
    HttpClient::new(config, BrowserTransport, credentials)
}

/// Value of cookie `name` in a `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Cookie assignment that expires `name` immediately.
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; Max-Age=0; path=/")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            fetch(request).await
        }
        #[cfg(not(feature = "csr"))]
        {
            drop(request);
            Err(TransportError::Network("not available outside the browser".to_owned()))
        }
    }
}

#[cfg(feature = "csr")]
struct AbortOnDrop(web_sys::AbortController);

#[cfg(feature = "csr")]
impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        // No-op once the fetch has settled; cancels it if the caller gave up.
        self.0.abort();
    }
}

#[cfg(feature = "csr")]
async fn fetch(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_net::http::Request;
    use gloo_timers::callback::Timeout;
    use web_sys::{AbortController, RequestCredentials};

    use super::transport::{Body, Method};

    let controller = AbortController::new()
        .map_err(|_| TransportError::Network("could not create abort controller".to_owned()))?;
    let signal = controller.signal();
    let guard = AbortOnDrop(controller.clone());

    let timeout_ms = u32::try_from(request.timeout.as_millis()).unwrap_or(u32::MAX);
    let timed_out = Rc::new(Cell::new(false));
    let _timer = {
        let timed_out = Rc::clone(&timed_out);
        Timeout::new(timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let builder = match request.method {
        Method::Get => Request::get(&request.url),
        Method::Post => Request::post(&request.url),
        Method::Delete => Request::delete(&request.url),
    };
    let mut builder = builder
        .credentials(RequestCredentials::Include)
        .abort_signal(Some(&signal))
        .query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    let built = match &request.body {
        Body::Empty => builder.build(),
        Body::Json(value) => builder.json(value),
        Body::Multipart(parts) => builder.body(form_data(parts)?),
    }
    .map_err(|e| TransportError::Network(e.to_string()))?;

    let response = match built.send().await {
        Ok(response) => response,
        Err(_) if timed_out.get() => return Err(TransportError::Timeout(u64::from(timeout_ms))),
        Err(e) => return Err(TransportError::Network(e.to_string())),
    };
    let status = response.status();
    let body = response.text().await.map_err(|e| TransportError::Network(e.to_string()))?;
    drop(guard);
    Ok(HttpResponse { status, body })
}

#[cfg(feature = "csr")]
fn form_data(parts: &[super::transport::FormPart]) -> Result<web_sys::FormData, TransportError> {
    use super::transport::FormPart;

    let failed = |what: &str| TransportError::Network(format!("could not build form data: {what}"));
    let form = web_sys::FormData::new().map_err(|_| failed("FormData"))?;
    for part in parts {
        match part {
            FormPart::Text { name, value } => form.append_with_str(name, value).map_err(|_| failed(name))?,
            FormPart::File { name, file_name, mime, bytes } => {
                let array = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes.as_slice()));
                let options = web_sys::BlobPropertyBag::new();
                options.set_type(mime);
                let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&array, &options)
                    .map_err(|_| failed(file_name))?;
                form.append_with_blob_and_filename(name, &blob, file_name)
                    .map_err(|_| failed(name))?;
            }
        }
    }
    Ok(form)
}

/// Cookie + `localStorage` credential store.
#[derive(Debug, Clone)]
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub struct BrowserCredentials {
    cookie_name: String,
    storage_key: String,
}

impl BrowserCredentials {
    pub fn new(config: &ApiConfig) -> Self {
        Self { cookie_name: config.cookie_name.clone(), storage_key: config.storage_key.clone() }
    }
}

#[cfg(feature = "csr")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl CredentialStore for BrowserCredentials {
    fn cookie_token(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let cookies = html_document()?.cookie().ok()?;
            cookie_value(&cookies, &self.cookie_name)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn stored_token(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(&self.storage_key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn store_token(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("[session] localStorage unavailable; token kept for this request only");
                return;
            };
            if storage.set_item(&self.storage_key, token).is_err() {
                log::warn!("[session] could not persist access token");
                return;
            }
            self.expire_cookie();
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("[session] dropping token of {} bytes outside the browser", token.len());
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(&self.storage_key).is_err() {
                    log::warn!("[session] could not remove stored token");
                }
            }
            self.expire_cookie();
        }
    }
}

#[cfg(feature = "csr")]
impl BrowserCredentials {
    fn expire_cookie(&self) {
        if let Some(doc) = html_document() {
            if doc.set_cookie(&expired_cookie(&self.cookie_name)).is_err() {
                log::warn!("[session] could not expire access cookie");
            }
        }
    }
}
