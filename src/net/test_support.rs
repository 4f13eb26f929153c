//! In-memory doubles for the transport and credential seams, plus a
//! thread-local log capture.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use futures::future::{FutureExt, LocalBoxFuture};

use super::client::HttpClient;
use super::credentials::CredentialStore;
use super::error::TransportError;
use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::config::ApiConfig;

pub type Reply = LocalBoxFuture<'static, Result<HttpResponse, TransportError>>;

/// Transport whose responses come from a closure; every request is recorded.
#[derive(Clone)]
pub struct ScriptedTransport {
    handler: Rc<dyn Fn(&HttpRequest) -> Reply>,
    calls: Rc<RefCell<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new(handler: impl Fn(&HttpRequest) -> Reply + 'static) -> Self {
        Self { handler: Rc::new(handler), calls: Rc::new(RefCell::new(Vec::new())) }
    }

    pub fn calls(&self) -> Vec<HttpRequest> {
        self.calls.borrow().clone()
    }

    /// Number of recorded calls whose URL ends with `path`.
    pub fn count(&self, path: &str) -> usize {
        self.calls.borrow().iter().filter(|r| r.url.ends_with(path)).count()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.calls.borrow_mut().push(request.clone());
        let reply = (self.handler)(&request);
        reply.await
    }
}

pub fn reply(status: u16, body: &str) -> Reply {
    let response = HttpResponse { status, body: body.to_owned() };
    async move { Ok(response) }.boxed_local()
}

pub fn reply_err(err: TransportError) -> Reply {
    async move { Err(err) }.boxed_local()
}

#[derive(Default)]
struct MemoryInner {
    cookie: RefCell<Option<String>>,
    stored: RefCell<Option<String>>,
    clears: Cell<usize>,
}

/// Credential store backed by plain fields; clones share state.
#[derive(Clone, Default)]
pub struct MemoryCredentials {
    inner: Rc<MemoryInner>,
}

impl MemoryCredentials {
    pub fn with_stored(token: &str) -> Self {
        let store = Self::default();
        store.store_token(token);
        store
    }

    pub fn with_cookie(token: &str) -> Self {
        let store = Self::default();
        store.set_cookie(token);
        store
    }

    /// Simulate the backend setting the readable access cookie.
    pub fn set_cookie(&self, token: &str) {
        *self.inner.cookie.borrow_mut() = Some(token.to_owned());
    }

    pub fn clear_count(&self) -> usize {
        self.inner.clears.get()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.cookie.borrow().is_none() && self.inner.stored.borrow().is_none()
    }
}

impl CredentialStore for MemoryCredentials {
    fn cookie_token(&self) -> Option<String> {
        self.inner.cookie.borrow().clone()
    }

    fn stored_token(&self) -> Option<String> {
        self.inner.stored.borrow().clone()
    }

    fn store_token(&self, token: &str) {
        *self.inner.stored.borrow_mut() = Some(token.to_owned());
        *self.inner.cookie.borrow_mut() = None;
    }

    fn clear(&self) {
        self.inner.clears.set(self.inner.clears.get() + 1);
        *self.inner.cookie.borrow_mut() = None;
        *self.inner.stored.borrow_mut() = None;
    }
}

pub type TestClient = HttpClient<ScriptedTransport, MemoryCredentials>;

pub fn test_client(transport: ScriptedTransport, credentials: MemoryCredentials) -> TestClient {
    HttpClient::new(ApiConfig::with_base(Some("https://api.test")), transport, credentials)
}

/// Unsigned token with the given JSON payload.
pub fn make_token(payload: &serde_json::Value) -> String {
    format!("eyJhbGciOiJIUzI1NiJ9.{}.signature", URL_SAFE_NO_PAD.encode(payload.to_string()))
}

thread_local! {
    static CAPTURED: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        CAPTURED.with(|c| c.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: std::sync::Once = std::sync::Once::new();

/// Install the capture logger (once per process) and clear this thread's records.
pub fn capture_logs() {
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
    CAPTURED.with(|c| c.borrow_mut().clear());
}

/// Records logged on this thread since `capture_logs`.
pub fn captured_logs() -> Vec<(log::Level, String)> {
    CAPTURED.with(|c| c.borrow().clone())
}
