//! Shared request pipeline with credential attachment and 401 recovery.
//!
//! ARCHITECTURE
//! ============
//! Every REST call goes through `HttpClient::request`:
//!
//! 1. Re-read the credential store and attach `Authorization: Bearer <token>`
//!    when a token is held. Cookies ride along regardless (the transport
//!    always includes credentials), so cookie-only sessions still work.
//! 2. On a 401 for a request that has not been retried, take part in the
//!    refresh cycle: the first such request issues `POST /auth/refresh`, every
//!    later one parks a waiter in `RefreshState::pending`. When the refresh
//!    settles, all of them replay once with the new token, or all fail.
//! 3. Map the final status onto `ApiError`.
//!
//! CONCURRENCY
//! ===========
//! The client runs on a single-threaded executor. `RefreshState` is checked
//! and flipped inside one `RefCell` borrow with no `.await` in between, so at
//! most one refresh is ever in flight. If the future driving a refresh is
//! dropped (its request was canceled), `RefreshGuard` releases the flag and
//! rejects the parked waiters.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future::{AbortRegistration, Abortable};

use super::credentials::CredentialStore;
use super::error::ApiError;
use super::transport::{Body, HttpRequest, HttpResponse, Method, Transport};
use crate::config::ApiConfig;

pub const REFRESH_PATH: &str = "/auth/refresh";

/// Keys that may carry a bearer token in login/refresh bodies, in priority order.
pub const TOKEN_KEYS: &[&str] = &["access_token", "accessToken", "token"];

type RefreshOutcome = Result<String, ApiError>;

/// Refresh-cycle bookkeeping owned by one client.
#[derive(Debug, Default)]
pub struct RefreshState {
    refreshing: bool,
    pending: VecDeque<oneshot::Sender<RefreshOutcome>>,
}

impl RefreshState {
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// A REST call before credentials are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Body,
    /// Auth endpoints opt out so a rejected login never triggers a refresh.
    pub skip_refresh: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: Vec::new(), body: Body::Empty, skip_refresh: false }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = Body::Json(value);
        self
    }

    #[must_use]
    pub fn body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_owned(), value.to_string()));
        self
    }

    #[must_use]
    pub fn without_refresh(mut self) -> Self {
        self.skip_refresh = true;
        self
    }
}

/// Per-call options. `signal` is the registration half of a
/// `futures::future::AbortHandle` pair; aborting the handle cancels the call.
#[derive(Debug, Default)]
pub struct RequestOptions {
    pub signal: Option<AbortRegistration>,
}

impl RequestOptions {
    pub fn with_signal(signal: AbortRegistration) -> Self {
        Self { signal: Some(signal) }
    }
}

struct ClientInner<T, S> {
    config: ApiConfig,
    transport: T,
    credentials: S,
    refresh: RefCell<RefreshState>,
}

/// Cheaply clonable handle; clones share the transport, store, and refresh state.
pub struct HttpClient<T, S> {
    inner: Rc<ClientInner<T, S>>,
}

impl<T, S> Clone for HttpClient<T, S> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: Transport, S: CredentialStore> HttpClient<T, S> {
    pub fn new(config: ApiConfig, transport: T, credentials: S) -> Self {
        Self {
            inner: Rc::new(ClientInner {
                config,
                transport,
                credentials,
                refresh: RefCell::new(RefreshState::default()),
            }),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    pub fn credentials(&self) -> &S {
        &self.inner.credentials
    }

    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    pub fn is_refreshing(&self) -> bool {
        self.inner.refresh.borrow().is_refreshing()
    }

    pub fn pending_refresh_waiters(&self) -> usize {
        self.inner.refresh.borrow().pending_len()
    }

    /// Send `call` and return the successful response.
    ///
    /// # Errors
    ///
    /// Returns the classified `ApiError` for network failures and non-2xx
    /// statuses, or `ApiError::Canceled` if the abort handle fired first.
    pub async fn request(&self, call: ApiRequest, options: RequestOptions) -> Result<HttpResponse, ApiError> {
        let method = call.method.as_str();
        let url = self.inner.config.url(&call.path);
        let outcome = match options.signal {
            Some(signal) => Abortable::new(self.dispatch(&call), signal)
                .await
                .unwrap_or(Err(ApiError::Canceled)),
            None => self.dispatch(&call).await,
        };
        match &outcome {
            Err(ApiError::Canceled) => log::debug!("[api] {method} {url} canceled"),
            // Auth calls and session checks expect 401s from signed-out visitors.
            Err(err) if err.is_auth() && call.skip_refresh => log::debug!("[api] {method} {url} rejected: {err}"),
            Err(err) => log::error!("[api] {method} {url} failed: {err}"),
            Ok(resp) => log::debug!("[api] {method} {url} -> {}", resp.status),
        }
        outcome
    }

    /// `request` without options, decoding the body as JSON.
    ///
    /// # Errors
    ///
    /// Same as `request`, plus `ApiError::Decode` for an unexpected body.
    pub async fn fetch_json<R: serde::de::DeserializeOwned>(&self, call: ApiRequest) -> Result<R, ApiError> {
        self.request(call, RequestOptions::default()).await?.json()
    }

    async fn dispatch(&self, call: &ApiRequest) -> Result<HttpResponse, ApiError> {
        let mut retried = false;
        let mut token_override: Option<String> = None;
        loop {
            let token = token_override.clone().or_else(|| self.inner.credentials.current_token());
            let response = self.send(call, token).await?;
            if response.status == 401 && !retried && !call.skip_refresh {
                retried = true;
                token_override = Some(self.refreshed_token().await?);
                continue;
            }
            if response.is_success() {
                return Ok(response);
            }
            return Err(ApiError::from_status(response.status, &response.body));
        }
    }

    async fn send(&self, call: &ApiRequest, token: Option<String>) -> Result<HttpResponse, ApiError> {
        let mut headers = vec![("Accept".to_owned(), "application/json".to_owned())];
        if let Some(token) = &token {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        log::debug!(
            "[api] {} {} attached_auth={}",
            call.method.as_str(),
            self.inner.config.url(&call.path),
            token.is_some()
        );
        let request = HttpRequest {
            method: call.method,
            url: self.inner.config.url(&call.path),
            query: call.query.clone(),
            headers,
            body: call.body.clone(),
            timeout: self.inner.config.timeout,
        };
        Ok(self.inner.transport.send(request).await?)
    }

    /// Join the current refresh cycle, starting one if none is running.
    async fn refreshed_token(&self) -> RefreshOutcome {
        let waiter = {
            let mut state = self.inner.refresh.borrow_mut();
            if state.refreshing {
                let (tx, rx) = oneshot::channel();
                state.pending.push_back(tx);
                Some(rx)
            } else {
                state.refreshing = true;
                None
            }
        };

        if let Some(rx) = waiter {
            return rx
                .await
                .unwrap_or_else(|_| Err(ApiError::Network("token refresh was interrupted".to_owned())));
        }

        let mut guard = RefreshGuard { inner: &*self.inner, armed: true };
        let outcome = self.call_refresh().await.map_err(session_expired);
        guard.settle(outcome.clone(), true);
        outcome
    }

    async fn call_refresh(&self) -> RefreshOutcome {
        log::debug!("[api] access token rejected; refreshing");
        let call = ApiRequest::post(REFRESH_PATH).without_refresh();
        let token = self.inner.credentials.current_token();
        let response = self.send(&call, token).await?;
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, &response.body));
        }
        let body: serde_json::Value = response.json()?;
        let token = extract_token(&body).ok_or_else(|| ApiError::Auth {
            status: response.status,
            message: "refresh response carried no access token".to_owned(),
        })?;
        self.inner.credentials.store_token(&token);
        Ok(token)
    }
}

/// A refresh that fails for any reason leaves no usable credential, so every
/// request waiting on it reports the session as over.
fn session_expired(err: ApiError) -> ApiError {
    match err {
        ApiError::Auth { .. } => err,
        other => ApiError::Auth { status: 401, message: other.user_message() },
    }
}

/// Settles a refresh cycle exactly once, even if the refreshing future is dropped.
struct RefreshGuard<'a, T, S: CredentialStore> {
    inner: &'a ClientInner<T, S>,
    armed: bool,
}

impl<T, S: CredentialStore> RefreshGuard<'_, T, S> {
    /// Release the refresh flag and hand `outcome` to every parked waiter.
    /// A failed refresh discards the stored credential unless it was merely
    /// interrupted.
    fn settle(&mut self, outcome: RefreshOutcome, completed: bool) {
        if !self.armed {
            return;
        }
        self.armed = false;
        if let Err(err) = &outcome {
            log::warn!("[api] token refresh failed: {err}");
            if completed {
                self.inner.credentials.clear();
            }
        }
        let waiters = {
            let mut state = self.inner.refresh.borrow_mut();
            state.refreshing = false;
            std::mem::take(&mut state.pending)
        };
        for tx in waiters {
            // A waiter whose request was canceled has dropped its receiver.
            if tx.send(outcome.clone()).is_err() {
                log::debug!("[api] refresh waiter went away before settlement");
            }
        }
    }
}

impl<T, S: CredentialStore> Drop for RefreshGuard<'_, T, S> {
    fn drop(&mut self) {
        self.settle(Err(ApiError::Network("token refresh was interrupted".to_owned())), false);
    }
}

/// First non-empty string under `TOKEN_KEYS`.
pub fn extract_token(body: &serde_json::Value) -> Option<String> {
    TOKEN_KEYS
        .iter()
        .filter_map(|key| body.get(*key).and_then(serde_json::Value::as_str))
        .find(|t| !t.is_empty())
        .map(str::to_owned)
}
