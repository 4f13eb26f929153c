//! Networking: the shared request pipeline and the REST endpoints on top of it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns credential attachment and the 401 refresh protocol. `session`
//! resolves who is logged in from stored credentials. `api` maps each backend
//! endpoint to a typed call, and `normalize` flattens the backend's
//! inconsistent response shapes into the records in `types`.
//!
//! `transport` and `credentials` are the seams to the browser: `browser`
//! implements them over `fetch`, cookies, and `localStorage`, while tests
//! script them in memory.

pub mod api;
pub mod browser;
pub mod client;
pub mod credentials;
pub mod error;
pub mod normalize;
pub mod session;
pub mod token;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
