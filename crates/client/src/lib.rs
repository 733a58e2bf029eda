//! Typed REST client for the fieldops admin backend.
//!
//! Every endpoint is reachable two ways: a pure descriptor builder
//! (`customer::list_request`, ...) that produces an [`ApiRequest`], and a
//! borrowed resource handle (`client.customers().list(..)`) that builds the
//! descriptor and sends it through the shared [`ApiClient`].
//!
//! The layer is deliberately thin: no retries, no caching, no response
//! reshaping. Transport failures and non-2xx statuses reach the caller as
//! [`ClientError`].

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod resources;

pub use client::{ApiClient, BinaryResponse};
pub use config::ClientConfig;
pub use error::ClientError;
pub use request::{ApiRequest, FilePart, MultipartForm, RequestBody};
pub use resources::{customer, schedule, tenant, ticket, user};
