//! One module per backend resource.
//!
//! Each module exports `*_request` builders returning [`ApiRequest`]s and a
//! borrowed handle on [`ApiClient`] that sends them. Edits are full-resource
//! replaces; file-bearing edits switch to multipart automatically.
//!
//! [`ApiRequest`]: crate::request::ApiRequest
//! [`ApiClient`]: crate::client::ApiClient

pub mod customer;
pub mod schedule;
pub mod tenant;
pub mod ticket;
pub mod user;

/// `Accept` value for endpoints that stream an image back.
pub const IMAGE_ACCEPT: &str = "image/*";
