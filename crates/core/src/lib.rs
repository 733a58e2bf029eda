//! Domain types for the fieldops admin client.
//!
//! Entity records mirroring the backend REST resources, form schemas with
//! their validation rules, and the pure view models behind the photo-upload
//! wizard and the service-status badge. Nothing in this crate performs I/O.

mod wire;

pub mod error;
pub mod file;
pub mod forms;
pub mod models;
pub mod photo;
pub mod photo_wizard;
pub mod query;
pub mod response;
pub mod status;
pub mod status_badge;
pub mod types;
