//! Data Transfer Objects for Web API.
//!
//! The operation payloads themselves live in [`crate::relay::types`].

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
