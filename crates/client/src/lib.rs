//! Client-side core for the Jobdeck job-search / resume-building app.
//!
//! Everything here is the thin layer between a UI and the Jobdeck REST
//! backend: a typed async HTTP client ([`ApiClient`]), one stateless service
//! wrapper per resource family ([`services`]), and the pure formatting /
//! scoring helpers the views render with ([`display`], [`profile`]).
//!
//! The crate holds no authoritative state. Responses are decoded into the
//! records in [`models`] and handed back verbatim; the only shared mutable
//! piece is the bearer token cached on the [`ApiClient`] after a login.

pub mod config;
pub mod display;
pub mod errors;
pub mod http;
pub mod models;
pub mod profile;
pub mod services;

pub use config::ClientConfig;
pub use errors::ApiError;
pub use http::ApiClient;
