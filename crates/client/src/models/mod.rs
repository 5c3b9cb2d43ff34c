//! Wire-format records for every resource family.
//!
//! Field names match the backend JSON (`snake_case`). Optional fields are
//! `Option<T>`; create/update payloads skip unset keys entirely so a partial
//! PUT only touches what the caller set. Filter types expose `to_query()`
//! building the exact pairs to encode: a key is present iff its option is
//! set, and no defaults are injected here.

pub mod application;
pub mod auth;
pub mod company;
pub mod dedup;
pub mod job;
pub mod job_source;
pub mod resume;
pub mod search;
pub mod skill_bank;
pub mod stats;
pub mod timeline;
pub mod user;

use serde::{Deserialize, Serialize};

/// Generic `{ "message": ... }` acknowledgement returned by most DELETE and
/// logout-style endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Appends `(key, value)` iff the option is set.
pub(crate) fn push_opt<T: ToString>(
    query: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: Option<&T>,
) {
    if let Some(v) = value {
        query.push((key, v.to_string()));
    }
}
