#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Validation gate and query engine for compact monthly facility data.
//!
//! An untyped payload from the external data provider passes through a
//! structural gate, gets decoded once into a [`MonthlyStore`], and is
//! then queried read-only for the rest of the application lifetime.
//! Queries never fail: unknown month keys and unknown facility ids
//! degrade to empty or zero-filled results so rendering never crashes
//! on a stale selection.

pub mod queries;

use facility_map_monthly_models::CompactMonthlyData;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while constructing a [`MonthlyStore`].
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The payload does not match the compact monthly data shape.
    #[error("payload does not match the compact monthly data shape")]
    Malformed,

    /// The payload passed the structural gate but failed typed decoding.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Structural type guard for the compact monthly payload.
///
/// Checks shape only, short-circuiting on the first failure: the
/// payload is an object with a `meta` object (`v` numeric, `t` string,
/// `f` numeric, `m` array, `l` string), a `facilities` array, and a
/// `data` object. Per-facility array lengths, month uniqueness, and
/// value ranges are not verified here; the query engine tolerates
/// those.
#[must_use]
pub fn is_compact_payload(payload: &Value) -> bool {
    let Some(obj) = payload.as_object() else {
        return false;
    };
    let Some(meta) = obj.get("meta").and_then(Value::as_object) else {
        return false;
    };

    meta.get("v").is_some_and(Value::is_number)
        && meta.get("t").is_some_and(Value::is_string)
        && meta.get("f").is_some_and(Value::is_number)
        && meta.get("m").is_some_and(Value::is_array)
        && meta.get("l").is_some_and(Value::is_string)
        && obj.get("facilities").is_some_and(Value::is_array)
        && obj.get("data").is_some_and(Value::is_object)
}

/// Read-only store over one compact monthly payload.
///
/// Constructed once at the application's composition point and handed
/// to every consumer by reference. Nothing mutates it after
/// construction, so concurrent reads need no synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyStore {
    payload: CompactMonthlyData,
}

impl MonthlyStore {
    /// Builds a store from an untyped JSON payload.
    ///
    /// Runs the structural gate first, then typed decoding.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Malformed`] if the payload fails the
    /// structural gate, or [`PayloadError::Json`] if typed decoding
    /// fails (e.g. a negative population count).
    pub fn from_value(payload: Value) -> Result<Self, PayloadError> {
        if !is_compact_payload(&payload) {
            return Err(PayloadError::Malformed);
        }
        Ok(Self {
            payload: serde_json::from_value(payload)?,
        })
    }

    /// Builds a store from raw JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError`] if the text is not valid JSON or does
    /// not decode as a compact monthly payload.
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// The decoded payload backing this store.
    #[must_use]
    pub const fn payload(&self) -> &CompactMonthlyData {
        &self.payload
    }
}
