//! Captured panic descriptions and the structured payload that raises them.

use std::any::Any;
use std::collections::BTreeMap;
use std::panic::panic_any;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fault name used when a panic carried a plain message payload.
const BARE_PANIC_NAME: &str = "panic";

/// Reason used when a panic payload is neither a message nor a [`Fault`].
const OPAQUE_REASON: &str = "opaque panic payload";

/// Description of one panic intercepted by a guarded call.
///
/// Owned by the caller once returned; every interception produces a
/// fresh value. The display form is `name: reason`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{name}: {reason}")]
pub struct CapturedError {
    name: String,
    reason: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    metadata: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,
}

impl CapturedError {
    /// Builds a capture from a panic payload.
    ///
    /// Recognizes, in order: [`Fault`] (full fidelity), `&'static str`
    /// and `String` (bare `panic!` messages), anything else (opaque).
    /// The payload is consumed either way; nothing is re-raised.
    pub(crate) fn from_payload(
        payload: Box<dyn Any + Send>,
        location: Option<String>,
    ) -> Self {
        let payload = match payload.downcast::<Fault>() {
            Ok(fault) => {
                return Self {
                    name: fault.name,
                    reason: fault.reason,
                    metadata: fault.metadata,
                    location,
                };
            }
            Err(other) => other,
        };

        let reason = if let Some(message) = payload.downcast_ref::<&'static str>() {
            (*message).to_string()
        } else if let Ok(message) = payload.downcast::<String>() {
            *message
        } else {
            OPAQUE_REASON.to_string()
        };

        Self {
            name: BARE_PANIC_NAME.to_string(),
            reason,
            metadata: BTreeMap::new(),
            location,
        }
    }

    /// Fault classification (a [`Fault`] name, or `"panic"` for bare panics).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description of what was raised.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Key/value context carried by the raising [`Fault`]; empty for bare panics.
    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Panic site as `file:line:column`, when the hook observed it.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }
}

/// Structured panic payload carrying a name, a reason, and key/value
/// context across a guarded-call boundary.
///
/// # Example
///
/// ```should_panic
/// use panicgate::Fault;
///
/// Fault::new("ObjectInaccessible")
///     .reason("object is inaccessible")
///     .with("store", "primary")
///     .raise();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fault {
    name: String,
    reason: String,
    metadata: BTreeMap<String, String>,
}

impl Fault {
    /// Creates a fault with the given classification name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: String::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Sets the human-readable reason.
    pub fn reason(
        mut self,
        reason: impl Into<String>,
    ) -> Self {
        self.reason = reason.into();
        self
    }

    /// Attaches one key/value pair of context.
    pub fn with(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Raises the fault as a panic carrying `self` as payload.
    ///
    /// Only meaningful under a guarded call; an unguarded raise
    /// unwinds like any other panic.
    pub fn raise(self) -> ! {
        panic_any(self)
    }
}
