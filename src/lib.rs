//! panicgate
//!
//! Guarded-call primitive: run a caller-supplied closure, absorb any
//! unwinding panic it raises, and report the outcome as an ordinary
//! value instead of letting the fault propagate.
//!
//! `Result`-based code cannot observe a panic raised by a callee
//! without a guard. This crate provides that guard in three shapes:
//! a boolean ([`try_execute`]), a boolean plus a structured capture
//! written through an output slot ([`try_execute_capture`]), and a
//! `Result` ([`catch`]).
//!
//! # Example
//!
//! ```rust
//! use panicgate::{try_execute_capture, CapturedError};
//!
//! let mut error: Option<CapturedError> = None;
//! let ok = try_execute_capture(|| panic!("object is inaccessible"), &mut error);
//!
//! assert!(!ok);
//! assert!(error.unwrap().reason().contains("object is inaccessible"));
//! ```
//!
//! Every unwinding panic is absorbed uniformly. Non-unwinding
//! terminations (`panic = "abort"` builds, stack-overflow aborts,
//! `std::process::abort`) cannot be intercepted by any in-process
//! guard and terminate the process as they always would.

#![doc(html_root_url = "https://docs.rs/panicgate")]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod guard;

mod hook;

// Re-exports
pub use error::{CapturedError, Fault};
pub use guard::{catch, try_execute, try_execute_capture};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
