//! Guarded execution of caller-supplied procedures.

use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::error::CapturedError;
use crate::hook::GuardScope;

/// Runs `procedure` under a guard, absorbing any unwinding panic.
///
/// Returns the procedure's value when it completes, or a
/// [`CapturedError`] describing the panic otherwise. The procedure is
/// consumed and invoked exactly once, synchronously, on the calling
/// thread; no panic crosses back out of this call.
///
/// `AssertUnwindSafe` is sound here: the guard holds no state the
/// unwind could tear, and whatever the procedure mutated before the
/// raise point stays as-is (no rollback).
///
/// # Example
///
/// ```rust
/// let value = panicgate::catch(|| 2 + 2);
/// assert_eq!(value.unwrap(), 4);
///
/// let failed = panicgate::catch(|| panic!("object is inaccessible"));
/// assert!(failed.unwrap_err().reason().contains("inaccessible"));
/// ```
pub fn catch<T>(procedure: impl FnOnce() -> T) -> Result<T, CapturedError> {
    let scope = GuardScope::enter();
    match panic::catch_unwind(AssertUnwindSafe(procedure)) {
        Ok(value) => Ok(value),
        Err(payload) => {
            let error = CapturedError::from_payload(payload, scope.take_site());
            debug!("guarded call absorbed a panic: {}", error);
            Err(error)
        }
    }
}

/// Runs `procedure` under a guard; `true` when it completes, `false`
/// when a panic was absorbed. The capture is discarded.
pub fn try_execute(procedure: impl FnOnce()) -> bool {
    catch(procedure).is_ok()
}

/// Runs `procedure` under a guard; on an absorbed panic additionally
/// writes a fresh [`CapturedError`] into `error`.
///
/// The slot is written iff the return value is `false`; the success
/// path leaves it exactly as passed in.
pub fn try_execute_capture(
    procedure: impl FnOnce(),
    error: &mut Option<CapturedError>,
) -> bool {
    match catch(procedure) {
        Ok(()) => true,
        Err(captured) => {
            *error = Some(captured);
            false
        }
    }
}
