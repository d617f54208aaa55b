//! Canonical logging macros
//!
//! Every public operation of the core logs one `start` event and exactly one
//! `end` or `end_error` event. All three macros funnel into
//! `__log_op_event!`, which stamps the `component`, `op` and `event` fields
//! so their names and order are the same on every event.

/// Emit one operation event at `level`. Not part of the public API.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        )
    };
}

/// Log the start of an operation, with optional input-size fields
///
/// # Example
///
/// ```
/// # use bimdiff_core::log_op_start;
/// log_op_start!("compare");
/// log_op_start!("compare", old_len = 3u64, new_len = 4u64);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(info, $op, $crate::schema::EVENT_START $(, $($field)*)?)
    };
}

/// Log the successful end of an operation; `duration_ms` is mandatory
///
/// # Example
///
/// ```
/// # use bimdiff_core::log_op_end;
/// log_op_end!("compare", duration_ms = 42u64);
/// log_op_end!("compare", duration_ms = 42u64, added = 1u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            $crate::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// Log a failed operation
///
/// Anything convertible into [`ExError`](crate::errors::ExError) is accepted;
/// the stable kind and code land in the `err.kind` / `err.code` fields.
///
/// # Example
///
/// ```
/// # use bimdiff_core::{log_op_error, errors::BimDiffError};
/// let err = BimDiffError::UnknownSnapshot { snapshot_id: 9 };
/// log_op_error!("resolve_pair", err, duration_ms = 1u64);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            error,
            $op,
            $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code()
            $(, $($field)*)?
        );
    }};
}
