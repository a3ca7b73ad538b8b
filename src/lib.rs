//! Purpose: Library crate backing the `jsonutils` CLI and its tests.
//! Exports: `core` (array operations, coercion, dispatch, errors).
//! Role: Keeps operations callable without spawning a process.
//! Invariants: Operations write only to the sink they are given, and only on success.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod core;
mod json;

pub use crate::core::array::{append, appended, new_array, spread, spread_into};
pub use crate::core::coerce::{TypeHint, coerce};
pub use crate::core::dispatch::{ArrayCommand, run_array_command};
pub use crate::core::error::{Error, ErrorKind, to_exit_code};
