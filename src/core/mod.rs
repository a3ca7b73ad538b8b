// Core modules implementing the array operations and error modeling.
pub mod array;
pub mod coerce;
pub mod dispatch;
pub mod error;
