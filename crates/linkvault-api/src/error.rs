//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` impl for `AppError` lives in `linkvault-core`
//! (the orphan rule requires it next to the type definition); this
//! module re-exports the response body type at its original path.

pub use linkvault_core::error::ApiErrorResponse;
