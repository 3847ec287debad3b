//! Utility modules.

/// Log sanitization helpers (body truncation, secret masking).
pub mod log_sanitizer;

/// Query-string builder for optional filters.
pub mod query;
