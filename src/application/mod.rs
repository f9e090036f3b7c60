//! Application layer: one handler per exposed operation.

pub mod handlers;
