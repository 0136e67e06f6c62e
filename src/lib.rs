//! Purpose: Library crate for structured metadata stored in status condition messages.
//! Exports: `api` (public surface over the record model, codec, options, and errors).
//! Role: Helper layer for controllers that stash key-value state in `condition.message`.
//! Invariants: Operations are synchronous, stateless, and touch only the message field.
//! Invariants: Core modules prefer explicit inputs/outputs over hidden state.
pub mod api;
mod core;
mod json;
