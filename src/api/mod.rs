//! Purpose: Define the stable public Rust API boundary for condition message metadata.
//! Exports: Record model, message codec operations, options, and error types.
//! Role: Public, additive-only surface; hides internal parsing modules.
//! Invariants: This module is the only public path intended for controller callers.
//! Invariants: Internal modules remain private and are not directly exposed.

pub use crate::core::condition::{ConditionStatus, MessageField, PodCondition};
pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::message_kv::{
    MessageKv, get_message_as, get_message_kv, remove_message_key, set_message_key,
    update_message_from, update_message_kv, update_message_kv_with,
};
pub use crate::core::options::KvOptions;
