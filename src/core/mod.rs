// Core modules implementing the condition record, message codec, options, and errors.
pub mod condition;
pub mod error;
pub mod message_kv;
pub mod options;
