//! Purpose: Encode-time configuration for condition messages.
//! Exports: `KvOptions`.
//! Role: Caller-owned options struct; the library keeps no global configuration.
//! Invariants: Defaults produce compact JSON with no size limit.

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KvOptions {
    /// Emit indented JSON instead of the compact form.
    pub pretty: bool,
    /// Reject encoded messages longer than this many bytes.
    pub max_message_bytes: Option<usize>,
}

impl KvOptions {
    pub fn new() -> Self {
        Self {
            pretty: false,
            max_message_bytes: None,
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn max_message_bytes(mut self, limit: usize) -> Self {
        self.max_message_bytes = Some(limit);
        self
    }
}

impl Default for KvOptions {
    fn default() -> Self {
        Self::new()
    }
}
