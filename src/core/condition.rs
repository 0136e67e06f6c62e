//! Purpose: Model the status condition record whose message carries encoded metadata.
//! Exports: `PodCondition`, `ConditionStatus`, `MessageField`.
//! Role: Caller-owned record type plus the seam message operations are generic over.
//! Invariants: Serialized field names match the orchestrator's camelCase condition schema.
//! Invariants: Timestamps are RFC3339 UTC at second precision.
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::core::error::{Error, ErrorKind};

/// Access to the text field a condition uses as its metadata container.
///
/// Message operations borrow the record for the duration of one call and
/// touch nothing but this field.
pub trait MessageField {
    fn message(&self) -> &str;
    fn set_message(&mut self, message: String);
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum ConditionStatus {
    True,
    False,
    #[default]
    Unknown,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodCondition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: ConditionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_probe_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reason: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl PodCondition {
    pub fn new(condition_type: impl Into<String>, status: ConditionStatus) -> Self {
        Self {
            condition_type: condition_type.into(),
            status,
            ..Self::default()
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn with_transition_now(mut self) -> Result<Self, Error> {
        self.last_transition_time = Some(format_ts(OffsetDateTime::now_utc())?);
        Ok(self)
    }

    /// Parsed `last_transition_time`, if one is set.
    pub fn last_transition(&self) -> Result<Option<OffsetDateTime>, Error> {
        self.last_transition_time
            .as_deref()
            .map(|text| {
                OffsetDateTime::parse(text, &Rfc3339).map_err(|err| {
                    Error::new(ErrorKind::Decode)
                        .with_message("invalid lastTransitionTime")
                        .with_source(err)
                })
            })
            .transpose()
    }
}

impl MessageField for PodCondition {
    fn message(&self) -> &str {
        &self.message
    }

    fn set_message(&mut self, message: String) {
        self.message = message;
    }
}

impl MessageField for String {
    fn message(&self) -> &str {
        self.as_str()
    }

    fn set_message(&mut self, message: String) {
        *self = message;
    }
}

fn format_ts(ts: OffsetDateTime) -> Result<String, Error> {
    let ts = ts.replace_nanosecond(0).map_err(|err| {
        Error::new(ErrorKind::Encode)
            .with_message("invalid timestamp")
            .with_source(err)
    })?;
    ts.format(&Rfc3339).map_err(|err| {
        Error::new(ErrorKind::Encode)
            .with_message("timestamp format failed")
            .with_source(err)
    })
}
