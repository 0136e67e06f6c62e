//! Purpose: Read and write structured key-value metadata stored in a condition message.
//! Exports: `MessageKv`, `get_message_kv`, `update_message_kv`, `update_message_kv_with`,
//! `get_message_as`, `update_message_from`, `set_message_key`, `remove_message_key`.
//! Role: Stateless codec between a JSON object and the record's message text.
//! Invariants: An empty message decodes to an empty mapping; any other non-object is an error.
//! Invariants: Encode failures never touch the record; the message is replaced only on success.
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::condition::MessageField;
use crate::core::error::{Error, ErrorKind};
use crate::core::options::KvOptions;
use crate::json::parse::{self, ParseFailureCategory};

const MESSAGE_CONTEXT: &str = "condition.message";

/// Decoded message metadata. Keys are kept sorted, so encoding is deterministic.
pub type MessageKv = Map<String, Value>;

pub fn get_message_kv<C>(condition: &C) -> Result<MessageKv, Error>
where
    C: MessageField + ?Sized,
{
    let message = condition.message();
    if message.is_empty() {
        return Ok(MessageKv::new());
    }
    let kv: MessageKv = parse::from_str(message).map_err(decode_error)?;
    debug!(
        message_len = message.len(),
        keys = kv.len(),
        "decoded condition message"
    );
    Ok(kv)
}

pub fn update_message_kv<C>(kv: &MessageKv, condition: &mut C) -> Result<(), Error>
where
    C: MessageField + ?Sized,
{
    update_message_kv_with(kv, condition, &KvOptions::default())
}

pub fn update_message_kv_with<C>(
    kv: &MessageKv,
    condition: &mut C,
    options: &KvOptions,
) -> Result<(), Error>
where
    C: MessageField + ?Sized,
{
    let message = encode(kv, options)?;
    debug!(
        message_len = message.len(),
        keys = kv.len(),
        "encoded condition message"
    );
    condition.set_message(message);
    Ok(())
}

/// Decodes the message into a caller type. An empty message is treated as `{}`.
pub fn get_message_as<T, C>(condition: &C) -> Result<T, Error>
where
    T: DeserializeOwned,
    C: MessageField + ?Sized,
{
    let kv = get_message_kv(condition)?;
    serde_json::from_value(Value::Object(kv)).map_err(decode_error)
}

/// Encodes any serializable value whose JSON form is an object.
pub fn update_message_from<T, C>(value: &T, condition: &mut C) -> Result<(), Error>
where
    T: Serialize + ?Sized,
    C: MessageField + ?Sized,
{
    let value = serde_json::to_value(value).map_err(encode_error)?;
    let Value::Object(kv) = value else {
        return Err(Error::new(ErrorKind::Encode)
            .with_message("value does not serialize to a JSON object"));
    };
    update_message_kv(&kv, condition)
}

/// Inserts one key, returning its previous value.
pub fn set_message_key<C>(
    condition: &mut C,
    key: impl Into<String>,
    value: Value,
) -> Result<Option<Value>, Error>
where
    C: MessageField + ?Sized,
{
    let key = key.into();
    let mut kv = match get_message_kv(condition) {
        Ok(kv) => kv,
        Err(err) => return Err(err.with_key(key)),
    };
    let previous = kv.insert(key.clone(), value);
    match update_message_kv(&kv, condition) {
        Ok(()) => Ok(previous),
        Err(err) => Err(err.with_key(key)),
    }
}

pub fn remove_message_key<C>(condition: &mut C, key: &str) -> Result<Option<Value>, Error>
where
    C: MessageField + ?Sized,
{
    let mut kv = get_message_kv(condition).map_err(|err| err.with_key(key))?;
    let removed = kv.remove(key);
    if removed.is_some() {
        update_message_kv(&kv, condition).map_err(|err| err.with_key(key))?;
    }
    Ok(removed)
}

fn encode<T>(value: &T, options: &KvOptions) -> Result<String, Error>
where
    T: Serialize + ?Sized,
{
    let encoded = if options.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    let message = encoded.map_err(encode_error)?;
    if let Some(limit) = options.max_message_bytes {
        if message.len() > limit {
            debug!(
                message_len = message.len(),
                limit,
                "encoded condition message exceeds limit"
            );
            return Err(Error::new(ErrorKind::Encode)
                .with_message(format!("encoded message is {} bytes", message.len()))
                .with_hint(format!("max_message_bytes is {limit}")));
        }
    }
    Ok(message)
}

fn encode_error(err: serde_json::Error) -> Error {
    debug!(error = %err, "condition message encode failed");
    Error::new(ErrorKind::Encode)
        .with_message("failed to encode condition message")
        .with_source(err)
}

fn decode_error(err: serde_json::Error) -> Error {
    let category = parse::categorize_error(&err);
    debug!(
        category = category.label(),
        error = %err,
        "condition message decode failed"
    );
    let message = match category {
        ParseFailureCategory::NotAnObject => "condition message is not a JSON object",
        ParseFailureCategory::Shape => "condition message does not match the expected shape",
        _ => "condition message is not valid JSON",
    };
    let hint = parse::hint_for_error(&err, MESSAGE_CONTEXT);
    Error::new(ErrorKind::Decode)
        .with_message(message)
        .with_hint(hint)
        .with_source(err)
}
