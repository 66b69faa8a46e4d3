use serde::Deserialize;
use serde_json::Value;

use super::{DecodeError, PushPayload};

pub const PUSH_EVENT_TYPE: &str = "PushEvent";

/// One decoded line of the event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Push { payload: PushPayload },
    /// Any other event type. Only the discriminator is kept.
    Other { type_name: String },
}

#[derive(Deserialize)]
struct PushEventRecord {
    payload: PushPayload,
}

impl Event {
    pub fn type_name(&self) -> &str {
        match self {
            Self::Push { .. } => PUSH_EVENT_TYPE,
            Self::Other { type_name } => type_name,
        }
    }
}

/// Decode a single JSON object into an [`Event`].
///
/// The `type` field selects the variant. `PushEvent` objects must carry a
/// well-formed `payload.commits` array; every other type is accepted whatever
/// the rest of its shape.
pub fn decode_event(line: &str) -> Result<Event, DecodeError> {
    let value: Value = serde_json::from_str(line).map_err(DecodeError::MalformedJson)?;
    let type_name = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingEventType)?;

    match type_name {
        PUSH_EVENT_TYPE => {
            let record =
                PushEventRecord::deserialize(&value).map_err(DecodeError::MalformedPushPayload)?;
            Ok(Event::Push {
                payload: record.payload,
            })
        }
        other => Ok(Event::Other {
            type_name: other.to_owned(),
        }),
    }
}
