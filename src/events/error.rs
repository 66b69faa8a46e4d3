use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("missing or non-string 'type' field")]
    MissingEventType,

    #[error("malformed PushEvent payload: {0}")]
    MalformedPushPayload(#[source] serde_json::Error),
}
