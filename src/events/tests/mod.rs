use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

use super::{decode_event, Author, Commit, DecodeError, Event, PushPayload};

#[test]
fn test_parse_push_event() {
    let event_str = include_str!("./push_sample.json");
    let event = decode_event(event_str).expect("should decode");

    assert_eq!(
        event,
        Event::Push {
            payload: PushPayload {
                commits: vec![
                    Commit::new("Solution to homework 2, part 1.", "Petros Avgerinos"),
                    Commit::new("Solution to homework 2, part 2!", "Petros Avgerinos"),
                ]
            }
        }
    );
    assert_eq!(event.type_name(), "PushEvent");
}

#[test]
fn test_parse_other_event() {
    let event_str = include_str!("./watch_sample.json");
    let event = decode_event(event_str).expect("should decode");

    assert_eq!(event.type_name(), "WatchEvent");
    assert_matches!(event, Event::Other { .. });
}

#[test]
fn test_other_event_without_payload_is_inert() {
    let event = decode_event(r#"{"type":"WatchEvent"}"#).expect("should decode");

    assert_eq!(
        event,
        Event::Other {
            type_name: "WatchEvent".into()
        }
    );
}

#[test]
fn test_push_event_with_no_commits() {
    let event = decode_event(r#"{"type":"PushEvent","payload":{"commits":[]}}"#).unwrap();

    assert_eq!(
        event,
        Event::Push {
            payload: PushPayload::default()
        }
    );
}

#[test]
fn test_author_identity_ignores_other_fields() {
    let event = decode_event(
        r#"{"type":"PushEvent","payload":{"commits":[
            {"message":"a","author":{"name":"Ann","email":"one@local.test"}},
            {"message":"b","author":{"name":"Ann","email":"two@local.test"}}
        ]}}"#,
    )
    .unwrap();

    let payload = match event {
        Event::Push { payload } => payload,
        other => panic!("expected a push event, got {:?}", other),
    };
    assert_eq!(payload.commits[0].author, payload.commits[1].author);
    assert_eq!(payload.commits[0].author, Author::new("Ann"));
}

#[test]
fn test_malformed_json() {
    let err = decode_event("{not json").unwrap_err();
    assert_matches!(err, DecodeError::MalformedJson(_));
}

#[test]
fn test_missing_type() {
    let err = decode_event(r#"{"payload":{"commits":[]}}"#).unwrap_err();
    assert_matches!(err, DecodeError::MissingEventType);

    let err = decode_event(r#"{"type":42}"#).unwrap_err();
    assert_matches!(err, DecodeError::MissingEventType);
}

#[test]
fn test_push_event_missing_payload() {
    let err = decode_event(r#"{"type":"PushEvent"}"#).unwrap_err();
    assert_matches!(err, DecodeError::MalformedPushPayload(_));
}

#[test]
fn test_push_event_missing_author_name() {
    let err = decode_event(
        r#"{"type":"PushEvent","payload":{"commits":[{"message":"m","author":{}}]}}"#,
    )
    .unwrap_err();
    assert_matches!(err, DecodeError::MalformedPushPayload(_));
}

#[test]
fn test_push_event_mistyped_message() {
    let err = decode_event(
        r#"{"type":"PushEvent","payload":{"commits":[{"message":3,"author":{"name":"a"}}]}}"#,
    )
    .unwrap_err();
    assert_matches!(err, DecodeError::MalformedPushPayload(_));
}
