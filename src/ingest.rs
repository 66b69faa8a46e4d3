use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::events::{decode_event, DecodeError, Event, PushPayload};

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("could not read input file '{path}'")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed event on line {line}: {source}")]
    MalformedLine {
        line: usize,
        #[source]
        source: DecodeError,
    },
}

/// Read the whole event log at `path` and keep its push payloads.
#[tracing::instrument]
pub fn read_push_payloads(path: &Path) -> Result<Vec<PushPayload>, IngestError> {
    let content = std::fs::read_to_string(path).map_err(|source| IngestError::ReadInput {
        path: path.to_owned(),
        source,
    })?;

    parse_push_payloads(&content)
}

/// Decode every non-blank line of `content`, in order.
///
/// Blank lines are skipped without decoding. The first line that fails to
/// decode aborts the whole parse.
#[tracing::instrument(skip(content), fields(bytes = content.len()))]
pub fn parse_push_payloads(content: &str) -> Result<Vec<PushPayload>, IngestError> {
    let mut payloads = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let event = decode_event(line).map_err(|source| {
            tracing::error!(line = index + 1, error = %source, "Failed to decode event");
            IngestError::MalformedLine {
                line: index + 1,
                source,
            }
        })?;

        match event {
            Event::Push { payload } => payloads.push(payload),
            other => {
                tracing::trace!(
                    line = index + 1,
                    event_type = other.type_name(),
                    "Skipping non-push event"
                );
                skipped += 1;
            }
        }
    }

    tracing::info!(
        payloads = payloads.len(),
        skipped = skipped,
        "Ingested event log"
    );

    Ok(payloads)
}
