use std::collections::BTreeMap;

use crate::events::{Author, Commit, PushPayload};

/// Commit messages per author.
///
/// Callers must not rely on the order of authors. A sorted map is used so that
/// repeated runs over the same input render byte-identical reports.
pub type AuthorMessages = BTreeMap<Author, Vec<String>>;

/// Flatten every payload's commits, keeping payload order then commit order.
pub fn flatten_commits(payloads: Vec<PushPayload>) -> impl Iterator<Item = Commit> {
    payloads.into_iter().flat_map(|payload| payload.commits)
}

/// Group commit messages by author name.
///
/// Each author's messages stay in encounter order, duplicates included.
#[tracing::instrument(skip_all, fields(payloads = payloads.len()))]
pub fn group_by_author(payloads: Vec<PushPayload>) -> AuthorMessages {
    let mut groups = AuthorMessages::new();
    let mut commits = 0usize;

    for Commit { message, author } in flatten_commits(payloads) {
        groups.entry(author).or_default().push(message);
        commits += 1;
    }

    tracing::info!(commits = commits, authors = groups.len(), "Grouped commits");

    groups
}
