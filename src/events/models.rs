use serde::Deserialize;

/// Commit author, identified by display name only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub struct Author {
    pub name: String,
}

impl Author {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Commit {
    pub message: String,
    pub author: Author,
}

impl Commit {
    pub fn new<M: Into<String>, A: Into<String>>(message: M, author: A) -> Self {
        Self {
            message: message.into(),
            author: Author::new(author),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PushPayload {
    pub commits: Vec<Commit>,
}
