use std::{
    fs::Permissions,
    io::Write,
    path::{Path, PathBuf},
};

use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;

use crate::{
    grouping::AuthorMessages,
    ngram::{top_ngrams, NGram},
};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not write report to '{path}'")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Report columns after the author name, one per ranked n-gram.
#[derive(Debug, Clone, Copy, EnumIter, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
}

/// One report row: an author and their top n-grams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub author: String,
    pub ngrams: Vec<NGram>,
}

impl OutputLine {
    pub fn fields(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.author.clone()).chain(self.ngrams.iter().map(NGram::to_string))
    }
}

/// Rank every author's n-grams. Row order follows the map's iteration order.
#[tracing::instrument(skip_all, fields(authors = groups.len()))]
pub fn build_output_lines(groups: &AuthorMessages) -> Vec<OutputLine> {
    groups
        .iter()
        .map(|(author, messages)| OutputLine {
            author: author.name.clone(),
            ngrams: top_ngrams(messages.as_slice()),
        })
        .collect()
}

fn quote(field: &str) -> String {
    format!("'{}'", field)
}

fn header() -> String {
    std::iter::once("author".to_string())
        .chain(Rank::iter().map(|rank| format!("{} 3-gram", rank)))
        .map(|label| quote(&label))
        .collect::<Vec<_>>()
        .join(",")
}

/// Permissions for a report that does not exist yet, as a plain create would
/// leave them under the usual umask.
#[cfg(unix)]
fn new_report_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;

    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_report_permissions() -> Option<Permissions> {
    None
}

/// Render the report as single-quoted CSV.
///
/// Fields are wrapped in `'` without escaping. Rows for authors with fewer
/// than five n-grams are shorter than the header.
pub fn render_csv(lines: &[OutputLine]) -> String {
    let mut rows = vec![header()];
    rows.extend(lines.iter().map(|line| {
        line.fields()
            .map(|field| quote(&field))
            .collect::<Vec<_>>()
            .join(",")
    }));

    let mut text = rows.join("\n");
    text.push('\n');

    tracing::info!(rows = lines.len(), bytes = text.len(), "Rendered report");

    text
}

/// Replace the file at `path` with `content` in a single rename.
///
/// The replacement keeps the permissions of the file it overwrites.
#[tracing::instrument(skip(content), fields(bytes = content.len()))]
pub fn write_report(path: &Path, content: &str) -> Result<(), ReportError> {
    let to_report_error = |source: std::io::Error| ReportError::WriteOutput {
        path: path.to_owned(),
        source,
    };

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Temp files are created owner-only
    let permissions = match std::fs::metadata(path) {
        Ok(metadata) => Some(metadata.permissions()),
        Err(_) => new_report_permissions(),
    };

    let mut file = tempfile::NamedTempFile::new_in(directory).map_err(to_report_error)?;
    file.write_all(content.as_bytes())
        .map_err(to_report_error)?;
    if let Some(permissions) = permissions {
        file.as_file()
            .set_permissions(permissions)
            .map_err(to_report_error)?;
    }
    file.persist(path).map_err(|e| to_report_error(e.error))?;

    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote report");

    Ok(())
}
