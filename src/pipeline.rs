use std::path::PathBuf;

use crate::{
    config::Config,
    error::PipelineError,
    events::PushPayload,
    grouping::group_by_author,
    ingest::{parse_push_payloads, read_push_payloads},
    report::{build_output_lines, render_csv, write_report, OutputLine},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub payloads: usize,
    pub commits: usize,
    pub authors: usize,
    pub output_path: PathBuf,
}

fn rank_payloads(payloads: Vec<PushPayload>) -> (Vec<OutputLine>, usize) {
    let groups = group_by_author(payloads);
    let commits = groups.values().map(Vec::len).sum();

    (build_output_lines(&groups), commits)
}

/// Decode, group and rank an in-memory event log.
pub fn build_report(content: &str) -> Result<Vec<OutputLine>, PipelineError> {
    let payloads = parse_push_payloads(content)?;
    Ok(rank_payloads(payloads).0)
}

/// Run the whole pipeline: read the input log, then write the CSV report.
///
/// The report is only written once every line has been decoded.
#[tracing::instrument(skip_all, fields(input = %config.input_path().display()))]
pub fn run(config: &Config) -> Result<RunSummary, PipelineError> {
    config.validate_configuration()?;

    let payloads = read_push_payloads(config.input_path())?;
    let payload_count = payloads.len();

    let (lines, commits) = rank_payloads(payloads);
    let authors = lines.len();

    write_report(config.output_path(), &render_csv(&lines))?;

    Ok(RunSummary {
        payloads: payload_count,
        commits,
        authors,
        output_path: config.output_path().to_owned(),
    })
}
