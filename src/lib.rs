pub mod cmdargs;
pub mod config;
pub mod error;
pub mod events;
pub mod grouping;
pub mod ingest;
pub mod logging;
pub mod ngram;
pub mod pipeline;
pub mod report;
