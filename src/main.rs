use clap::Parser;

use commitgrams::cmdargs::Args;
use commitgrams::config::Config;
use commitgrams::logging::TracingSetup;
use commitgrams::pipeline;

fn main() -> color_eyre::Result<()> {
    dotenv::dotenv().ok();
    color_eyre::install()?;

    let args = Args::parse();
    let config = build_configuration(&args);

    TracingSetup::with_setup(|| {
        let summary = pipeline::run(&config)?;

        tracing::info!(
            payloads = summary.payloads,
            commits = summary.commits,
            authors = summary.authors,
            output = %summary.output_path.display(),
            "Report complete"
        );

        Ok(())
    })
}

fn build_configuration(args: &Args) -> Config {
    let mut config = Config::from_env();

    if let Some(i) = &args.input {
        config.set_input_path(i);
    }

    if let Some(o) = &args.output {
        config.set_output_path(o);
    }

    config
}
