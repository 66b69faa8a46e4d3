use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};
use tracing_tree::HierarchicalLayer;

pub struct TracingSetup;

impl TracingSetup {
    /// Install the global subscriber, then run `func`.
    pub fn with_setup<Func, T>(func: Func) -> color_eyre::Result<T>
    where
        Func: FnOnce() -> color_eyre::Result<T>,
    {
        configure_log_var();

        Registry::default()
            .with(EnvFilter::from_default_env())
            .with(
                HierarchicalLayer::new(2)
                    .with_targets(true)
                    .with_bracketed_fields(true),
            )
            .with(ErrorLayer::default())
            .init();

        func()
    }
}

fn configure_log_var() {
    if std::env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.is_empty())
        .is_none()
    {
        std::env::set_var("RUST_LOG", "commitgrams=info,warn");
    }
}
