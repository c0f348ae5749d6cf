use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool, filter_override: Option<&str>) {
    let filter = match filter_override {
        Some(custom) => EnvFilter::new(custom),
        None if verbose => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("small_calc=debug,info")),
        None => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("small_calc=info"))
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
