use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging for the CLI.
pub fn init_logging() {
    let console_layer = fmt::layer().with_writer(std::io::stdout);

    // Set the global default subscriber
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("sshnorm=info".parse().unwrap()))
        .with(console_layer)
        .init();
}
