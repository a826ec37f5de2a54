//! Logging and panic reporting setup.

use tracing_subscriber::EnvFilter;

/// Install the panic hook and a `tracing` subscriber.
///
/// In the browser, events go to the devtools console. Calling this twice is
/// harmless.
pub fn init(level: &str) {
    console_error_panic_hook::set_once();

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    #[cfg(target_arch = "wasm32")]
    {
        use tracing_subscriber::prelude::*;

        let console = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .without_time()
            .with_writer(tracing_web::MakeWebConsoleWriter::new());
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .try_init();
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}
