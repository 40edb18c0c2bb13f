use switchback_domain::{LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the `debug` config bit selects the
/// default filter. `log-format=json` switches to the JSON formatter.
pub fn init_logging(logging: &LoggingConfig) {
    let default_directives = if logging.debug {
        "info,switchback_domain=debug,switchback_application=debug,\
         switchback_infrastructure=debug,switchback_api=debug,switchback_cli=debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match logging.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
